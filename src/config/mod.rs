//! Configuration module — project settings loaded from `.sealvars.toml`.

pub mod settings;

pub use settings::Settings;
