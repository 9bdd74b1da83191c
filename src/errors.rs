use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur in sealvars.
#[derive(Debug, Error)]
pub enum SealvarsError {
    // --- Crypto errors ---
    #[error("Cannot decrypt sensitive variables — check your password is correct ({0})")]
    DecryptionFailed(String),

    #[error("Invalid initialization vector: {0}")]
    InvalidIv(String),

    // --- Variables errors ---
    #[error("Variables file not found at {0}")]
    VariablesFileNotFound(PathBuf),

    #[error("Invalid variables file format: {0}")]
    InvalidVariablesFormat(String),

    #[error("Decrypted sensitive variables are not a valid variable map: {0}")]
    InvalidPlaintext(String),

    #[error("Variable '{0}' not found")]
    VariableNotFound(String),

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- Serialization errors ---
    #[error("Serialization error: {0}")]
    SerializationError(String),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),
}

/// Convenience type alias for sealvars results.
pub type Result<T> = std::result::Result<T, SealvarsError>;
