use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{Result, SealvarsError};

/// Project-level configuration, loaded from `.sealvars.toml`.
///
/// Every field has a sensible default so sealvars works out-of-the-box
/// without any config file at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Primary variables file used when a command does not name one.
    #[serde(default = "default_variables_file")]
    pub variables_file: String,

    /// Export format used by `resolve` when `--format` is not given.
    #[serde(default = "default_format")]
    pub default_format: String,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_variables_file() -> String {
    "variables.json".to_string()
}

fn default_format() -> String {
    "env".to_string()
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            variables_file: default_variables_file(),
            default_format: default_format(),
        }
    }
}

impl Settings {
    /// Name of the config file we look for in the project root.
    const FILE_NAME: &'static str = ".sealvars.toml";

    /// Load settings from `<project_dir>/.sealvars.toml`.
    ///
    /// If the file does not exist, sensible defaults are returned.
    /// If the file exists but cannot be parsed, an error is returned.
    pub fn load(project_dir: &Path) -> Result<Self> {
        let config_path = project_dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            SealvarsError::ConfigError(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        Ok(settings)
    }

    /// Build the full path to the default variables file.
    ///
    /// Example: `project_dir/variables.json`
    pub fn variables_path(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.variables_file)
    }
}
