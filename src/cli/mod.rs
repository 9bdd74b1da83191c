//! CLI module — Clap argument parser and command implementations.

pub mod commands;

use std::path::{Path, PathBuf};

use clap::Parser;
use zeroize::Zeroizing;

use crate::config::Settings;
use crate::errors::{Result, SealvarsError};
use crate::variables::sensitive_variables_path;

/// sealvars CLI: deployment variable resolver with encrypted sensitive
/// sidecars.
#[derive(Parser)]
#[command(
    name = "sealvars",
    about = "Resolve deployment variables, decrypting encrypted sensitive sidecars",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Primary variables file (default: from .sealvars.toml)
    #[arg(short, long, global = true)]
    pub file: Option<String>,

    /// Base64 initialization vector matching the one used to encrypt the sidecar
    #[arg(long, global = true, env = "SEALVARS_IV")]
    pub iv: Option<String>,

    /// Print verbose progress messages to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Resolve variables (primary + sensitive) and export them
    Resolve {
        /// Output format: env (default) or json
        #[arg(long)]
        format: Option<String>,

        /// Output file path (prints to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Print a single resolved variable's value
    Get {
        /// Variable name (e.g. DbPassword)
        name: String,
    },

    /// List resolved variable names and where each came from (no values)
    List,

    /// Encrypt a flat JSON file of sensitive values into the sidecar
    Encrypt {
        /// Path to the plaintext JSON file ({"Name": "value", ...})
        input: String,
    },
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Get the encryption password, trying in order:
/// 1. `SEALVARS_PASSWORD` env var (CI/CD)
/// 2. Interactive prompt
///
/// Returns `Zeroizing<String>` so the password is wiped from memory on drop.
pub fn prompt_password() -> Result<Zeroizing<String>> {
    if let Ok(pw) = std::env::var("SEALVARS_PASSWORD") {
        if !pw.is_empty() {
            return Ok(Zeroizing::new(pw));
        }
    }

    let pw = dialoguer::Password::new()
        .with_prompt("Enter encryption password")
        .interact()
        .map_err(|e| SealvarsError::CommandFailed(format!("password prompt: {e}")))?;
    Ok(Zeroizing::new(pw))
}

/// Resolve the primary variables file path from CLI args, falling back to
/// the configured default.
pub fn variables_path(cli: &Cli, settings: &Settings, project_dir: &Path) -> PathBuf {
    match &cli.file {
        Some(file) => PathBuf::from(file),
        None => settings.variables_path(project_dir),
    }
}

/// Get the encryption password, but only when the sensitive sidecar
/// actually exists. Resolving a project without one never blocks on a
/// prompt.
pub fn password_for(variables_file: &Path) -> Result<Zeroizing<String>> {
    if sensitive_variables_path(variables_file).exists() {
        prompt_password()
    } else {
        Ok(Zeroizing::new(String::new()))
    }
}

/// The base64 IV to use for decryption.
///
/// The IV is only required when the sensitive sidecar actually exists;
/// without a sidecar the empty string is returned and never used.
pub fn require_iv(cli: &Cli, variables_file: &Path) -> Result<String> {
    let sidecar = sensitive_variables_path(variables_file);

    match (&cli.iv, sidecar.exists()) {
        (Some(iv), _) => Ok(iv.clone()),
        (None, false) => Ok(String::new()),
        (None, true) => Err(SealvarsError::CommandFailed(format!(
            "'{}' exists — pass --iv with the initialization vector it was encrypted with",
            sidecar.display()
        ))),
    }
}
