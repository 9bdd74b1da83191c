//! `sealvars resolve` — resolve and export variables.
//!
//! Loads the primary variables file, decrypts and merges the sensitive
//! sidecar when one exists, and writes the resolved set in one of:
//! - `env` (default): `Name=value`, one per line
//! - `json`: JSON object { "Name": "value", ... }
//!
//! Output preserves the store's insertion order (primary file order,
//! sensitive additions appended).

use std::fs;
use std::path::Path;

use crate::cli::{password_for, require_iv, variables_path, Cli};
use crate::config::Settings;
use crate::errors::{Result, SealvarsError};
use crate::output;
use crate::variables::{include_sensitive_variables, VariableStore};

/// Execute the `resolve` command.
pub fn execute(cli: &Cli, format: Option<&str>, output_path: Option<&str>) -> Result<()> {
    let project_dir = std::env::current_dir()?;
    let settings = Settings::load(&project_dir)?;
    let path = variables_path(cli, &settings, &project_dir);

    let iv = require_iv(cli, &path)?;
    let password = password_for(&path)?;
    let variables = include_sensitive_variables(&path, &password, &iv)?;

    let format = format.unwrap_or(&settings.default_format);
    let content = match format {
        "env" => format_as_env(&variables),
        "json" => format_as_json(&variables)?,
        other => {
            return Err(SealvarsError::CommandFailed(format!(
                "unknown export format '{other}' — use 'env' or 'json'"
            )));
        }
    };

    match output_path {
        Some(dest) => {
            // Safety: refuse to overwrite encrypted sidecar files.
            if Path::new(dest)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("secret"))
            {
                return Err(SealvarsError::CommandFailed(
                    "refusing to write resolved variables over a .secret file".into(),
                ));
            }

            fs::write(dest, &content).map_err(|e| {
                SealvarsError::CommandFailed(format!("failed to write output file: {e}"))
            })?;

            output::success(&format!(
                "Resolved {} variables to {} (format: {})",
                variables.len(),
                dest,
                format
            ));
        }
        None => {
            // Write to stdout (no success message, just raw output).
            print!("{content}");
        }
    }

    Ok(())
}

/// Format the store as `.env` file content, in store order.
fn format_as_env(variables: &VariableStore) -> String {
    use std::fmt::Write;
    let mut out = String::new();
    for (name, value) in variables.iter() {
        // Quote values that contain spaces, special chars, or are empty.
        if value.is_empty()
            || value.contains(' ')
            || value.contains('#')
            || value.contains('"')
            || value.contains('\'')
            || value.contains('\n')
            || value.contains('$')
        {
            // Escape inner double quotes and newlines.
            let escaped = value
                .replace('\\', "\\\\")
                .replace('"', "\\\"")
                .replace('\n', "\\n");
            let _ = writeln!(out, "{name}=\"{escaped}\"");
        } else {
            let _ = writeln!(out, "{name}={value}");
        }
    }
    out
}

/// Format the store as a JSON object, in store order.
fn format_as_json(variables: &VariableStore) -> Result<String> {
    serde_json::to_string_pretty(variables.as_map())
        .map_err(|e| SealvarsError::SerializationError(format!("JSON export: {e}")))
}
