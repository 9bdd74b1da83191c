//! `sealvars list` — list resolved variable names without values.
//!
//! Shows each name with the file it came from. A name defined in the
//! primary file and overridden by the sidecar is reported as sensitive,
//! matching what `resolve` would actually export.

use std::fs;

use crate::cli::{prompt_password, require_iv, variables_path, Cli};
use crate::config::Settings;
use crate::errors::Result;
use crate::output;
use crate::variables::{decrypt_sensitive_variables, sensitive_variables_path, VariableStore};

/// Execute the `list` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let project_dir = std::env::current_dir()?;
    let settings = Settings::load(&project_dir)?;
    let path = variables_path(cli, &settings, &project_dir);

    let mut variables = VariableStore::load(&path)?;
    let sidecar = sensitive_variables_path(&path);

    let mut sensitive_names: Vec<String> = Vec::new();
    if sidecar.exists() {
        let iv = require_iv(cli, &path)?;
        let password = prompt_password()?;
        let cipher_text = fs::read_to_string(&sidecar)?;
        let decrypted = decrypt_sensitive_variables(&cipher_text, &password, &iv)?;

        for (name, value) in &decrypted {
            variables.set(name, value);
            sensitive_names.push(name.clone());
        }
    }

    let rows: Vec<(String, String)> = variables
        .iter()
        .map(|(name, _)| {
            let source = if sensitive_names.iter().any(|n| n == name) {
                sidecar.display().to_string()
            } else {
                path.display().to_string()
            };
            (name.to_string(), source)
        })
        .collect();

    output::print_variables_table(&rows);
    Ok(())
}
