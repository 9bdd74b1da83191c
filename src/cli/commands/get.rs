//! `sealvars get` — print a single resolved variable's value.

use crate::cli::{password_for, require_iv, variables_path, Cli};
use crate::config::Settings;
use crate::errors::{Result, SealvarsError};
use crate::variables::include_sensitive_variables;

/// Execute the `get` command.
pub fn execute(cli: &Cli, name: &str) -> Result<()> {
    let project_dir = std::env::current_dir()?;
    let settings = Settings::load(&project_dir)?;
    let path = variables_path(cli, &settings, &project_dir);

    let iv = require_iv(cli, &path)?;
    let password = password_for(&path)?;
    let variables = include_sensitive_variables(&path, &password, &iv)?;

    match variables.get(name) {
        Some(value) => {
            println!("{value}");
            Ok(())
        }
        None => Err(SealvarsError::VariableNotFound(name.to_string())),
    }
}
