//! `sealvars encrypt` — produce an encrypted sensitive sidecar.
//!
//! Reads a flat JSON file of sensitive name/value pairs, encrypts it
//! under the operator password, and writes the blob next to the primary
//! variables file as `<stem>.secret`. When no `--iv` is given a random
//! one is generated and printed; the operator must pass the same IV
//! back at resolve time.

use std::fs;
use std::path::Path;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use indexmap::IndexMap;
use rand::RngCore;

use crate::cli::{prompt_password, variables_path, Cli};
use crate::config::Settings;
use crate::crypto::IV_LEN;
use crate::errors::{Result, SealvarsError};
use crate::output;
use crate::variables::sensitive::decode_iv;
use crate::variables::{encrypt_sensitive_variables, sensitive_variables_path};

/// Execute the `encrypt` command.
pub fn execute(cli: &Cli, input: &str) -> Result<()> {
    let project_dir = std::env::current_dir()?;
    let settings = Settings::load(&project_dir)?;
    let path = variables_path(cli, &settings, &project_dir);
    let sidecar = sensitive_variables_path(&path);

    let contents = fs::read_to_string(Path::new(input))?;
    let variables: IndexMap<String, String> = serde_json::from_str(&contents)
        .map_err(|e| SealvarsError::InvalidVariablesFormat(format!("{input}: {e}")))?;

    let iv = match &cli.iv {
        Some(b64) => decode_iv(b64)?,
        None => generate_iv(),
    };

    let password = prompt_password()?;
    let blob = encrypt_sensitive_variables(&variables, &password, &iv)?;

    fs::write(&sidecar, &blob)?;

    output::success(&format!(
        "Encrypted {} sensitive variables to {}",
        variables.len(),
        sidecar.display()
    ));
    if cli.iv.is_none() {
        output::info(&format!(
            "IV (pass with --iv when resolving): {}",
            BASE64.encode(iv)
        ));
    }

    Ok(())
}

/// Generate a random one-block IV.
fn generate_iv() -> [u8; IV_LEN] {
    let mut iv = [0u8; IV_LEN];
    rand::rng().fill_bytes(&mut iv);
    iv
}
