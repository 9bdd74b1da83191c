//! Decryption and merging of sensitive deployment variables.
//!
//! Sensitive values (database passwords, API tokens) are not stored in
//! the primary variables file. They live in an encrypted sidecar next to
//! it (same file stem, `.secret` extension) as a single base64 blob.
//! The blob decrypts to a flat JSON object of name to value, which is
//! merged into the primary store with sensitive entries winning on
//! collision.
//!
//! The IV is supplied by the operator per invocation and must match the
//! one used at encryption time. The key is derived from the operator
//! password alone (`crypto::kdf`).

use std::fs;
use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use indexmap::IndexMap;
use zeroize::Zeroizing;

use crate::crypto::{self, IV_LEN};
use crate::errors::{Result, SealvarsError};
use crate::output;

use super::store::VariableStore;

/// Extension of the encrypted sidecar file.
pub const SENSITIVE_EXTENSION: &str = "secret";

/// Path of the sensitive sidecar for a given primary variables file.
///
/// The primary file's extension is replaced, so `vars.json` pairs with
/// `vars.secret`.
pub fn sensitive_variables_path(variables_file: &Path) -> PathBuf {
    variables_file.with_extension(SENSITIVE_EXTENSION)
}

/// Load the primary variables file and merge in any encrypted sensitive
/// variables found next to it.
///
/// A missing sidecar is a normal configuration, not an error: the
/// primary store is returned unchanged. When the sidecar exists, a
/// failure to decrypt or parse it aborts the operation. Retrying with
/// the same password and IV cannot succeed, so nothing retries.
pub fn include_sensitive_variables(
    variables_file: &Path,
    password: &str,
    iv_base64: &str,
) -> Result<VariableStore> {
    let mut variables = VariableStore::load(variables_file)?;

    let sensitive_file = sensitive_variables_path(variables_file);

    if !sensitive_file.exists() {
        output::verbose(&format!(
            "No sensitive-variables file was found. Looked for '{}'",
            sensitive_file.display()
        ));
        return Ok(variables);
    }

    let cipher_text = fs::read_to_string(&sensitive_file)?;
    let decrypted = decrypt_sensitive_variables(&cipher_text, password, iv_base64)?;

    for (name, value) in &decrypted {
        variables.set(name, value);
    }

    output::verbose(&format!(
        "Decrypted sensitive-variables from '{}'",
        sensitive_file.display()
    ));

    Ok(variables)
}

/// Decrypt a base64 ciphertext blob into an ordered name to value map.
///
/// Surrounding ASCII whitespace (a trailing newline from an editor) is
/// tolerated; a wrapped multi-line blob is not.
pub fn decrypt_sensitive_variables(
    cipher_text: &str,
    password: &str,
    iv_base64: &str,
) -> Result<IndexMap<String, String>> {
    let key = Zeroizing::new(crypto::derive_key(password));
    let iv = decode_iv(iv_base64)?;

    let cipher_bytes = BASE64.decode(cipher_text.trim()).map_err(|e| {
        SealvarsError::DecryptionFailed(format!("ciphertext is not valid base64: {e}"))
    })?;

    let plaintext = Zeroizing::new(crypto::decrypt(&key, &iv, &cipher_bytes)?);

    // A wrong password usually fails above with a padding error, but can
    // slip through and surface here instead as garbage that is not valid
    // UTF-8 JSON.
    serde_json::from_slice(&plaintext).map_err(|e| SealvarsError::InvalidPlaintext(e.to_string()))
}

/// Encrypt a name to value map into a base64 ciphertext blob.
///
/// Companion to [`decrypt_sensitive_variables`]; used by the `encrypt`
/// command to produce sidecar files this crate can resolve.
pub fn encrypt_sensitive_variables(
    variables: &IndexMap<String, String>,
    password: &str,
    iv: &[u8; IV_LEN],
) -> Result<String> {
    let key = Zeroizing::new(crypto::derive_key(password));

    let plaintext = Zeroizing::new(
        serde_json::to_vec(variables).map_err(|e| SealvarsError::SerializationError(e.to_string()))?,
    );

    Ok(BASE64.encode(crypto::encrypt(&key, iv, &plaintext)))
}

/// Decode an operator-supplied base64 IV, which must be exactly one AES
/// block long.
pub fn decode_iv(iv_base64: &str) -> Result<[u8; IV_LEN]> {
    let bytes = BASE64
        .decode(iv_base64)
        .map_err(|e| SealvarsError::InvalidIv(format!("not valid base64: {e}")))?;

    <[u8; IV_LEN]>::try_from(bytes.as_slice()).map_err(|_| {
        SealvarsError::InvalidIv(format!("expected {IV_LEN} bytes, got {}", bytes.len()))
    })
}
