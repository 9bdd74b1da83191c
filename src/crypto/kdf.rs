//! Password-based key derivation using PBKDF2-HMAC-SHA1.
//!
//! The salt and the iteration count are fixed, application-wide constants.
//! Sidecar files encrypted years ago must still decrypt today, so neither
//! value can ever change.

use pbkdf2::pbkdf2_hmac;
use sha1::Sha1;

/// Length of the derived key in bytes (128 bits, for AES-128).
pub const KEY_LEN: usize = 16;

/// Fixed salt fed to PBKDF2. Changing this breaks decryption of every
/// previously encrypted sidecar file.
const PASSWORD_PADDING_SALT: &[u8] = b"Octopuss";

/// Fixed PBKDF2 iteration count. Same compatibility constraint as the salt.
const PASSWORD_ITERATIONS: u32 = 1000;

/// Derive a 16-byte encryption key from an operator password.
///
/// Deterministic: the same password always yields the same key. The
/// password is not validated; an empty password derives a key like any
/// other and simply fails to decrypt correctly encrypted data later.
pub fn derive_key(password: &str) -> [u8; KEY_LEN] {
    let mut key = [0u8; KEY_LEN];
    pbkdf2_hmac::<Sha1>(
        password.as_bytes(),
        PASSWORD_PADDING_SALT,
        PASSWORD_ITERATIONS,
        &mut key,
    );
    key
}
