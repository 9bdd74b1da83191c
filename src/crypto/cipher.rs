//! AES-128-CBC encryption with PKCS#7 padding.
//!
//! The sidecar format predates this implementation: the ciphertext is raw
//! CBC output with no nonce prefix and no authentication tag, and the IV
//! travels out of band. Decryption failures therefore surface as padding
//! errors rather than tag mismatches.

use aes::cipher::block_padding::Pkcs7;
use aes::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};

use crate::crypto::kdf::KEY_LEN;
use crate::errors::{Result, SealvarsError};

type Aes128CbcEnc = cbc::Encryptor<aes::Aes128>;
type Aes128CbcDec = cbc::Decryptor<aes::Aes128>;

/// Size of the cipher IV in bytes (one AES block).
pub const IV_LEN: usize = 16;

/// Encrypt `plaintext` with a 16-byte key and IV.
///
/// Returns the raw CBC ciphertext, padded to a whole number of blocks.
pub fn encrypt(key: &[u8; KEY_LEN], iv: &[u8; IV_LEN], plaintext: &[u8]) -> Vec<u8> {
    Aes128CbcEnc::new(key.into(), iv.into()).encrypt_padded_vec_mut::<Pkcs7>(plaintext)
}

/// Decrypt raw CBC ciphertext produced by `encrypt`.
///
/// A wrong key, wrong IV, truncated input, or corrupted ciphertext all
/// surface here as a padding failure.
pub fn decrypt(key: &[u8; KEY_LEN], iv: &[u8; IV_LEN], ciphertext: &[u8]) -> Result<Vec<u8>> {
    Aes128CbcDec::new(key.into(), iv.into())
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|e| SealvarsError::DecryptionFailed(e.to_string()))
}
