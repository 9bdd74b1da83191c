//! Cryptographic primitives for sealvars.
//!
//! This module provides:
//! - PBKDF2 password-based key derivation (`kdf`)
//! - AES-128-CBC encryption and decryption (`cipher`)

pub mod cipher;
pub mod kdf;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{decrypt, derive_key, ...};
pub use cipher::{decrypt, encrypt, IV_LEN};
pub use kdf::{derive_key, KEY_LEN};
