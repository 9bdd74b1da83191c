//! Variables module — deployment variable resolution.
//!
//! This module provides:
//! - The ordered `VariableStore` loaded from the primary variables file
//!   (`store`)
//! - Decryption and merging of the encrypted sensitive-variable sidecar
//!   (`sensitive`)

pub mod sensitive;
pub mod store;

// Re-export the most commonly used items.
pub use sensitive::{
    decrypt_sensitive_variables, encrypt_sensitive_variables, include_sensitive_variables,
    sensitive_variables_path,
};
pub use store::VariableStore;
