//! Ordered variable store backing the deployment tool's configuration.
//!
//! The primary variables file is a flat JSON object of variable name to
//! string value. Iteration order matches the order entries appear in the
//! file; newly set names append at the end.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;

use crate::errors::{Result, SealvarsError};

/// Ordered name to value mapping for deployment variables.
///
/// `set` has last-write-wins semantics: an existing name keeps its
/// position and gets the new value, a new name appends at the end.
#[derive(Debug, Clone, Default)]
pub struct VariableStore {
    variables: IndexMap<String, String>,
}

impl VariableStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a store from a primary variables file.
    ///
    /// The file must exist and contain a flat JSON object with string
    /// values only (`{"Name": "value", ...}`).
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(SealvarsError::VariablesFileNotFound(path.to_path_buf()));
        }

        let contents = fs::read_to_string(path)?;

        let variables: IndexMap<String, String> = serde_json::from_str(&contents)
            .map_err(|e| {
                SealvarsError::InvalidVariablesFormat(format!("{}: {e}", path.display()))
            })?;

        Ok(Self { variables })
    }

    /// Get a variable's value, or `None` if it has not been set.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.variables.get(name).map(String::as_str)
    }

    /// Set a variable, overwriting any existing value for that name.
    pub fn set(&mut self, name: &str, value: &str) {
        self.variables.insert(name.to_string(), value.to_string());
    }

    /// Returns `true` if a variable with the given name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Iterate over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.variables
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Borrow the underlying ordered map (e.g. for serialization).
    pub fn as_map(&self) -> &IndexMap<String, String> {
        &self.variables
    }

    /// Number of variables in the store.
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Returns `true` if the store has no variables.
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}
