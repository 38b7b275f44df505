//! In-process store.

use std::collections::HashMap;

use crate::error::PayrollResult;

use super::KeyValueStore;

/// A store that keeps values in a map for the lifetime of the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> PayrollResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> PayrollResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
