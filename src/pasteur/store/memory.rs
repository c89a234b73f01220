use super::PrefStore;
use crate::error::Result;
use std::collections::HashMap;

/// In-memory store for tests: nothing is persisted.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    map: HashMap<String, String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PrefStore for InMemoryStore {
    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        self.map.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.map.get(key).cloned())
    }
}
