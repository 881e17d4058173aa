use super::TextStore;
use crate::error::Result;
use std::collections::HashMap;

/// HashMap-backed store for tests, no filesystem involved.
#[derive(Default)]
pub struct InMemoryStore {
  entries: HashMap<String, String>,
}

impl InMemoryStore {
  pub fn new() -> InMemoryStore {
    InMemoryStore::default()
  }

  pub fn contains(&self, key: &str) -> bool {
    self.entries.contains_key(key)
  }
}

impl TextStore for InMemoryStore {
  fn get(&self, key: &str) -> Result<Option<String>> {
    Ok(self.entries.get(key).cloned())
  }

  fn put(&mut self, key: &str, contents: &str) -> Result<()> {
    self.entries.insert(key.to_string(), contents.to_string());
    Ok(())
  }
}
