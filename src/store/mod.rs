pub mod fs;
#[cfg(test)]
pub mod memory;

use crate::error::Result;

/// Flat key-value storage for cached documents, one entry per key.
pub trait TextStore {
  fn get(&self, key: &str) -> Result<Option<String>>;
  fn put(&mut self, key: &str, contents: &str) -> Result<()>;
}
