use super::TextStore;
use crate::error::Result;
use std::fs;
use std::path::PathBuf;

/// Directory-backed store: each key is a file name under the root.
pub struct FileStore {
  root: PathBuf,
}

impl FileStore {
  pub fn new(root: PathBuf) -> FileStore {
    FileStore { root }
  }
}

impl TextStore for FileStore {
  fn get(&self, key: &str) -> Result<Option<String>> {
    let path = self.root.join(key);
    if !path.exists() {
      return Ok(None);
    }

    Ok(Some(fs::read_to_string(path)?))
  }

  fn put(&mut self, key: &str, contents: &str) -> Result<()> {
    if !self.root.exists() {
      fs::create_dir_all(&self.root)?;
    }

    fs::write(self.root.join(key), contents)?;
    Ok(())
  }
}
