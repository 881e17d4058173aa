use crate::error::Result;
use crate::PROJECT_NAME;
use directories::ProjectDirs;
use std::path::PathBuf;

static DEFAULT_REGISTRY_URL: &str =
  "https://raw.githubusercontent.com/spdx/license-list-data/master/json/licenses.json";

#[derive(Debug, Deserialize, Serialize)]
pub struct LicensemanConfig {
  // registry document listing every known license
  pub registry_url: String,
  // overrides the platform cache directory when set
  pub cache_dir: Option<PathBuf>,
}

impl Default for LicensemanConfig {
  fn default() -> Self {
    LicensemanConfig {
      registry_url: DEFAULT_REGISTRY_URL.to_string(),
      cache_dir: None,
    }
  }
}

impl LicensemanConfig {
  pub fn open() -> Result<Self> {
    Ok(confy::load(PROJECT_NAME)?)
  }

  pub fn cache_dir(&self) -> PathBuf {
    if let Some(dir) = &self.cache_dir {
      return dir.clone();
    }

    ProjectDirs::from("rs", "", PROJECT_NAME)
      .map(|project| project.cache_dir().to_path_buf())
      .unwrap_or_else(|| PathBuf::from("."))
  }
}
