mod details;
mod license;
mod registry;

pub use details::LicenseDetails;
pub use license::License;
pub use registry::RegistryDocument;

use crate::error::Result;

/// Remote source of the registry and per-license details documents.
pub trait RegistrySource {
  fn registry_document(&self) -> Result<String>;
  fn details_document(&self, url: &str) -> Result<String>;
}

pub struct Spdx {
  client: reqwest::blocking::Client,
  registry_url: String,
}

impl Spdx {
  pub fn new(registry_url: &str) -> Spdx {
    Spdx {
      client: reqwest::blocking::Client::new(),
      registry_url: registry_url.to_string(),
    }
  }

  fn get(&self, url: &str) -> Result<String> {
    let body = self.client.get(url).send()?.error_for_status()?.text()?;
    Ok(body)
  }
}

impl RegistrySource for Spdx {
  fn registry_document(&self) -> Result<String> {
    self.get(&self.registry_url)
  }

  fn details_document(&self, url: &str) -> Result<String> {
    self.get(url)
  }
}
