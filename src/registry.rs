use crate::error::Result;
use crate::spdx::{License, RegistryDocument, RegistrySource};
use crate::store::TextStore;
use colored::*;
use console::Emoji;

pub static REGISTRY_FILE: &str = "licenses.json";

/// Return every known license, from the cache file when present, otherwise
/// from the remote registry. The raw document is persisted on first fetch so
/// later runs skip the network entirely; a cached document is never
/// refreshed.
pub fn load_registry<S, R>(store: &mut S, source: &R) -> Result<Vec<License>>
where
  S: TextStore,
  R: RegistrySource,
{
  if let Some(raw) = store.get(REGISTRY_FILE)? {
    let document: RegistryDocument = serde_json::from_str(&raw)?;
    return Ok(document.licenses);
  }

  println!(
    "{} {}",
    Emoji("🌍", &"=>".green().bold()),
    "Downloading license list"
  );

  let raw = source.registry_document()?;
  let document: RegistryDocument = serde_json::from_str(&raw)?;
  store.put(REGISTRY_FILE, &raw)?;

  if let Some(version) = &document.license_list_version {
    println!("  {}", format!("license list v{}", version).dimmed());
  }

  Ok(document.licenses)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::error::LicensemanError;
  use crate::store::memory::InMemoryStore;
  use std::cell::Cell;

  static REGISTRY_BODY: &str = r#"{
    "licenseListVersion": "3.24",
    "licenses": [
      {
        "name": "MIT License",
        "licenseId": "MIT",
        "detailsUrl": "https://example.test/MIT.json"
      },
      {
        "name": "Apache License 2.0",
        "licenseId": "Apache-2.0",
        "detailsUrl": "https://example.test/Apache-2.0.json"
      }
    ]
  }"#;

  struct FakeSource {
    body: String,
    fetches: Cell<usize>,
  }

  impl FakeSource {
    fn new(body: &str) -> FakeSource {
      FakeSource {
        body: body.to_string(),
        fetches: Cell::new(0),
      }
    }
  }

  impl RegistrySource for FakeSource {
    fn registry_document(&self) -> Result<String> {
      self.fetches.set(self.fetches.get() + 1);
      Ok(self.body.clone())
    }

    fn details_document(&self, _url: &str) -> Result<String> {
      panic!("registry loading must not touch details documents");
    }
  }

  #[test]
  fn fetches_and_persists_when_cache_is_empty() {
    let mut store = InMemoryStore::new();
    let source = FakeSource::new(REGISTRY_BODY);

    let licenses = load_registry(&mut store, &source).unwrap();

    assert_eq!(source.fetches.get(), 1);
    assert_eq!(licenses.len(), 2);
    assert_eq!(licenses[0].license_id, "MIT");
    assert_eq!(licenses[1].license_id, "Apache-2.0");
    assert_eq!(store.get(REGISTRY_FILE).unwrap().unwrap(), REGISTRY_BODY);
  }

  #[test]
  fn cached_registry_skips_the_network() {
    let mut store = InMemoryStore::new();
    store.put(REGISTRY_FILE, REGISTRY_BODY).unwrap();
    let source = FakeSource::new("unused");

    let licenses = load_registry(&mut store, &source).unwrap();

    assert_eq!(source.fetches.get(), 0);
    assert_eq!(licenses.len(), 2);
  }

  #[test]
  fn loading_twice_fetches_at_most_once() {
    let mut store = InMemoryStore::new();
    let source = FakeSource::new(REGISTRY_BODY);

    let first = load_registry(&mut store, &source).unwrap();
    let second = load_registry(&mut store, &source).unwrap();

    assert_eq!(source.fetches.get(), 1);
    let first_ids: Vec<&str> = first.iter().map(|l| l.license_id.as_str()).collect();
    let second_ids: Vec<&str> = second.iter().map(|l| l.license_id.as_str()).collect();
    assert_eq!(first_ids, second_ids);
  }

  #[test]
  fn malformed_cache_is_a_parse_error_not_a_refetch() {
    let mut store = InMemoryStore::new();
    store.put(REGISTRY_FILE, "{not json").unwrap();
    let source = FakeSource::new(REGISTRY_BODY);

    let result = load_registry(&mut store, &source);

    assert_eq!(source.fetches.get(), 0);
    match result {
      Err(LicensemanError::Parse(_)) => {}
      other => panic!("expected a parse error, got {:?}", other),
    }
  }

  #[test]
  fn malformed_remote_document_is_not_persisted() {
    let mut store = InMemoryStore::new();
    let source = FakeSource::new("[1, 2, 3]");

    let result = load_registry(&mut store, &source);

    assert!(result.is_err());
    assert!(!store.contains(REGISTRY_FILE));
  }
}
