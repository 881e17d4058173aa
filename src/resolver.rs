use crate::error::{LicensemanError, Result};
use crate::spdx::{License, LicenseDetails, RegistrySource};
use crate::store::TextStore;
use colored::*;
use console::Emoji;

/// Return the full text of a license, from the per-identifier cache unless
/// `force` is set, otherwise from its details document. Fetched text is
/// persisted under the SPDX identifier before being returned.
pub fn resolve_license_text<S, R>(
  license: &License,
  force: bool,
  store: &mut S,
  source: &R,
) -> Result<String>
where
  S: TextStore,
  R: RegistrySource,
{
  if !force {
    if let Some(text) = store.get(&license.license_id)? {
      println!(
        "{} {}",
        Emoji("📄", &"=>".green().bold()),
        format!("Using cached license for {}", license.name)
      );
      return Ok(text);
    }
  }

  println!(
    "{} {}",
    Emoji("🌍", &"=>".green().bold()),
    format!("Downloading license for {}", license.name)
  );

  let raw = source.details_document(&license.details_url)?;
  let details: LicenseDetails = serde_json::from_str(&raw)?;
  let text = details
    .license_text
    .ok_or_else(|| LicensemanError::MissingLicenseText(license.license_id.clone()))?;

  store.put(&license.license_id, &text)?;

  Ok(text)
}
