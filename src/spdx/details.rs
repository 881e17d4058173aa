#[derive(Debug, Deserialize)]
pub struct LicenseDetails {
  // absent in some details documents, reported as an explicit error upstream
  #[serde(rename = "licenseText")]
  pub license_text: Option<String>,
}
