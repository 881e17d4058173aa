use super::License;

#[derive(Debug, Deserialize)]
pub struct RegistryDocument {
  #[serde(rename = "licenseListVersion")]
  pub license_list_version: Option<String>,
  pub licenses: Vec<License>,
}
