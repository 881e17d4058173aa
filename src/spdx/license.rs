#[derive(Clone, Debug, Deserialize)]
pub struct License {
  pub name: String,
  #[serde(rename = "licenseId")]
  pub license_id: String,
  #[serde(default)]
  pub url: String,
  #[serde(rename = "osiApproved", default)]
  pub osi_approved: bool,
  #[serde(rename = "detailsUrl")]
  pub details_url: String,
}
