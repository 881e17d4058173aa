use thiserror::Error;

#[derive(Debug, Error)]
pub enum LicensemanError {
  #[error("network error: {0}")]
  Network(#[from] reqwest::Error),

  #[error("parse error: {0}")]
  Parse(#[from] serde_json::Error),

  #[error("IO error: {0}")]
  Io(#[from] std::io::Error),

  #[error("configuration error: {0}")]
  Config(#[from] confy::ConfyError),

  #[error("license details for {0} contain no license text")]
  MissingLicenseText(String),

  #[error("{0}")]
  Selection(String),
}

pub type Result<T> = std::result::Result<T, LicensemanError>;
