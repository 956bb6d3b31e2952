use std::{
  path::{Path, PathBuf},
  time::Duration,
};

use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

use crate::{
  config::Config,
  models::{ClinicSettings, ConfigDoc, PetArticle, PetsDoc},
};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const READ_TIMEOUT: Duration = Duration::from_secs(10);

// Fallback documents shipped with the binary, used whenever no remote URL is
// configured or the remote fetch fails.
const BUNDLED_CONFIG: &str = include_str!("../resources/config.json");
const BUNDLED_PETS: &str = include_str!("../resources/pets.json");

#[derive(Error, Debug)]
pub enum ApiError {
  #[error("Local JSON error: {0}")]
  LocalRead(#[from] std::io::Error),

  #[error("Local JSON error: {0}")]
  LocalParse(#[source] serde_json::Error),

  #[error("Network error: {0}")]
  Network(#[from] reqwest::Error),

  #[error("Network error: malformed body: {0}")]
  RemoteParse(#[source] serde_json::Error),

  #[error("HTTP {0}")]
  HttpStatus(u16),
}

/// Outcome of one fetch operation. Every fetch terminates in one of these;
/// errors never escape as `Err`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FetchResult<T> {
  Success { value: T, status: u16 },
  Failure { status: Option<u16>, message: String },
}

/// Fetches the clinic configuration and pet-article documents, preferring the
/// configured remote URLs and deterministically substituting the local copy
/// on any remote failure.
#[derive(Clone)]
pub struct ClinicApi {
  client: Client,
  config_url: Option<String>,
  pets_url: Option<String>,
  config_path: Option<PathBuf>,
  pets_path: Option<PathBuf>,
}

impl ClinicApi {
  pub fn new(config: &Config) -> Result<Self, ApiError> {
    let client = Client::builder().connect_timeout(CONNECT_TIMEOUT).timeout(READ_TIMEOUT).build()?;
    Ok(Self {
      client,
      config_url: config.remote.config_url.clone(),
      pets_url: config.remote.pets_url.clone(),
      config_path: config.local.config_path.clone(),
      pets_path: config.local.pets_path.clone(),
    })
  }

  pub async fn fetch_config(&self) -> FetchResult<ClinicSettings> {
    match &self.config_url {
      None => self.load_local_config(),
      Some(url) => match self.request::<ConfigDoc>(url).await {
        Ok((doc, status)) => FetchResult::Success { value: doc.settings, status },
        Err(err) => {
          log::warn!("Remote config fetch failed, using local document: {err}");
          self.load_local_config()
        },
      },
    }
  }

  pub async fn fetch_pets(&self) -> FetchResult<Vec<PetArticle>> {
    match &self.pets_url {
      None => self.load_local_pets(),
      Some(url) => match self.request::<PetsDoc>(url).await {
        Ok((doc, status)) => FetchResult::Success { value: doc.pets, status },
        Err(err) => {
          log::warn!("Remote pets fetch failed, using local document: {err}");
          self.load_local_pets()
        },
      },
    }
  }

  fn load_local_config(&self) -> FetchResult<ClinicSettings> {
    match read_local::<ConfigDoc>(self.config_path.as_deref(), BUNDLED_CONFIG) {
      Ok(doc) => FetchResult::Success { value: doc.settings, status: 200 },
      Err(err) => FetchResult::Failure { status: None, message: err.to_string() },
    }
  }

  fn load_local_pets(&self) -> FetchResult<Vec<PetArticle>> {
    match read_local::<PetsDoc>(self.pets_path.as_deref(), BUNDLED_PETS) {
      Ok(doc) => FetchResult::Success { value: doc.pets, status: 200 },
      Err(err) => FetchResult::Failure { status: None, message: err.to_string() },
    }
  }

  /// GET `url` and parse the body. Non-2xx responses still read the body
  /// before being classified as `HttpStatus`.
  async fn request<T: DeserializeOwned>(&self, url: &str) -> Result<(T, u16), ApiError> {
    let response = self.client.get(url).send().await?;
    let status = response.status().as_u16();
    let body = response.text().await?;
    if !(200..300).contains(&status) {
      return Err(ApiError::HttpStatus(status));
    }
    let value = serde_json::from_str(&body).map_err(ApiError::RemoteParse)?;
    Ok((value, status))
  }
}

fn read_local<T: DeserializeOwned>(path: Option<&Path>, bundled: &str) -> Result<T, ApiError> {
  let raw = match path {
    Some(path) => std::fs::read_to_string(path)?,
    None => bundled.to_string(),
  };
  serde_json::from_str(&raw).map_err(ApiError::LocalParse)
}
