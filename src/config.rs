use std::path::PathBuf;

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
  #[serde(default)]
  pub _data_dir: PathBuf,
  #[serde(default)]
  pub _config_dir: PathBuf,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
  #[serde(default, flatten)]
  pub config: AppConfig,
  #[serde(default = "default_as_true")]
  pub confirm_quit: bool,
  #[serde(default)]
  pub remote: RemoteConfig,
  #[serde(default)]
  pub local: LocalConfig,
}

/// Optional remote endpoints. Unset URLs mean the bundled documents are the
/// only source.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RemoteConfig {
  pub config_url: Option<String>,
  pub pets_url: Option<String>,
}

/// Optional on-disk overrides for the bundled fallback documents.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct LocalConfig {
  pub config_path: Option<PathBuf>,
  pub pets_path: Option<PathBuf>,
}

impl Config {
  pub fn new() -> Result<Self, config::ConfigError> {
    let data_dir = crate::utils::get_data_dir();
    let config_dir = crate::utils::get_config_dir();
    let mut builder = config::Config::builder()
      .set_default("_data_dir", data_dir.to_str().unwrap())?
      .set_default("_config_dir", config_dir.to_str().unwrap())?;

    let config_files = [("config.toml", config::FileFormat::Toml)];
    let mut found_config = false;
    for (file, format) in &config_files {
      builder = builder.add_source(config::File::from(config_dir.join(file)).format(*format).required(false));
      if config_dir.join(file).exists() {
        found_config = true
      }
    }
    if !found_config {
      log::error!("No configuration file found. Application may not behave as expected");
    }

    let cfg: Self = builder.build()?.try_deserialize()?;

    Ok(cfg)
  }
}

const fn default_as_true() -> bool {
  true
}

#[cfg(test)]
mod tests {
  use pretty_assertions::assert_eq;

  use super::*;

  fn from_toml(src: &str) -> Config {
    config::Config::builder()
      .add_source(config::File::from_str(src, config::FileFormat::Toml))
      .build()
      .unwrap()
      .try_deserialize()
      .unwrap()
  }

  #[test]
  fn empty_file_yields_local_only_defaults() {
    let config = from_toml("");
    assert!(config.confirm_quit);
    assert_eq!(config.remote.config_url, None);
    assert_eq!(config.remote.pets_url, None);
    assert_eq!(config.local.config_path, None);
    assert_eq!(config.local.pets_path, None);
  }

  #[test]
  fn deserializes_remote_section() {
    let config = from_toml(
      r#"
        confirm_quit = false

        [remote]
        config_url = "https://clinic.example/config.json"
      "#,
    );
    assert!(!config.confirm_quit);
    assert_eq!(config.remote.config_url.as_deref(), Some("https://clinic.example/config.json"));
    assert_eq!(config.remote.pets_url, None);
  }
}
