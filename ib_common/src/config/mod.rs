//! The config file. This is a small toml file, which controls how the
//! builders format text, and which host version they should assume.

use crate::version::{FeatureFlags, VersionSource};
use log::LevelFilter;
use serde_derive::{Deserialize, Serialize};
use std::fs;
use thiserror::Error;


#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
  #[error("invalid host version string `{0}`")]
  InvalidVersion(String),
  #[error("could not parse config: {0}")]
  Parse(String),
  #[error("could not access config file: {0}")]
  Io(String),
}

/// The default config file. This is written next to the real config by
/// [`Config::write_default`], so that users can see all the options.
pub const DEFAULT_SRC: &str = r#"# The character that starts a formatting code in names and lore. For example,
# with the default marker, `&aHello` is rendered as green text.
color_marker = "&"

# The log level used when a standalone tool installs the logger.
log_level = "info"

# If set, this version is used instead of the one reported by the host. This
# is mostly for tests and offline tools.
# version = "1.16.5"
"#;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
  /// Translated into `§` before a formatting code.
  pub color_marker: char,
  /// Max level of the logger installed by [`init_logger`](Self::init_logger).
  /// Only info logs are shown by default.
  pub log_level:    LevelFilter,
  /// Overrides the version reported by the host.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub version:      Option<String>,
}

impl Default for Config {
  fn default() -> Self { Config { color_marker: '&', log_level: LevelFilter::Info, version: None } }
}

impl Config {
  /// Loads the config at the given path. If the file cannot be read or
  /// parsed, a warning is logged and the default config is used instead.
  pub fn new(path: &str) -> Self {
    let src = match fs::read_to_string(path) {
      Ok(src) => src,
      Err(e) => {
        warn!("could not read config at `{}`, using defaults: {}", path, e);
        return Config::default();
      }
    };
    Config::from_src(&src).unwrap_or_else(|e| {
      warn!("error loading config at `{}`, using defaults: {}", path, e);
      Config::default()
    })
  }

  /// Parses the given toml source. Unlike [`new`](Self::new), this will
  /// return an error for invalid toml.
  pub fn from_src(src: &str) -> Result<Self, ConfigError> {
    toml::from_str(src).map_err(|e| ConfigError::Parse(e.to_string()))
  }

  /// Writes the default config to the given path, as a reference for users.
  pub fn write_default(path: &str) -> Result<(), ConfigError> {
    fs::write(path, DEFAULT_SRC).map_err(|e| ConfigError::Io(format!("`{path}`: {e}")))
  }

  /// Serializes this config back into toml.
  pub fn to_toml(&self) -> Result<String, ConfigError> {
    toml::to_string(self).map_err(|e| ConfigError::Parse(e.to_string()))
  }

  /// Installs the stdout logger at this config's `log_level`. Nothing happens
  /// if a logger is already installed, which is what this returns false for.
  #[cfg(feature = "host")]
  pub fn init_logger(&self, name: &str) -> bool { crate::init_with_level(name, self.log_level) }

  /// Detects the feature flags. If a version is set in this config, the host
  /// is never queried.
  pub fn features(&self, host: impl VersionSource) -> Result<FeatureFlags, ConfigError> {
    match &self.version {
      Some(v) => {
        debug!("using configured version `{v}` instead of the host version");
        FeatureFlags::detect(v.as_str())
      }
      None => FeatureFlags::detect(host),
    }
  }
}
