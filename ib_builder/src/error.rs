use crate::item::Material;
use ib_common::ConfigError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ItemError {
  #[error("`{0}` needs a plugin, call `plugin` before using it")]
  MissingPlugin(&'static str),
  #[error("{builder} requires the material to be one of [{}], got {got}", join_materials(.expected))]
  WrongMaterial { builder: &'static str, got: Material, expected: &'static [Material] },
  #[error("the meta of {material} does not support {capability}")]
  MissingCapability { material: Material, capability: &'static str },
  #[error("invalid namespaced key `{0}`")]
  InvalidKey(String),
  #[error("invalid value for {name}: {reason}")]
  InvalidValue { name: &'static str, reason: String },
  #[error("index {index} is out of bounds for length {len}")]
  IndexOutOfRange { index: usize, len: usize },
  #[error("{0}")]
  Config(#[from] ConfigError),
}

fn join_materials(materials: &[Material]) -> String {
  materials.iter().map(|m| m.to_string()).collect::<Vec<_>>().join(", ")
}

/// The broad categories of [`ItemError`]. Callers that only care about what
/// went wrong (instead of the details) can match on this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
  /// Something the caller needed to set up first (like a plugin) is missing.
  Precondition,
  /// The item can't do this, either because of its material or its meta.
  InvalidOperation,
  /// A lore line, page or pattern index was out of bounds.
  IndexOutOfRange,
  /// The host version or config could not be understood.
  Configuration,
}

impl ItemError {
  pub fn kind(&self) -> ErrorKind {
    match self {
      Self::MissingPlugin(_) => ErrorKind::Precondition,
      Self::WrongMaterial { .. }
      | Self::MissingCapability { .. }
      | Self::InvalidKey(_)
      | Self::InvalidValue { .. } => ErrorKind::InvalidOperation,
      Self::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
      Self::Config(_) => ErrorKind::Configuration,
    }
  }
}
