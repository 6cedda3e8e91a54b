//! Host version detection. The host server reports a version string once at
//! startup, and everything that behaves differently between game versions
//! reads a [`FeatureFlags`] derived from it.

use crate::config::ConfigError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static VERSION_PATTERN: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"(\d+)\.(\d+)(?:\.(\d+))?").unwrap());

/// Minor version where the `Unbreakable` flag became part of the item meta.
/// Anything older needs a raw nbt tag.
pub const NATIVE_UNBREAKABLE_SINCE: u32 = 11;
/// Minor version where item damage moved from the stack's durability short
/// into the meta.
pub const DAMAGE_FIELD_SINCE: u32 = 13;
/// Minor version where custom model data can be set.
pub const CUSTOM_MODEL_DATA_SINCE: u32 = 13;

/// The environment collaborator that knows which game version is running.
/// This is called once, when the feature flags are detected.
pub trait VersionSource {
  fn version_string(&self) -> String;
}

impl VersionSource for str {
  fn version_string(&self) -> String { self.to_string() }
}
impl VersionSource for String {
  fn version_string(&self) -> String { self.clone() }
}
impl<T: VersionSource + ?Sized> VersionSource for &T {
  fn version_string(&self) -> String { (**self).version_string() }
}

/// A parsed game version, like `1.16.5`. The patch is 0 when the host didn't
/// report one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Version {
  pub major: u32,
  pub minor: u32,
  pub patch: u32,
}

impl Version {
  pub const fn new(major: u32, minor: u32, patch: u32) -> Self { Version { major, minor, patch } }

  /// Finds the first `major.minor(.patch)` in the given string. Hosts usually
  /// report something like `1.16.5-R0.1-SNAPSHOT`, or `git-Paper-1 (MC:
  /// 1.16.5)`, so the version doesn't need to be at the start of the string.
  pub fn parse(s: &str) -> Result<Self, ConfigError> {
    let caps =
      VERSION_PATTERN.captures(s).ok_or_else(|| ConfigError::InvalidVersion(s.to_string()))?;
    let num = |idx: usize| -> Result<u32, ConfigError> {
      match caps.get(idx) {
        Some(m) => m.as_str().parse().map_err(|_| ConfigError::InvalidVersion(s.to_string())),
        None => Ok(0),
      }
    };
    Ok(Version { major: num(1)?, minor: num(2)?, patch: num(3)? })
  }
}

impl fmt::Display for Version {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    if self.patch == 0 {
      write!(f, "{}.{}", self.major, self.minor)
    } else {
      write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
  }
}

/// Everything the builders need to know about the host version. This is
/// computed once, and then passed into every builder.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeatureFlags {
  /// The version these flags were computed from.
  pub version:                 Version,
  /// Damage lives in the item meta, instead of the stack's durability.
  pub supports_damage_field:   bool,
  /// Items can have custom model data.
  pub supports_custom_model:   bool,
  /// Unbreakable must be written as a raw nbt tag.
  pub uses_legacy_unbreakable: bool,
}

impl FeatureFlags {
  /// All flags only depend on the minor version.
  pub fn from_version(version: Version) -> Self {
    let minor = version.minor;
    FeatureFlags {
      version,
      supports_damage_field: minor >= DAMAGE_FIELD_SINCE,
      supports_custom_model: minor >= CUSTOM_MODEL_DATA_SINCE,
      uses_legacy_unbreakable: minor < NATIVE_UNBREAKABLE_SINCE,
    }
  }

  /// Queries the host once, and computes the flags. An unparsable version
  /// string is fatal: there is no sane default for a server we don't
  /// understand.
  pub fn detect(source: impl VersionSource) -> Result<Self, ConfigError> {
    let raw = source.version_string();
    let version = Version::parse(&raw)?;
    let flags = FeatureFlags::from_version(version);
    info!("detected host version {version} (from `{raw}`)");
    debug!("feature flags: {flags:?}");
    Ok(flags)
  }

  /// Flags for a 1.8 server.
  pub fn legacy() -> Self { FeatureFlags::from_version(Version::new(1, 8, 8)) }
  /// Flags for a 1.16 server.
  pub fn modern() -> Self { FeatureFlags::from_version(Version::new(1, 16, 5)) }
}
