pub mod chat;
mod color;

pub use color::{Color, InvalidColor};

#[cfg(feature = "host")]
use rand::{rngs::OsRng, RngCore};
use std::{error::Error, fmt, num::ParseIntError, str::FromStr};

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct UUID(u128);

impl Default for UUID {
  fn default() -> UUID { UUID::from_u128(0) }
}

#[derive(Debug)]
pub enum UUIDParseError {
  Int(ParseIntError),
  Length(usize),
}

impl fmt::Display for UUIDParseError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "error while parsing uuid: {}",
      match self {
        Self::Int(e) => format!("int parsing error: {}", e),
        Self::Length(len) => format!("invalid length: {}", len),
      }
    )
  }
}

impl Error for UUIDParseError {}

impl UUID {
  /// Generates a random version 4 UUID. This uses rand::OsRng, so it will be
  /// secure.
  #[cfg(feature = "host")]
  pub fn random() -> Self {
    let mut arr = [0; 16];
    OsRng.fill_bytes(&mut arr);
    // Set the version (4) and variant (RFC 4122) bits, so the host accepts it.
    arr[6] = (arr[6] & 0x0f) | 0x40;
    arr[8] = (arr[8] & 0x3f) | 0x80;
    UUID::from_be_bytes(arr)
  }
  pub fn from_be_bytes(v: [u8; 16]) -> Self { UUID(u128::from_be_bytes(v)) }
  pub fn from_u128(v: u128) -> Self { UUID(v) }
  /// Parses the string as a uuid with dashes in between. This is the same
  /// format returned from [`as_dashed_str`](Self::as_dashed_str).
  pub fn from_dashed_str(s: &str) -> Result<Self, UUIDParseError> {
    if s.len() != 36 {
      return Err(UUIDParseError::Length(s.len()));
    }
    Self::from_str(&s.split('-').collect::<Vec<&str>>().join(""))
  }
  /// Returns the uuid represented as a hex string, with no dashes or other
  /// characters.
  pub fn as_str(&self) -> String { format!("{:032x}", self.0) }
  /// Returns the uuid represented as a string with dashes. This is how the
  /// host prints attribute modifier and skull owner ids.
  pub fn as_dashed_str(&self) -> String {
    format!(
      "{:08x}-{:04x}-{:04x}-{:04x}-{:012x}",
      //          11111111222233334444555555555555
      (self.0 & 0xffffffff000000000000000000000000) >> (24 * 4), // 4 bits per digit
      (self.0 & 0x00000000ffff00000000000000000000) >> (20 * 4),
      (self.0 & 0x000000000000ffff0000000000000000) >> (16 * 4),
      (self.0 & 0x0000000000000000ffff000000000000) >> (12 * 4),
      (self.0 & 0x00000000000000000000ffffffffffff),
    )
  }
  /// Returns the underlying `u128`.
  pub fn as_u128(&self) -> u128 { self.0 }
  /// Returns the big-endian representation of the underlying `u128`.
  pub fn as_be_bytes(&self) -> [u8; 16] { self.0.to_be_bytes() }
}

impl FromStr for UUID {
  type Err = UUIDParseError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    if s.len() != 32 {
      return Err(UUIDParseError::Length(s.len()));
    }
    match u128::from_str_radix(s, 16) {
      Ok(v) => Ok(Self::from_u128(v)),
      Err(e) => Err(UUIDParseError::Int(e)),
    }
  }
}

impl fmt::Display for UUID {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.as_dashed_str()) }
}
