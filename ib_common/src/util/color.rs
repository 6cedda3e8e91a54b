use std::{error::Error, fmt, str::FromStr};

/// An rgb color. Used for dyed leather, potions, maps and firework effects.
/// Chat colors are formatting codes instead; see [`chat`](super::chat).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
  pub r: u8,
  pub g: u8,
  pub b: u8,
}

impl Color {
  pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
  pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
  pub const RED: Color = Color::rgb(0xff, 0x00, 0x00);
  pub const GREEN: Color = Color::rgb(0x00, 0x80, 0x00);
  pub const BLUE: Color = Color::rgb(0x00, 0x00, 0xff);
  pub const YELLOW: Color = Color::rgb(0xff, 0xff, 0x00);
  pub const AQUA: Color = Color::rgb(0x00, 0xff, 0xff);
  pub const FUCHSIA: Color = Color::rgb(0xff, 0x00, 0xff);
  pub const ORANGE: Color = Color::rgb(0xff, 0xa5, 0x00);
  pub const PURPLE: Color = Color::rgb(0x80, 0x00, 0x80);

  pub const fn rgb(r: u8, g: u8, b: u8) -> Self { Color { r, g, b } }

  /// Creates a color from a packed `0xRRGGBB` int. The top byte is ignored.
  pub const fn from_int(v: u32) -> Self {
    Color { r: (v >> 16) as u8, g: (v >> 8) as u8, b: v as u8 }
  }
  /// Returns the packed `0xRRGGBB` form. This is what ends up in item nbt.
  pub const fn as_int(&self) -> u32 { (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32 }
}

impl fmt::Display for Color {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InvalidColor(String);

impl fmt::Display for InvalidColor {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { write!(f, "invalid color: {}", self.0) }
}

impl Error for InvalidColor {}

impl FromStr for Color {
  type Err = InvalidColor;

  /// Parses `#rrggbb` (the `#` is optional).
  fn from_str(s: &str) -> Result<Self, InvalidColor> {
    let hex = s.strip_prefix('#').unwrap_or(s);
    if hex.len() != 6 {
      return Err(InvalidColor(s.into()));
    }
    u32::from_str_radix(hex, 16).map(Color::from_int).map_err(|_| InvalidColor(s.into()))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn packing() {
    assert_eq!(Color::rgb(0x12, 0x34, 0x56).as_int(), 0x123456);
    assert_eq!(Color::from_int(0xff123456), Color::rgb(0x12, 0x34, 0x56));
    assert_eq!(Color::ORANGE.to_string(), "#ffa500");
    assert_eq!("#007fff".parse::<Color>().unwrap(), Color::rgb(0, 127, 255));
    assert_eq!("007fff".parse::<Color>().unwrap(), Color::rgb(0, 127, 255));
    assert!("#07fff".parse::<Color>().is_err());
    assert!("#zzzzzz".parse::<Color>().is_err());
  }
}
