use crate::ItemError;
use strum_macros::{Display, EnumString};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum DyeColor {
  White,
  Orange,
  Magenta,
  LightBlue,
  Yellow,
  Lime,
  Pink,
  Gray,
  LightGray,
  Cyan,
  Purple,
  Blue,
  Brown,
  Green,
  Red,
  Black,
}

/// The shape of a banner layer. Displays as the short code the host stores
/// in nbt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString)]
pub enum PatternType {
  #[strum(serialize = "b")]
  Base,
  #[strum(serialize = "bl")]
  SquareBottomLeft,
  #[strum(serialize = "br")]
  SquareBottomRight,
  #[strum(serialize = "tl")]
  SquareTopLeft,
  #[strum(serialize = "tr")]
  SquareTopRight,
  #[strum(serialize = "bs")]
  StripeBottom,
  #[strum(serialize = "ts")]
  StripeTop,
  #[strum(serialize = "ls")]
  StripeLeft,
  #[strum(serialize = "rs")]
  StripeRight,
  #[strum(serialize = "cs")]
  StripeCenter,
  #[strum(serialize = "ms")]
  StripeMiddle,
  #[strum(serialize = "drs")]
  StripeDownright,
  #[strum(serialize = "dls")]
  StripeDownleft,
  #[strum(serialize = "cr")]
  Cross,
  #[strum(serialize = "sc")]
  StraightCross,
  #[strum(serialize = "bt")]
  TriangleBottom,
  #[strum(serialize = "tt")]
  TriangleTop,
  #[strum(serialize = "mc")]
  Circle,
  #[strum(serialize = "mr")]
  Rhombus,
  #[strum(serialize = "bo")]
  Border,
  #[strum(serialize = "gra")]
  Gradient,
  #[strum(serialize = "bri")]
  Bricks,
  #[strum(serialize = "cre")]
  Creeper,
  #[strum(serialize = "sku")]
  Skull,
  #[strum(serialize = "flo")]
  Flower,
  #[strum(serialize = "moj")]
  Mojang,
  #[strum(serialize = "glb")]
  Globe,
  #[strum(serialize = "pig")]
  Piglin,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pattern {
  pub color: DyeColor,
  pub ty:    PatternType,
}

impl Pattern {
  pub fn new(color: DyeColor, ty: PatternType) -> Self { Pattern { color, ty } }
}

/// Banner layers, bottom to top.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BannerMeta {
  pub patterns: Vec<Pattern>,
}

impl BannerMeta {
  pub fn add_pattern(&mut self, pattern: Pattern) { self.patterns.push(pattern); }

  /// Replaces the layer at `index`.
  pub fn set_pattern(&mut self, index: usize, pattern: Pattern) -> Result<(), ItemError> {
    let len = self.patterns.len();
    match self.patterns.get_mut(index) {
      Some(p) => {
        *p = pattern;
        Ok(())
      }
      None => Err(ItemError::IndexOutOfRange { index, len }),
    }
  }

  /// Removes the layer at `index`, and returns it.
  pub fn remove_pattern(&mut self, index: usize) -> Result<Pattern, ItemError> {
    if index >= self.patterns.len() {
      return Err(ItemError::IndexOutOfRange { index, len: self.patterns.len() });
    }
    Ok(self.patterns.remove(index))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn patterns() {
    let mut meta = BannerMeta::default();
    meta.add_pattern(Pattern::new(DyeColor::Red, PatternType::Cross));
    meta.add_pattern(Pattern::new(DyeColor::Blue, PatternType::Border));
    meta.set_pattern(0, Pattern::new(DyeColor::Lime, PatternType::Creeper)).unwrap();
    assert_eq!(meta.patterns[0], Pattern::new(DyeColor::Lime, PatternType::Creeper));
    assert_eq!(
      meta.set_pattern(2, Pattern::new(DyeColor::Lime, PatternType::Creeper)),
      Err(ItemError::IndexOutOfRange { index: 2, len: 2 })
    );
    assert_eq!(meta.remove_pattern(1).unwrap().ty, PatternType::Border);
    assert!(meta.remove_pattern(1).is_err());
  }

  #[test]
  fn names() {
    assert_eq!(PatternType::Creeper.to_string(), "cre");
    assert_eq!("mc".parse::<PatternType>().unwrap(), PatternType::Circle);
    assert_eq!(DyeColor::LightBlue.to_string(), "LIGHT_BLUE");
  }
}
