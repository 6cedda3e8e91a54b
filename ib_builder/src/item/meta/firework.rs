use crate::ItemError;
use ib_common::util::Color;
use strum_macros::{Display, EnumString};

pub const MAX_POWER: u8 = 127;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum FireworkType {
  Ball,
  BallLarge,
  Star,
  Burst,
  Creeper,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FireworkEffect {
  pub ty:          FireworkType,
  pub colors:      Vec<Color>,
  pub fade_colors: Vec<Color>,
  pub flicker:     bool,
  pub trail:       bool,
}

impl FireworkEffect {
  /// Creates an effect with a single color.
  pub fn new(ty: FireworkType, color: Color) -> Self {
    FireworkEffect { ty, colors: vec![color], fade_colors: vec![], flicker: false, trail: false }
  }

  pub fn with_color(mut self, color: Color) -> Self {
    self.colors.push(color);
    self
  }
  pub fn with_fade(mut self, color: Color) -> Self {
    self.fade_colors.push(color);
    self
  }
  pub fn with_flicker(mut self) -> Self {
    self.flicker = true;
    self
  }
  pub fn with_trail(mut self) -> Self {
    self.trail = true;
    self
  }
}

/// A firework rocket. This can have any number of effects.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FireworkMeta {
  effects: Vec<FireworkEffect>,
  power:   u8,
}

impl Default for FireworkMeta {
  fn default() -> Self { FireworkMeta { effects: vec![], power: 1 } }
}

impl FireworkMeta {
  pub fn effects(&self) -> &[FireworkEffect] { &self.effects }
  pub fn add_effect(&mut self, effect: FireworkEffect) { self.effects.push(effect); }
  pub fn clear_effects(&mut self) { self.effects.clear(); }

  /// The flight duration of the rocket.
  pub fn power(&self) -> u8 { self.power }
  /// Sets the flight duration. Must be within `0..=127`.
  pub fn set_power(&mut self, power: i32) -> Result<(), ItemError> {
    if !(0..=MAX_POWER as i32).contains(&power) {
      return Err(ItemError::InvalidValue {
        name:   "firework power",
        reason: format!("{power} is not within 0..={MAX_POWER}"),
      });
    }
    self.power = power as u8;
    Ok(())
  }
}

/// A firework star. This has at most one effect.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FireworkStarMeta {
  pub effect: Option<FireworkEffect>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn power() {
    let mut meta = FireworkMeta::default();
    assert_eq!(meta.power(), 1);
    meta.set_power(127).unwrap();
    assert_eq!(meta.power(), 127);
    assert!(meta.set_power(128).is_err());
    assert!(meta.set_power(-1).is_err());
    assert_eq!(meta.power(), 127);
  }

  #[test]
  fn effects() {
    let effect = FireworkEffect::new(FireworkType::Star, Color::RED)
      .with_color(Color::BLUE)
      .with_fade(Color::WHITE)
      .with_trail();
    assert_eq!(effect.colors, vec![Color::RED, Color::BLUE]);
    assert!(effect.trail);
    assert!(!effect.flicker);

    let mut meta = FireworkMeta::default();
    meta.add_effect(effect.clone());
    meta.add_effect(effect);
    assert_eq!(meta.effects().len(), 2);
    meta.clear_effects();
    assert!(meta.effects().is_empty());
  }
}
