use ib_common::util::Color;
use strum_macros::{Display, EnumString};

/// The base potion, which decides the default effects and name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum PotionType {
  Uncraftable,
  Water,
  Mundane,
  Thick,
  Awkward,
  NightVision,
  Invisibility,
  Jump,
  FireResistance,
  Speed,
  Slowness,
  WaterBreathing,
  InstantHeal,
  InstantDamage,
  Poison,
  Regen,
  Strength,
  Weakness,
  Luck,
  TurtleMaster,
  SlowFalling,
}

impl PotionType {
  /// Returns true if this potion can be brewed with redstone.
  pub fn is_extendable(self) -> bool {
    !matches!(
      self,
      Self::Uncraftable
        | Self::Water
        | Self::Mundane
        | Self::Thick
        | Self::Awkward
        | Self::InstantHeal
        | Self::InstantDamage
        | Self::Luck
    )
  }
  /// Returns true if this potion can be brewed with glowstone.
  pub fn is_upgradeable(self) -> bool {
    matches!(
      self,
      Self::Jump
        | Self::Speed
        | Self::Slowness
        | Self::InstantHeal
        | Self::InstantDamage
        | Self::Poison
        | Self::Regen
        | Self::Strength
        | Self::TurtleMaster
    )
  }
}

/// The base potion of a potion item. A potion can't be both extended and
/// upgraded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PotionData {
  ty:       PotionType,
  extended: bool,
  upgraded: bool,
}

impl Default for PotionData {
  fn default() -> Self { PotionData::new(PotionType::Water) }
}

impl PotionData {
  pub fn new(ty: PotionType) -> Self { PotionData { ty, extended: false, upgraded: false } }

  /// Creates potion data with the extended/upgraded flags. Returns `None` if
  /// the combination can't exist.
  pub fn with(ty: PotionType, extended: bool, upgraded: bool) -> Option<Self> {
    if (extended && upgraded)
      || (extended && !ty.is_extendable())
      || (upgraded && !ty.is_upgradeable())
    {
      return None;
    }
    Some(PotionData { ty, extended, upgraded })
  }

  pub fn ty(&self) -> PotionType { self.ty }
  pub fn is_extended(&self) -> bool { self.extended }
  pub fn is_upgraded(&self) -> bool { self.upgraded }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum PotionEffectType {
  Speed,
  Slowness,
  Haste,
  MiningFatigue,
  Strength,
  InstantHealth,
  InstantDamage,
  JumpBoost,
  Nausea,
  Regeneration,
  Resistance,
  FireResistance,
  WaterBreathing,
  Invisibility,
  Blindness,
  NightVision,
  Hunger,
  Weakness,
  Poison,
  Wither,
  Absorption,
  Glowing,
  Levitation,
  Luck,
  SlowFalling,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PotionEffect {
  pub ty:        PotionEffectType,
  /// Duration in ticks.
  pub duration:  u32,
  /// 0 is level I.
  pub amplifier: u8,
  pub ambient:   bool,
  pub particles: bool,
}

impl PotionEffect {
  pub fn new(ty: PotionEffectType, duration: u32, amplifier: u8) -> Self {
    PotionEffect { ty, duration, amplifier, ambient: false, particles: true }
  }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PotionMeta {
  pub color:          Option<Color>,
  pub base:           PotionData,
  pub custom_effects: Vec<PotionEffect>,
}

impl PotionMeta {
  /// Adds a custom effect. If there is already an effect with the same type,
  /// it is only replaced when `overwrite` is set. Returns true if the effects
  /// changed.
  pub fn add_custom_effect(&mut self, effect: PotionEffect, overwrite: bool) -> bool {
    match self.custom_effects.iter_mut().find(|e| e.ty == effect.ty) {
      Some(existing) => {
        if !overwrite || *existing == effect {
          return false;
        }
        *existing = effect;
        true
      }
      None => {
        self.custom_effects.push(effect);
        true
      }
    }
  }

  pub fn has_custom_effect(&self, ty: PotionEffectType) -> bool {
    self.custom_effects.iter().any(|e| e.ty == ty)
  }
}
