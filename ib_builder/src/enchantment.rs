use strum_macros::{Display, EnumString};

/// An enchantment. Displays as the vanilla key without a namespace, like
/// `fire_aspect`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum Enchantment {
  Protection,
  FireProtection,
  FeatherFalling,
  BlastProtection,
  ProjectileProtection,
  Respiration,
  AquaAffinity,
  Thorns,
  Sharpness,
  Smite,
  BaneOfArthropods,
  Knockback,
  FireAspect,
  Looting,
  Efficiency,
  SilkTouch,
  Unbreaking,
  Fortune,
  Power,
  Punch,
  Flame,
  Infinity,
  LuckOfTheSea,
  Lure,
  Mending,
}

impl Enchantment {
  /// The lowest level this enchantment can normally have.
  pub fn start_level(self) -> u32 { 1 }

  /// The highest level this enchantment can have in survival.
  pub fn max_level(self) -> u32 {
    match self {
      Self::Protection
      | Self::FireProtection
      | Self::FeatherFalling
      | Self::BlastProtection
      | Self::ProjectileProtection => 4,
      Self::Respiration | Self::Thorns => 3,
      Self::Sharpness | Self::Smite | Self::BaneOfArthropods | Self::Efficiency | Self::Power => 5,
      Self::Knockback | Self::FireAspect | Self::Punch => 2,
      Self::Looting | Self::Unbreaking | Self::Fortune | Self::LuckOfTheSea | Self::Lure => 3,
      Self::AquaAffinity | Self::SilkTouch | Self::Flame | Self::Infinity | Self::Mending => 1,
    }
  }

  /// Returns the namespaced key, like `minecraft:lure`.
  pub fn key(self) -> String { format!("minecraft:{self}") }
}
