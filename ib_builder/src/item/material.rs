use strum_macros::{Display, EnumIter, EnumString};

/// An item type. The names match the host's material names, so
/// `"DIAMOND_SWORD".parse()` gives [`Material::DiamondSword`].
///
/// This only lists the materials the builders care about. Anything that isn't
/// special (no durability, no special meta) behaves like [`Material::Stone`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumString, EnumIter)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Material {
  Air,
  Stone,
  Dirt,
  Stick,
  Apple,
  Diamond,

  WoodenSword,
  StoneSword,
  IronSword,
  GoldenSword,
  DiamondSword,
  NetheriteSword,
  IronPickaxe,
  DiamondPickaxe,
  Bow,
  FishingRod,
  Shears,
  Shield,
  Trident,
  Elytra,

  LeatherHelmet,
  LeatherChestplate,
  LeatherLeggings,
  LeatherBoots,
  IronHelmet,
  DiamondChestplate,

  Potion,
  SplashPotion,
  LingeringPotion,

  WhiteBanner,
  OrangeBanner,
  MagentaBanner,
  LightBlueBanner,
  YellowBanner,
  LimeBanner,
  PinkBanner,
  GrayBanner,
  LightGrayBanner,
  CyanBanner,
  PurpleBanner,
  BlueBanner,
  BrownBanner,
  GreenBanner,
  RedBanner,
  BlackBanner,

  WritableBook,
  WrittenBook,

  FireworkRocket,
  FireworkStar,

  Map,
  FilledMap,

  PlayerHead,
}

pub const LEATHER_ARMOR: &[Material] = &[
  Material::LeatherHelmet,
  Material::LeatherChestplate,
  Material::LeatherLeggings,
  Material::LeatherBoots,
];

pub const POTIONS: &[Material] =
  &[Material::Potion, Material::SplashPotion, Material::LingeringPotion];

pub const BANNERS: &[Material] = &[
  Material::WhiteBanner,
  Material::OrangeBanner,
  Material::MagentaBanner,
  Material::LightBlueBanner,
  Material::YellowBanner,
  Material::LimeBanner,
  Material::PinkBanner,
  Material::GrayBanner,
  Material::LightGrayBanner,
  Material::CyanBanner,
  Material::PurpleBanner,
  Material::BlueBanner,
  Material::BrownBanner,
  Material::GreenBanner,
  Material::RedBanner,
  Material::BlackBanner,
];

pub const BOOKS: &[Material] = &[Material::WritableBook, Material::WrittenBook];

pub const FIREWORKS: &[Material] = &[Material::FireworkRocket, Material::FireworkStar];

pub const MAPS: &[Material] = &[Material::Map, Material::FilledMap];

pub const SKULLS: &[Material] = &[Material::PlayerHead];

impl Material {
  /// Air can never have any meta, and is what empty slots contain.
  pub fn is_air(self) -> bool { self == Material::Air }

  /// Returns how many uses this item has before breaking. This is 0 for
  /// anything that can't be damaged.
  pub fn max_durability(self) -> u16 {
    match self {
      Self::WoodenSword => 59,
      Self::StoneSword => 131,
      Self::IronSword | Self::IronPickaxe | Self::Trident => 250,
      Self::GoldenSword => 32,
      Self::DiamondSword | Self::DiamondPickaxe => 1561,
      Self::NetheriteSword => 2031,
      Self::Bow => 384,
      Self::FishingRod => 64,
      Self::Shears => 238,
      Self::Shield => 336,
      Self::Elytra => 432,
      Self::LeatherHelmet => 55,
      Self::LeatherChestplate => 80,
      Self::LeatherLeggings => 75,
      Self::LeatherBoots => 65,
      Self::IronHelmet => 165,
      Self::DiamondChestplate => 528,
      _ => 0,
    }
  }

  pub fn is_damageable(self) -> bool { self.max_durability() > 0 }

  pub fn is_leather_armor(self) -> bool { LEATHER_ARMOR.contains(&self) }
  pub fn is_potion(self) -> bool { POTIONS.contains(&self) }
  pub fn is_banner(self) -> bool { BANNERS.contains(&self) }
  pub fn is_book(self) -> bool { BOOKS.contains(&self) }
  pub fn is_firework(self) -> bool { FIREWORKS.contains(&self) }
  pub fn is_map(self) -> bool { MAPS.contains(&self) }
  pub fn is_skull(self) -> bool { SKULLS.contains(&self) }

  /// Returns true if the base builder's `color` does anything for this
  /// material.
  pub fn is_colorable(self) -> bool {
    self.is_leather_armor() || self.is_potion() || self == Material::FilledMap
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use strum::IntoEnumIterator;

  #[test]
  fn names() {
    assert_eq!(Material::DiamondSword.to_string(), "DIAMOND_SWORD");
    assert_eq!("LINGERING_POTION".parse::<Material>().unwrap(), Material::LingeringPotion);
    assert_eq!("LIGHT_BLUE_BANNER".parse::<Material>().unwrap(), Material::LightBlueBanner);
    assert!("diamond_sword".parse::<Material>().is_err());

    for m in Material::iter() {
      assert_eq!(m.to_string().parse::<Material>().unwrap(), m);
    }
  }

  #[test]
  fn categories() {
    assert!(Material::Air.is_air());
    assert!(Material::DiamondSword.is_damageable());
    assert!(!Material::Stone.is_damageable());
    assert!(Material::LeatherBoots.is_colorable());
    assert!(Material::SplashPotion.is_colorable());
    assert!(Material::FilledMap.is_colorable());
    assert!(!Material::Map.is_colorable());
    assert!(!Material::IronHelmet.is_colorable());

    // Every material is in at most one special category.
    for m in Material::iter() {
      let n = [m.is_potion(), m.is_banner(), m.is_book(), m.is_firework(), m.is_map(), m.is_skull()]
        .iter()
        .filter(|v| **v)
        .count();
      assert!(n <= 1, "{m} is in {n} categories");
    }
    assert_eq!(BANNERS.len(), 16);
  }
}
