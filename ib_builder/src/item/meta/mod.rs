//! Item meta. This is everything about an item other than its material and
//! amount: the name, lore, enchantments, and so on.
//!
//! Some materials carry extra data, like the effects on a potion. That data
//! lives in [`MetaKind`], which is picked once from the material when the meta
//! is created. The specialized builders match on the variant they expect, so a
//! banner builder can never end up writing potion effects.

use super::{ItemFlag, Material};
use crate::{attribute::Attribute, AttributeModifier, Enchantment};
use ib_common::util::Color;
use std::collections::{BTreeMap, BTreeSet};

pub mod banner;
pub mod book;
pub mod firework;
pub mod map;
pub mod pdc;
pub mod potion;
pub mod skull;

#[cfg(test)]
mod tests;

pub use banner::{BannerMeta, DyeColor, Pattern, PatternType};
pub use book::{BookMeta, Generation};
pub use firework::{FireworkEffect, FireworkMeta, FireworkStarMeta, FireworkType};
pub use map::MapMeta;
pub use pdc::{NamespacedKey, PersistentDataContainer, PersistentDataType};
pub use potion::{PotionData, PotionEffect, PotionEffectType, PotionMeta, PotionType};
pub use skull::{SkullMeta, SkullOwner};

/// The material specific part of the meta.
#[derive(Clone, Debug, PartialEq)]
pub enum MetaKind {
  Plain,
  LeatherArmor { color: Option<Color> },
  Potion(PotionMeta),
  Banner(BannerMeta),
  Book(BookMeta),
  Firework(FireworkMeta),
  FireworkStar(FireworkStarMeta),
  Map(MapMeta),
  Skull(SkullMeta),
}

impl MetaKind {
  /// Returns the empty variant for the given material.
  pub fn for_material(material: Material) -> Self {
    match material {
      m if m.is_leather_armor() => MetaKind::LeatherArmor { color: None },
      m if m.is_potion() => MetaKind::Potion(PotionMeta::default()),
      m if m.is_banner() => MetaKind::Banner(BannerMeta::default()),
      m if m.is_book() => MetaKind::Book(BookMeta::default()),
      Material::FireworkRocket => MetaKind::Firework(FireworkMeta::default()),
      Material::FireworkStar => MetaKind::FireworkStar(FireworkStarMeta::default()),
      m if m.is_map() => MetaKind::Map(MapMeta::default()),
      m if m.is_skull() => MetaKind::Skull(SkullMeta::default()),
      _ => MetaKind::Plain,
    }
  }

  /// A short name for the variant, used in logs and errors.
  pub fn name(&self) -> &'static str {
    match self {
      Self::Plain => "plain",
      Self::LeatherArmor { .. } => "leather armor",
      Self::Potion(_) => "potion",
      Self::Banner(_) => "banner",
      Self::Book(_) => "book",
      Self::Firework(_) => "firework",
      Self::FireworkStar(_) => "firework star",
      Self::Map(_) => "map",
      Self::Skull(_) => "skull",
    }
  }
}

/// A detached copy of an item's meta. Changing this does nothing to the item
/// until it is written back with [`ItemStack::set_meta`](super::ItemStack::set_meta).
#[derive(Clone, Debug, PartialEq)]
pub struct ItemMeta {
  display_name:      Option<String>,
  lore:              Option<Vec<String>>,
  enchants:          BTreeMap<Enchantment, u32>,
  attributes:        Vec<(Attribute, AttributeModifier)>,
  flags:             BTreeSet<ItemFlag>,
  pdc:               PersistentDataContainer,
  unbreakable:       bool,
  custom_model_data: Option<i32>,
  // `None` if the material cannot be damaged.
  damage:            Option<i32>,
  kind:              MetaKind,
}

impl ItemMeta {
  /// Creates empty meta for the given material. Air has no meta, so this
  /// returns `None` for air.
  pub fn for_material(material: Material) -> Option<Self> {
    if material.is_air() {
      return None;
    }
    Some(ItemMeta {
      display_name:      None,
      lore:              None,
      enchants:          BTreeMap::new(),
      attributes:        vec![],
      flags:             BTreeSet::new(),
      pdc:               PersistentDataContainer::new(),
      unbreakable:       false,
      custom_model_data: None,
      damage:            if material.is_damageable() { Some(0) } else { None },
      kind:              MetaKind::for_material(material),
    })
  }

  pub fn display_name(&self) -> Option<&str> { self.display_name.as_deref() }
  pub fn has_display_name(&self) -> bool { self.display_name.is_some() }
  pub fn set_display_name(&mut self, name: Option<String>) { self.display_name = name; }

  pub fn lore(&self) -> Option<&[String]> { self.lore.as_deref() }
  pub fn has_lore(&self) -> bool { self.lore.is_some() }
  pub fn set_lore(&mut self, lore: Option<Vec<String>>) { self.lore = lore; }

  pub fn enchants(&self) -> &BTreeMap<Enchantment, u32> { &self.enchants }
  pub fn enchant_level(&self, ench: Enchantment) -> Option<u32> { self.enchants.get(&ench).copied() }
  pub fn has_enchant(&self, ench: Enchantment) -> bool { self.enchants.contains_key(&ench) }
  pub fn has_enchants(&self) -> bool { !self.enchants.is_empty() }
  /// Adds an enchantment. Unless `ignore_level_restriction` is set, the level
  /// must be between the enchantment's start and max level, and anything else
  /// is ignored. Returns true if the meta changed.
  pub fn add_enchant(&mut self, ench: Enchantment, level: u32, ignore_level_restriction: bool) -> bool {
    if !ignore_level_restriction && !(ench.start_level()..=ench.max_level()).contains(&level) {
      return false;
    }
    self.enchants.insert(ench, level) != Some(level)
  }
  /// Returns true if the enchantment was present.
  pub fn remove_enchant(&mut self, ench: Enchantment) -> bool { self.enchants.remove(&ench).is_some() }

  pub fn attribute_modifiers(&self) -> &[(Attribute, AttributeModifier)] { &self.attributes }
  /// Returns all the modifiers for the given attribute.
  pub fn modifiers_for(&self, attr: Attribute) -> impl Iterator<Item = &AttributeModifier> {
    self.attributes.iter().filter(move |(a, _)| *a == attr).map(|(_, m)| m)
  }
  /// Adds a modifier. A modifier with the same id cannot be added to the same
  /// attribute twice, so this returns false in that case.
  pub fn add_attribute_modifier(&mut self, attr: Attribute, modifier: AttributeModifier) -> bool {
    if self.attributes.iter().any(|(a, m)| *a == attr && m.uuid == modifier.uuid) {
      return false;
    }
    self.attributes.push((attr, modifier));
    true
  }

  pub fn flags(&self) -> &BTreeSet<ItemFlag> { &self.flags }
  pub fn has_flag(&self, flag: ItemFlag) -> bool { self.flags.contains(&flag) }
  pub fn add_flags(&mut self, flags: impl IntoIterator<Item = ItemFlag>) { self.flags.extend(flags); }
  pub fn remove_flags(&mut self, flags: impl IntoIterator<Item = ItemFlag>) {
    for f in flags {
      self.flags.remove(&f);
    }
  }

  pub fn pdc(&self) -> &PersistentDataContainer { &self.pdc }
  pub fn pdc_mut(&mut self) -> &mut PersistentDataContainer { &mut self.pdc }

  pub fn is_unbreakable(&self) -> bool { self.unbreakable }
  pub fn set_unbreakable(&mut self, unbreakable: bool) { self.unbreakable = unbreakable; }

  pub fn custom_model_data(&self) -> Option<i32> { self.custom_model_data }
  pub fn set_custom_model_data(&mut self, data: Option<i32>) { self.custom_model_data = data; }

  /// Returns the damage on this item, or `None` if the material cannot be
  /// damaged.
  pub fn damage(&self) -> Option<i32> { self.damage }
  pub fn is_damageable(&self) -> bool { self.damage.is_some() }
  /// Sets the damage. Returns false and does nothing if the material cannot be
  /// damaged.
  pub fn set_damage(&mut self, damage: i32) -> bool {
    match &mut self.damage {
      Some(d) => {
        *d = damage;
        true
      }
      None => false,
    }
  }

  pub fn kind(&self) -> &MetaKind { &self.kind }
  pub fn kind_mut(&mut self) -> &mut MetaKind { &mut self.kind }

  /// Returns the dye color of leather armor, potions, and maps.
  pub fn color(&self) -> Option<Color> {
    match &self.kind {
      MetaKind::LeatherArmor { color } => *color,
      MetaKind::Potion(p) => p.color,
      MetaKind::Map(m) => m.color,
      _ => None,
    }
  }
  /// Sets the color. Returns false if this kind of meta has no color.
  pub fn set_color(&mut self, color: Color) -> bool {
    match &mut self.kind {
      MetaKind::LeatherArmor { color: c } => *c = Some(color),
      MetaKind::Potion(p) => p.color = Some(color),
      MetaKind::Map(m) => m.color = Some(color),
      _ => return false,
    }
    true
  }
}
