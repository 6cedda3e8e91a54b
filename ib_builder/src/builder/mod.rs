//! The fluent item builder.
//!
//! An [`ItemBuilder`] wraps one [`ItemStack`] and a detached copy of its meta.
//! Every call changes the copy, and [`build`](ItemBuilder::build) is the only
//! place the copy is written back into the item. Each call consumes the
//! builder and returns it, so calls can be chained:
//!
//! ```
//! use ib_builder::{builder::PlainBuilder, item::Material, Enchantment};
//! use ib_common::FeatureFlags;
//!
//! let sword = PlainBuilder::from_material(Material::DiamondSword, FeatureFlags::modern())
//!   .unwrap()
//!   .set_name("&bFrost")
//!   .add_lore(["&7Cold to the touch"])
//!   .enchant_level(Enchantment::Sharpness, 5)
//!   .build();
//! assert_eq!(sword.meta().unwrap().display_name(), Some("§bFrost"));
//! ```
//!
//! The type parameter picks a specialization. [`Plain`] builders accept any
//! material, and the others (like [`PotionBuilder`]) only accept their own
//! materials, and add setters for the extra meta those materials have.

use crate::{
  attribute::{Attribute, AttributeModifier, EquipmentSlot, Operation},
  item::{
    ItemFlag, ItemMeta, ItemStack, Material, MetaKind, NamespacedKey, PersistentDataContainer,
    PersistentDataType,
  },
  mutate, Enchantment, ItemError, NbtService, PersistentNbt, Plugin,
};
use ib_common::{
  util::{chat, Color},
  Config, FeatureFlags,
};
use std::{fmt, marker::PhantomData, mem, sync::Arc};

mod banner;
mod book;
mod factory;
mod firework;
mod map;
mod potion;
mod skull;

#[cfg(test)]
mod tests;

pub use factory::{AnyBuilder, ItemFactory};

/// The legacy nbt key for unbreakable items.
const UNBREAKABLE_TAG: &str = "Unbreakable";

/// A builder specialization. This decides which materials a builder accepts,
/// and which material it starts with when none is given.
pub trait BuilderKind: fmt::Debug + Clone + Copy + 'static {
  /// Used in errors.
  const NAME: &'static str;
  /// The accepted materials. `None` accepts anything.
  const MATERIALS: Option<&'static [Material]>;
  /// The material used when the builder is created without an item.
  const DEFAULT: Material;

  fn accepts(material: Material) -> bool {
    match Self::MATERIALS {
      Some(list) => list.contains(&material),
      None => true,
    }
  }
}

macro_rules! kind {
  ($(#[$doc:meta])* $name:ident, $builder:ident, $materials:expr, $default:expr) => {
    $(#[$doc])*
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct $name;

    impl BuilderKind for $name {
      const NAME: &'static str = stringify!($builder);
      const MATERIALS: Option<&'static [Material]> = $materials;
      const DEFAULT: Material = $default;
    }

    pub type $builder = ItemBuilder<$name>;
  };
}

kind!(
  /// Any material, with only the common setters.
  Plain, PlainBuilder, None, Material::Stone
);
kind!(Potion, PotionBuilder, Some(crate::item::POTIONS), Material::Potion);
kind!(Banner, BannerBuilder, Some(crate::item::BANNERS), Material::WhiteBanner);
kind!(Book, BookBuilder, Some(crate::item::BOOKS), Material::WrittenBook);
kind!(
  /// Rockets and stars. The setters act a little differently for each.
  Firework,
  FireworkBuilder,
  Some(crate::item::FIREWORKS),
  Material::FireworkRocket
);
kind!(Map, MapBuilder, Some(crate::item::MAPS), Material::FilledMap);
kind!(Skull, SkullBuilder, Some(crate::item::SKULLS), Material::PlayerHead);

/// Builds an [`ItemStack`]. See the [module level docs](self) for an
/// overview.
#[derive(Clone, Debug)]
pub struct ItemBuilder<K: BuilderKind = Plain> {
  item:     ItemStack,
  // `None` for air.
  meta:     Option<ItemMeta>,
  plugin:   Option<Plugin>,
  features: FeatureFlags,
  marker:   char,
  nbt:      Arc<dyn NbtService>,
  _kind:    PhantomData<K>,
}

impl<K: BuilderKind> ItemBuilder<K> {
  /// Wraps the given item. This fails if the material is not one this kind of
  /// builder accepts.
  pub fn from_stack(item: ItemStack, features: FeatureFlags) -> Result<Self, ItemError> {
    let material = item.material();
    if !K::accepts(material) {
      return Err(ItemError::WrongMaterial {
        builder:  K::NAME,
        got:      material,
        expected: K::MATERIALS.unwrap_or(&[]),
      });
    }
    if let Some(m) = item.meta_ref() {
      let expected = MetaKind::for_material(material);
      if mem::discriminant(m.kind()) != mem::discriminant(&expected) {
        return Err(ItemError::MissingCapability { material, capability: expected.name() });
      }
    }
    Ok(Self::new(item, features))
  }

  /// Creates a builder around a single item of the given material.
  pub fn from_material(material: Material, features: FeatureFlags) -> Result<Self, ItemError> {
    Self::from_stack(ItemStack::new(material), features)
  }

  /// Creates a builder around this kind's default material.
  pub fn create(features: FeatureFlags) -> Self { Self::new(ItemStack::new(K::DEFAULT), features) }

  // Callers must make sure the item is valid for `K`.
  fn new(item: ItemStack, features: FeatureFlags) -> Self {
    ItemBuilder {
      meta: item.meta(),
      item,
      plugin: None,
      features,
      marker: Config::default().color_marker,
      nbt: Arc::new(PersistentNbt),
      _kind: PhantomData,
    }
  }

  /// Applies the settings from the config file. Currently, this is only the
  /// color marker.
  pub fn config(mut self, config: &Config) -> Self {
    self.marker = config.color_marker;
    self
  }
  /// Sets the character that starts a formatting code in names and lore.
  pub fn color_marker(mut self, marker: char) -> Self {
    self.marker = marker;
    self
  }

  /// Sets the plugin that owns this item. This is needed for raw nbt tags.
  pub fn plugin(mut self, plugin: Plugin) -> Self {
    self.plugin = Some(plugin);
    self
  }
  /// Replaces the service used for raw nbt tags.
  pub fn nbt_service(mut self, service: impl NbtService + 'static) -> Self {
    self.nbt = Arc::new(service);
    self
  }

  pub fn material(&self) -> Material { self.item.material() }
  pub fn features(&self) -> &FeatureFlags { &self.features }
  /// The meta as it currently is in the builder.
  pub fn meta(&self) -> Option<&ItemMeta> { self.meta.as_ref() }

  fn edit(&mut self, f: impl FnOnce(&mut ItemMeta)) {
    match &mut self.meta {
      Some(meta) => f(meta),
      None => trace!("{} has no meta, ignoring change", self.item.material()),
    }
  }

  /// Writes the meta into the item, runs `f` on the item, and then takes a new
  /// copy of the meta. This is used for anything that needs the whole item.
  fn sync<R>(&mut self, f: impl FnOnce(&mut ItemStack) -> R) -> R {
    self.item.set_meta(self.meta.take());
    let out = f(&mut self.item);
    self.meta = self.item.meta();
    out
  }

  fn translate(&self, text: &str) -> String { chat::translate_codes(self.marker, text) }

  /// Sets the amount. An amount of 0 turns the item into air.
  pub fn amount(mut self, amount: u8) -> Self {
    self.item.set_amount(amount);
    self
  }

  /// Adds a level 1 enchantment.
  pub fn enchant(self, ench: Enchantment) -> Self { self.enchant_with(ench, 1, true) }
  /// Adds an enchantment, ignoring the normal level limits.
  pub fn enchant_level(self, ench: Enchantment, level: u32) -> Self {
    self.enchant_with(ench, level, true)
  }
  /// Adds an enchantment. If `ignore_level_restriction` is false, levels past
  /// the enchantment's max level are ignored.
  pub fn enchant_with(mut self, ench: Enchantment, level: u32, ignore_level_restriction: bool) -> Self {
    self.edit(|m| {
      m.add_enchant(ench, level, ignore_level_restriction);
    });
    self
  }
  /// Adds all the given enchantments.
  pub fn enchants(
    self,
    enchants: impl IntoIterator<Item = (Enchantment, u32)>,
    ignore_level_restriction: bool,
  ) -> Self {
    enchants
      .into_iter()
      .fold(self, |b, (ench, level)| b.enchant_with(ench, level, ignore_level_restriction))
  }
  pub fn disenchant(mut self, ench: Enchantment) -> Self {
    self.edit(|m| {
      m.remove_enchant(ench);
    });
    self
  }

  pub fn flags(mut self, flags: impl IntoIterator<Item = ItemFlag>) -> Self {
    self.edit(|m| m.add_flags(flags));
    self
  }

  /// Makes the item unbreakable.
  pub fn unbreakable(self) -> Result<Self, ItemError> { self.set_unbreakable(true) }
  /// Sets if the item is unbreakable. Hosts older than 1.11 only understand a
  /// raw nbt tag, so on those this needs a [`plugin`](Self::plugin).
  pub fn set_unbreakable(mut self, unbreakable: bool) -> Result<Self, ItemError> {
    if self.features.uses_legacy_unbreakable {
      return self.set_nbt_bool(UNBREAKABLE_TAG, unbreakable);
    }
    self.edit(|m| m.set_unbreakable(unbreakable));
    Ok(self)
  }

  /// Makes the item glow, by adding an enchantment and hiding it.
  pub fn glow(self) -> Self { self.set_glow(true) }
  /// Adds or removes the glow. Removing the glow removes every enchantment on
  /// the item, not just the one [`glow`](Self::glow) added.
  pub fn set_glow(mut self, glow: bool) -> Self {
    self.edit(|m| {
      if glow {
        m.add_enchant(Enchantment::Lure, 1, false);
        m.add_flags([ItemFlag::HideEnchants]);
      } else {
        let all: Vec<_> = m.enchants().keys().copied().collect();
        for ench in all {
          m.remove_enchant(ench);
        }
      }
    });
    self
  }

  /// Gives `f` access to the persistent data of the item.
  pub fn pdc(mut self, f: impl FnOnce(&mut PersistentDataContainer)) -> Self {
    self.edit(|m| f(m.pdc_mut()));
    self
  }
  /// Stores a single typed value in the persistent data.
  pub fn persistent_tag<T: PersistentDataType>(
    mut self,
    key: NamespacedKey,
    ty: T,
    value: T::Value,
  ) -> Self {
    self.sync(|item| mutate::add_persistent_tag(item, key, ty, value));
    self
  }

  /// Sets the custom model data. This does nothing on hosts older than 1.13.
  pub fn model(mut self, data: i32) -> Self {
    if self.features.supports_custom_model {
      self.edit(|m| m.set_custom_model_data(Some(data)));
    } else {
      debug!("custom model data is not supported on {}, ignoring", self.features.version);
    }
    self
  }

  /// Dyes leather armor, potions, and filled maps. Anything else is left
  /// alone.
  pub fn color(mut self, color: Color) -> Self {
    if self.item.material().is_colorable() {
      self.edit(|m| {
        m.set_color(color);
      });
    } else {
      trace!("{} cannot be colored, ignoring {color}", self.item.material());
    }
    self
  }

  fn nbt_plugin(&self, op: &'static str) -> Result<Plugin, ItemError> {
    self.plugin.clone().ok_or(ItemError::MissingPlugin(op))
  }
  fn apply_nbt(
    &mut self,
    f: impl FnOnce(&dyn NbtService, ItemStack) -> Result<ItemStack, ItemError>,
  ) -> Result<(), ItemError> {
    let nbt = self.nbt.clone();
    self.item.set_meta(self.meta.clone());
    let item = f(nbt.as_ref(), self.item.clone())?;
    self.meta = item.meta();
    self.item = item;
    Ok(())
  }

  /// Sets a raw string tag, namespaced by the plugin.
  pub fn set_nbt(mut self, key: &str, value: &str) -> Result<Self, ItemError> {
    let plugin = self.nbt_plugin("set_nbt")?;
    self.apply_nbt(|nbt, item| nbt.set_string(&plugin, item, key, value))?;
    Ok(self)
  }
  /// Sets a raw boolean tag, namespaced by the plugin.
  pub fn set_nbt_bool(mut self, key: &str, value: bool) -> Result<Self, ItemError> {
    let plugin = self.nbt_plugin("set_nbt")?;
    self.apply_nbt(|nbt, item| nbt.set_boolean(&plugin, item, key, value))?;
    Ok(self)
  }
  pub fn remove_nbt(mut self, key: &str) -> Result<Self, ItemError> {
    let plugin = self.nbt_plugin("remove_nbt")?;
    self.apply_nbt(|nbt, item| nbt.remove_tag(&plugin, item, key))?;
    Ok(self)
  }

  /// Sets the display name. Formatting codes are translated.
  pub fn set_name(mut self, name: &str) -> Self {
    let name = self.translate(name);
    self.edit(|m| m.set_display_name(Some(name)));
    self
  }
  /// Appends lines of lore. Formatting codes are translated.
  pub fn add_lore<S: AsRef<str>>(mut self, lines: impl IntoIterator<Item = S>) -> Self {
    let lines: Vec<_> = lines.into_iter().map(|l| self.translate(l.as_ref())).collect();
    self.sync(|item| mutate::add_lore_lines(item, lines));
    self
  }
  /// Replaces the lore. Formatting codes are translated.
  pub fn set_lore<S: AsRef<str>>(mut self, lines: impl IntoIterator<Item = S>) -> Self {
    let lines: Vec<_> = lines.into_iter().map(|l| self.translate(l.as_ref())).collect();
    self.edit(|m| m.set_lore(Some(lines)));
    self
  }
  /// Removes the first line of lore equal to `line`. The line is compared
  /// as-is, so it must contain `§` codes, not the color marker.
  pub fn remove_lore(mut self, line: &str) -> Self {
    self.sync(|item| mutate::remove_lore_line(item, line));
    self
  }
  pub fn remove_lore_at(mut self, index: usize) -> Result<Self, ItemError> {
    self.sync(|item| mutate::remove_lore_line_at(item, index))?;
    Ok(self)
  }

  pub fn attribute(mut self, attr: Attribute, modifier: AttributeModifier) -> Self {
    self.sync(|item| mutate::add_attribute_modifier(item, attr, modifier));
    self
  }
  /// Adds a modifier named after the attribute, with a random id.
  pub fn attribute_with(
    mut self,
    attr: Attribute,
    amount: f64,
    operation: Operation,
    slot: Option<EquipmentSlot>,
  ) -> Self {
    self.sync(|item| match slot {
      Some(slot) => mutate::add_attribute_in_slot(item, attr, amount, operation, slot),
      None => mutate::add_attribute(item, attr, amount, operation),
    });
    self
  }

  /// Adds damage to the item. See [`mutate::apply_damage`].
  pub fn damage(mut self, amount: i32) -> Result<Self, ItemError> {
    let features = self.features;
    self.sync(|item| mutate::apply_damage(item, amount, &features))?;
    Ok(self)
  }
  /// Sets the legacy durability short directly.
  pub fn durability(mut self, durability: i16) -> Self {
    self.item.set_durability(durability);
    self
  }

  /// Returns the finished item. The builder is left as-is, so calling this
  /// again returns an identical item.
  pub fn build(&self) -> ItemStack {
    let mut item = self.item.clone();
    item.set_meta(self.meta.clone());
    debug!("built {} x{} with {}", item.material(), item.amount(), K::NAME);
    item
  }
}
