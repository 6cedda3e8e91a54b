//! Single field edits on an [`ItemStack`]. Each of these copies the meta out of
//! the item, changes one thing, and writes it back.
//!
//! Air has no meta, so everything in here does nothing to air.

use crate::{
  attribute::{Attribute, AttributeModifier, EquipmentSlot, Operation},
  item::{ItemFlag, ItemMeta, ItemStack, NamespacedKey, PersistentDataType},
  Enchantment, ItemError,
};
use ib_common::FeatureFlags;

/// Copies the meta out, runs `f`, and writes it back. Returns `None` if the
/// item has no meta.
fn edit<R>(item: &mut ItemStack, f: impl FnOnce(&mut ItemMeta) -> R) -> Option<R> {
  let mut meta = item.meta()?;
  let out = f(&mut meta);
  item.set_meta(Some(meta));
  Some(out)
}

fn lore_of(meta: &ItemMeta) -> Vec<String> { meta.lore().map(<[String]>::to_vec).unwrap_or_default() }

/// Sets the display name.
pub fn rename(item: &mut ItemStack, name: impl Into<String>) {
  let name = name.into();
  if edit(item, |m| m.set_display_name(Some(name))).is_none() {
    trace!("not renaming {}, as it has no meta", item.material());
  }
}
/// The same as [`rename`].
pub fn set_name(item: &mut ItemStack, name: impl Into<String>) { rename(item, name) }

/// Replaces the lore.
pub fn set_lore<S: Into<String>>(item: &mut ItemStack, lore: impl IntoIterator<Item = S>) {
  let lore = lore.into_iter().map(Into::into).collect();
  edit(item, |m| m.set_lore(Some(lore)));
}

/// Appends a line of lore, creating the lore if the item has none.
pub fn add_lore(item: &mut ItemStack, line: impl Into<String>) {
  let line = line.into();
  edit(item, |m| {
    let mut lore = lore_of(m);
    lore.push(line);
    m.set_lore(Some(lore));
  });
}

/// Appends all the given lines of lore.
pub fn add_lore_lines<S: Into<String>>(item: &mut ItemStack, lines: impl IntoIterator<Item = S>) {
  edit(item, |m| {
    let mut lore = lore_of(m);
    lore.extend(lines.into_iter().map(Into::into));
    m.set_lore(Some(lore));
  });
}

/// Removes the first line of lore that matches `line` exactly. Does nothing
/// if there is no such line.
pub fn remove_lore_line(item: &mut ItemStack, line: &str) {
  edit(item, |m| {
    let mut lore = lore_of(m);
    if let Some(idx) = lore.iter().position(|l| l == line) {
      lore.remove(idx);
      m.set_lore(Some(lore));
    }
  });
}

/// Removes the line of lore at `index`. This fails if there is no line at
/// that index.
pub fn remove_lore_line_at(item: &mut ItemStack, index: usize) -> Result<(), ItemError> {
  let mut meta = match item.meta() {
    Some(meta) => meta,
    None => return Ok(()),
  };
  let mut lore = lore_of(&meta);
  if index >= lore.len() {
    return Err(ItemError::IndexOutOfRange { index, len: lore.len() });
  }
  lore.remove(index);
  meta.set_lore(Some(lore));
  item.set_meta(Some(meta));
  Ok(())
}

/// Sets the level of an enchantment, ignoring the usual level limits. A level
/// of 0 removes the enchantment.
pub fn add_enchant(item: &mut ItemStack, ench: Enchantment, level: u32) {
  edit(item, |m| {
    if level == 0 {
      m.remove_enchant(ench);
    } else {
      m.add_enchant(ench, level, true);
    }
  });
}

pub fn add_attribute_modifier(item: &mut ItemStack, attr: Attribute, modifier: AttributeModifier) {
  edit(item, |m| m.add_attribute_modifier(attr, modifier));
}

/// Adds a modifier named after the attribute, with a new random id.
pub fn add_attribute(item: &mut ItemStack, attr: Attribute, amount: f64, operation: Operation) {
  add_attribute_modifier(item, attr, AttributeModifier::new(attr.to_string(), amount, operation));
}

/// Adds a modifier named after the attribute, with a new random id, that is
/// only active in the given slot.
pub fn add_attribute_in_slot(
  item: &mut ItemStack,
  attr: Attribute,
  amount: f64,
  operation: Operation,
  slot: EquipmentSlot,
) {
  add_attribute_modifier(
    item,
    attr,
    AttributeModifier::in_slot(attr.to_string(), amount, operation, slot),
  );
}

pub fn add_flags(item: &mut ItemStack, flags: impl IntoIterator<Item = ItemFlag>) {
  edit(item, |m| m.add_flags(flags));
}

pub fn set_custom_model_data(item: &mut ItemStack, data: i32) {
  edit(item, |m| m.set_custom_model_data(Some(data)));
}

/// Stores a typed value in the item's persistent data.
pub fn add_persistent_tag<T: PersistentDataType>(
  item: &mut ItemStack,
  key: NamespacedKey,
  ty: T,
  value: T::Value,
) {
  edit(item, |m| m.pdc_mut().set(key, ty, value));
}

/// Returns an unbreakable copy of the item. Unlike everything else in this
/// module, the given item is left alone.
pub fn set_unbreakable(item: &ItemStack) -> ItemStack {
  let mut item = item.clone();
  edit(&mut item, |m| m.set_unbreakable(true));
  item
}

/// Damages the item. On hosts that store damage in the meta, this fails if
/// the item cannot be damaged. Older hosts just add to the durability short.
pub fn apply_damage(
  item: &mut ItemStack,
  amount: i32,
  features: &FeatureFlags,
) -> Result<(), ItemError> {
  if features.supports_damage_field {
    let material = item.material();
    let mut meta = match item.meta() {
      Some(meta) if meta.is_damageable() => meta,
      _ => return Err(ItemError::MissingCapability { material, capability: "damage" }),
    };
    let damage = meta.damage().unwrap_or(0).wrapping_add(amount);
    meta.set_damage(damage);
    item.set_meta(Some(meta));
  } else {
    item.set_durability(item.durability().wrapping_add(amount as i16));
  }
  Ok(())
}
