use super::{ItemMeta, Material};
use std::num::NonZeroU8;

/// A stack of items. This is the host's item value: a material, an amount,
/// the legacy durability short, and the meta.
///
/// The meta is only ever handed out as a copy. To change it, get a copy with
/// [`meta`](Self::meta), change that, and write it back with
/// [`set_meta`](Self::set_meta).
#[derive(Clone, Debug, PartialEq)]
pub struct ItemStack {
  material:   Material,
  amount:     NonZeroU8,
  durability: i16,
  meta:       Option<ItemMeta>,
}

// This is required for `ItemStack::empty` to be `const`.
//
// SAFETY: The value must not be zero, so using `1` is safe.
const ONE: NonZeroU8 = unsafe { NonZeroU8::new_unchecked(1) };

impl Default for ItemStack {
  fn default() -> Self { ItemStack::empty() }
}

impl ItemStack {
  /// Creates an empty item stack. This has the type set to air, and the count
  /// set to 0.
  pub const fn empty() -> Self {
    ItemStack { material: Material::Air, amount: ONE, durability: 0, meta: None }
  }
  /// Creates an item stack containing a single item with the given type, and
  /// empty meta.
  pub fn new(material: Material) -> Self {
    ItemStack { material, amount: ONE, durability: 0, meta: ItemMeta::for_material(material) }
  }

  /// Sets the amount in self, and returns the modified self. If the stack is
  /// air, this will do nothing.
  pub fn with_amount(mut self, amount: u8) -> Self {
    self.set_amount(amount);
    self
  }
  /// Sets the amount in the item stack. An amount of zero turns this stack
  /// into air. If the stack is air, this will do nothing.
  pub fn set_amount(&mut self, amount: u8) {
    match NonZeroU8::new(amount) {
      None => *self = ItemStack::empty(),
      Some(amount) if !self.material.is_air() => self.amount = amount,
      Some(_) => {}
    }
  }

  /// Returns the number of items in this item stack.
  pub fn amount(&self) -> u8 {
    if self.material.is_air() {
      0
    } else {
      self.amount.get()
    }
  }
  pub fn material(&self) -> Material { self.material }

  /// Returns true if this item stack is considered "empty". This is true
  /// whenever the type is Air.
  pub fn is_empty(&self) -> bool { self.material.is_air() }

  /// The legacy damage value. Modern hosts store damage in the meta instead.
  pub fn durability(&self) -> i16 { self.durability }
  pub fn set_durability(&mut self, durability: i16) { self.durability = durability; }

  /// Returns a copy of this item's meta. Air has no meta, so this returns
  /// `None` for air.
  pub fn meta(&self) -> Option<ItemMeta> { self.meta.clone() }
  /// Borrows the meta without copying it.
  pub fn meta_ref(&self) -> Option<&ItemMeta> { self.meta.as_ref() }
  pub fn has_meta(&self) -> bool { self.meta.is_some() }
  /// Writes the given meta back into this item. Returns false (and drops the
  /// meta) if this item is air.
  pub fn set_meta(&mut self, meta: Option<ItemMeta>) -> bool {
    if self.material.is_air() {
      self.meta = None;
      return meta.is_none();
    }
    self.meta = meta.or_else(|| ItemMeta::for_material(self.material));
    true
  }
}
