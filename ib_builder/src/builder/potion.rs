use super::{ItemBuilder, Potion};
use crate::item::{
  meta::{PotionData, PotionEffect, PotionMeta},
  MetaKind,
};

impl ItemBuilder<Potion> {
  fn potion_meta(&mut self, f: impl FnOnce(&mut PotionMeta)) {
    self.edit(|m| {
      if let MetaKind::Potion(p) = m.kind_mut() {
        f(p)
      }
    });
  }

  /// Sets the base potion, like `Swiftness II`.
  pub fn data(mut self, data: PotionData) -> Self {
    self.potion_meta(|p| p.base = data);
    self
  }

  /// Adds a custom effect. If the potion already has an effect of the same
  /// type, it is only replaced when `overwrite` is set.
  pub fn custom_effect(mut self, effect: PotionEffect, overwrite: bool) -> Self {
    self.potion_meta(|p| {
      p.add_custom_effect(effect, overwrite);
    });
    self
  }

  pub fn clear_custom_effects(mut self) -> Self {
    self.potion_meta(|p| p.custom_effects.clear());
    self
  }
}
