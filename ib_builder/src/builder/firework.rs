use super::{Firework, ItemBuilder};
use crate::{
  item::{meta::FireworkEffect, MetaKind},
  ItemError,
};

impl ItemBuilder<Firework> {
  /// Adds an effect. Rockets can have any number of effects, so this appends
  /// to a rocket. Stars only have one, so this replaces a star's effect.
  pub fn effect(self, effect: FireworkEffect) -> Self { self.effects([effect]) }
  pub fn effects(mut self, effects: impl IntoIterator<Item = FireworkEffect>) -> Self {
    self.edit(|m| match m.kind_mut() {
      MetaKind::Firework(f) => {
        for e in effects {
          f.add_effect(e);
        }
      }
      MetaKind::FireworkStar(s) => {
        if let Some(e) = effects.into_iter().last() {
          s.effect = Some(e);
        }
      }
      _ => {}
    });
    self
  }

  /// Sets how long a rocket flies for. This must be within `0..=127`. Stars
  /// don't fly, so this does nothing for a star.
  pub fn power(mut self, power: i32) -> Result<Self, ItemError> {
    if let Some(m) = &mut self.meta {
      match m.kind_mut() {
        MetaKind::Firework(f) => f.set_power(power)?,
        _ => trace!("{} has no power, ignoring", self.item.material()),
      }
    }
    Ok(self)
  }
}
