use super::{ItemBuilder, Skull};
use crate::item::{
  meta::{SkullMeta, SkullOwner},
  MetaKind,
};
use ib_common::util::UUID;

impl ItemBuilder<Skull> {
  fn skull_meta(&mut self, f: impl FnOnce(&mut SkullMeta)) {
    self.edit(|m| {
      if let MetaKind::Skull(s) = m.kind_mut() {
        f(s)
      }
    });
  }

  /// Sets the owner by player name.
  pub fn owner(mut self, name: &str) -> Self {
    let owner = SkullOwner::Name(name.to_string());
    self.skull_meta(|s| s.owner = Some(owner));
    self
  }
  pub fn owner_uuid(mut self, id: UUID) -> Self {
    self.skull_meta(|s| s.owner = Some(SkullOwner::Uuid(id)));
    self
  }
  /// Sets the skin directly. This is the base64 `textures` property, as found
  /// in a player's profile.
  pub fn texture(mut self, value: &str) -> Self {
    let value = value.to_string();
    self.skull_meta(|s| s.texture = Some(value));
    self
  }
}
