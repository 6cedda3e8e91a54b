use super::{ItemBuilder, Map};
use crate::item::{meta::MapMeta, MetaKind};

impl ItemBuilder<Map> {
  fn map_meta(&mut self, f: impl FnOnce(&mut MapMeta)) {
    self.edit(|m| {
      if let MetaKind::Map(map) = m.kind_mut() {
        f(map)
      }
    });
  }

  pub fn location_name(mut self, name: &str) -> Self {
    let name = name.to_string();
    self.map_meta(|m| m.location_name = Some(name));
    self
  }
  pub fn scaling(mut self, scaling: bool) -> Self {
    self.map_meta(|m| m.scaling = scaling);
    self
  }
  /// Sets which map view this item shows.
  pub fn map_id(mut self, id: i32) -> Self {
    self.map_meta(|m| m.map_id = Some(id));
    self
  }
}
