//! The owning plugin, and the nbt service that writes raw tags on its behalf.

use crate::{
  item::{meta::pdc, ItemStack, NamespacedKey},
  ItemError,
};
use std::fmt;

/// The plugin that is building an item. Raw nbt tags are always namespaced by
/// the plugin that wrote them.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Plugin {
  name: String,
}

impl Plugin {
  pub fn new(name: impl Into<String>) -> Self { Plugin { name: name.into() } }

  pub fn name(&self) -> &str { &self.name }
  /// The namespace for this plugin's keys. This is the lowercase name.
  pub fn namespace(&self) -> String { self.name.to_lowercase() }

  /// Creates a key owned by this plugin. The key is lowercased, so `Kills`
  /// and `kills` are the same tag.
  pub fn key(&self, key: &str) -> Result<NamespacedKey, ItemError> {
    NamespacedKey::new(self.namespace(), key.to_lowercase())
  }
}

impl fmt::Display for Plugin {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { write!(f, "{}", self.name) }
}

/// Writes raw tags onto an item. Every call takes the item by value, and
/// returns the item with the tag applied, as the host may need to replace the
/// item entirely.
pub trait NbtService: fmt::Debug {
  fn set_string(
    &self,
    plugin: &Plugin,
    item: ItemStack,
    key: &str,
    value: &str,
  ) -> Result<ItemStack, ItemError>;
  fn set_boolean(
    &self,
    plugin: &Plugin,
    item: ItemStack,
    key: &str,
    value: bool,
  ) -> Result<ItemStack, ItemError>;
  fn remove_tag(&self, plugin: &Plugin, item: ItemStack, key: &str)
    -> Result<ItemStack, ItemError>;
}

/// The default nbt service. This stores tags in the item's persistent data,
/// under `plugin:key`. Items without meta (air) are returned unchanged.
#[derive(Clone, Copy, Debug, Default)]
pub struct PersistentNbt;

impl PersistentNbt {
  fn edit(
    &self,
    mut item: ItemStack,
    f: impl FnOnce(&mut pdc::PersistentDataContainer),
  ) -> ItemStack {
    if let Some(mut meta) = item.meta() {
      f(meta.pdc_mut());
      item.set_meta(Some(meta));
    }
    item
  }
}

impl NbtService for PersistentNbt {
  fn set_string(
    &self,
    plugin: &Plugin,
    item: ItemStack,
    key: &str,
    value: &str,
  ) -> Result<ItemStack, ItemError> {
    let key = plugin.key(key)?;
    trace!("setting nbt {key} = {value:?}");
    Ok(self.edit(item, |pdc| pdc.set(key, pdc::Str, value.to_string())))
  }
  fn set_boolean(
    &self,
    plugin: &Plugin,
    item: ItemStack,
    key: &str,
    value: bool,
  ) -> Result<ItemStack, ItemError> {
    let key = plugin.key(key)?;
    trace!("setting nbt {key} = {value}");
    Ok(self.edit(item, |pdc| pdc.set(key, pdc::Bool, value)))
  }
  fn remove_tag(
    &self,
    plugin: &Plugin,
    item: ItemStack,
    key: &str,
  ) -> Result<ItemStack, ItemError> {
    let key = plugin.key(key)?;
    trace!("removing nbt {key}");
    Ok(self.edit(item, |pdc| {
      pdc.remove(&key);
    }))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::item::Material;

  #[test]
  fn keys() {
    let plugin = Plugin::new("MyPlugin");
    assert_eq!(plugin.namespace(), "myplugin");
    assert_eq!(plugin.key("Unbreakable").unwrap().to_string(), "myplugin:unbreakable");
    assert!(Plugin::new("My Plugin").key("a").is_err());
  }

  #[test]
  fn persistent_nbt() {
    let plugin = Plugin::new("MyPlugin");
    let nbt = PersistentNbt;
    let item = ItemStack::new(Material::Stick);
    let item = nbt.set_string(&plugin, item, "owner", "macmv").unwrap();
    let item = nbt.set_boolean(&plugin, item, "Soulbound", true).unwrap();

    let meta = item.meta().unwrap();
    let owner = plugin.key("owner").unwrap();
    let soulbound = plugin.key("soulbound").unwrap();
    assert_eq!(meta.pdc().get(&owner, pdc::Str), Some("macmv".to_string()));
    assert_eq!(meta.pdc().get(&soulbound, pdc::Bool), Some(true));

    let item = nbt.remove_tag(&plugin, item, "owner").unwrap();
    assert!(!item.meta().unwrap().pdc().has(&owner, pdc::Str));

    let air = nbt.set_string(&plugin, ItemStack::empty(), "owner", "macmv").unwrap();
    assert_eq!(air, ItemStack::empty());
  }
}
