//! Persistent data. Plugins can store arbitrary typed values on an item, keyed
//! by a [`NamespacedKey`]. The host saves these with the item, and never looks
//! at them.
//!
//! Values are stored as nbt [`Tag`]s. A [`PersistentDataType`] describes how a
//! rust value is converted to and from a tag, so reading a value with the
//! wrong type gives `None` instead of garbage.

use crate::ItemError;
use ib_common::nbt::Tag;
use std::{collections::BTreeMap, fmt, str::FromStr};

/// A key like `myplugin:kills`. Namespaces may only contain `a-z0-9._-`, and
/// keys may additionally contain `/`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NamespacedKey {
  namespace: String,
  key:       String,
}

fn valid_namespace_char(c: char) -> bool {
  matches!(c, 'a'..='z' | '0'..='9' | '.' | '_' | '-')
}
fn valid_key_char(c: char) -> bool { valid_namespace_char(c) || c == '/' }

impl NamespacedKey {
  pub fn new(namespace: impl Into<String>, key: impl Into<String>) -> Result<Self, ItemError> {
    let namespace = namespace.into();
    let key = key.into();
    if namespace.is_empty()
      || key.is_empty()
      || !namespace.chars().all(valid_namespace_char)
      || !key.chars().all(valid_key_char)
    {
      return Err(ItemError::InvalidKey(format!("{namespace}:{key}")));
    }
    Ok(NamespacedKey { namespace, key })
  }

  /// Creates a key in the `minecraft` namespace.
  pub fn minecraft(key: impl Into<String>) -> Result<Self, ItemError> {
    NamespacedKey::new("minecraft", key)
  }

  pub fn namespace(&self) -> &str { &self.namespace }
  pub fn key(&self) -> &str { &self.key }
}

impl fmt::Display for NamespacedKey {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { write!(f, "{}:{}", self.namespace, self.key) }
}

impl FromStr for NamespacedKey {
  type Err = ItemError;

  /// Parses `namespace:key`. A missing namespace means `minecraft`.
  fn from_str(s: &str) -> Result<Self, ItemError> {
    match s.split_once(':') {
      Some((namespace, key)) => NamespacedKey::new(namespace, key),
      None => NamespacedKey::minecraft(s),
    }
  }
}

/// Converts between a rust value and the tag it is stored as.
pub trait PersistentDataType {
  type Value;

  fn to_tag(&self, value: Self::Value) -> Tag;
  fn from_tag(&self, tag: &Tag) -> Option<Self::Value>;
}

macro_rules! data_type {
  ($(#[$meta:meta])* $name:ident, $value:ty, $variant:ident, $getter:ident) => {
    $(#[$meta])*
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct $name;

    impl PersistentDataType for $name {
      type Value = $value;

      fn to_tag(&self, value: $value) -> Tag { Tag::$variant(value) }
      fn from_tag(&self, tag: &Tag) -> Option<$value> { tag.$getter() }
    }
  };
}

data_type!(Byte, i8, Byte, as_byte);
data_type!(Short, i16, Short, as_short);
data_type!(Int, i32, Int, as_int);
data_type!(Long, i64, Long, as_long);
data_type!(Float, f32, Float, as_float);
data_type!(Double, f64, Double, as_double);
data_type!(ByteArray, Vec<u8>, ByteArr, as_byte_arr);
data_type!(IntArray, Vec<i32>, IntArray, as_int_arr);
data_type!(LongArray, Vec<i64>, LongArray, as_long_arr);

/// A string value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Str;

impl PersistentDataType for Str {
  type Value = String;

  fn to_tag(&self, value: String) -> Tag { Tag::String(value) }
  fn from_tag(&self, tag: &Tag) -> Option<String> { tag.as_str().map(|s| s.to_string()) }
}

/// A boolean, stored as a byte (`1` or `0`) like the host does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bool;

impl PersistentDataType for Bool {
  type Value = bool;

  fn to_tag(&self, value: bool) -> Tag { Tag::Byte(value as i8) }
  fn from_tag(&self, tag: &Tag) -> Option<bool> { tag.as_byte().map(|v| v != 0) }
}

/// Stores typed values under namespaced keys.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PersistentDataContainer {
  values: BTreeMap<NamespacedKey, Tag>,
}

impl PersistentDataContainer {
  pub fn new() -> Self { PersistentDataContainer::default() }

  /// Stores the value, replacing anything already at `key`.
  pub fn set<T: PersistentDataType>(&mut self, key: NamespacedKey, ty: T, value: T::Value) {
    self.values.insert(key, ty.to_tag(value));
  }
  /// Returns the value at `key`. If there is nothing there, or the stored
  /// value has a different type, this returns `None`.
  pub fn get<T: PersistentDataType>(&self, key: &NamespacedKey, ty: T) -> Option<T::Value> {
    self.values.get(key).and_then(|tag| ty.from_tag(tag))
  }
  /// Returns true if there is a value at `key` with the given type.
  pub fn has<T: PersistentDataType>(&self, key: &NamespacedKey, ty: T) -> bool {
    self.get(key, ty).is_some()
  }
  /// Returns the raw tag at `key`.
  pub fn get_tag(&self, key: &NamespacedKey) -> Option<&Tag> { self.values.get(key) }
  /// Removes the value at `key`, and returns it if there was one.
  pub fn remove(&mut self, key: &NamespacedKey) -> Option<Tag> { self.values.remove(key) }

  pub fn keys(&self) -> impl Iterator<Item = &NamespacedKey> { self.values.keys() }
  pub fn len(&self) -> usize { self.values.len() }
  pub fn is_empty(&self) -> bool { self.values.is_empty() }
}
