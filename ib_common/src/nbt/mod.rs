use std::collections::HashMap;

/// This is a single nbt tag. It does not contain a name, but has the actual
/// data for any of the nbt tags. Persistent item data is stored as tags, so
/// that anything the host can save, the builders can write.
#[derive(Debug, Clone, PartialEq)]
pub enum Tag {
  End,
  Byte(i8),
  Short(i16),
  Int(i32),
  Long(i64),
  Float(f32),
  Double(f64),
  ByteArr(Vec<u8>),
  String(String),
  List(Vec<Tag>),                 // All elements must be the same type, and un-named.
  Compound(HashMap<String, Tag>), // Types can be any kind, and are named. Order is not defined.
  IntArray(Vec<i32>),
  LongArray(Vec<i64>),
}

macro_rules! as_tag {
  ($name:ident, $variant:ident, $ty:ty) => {
    /// Returns the inner value, if this tag has the matching type.
    pub fn $name(&self) -> Option<$ty> {
      match self {
        Self::$variant(v) => Some(v.clone()),
        _ => None,
      }
    }
  };
}

impl Tag {
  as_tag!(as_byte, Byte, i8);
  as_tag!(as_short, Short, i16);
  as_tag!(as_int, Int, i32);
  as_tag!(as_long, Long, i64);
  as_tag!(as_float, Float, f32);
  as_tag!(as_double, Double, f64);
  as_tag!(as_byte_arr, ByteArr, Vec<u8>);
  as_tag!(as_int_arr, IntArray, Vec<i32>);
  as_tag!(as_long_arr, LongArray, Vec<i64>);

  pub fn as_str(&self) -> Option<&str> {
    match self {
      Self::String(v) => Some(v),
      _ => None,
    }
  }
}
