//! Fluent builders for items.
//!
//! Start with an [`ItemFactory`](builder::ItemFactory), which knows the host
//! version and config, and use it to create builders:
//!
//! ```
//! use ib_builder::{builder::ItemFactory, item::Material};
//! use ib_common::{Config, FeatureFlags};
//!
//! let factory = ItemFactory::new(FeatureFlags::modern(), Config::default());
//! let item = factory.from_material(Material::Apple).amount(16).set_name("&cSnack").build();
//! assert_eq!(item.amount(), 16);
//! ```
//!
//! For single edits on an existing item, see the [`mutate`] module.

#[macro_use]
extern crate log;

pub mod attribute;
pub mod builder;
mod enchantment;
mod error;
pub mod item;
pub mod mutate;
mod plugin;

pub use attribute::{Attribute, AttributeModifier, EquipmentSlot, Operation};
pub use enchantment::Enchantment;
pub use error::{ErrorKind, ItemError};
pub use plugin::{NbtService, PersistentNbt, Plugin};
