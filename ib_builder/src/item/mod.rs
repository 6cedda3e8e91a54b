//! The item model. These are the host's item types: an [`ItemStack`] holds a
//! [`Material`], an amount, and a copy of its [`ItemMeta`].

mod flag;
mod material;
pub mod meta;
mod stack;

pub use flag::ItemFlag;
pub use material::{Material, BANNERS, BOOKS, FIREWORKS, LEATHER_ARMOR, MAPS, POTIONS, SKULLS};
pub use meta::{ItemMeta, MetaKind, NamespacedKey, PersistentDataContainer, PersistentDataType};
pub use stack::ItemStack;
