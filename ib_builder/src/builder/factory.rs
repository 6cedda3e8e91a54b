//! Entry points for creating builders. An [`ItemFactory`] is created once, when
//! the plugin starts, and holds everything each builder needs to know about
//! the host.

use super::{
  BannerBuilder, BookBuilder, BuilderKind, FireworkBuilder, ItemBuilder, MapBuilder, PlainBuilder,
  PotionBuilder, SkullBuilder,
};
use crate::{
  item::{ItemStack, Material},
  ItemError,
};
use ib_common::{Config, FeatureFlags, VersionSource};

#[derive(Clone, Debug)]
pub struct ItemFactory {
  features: FeatureFlags,
  config:   Config,
}

/// A builder of any kind. Returned from [`ItemFactory::select`], when the kind
/// isn't known until runtime.
#[derive(Debug)]
pub enum AnyBuilder {
  Plain(PlainBuilder),
  Potion(PotionBuilder),
  Banner(BannerBuilder),
  Book(BookBuilder),
  Firework(FireworkBuilder),
  Map(MapBuilder),
  Skull(SkullBuilder),
}

impl AnyBuilder {
  pub fn build(&self) -> ItemStack {
    match self {
      Self::Plain(b) => b.build(),
      Self::Potion(b) => b.build(),
      Self::Banner(b) => b.build(),
      Self::Book(b) => b.build(),
      Self::Firework(b) => b.build(),
      Self::Map(b) => b.build(),
      Self::Skull(b) => b.build(),
    }
  }

  pub fn material(&self) -> Material {
    match self {
      Self::Plain(b) => b.material(),
      Self::Potion(b) => b.material(),
      Self::Banner(b) => b.material(),
      Self::Book(b) => b.material(),
      Self::Firework(b) => b.material(),
      Self::Map(b) => b.material(),
      Self::Skull(b) => b.material(),
    }
  }
}

impl ItemFactory {
  pub fn new(features: FeatureFlags, config: Config) -> Self { ItemFactory { features, config } }

  /// Detects the host version (or uses the one in the config), and creates a
  /// factory from that.
  pub fn detect(config: Config, host: impl VersionSource) -> Result<Self, ItemError> {
    let features = config.features(host)?;
    Ok(ItemFactory::new(features, config))
  }

  pub fn features(&self) -> &FeatureFlags { &self.features }
  pub fn config(&self) -> &Config { &self.config }

  fn fresh<K: BuilderKind>(&self, material: Material) -> ItemBuilder<K> {
    ItemBuilder::new(ItemStack::new(material), self.features).config(&self.config)
  }
  fn wrap<K: BuilderKind>(&self, stack: ItemStack) -> Result<ItemBuilder<K>, ItemError> {
    Ok(ItemBuilder::from_stack(stack, self.features)?.config(&self.config))
  }

  /// A plain builder around one item of the given material. Any material works
  /// here, even ones with special meta.
  pub fn from_material(&self, material: Material) -> PlainBuilder { self.fresh(material) }
  pub fn from_stack(&self, stack: ItemStack) -> Result<PlainBuilder, ItemError> { self.wrap(stack) }

  /// A white banner.
  pub fn banner(&self) -> BannerBuilder { self.fresh(Material::WhiteBanner) }
  pub fn banner_from(&self, stack: ItemStack) -> Result<BannerBuilder, ItemError> {
    self.wrap(stack)
  }

  pub fn book(&self, stack: ItemStack) -> Result<BookBuilder, ItemError> { self.wrap(stack) }

  /// A firework rocket.
  pub fn firework(&self) -> FireworkBuilder { self.fresh(Material::FireworkRocket) }
  pub fn firework_from(&self, stack: ItemStack) -> Result<FireworkBuilder, ItemError> {
    self.wrap(stack)
  }
  /// A firework star.
  pub fn star(&self) -> FireworkBuilder { self.fresh(Material::FireworkStar) }
  pub fn star_from(&self, stack: ItemStack) -> Result<FireworkBuilder, ItemError> {
    self.wrap(stack)
  }

  /// A filled map.
  pub fn map(&self) -> MapBuilder { self.fresh(Material::FilledMap) }
  pub fn map_from(&self, stack: ItemStack) -> Result<MapBuilder, ItemError> { self.wrap(stack) }

  pub fn skull(&self) -> SkullBuilder { self.fresh(Material::PlayerHead) }
  pub fn skull_from(&self, stack: ItemStack) -> Result<SkullBuilder, ItemError> {
    self.wrap(stack)
  }

  pub fn potion(&self) -> PotionBuilder { self.fresh(Material::Potion) }
  pub fn potion_from(&self, stack: ItemStack) -> Result<PotionBuilder, ItemError> {
    self.wrap(stack)
  }

  /// Picks the builder that matches the stack's material. Materials without
  /// special meta get a plain builder.
  pub fn select(&self, stack: ItemStack) -> Result<AnyBuilder, ItemError> {
    let m = stack.material();
    Ok(if m.is_potion() {
      AnyBuilder::Potion(self.wrap(stack)?)
    } else if m.is_banner() {
      AnyBuilder::Banner(self.wrap(stack)?)
    } else if m.is_book() {
      AnyBuilder::Book(self.wrap(stack)?)
    } else if m.is_firework() {
      AnyBuilder::Firework(self.wrap(stack)?)
    } else if m.is_map() {
      AnyBuilder::Map(self.wrap(stack)?)
    } else if m.is_skull() {
      AnyBuilder::Skull(self.wrap(stack)?)
    } else {
      AnyBuilder::Plain(self.wrap(stack)?)
    })
  }
}
