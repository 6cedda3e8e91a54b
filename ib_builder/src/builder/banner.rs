use super::{Banner, ItemBuilder};
use crate::{
  item::{
    meta::{BannerMeta, DyeColor, Pattern, PatternType},
    MetaKind,
  },
  ItemError,
};

impl ItemBuilder<Banner> {
  fn banner_meta<R>(&mut self, f: impl FnOnce(&mut BannerMeta) -> R) -> Option<R> {
    match self.meta.as_mut().map(|m| m.kind_mut()) {
      Some(MetaKind::Banner(b)) => Some(f(b)),
      _ => None,
    }
  }

  /// Adds a layer on top of the existing ones.
  pub fn pattern(self, color: DyeColor, ty: PatternType) -> Self {
    self.patterns([Pattern::new(color, ty)])
  }
  /// Adds all the given layers, bottom to top.
  pub fn patterns(mut self, patterns: impl IntoIterator<Item = Pattern>) -> Self {
    self.banner_meta(|b| b.patterns.extend(patterns));
    self
  }
  /// Replaces the layer at `index`, where 0 is the bottom layer.
  pub fn set_pattern(mut self, index: usize, pattern: Pattern) -> Result<Self, ItemError> {
    self.banner_meta(|b| b.set_pattern(index, pattern)).transpose()?;
    Ok(self)
  }
  pub fn remove_pattern(mut self, index: usize) -> Result<Self, ItemError> {
    self.banner_meta(|b| b.remove_pattern(index)).transpose()?;
    Ok(self)
  }
}
