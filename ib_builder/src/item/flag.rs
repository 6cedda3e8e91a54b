use strum_macros::{Display, EnumString};

/// Hides parts of the item's tooltip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumString)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemFlag {
  HideEnchants,
  HideAttributes,
  HideUnbreakable,
  HideDestroys,
  HidePlacedOn,
  HidePotionEffects,
  HideDye,
}
