use ib_common::util::Color;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MapMeta {
  /// The id of the map view this item shows.
  pub map_id:        Option<i32>,
  /// Shown in the tooltip, and used by explorer maps.
  pub location_name: Option<String>,
  /// Tints the map item in the inventory.
  pub color:         Option<Color>,
  pub scaling:       bool,
}
