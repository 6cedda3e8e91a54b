use ib_common::util::UUID;
use strum_macros::{Display, EnumString};

/// An attribute that a modifier can change while the item is worn or held.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumString)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Attribute {
  GenericMaxHealth,
  GenericFollowRange,
  GenericKnockbackResistance,
  GenericMovementSpeed,
  GenericAttackDamage,
  GenericAttackSpeed,
  GenericArmor,
  GenericArmorToughness,
  GenericLuck,
}

/// How a modifier's amount is applied to the base value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Operation {
  /// `base + amount`
  AddNumber,
  /// `base + base * amount`
  AddScalar,
  /// `base * (1 + amount)`, applied after the others.
  #[strum(serialize = "MULTIPLY_SCALAR_1")]
  MultiplyScalar1,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum EquipmentSlot {
  Hand,
  OffHand,
  Feet,
  Legs,
  Chest,
  Head,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AttributeModifier {
  pub uuid:      UUID,
  pub name:      String,
  pub amount:    f64,
  pub operation: Operation,
  /// If `None`, the modifier applies in any slot.
  pub slot:      Option<EquipmentSlot>,
}

impl AttributeModifier {
  /// Creates a modifier with a random id, that applies in any slot.
  pub fn new(name: impl Into<String>, amount: f64, operation: Operation) -> Self {
    AttributeModifier { uuid: UUID::random(), name: name.into(), amount, operation, slot: None }
  }

  /// Creates a modifier with a random id, that only applies in the given slot.
  pub fn in_slot(
    name: impl Into<String>,
    amount: f64,
    operation: Operation,
    slot: EquipmentSlot,
  ) -> Self {
    AttributeModifier { slot: Some(slot), ..AttributeModifier::new(name, amount, operation) }
  }
}
