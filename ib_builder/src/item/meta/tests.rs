use super::*;
use crate::attribute::Operation;
use pretty_assertions::assert_eq;

#[test]
fn kinds() {
  assert_eq!(ItemMeta::for_material(Material::Air), None);
  assert_eq!(MetaKind::for_material(Material::Stone), MetaKind::Plain);
  assert_eq!(MetaKind::for_material(Material::LeatherBoots), MetaKind::LeatherArmor { color: None });
  assert_eq!(MetaKind::for_material(Material::SplashPotion).name(), "potion");
  assert_eq!(MetaKind::for_material(Material::RedBanner).name(), "banner");
  assert_eq!(MetaKind::for_material(Material::WritableBook).name(), "book");
  assert_eq!(MetaKind::for_material(Material::FireworkRocket).name(), "firework");
  assert_eq!(MetaKind::for_material(Material::FireworkStar).name(), "firework star");
  assert_eq!(MetaKind::for_material(Material::FilledMap).name(), "map");
  assert_eq!(MetaKind::for_material(Material::PlayerHead).name(), "skull");
}

#[test]
fn damage() {
  let mut sword = ItemMeta::for_material(Material::DiamondSword).unwrap();
  assert_eq!(sword.damage(), Some(0));
  assert!(sword.set_damage(10));
  assert_eq!(sword.damage(), Some(10));

  let mut stone = ItemMeta::for_material(Material::Stone).unwrap();
  assert!(!stone.is_damageable());
  assert!(!stone.set_damage(10));
  assert_eq!(stone.damage(), None);
}

#[test]
fn enchants() {
  let mut meta = ItemMeta::for_material(Material::DiamondSword).unwrap();
  assert!(meta.add_enchant(Enchantment::Sharpness, 5, false));
  // Same level, no change
  assert!(!meta.add_enchant(Enchantment::Sharpness, 5, false));
  // Past the max level
  assert!(!meta.add_enchant(Enchantment::Sharpness, 10, false));
  assert!(!meta.add_enchant(Enchantment::Looting, 0, false));
  assert_eq!(meta.enchant_level(Enchantment::Sharpness), Some(5));
  assert!(meta.add_enchant(Enchantment::Sharpness, 10, true));
  assert_eq!(meta.enchant_level(Enchantment::Sharpness), Some(10));
  assert!(meta.remove_enchant(Enchantment::Sharpness));
  assert!(!meta.remove_enchant(Enchantment::Sharpness));
  assert!(!meta.has_enchants());
}

#[test]
fn attributes() {
  let mut meta = ItemMeta::for_material(Material::DiamondSword).unwrap();
  let modifier = AttributeModifier::new("damage", 4.0, Operation::AddNumber);
  assert!(meta.add_attribute_modifier(Attribute::GenericAttackDamage, modifier.clone()));
  assert!(!meta.add_attribute_modifier(Attribute::GenericAttackDamage, modifier.clone()));
  // Same id on a different attribute is fine.
  assert!(meta.add_attribute_modifier(Attribute::GenericAttackSpeed, modifier));
  assert_eq!(meta.attribute_modifiers().len(), 2);
  assert_eq!(meta.modifiers_for(Attribute::GenericAttackDamage).count(), 1);
  assert_eq!(meta.modifiers_for(Attribute::GenericArmor).count(), 0);
}

#[test]
fn flags() {
  let mut meta = ItemMeta::for_material(Material::Stone).unwrap();
  meta.add_flags([ItemFlag::HideEnchants, ItemFlag::HideDye]);
  meta.add_flags([ItemFlag::HideEnchants]);
  assert_eq!(meta.flags().len(), 2);
  meta.remove_flags([ItemFlag::HideDye]);
  assert!(meta.has_flag(ItemFlag::HideEnchants));
  assert!(!meta.has_flag(ItemFlag::HideDye));
}

#[test]
fn colors() {
  let mut meta = ItemMeta::for_material(Material::LeatherHelmet).unwrap();
  assert_eq!(meta.color(), None);
  assert!(meta.set_color(Color::RED));
  assert_eq!(meta.color(), Some(Color::RED));

  let mut meta = ItemMeta::for_material(Material::Potion).unwrap();
  assert!(meta.set_color(Color::BLUE));
  match meta.kind() {
    MetaKind::Potion(p) => assert_eq!(p.color, Some(Color::BLUE)),
    k => panic!("expected potion meta, got {k:?}"),
  }

  let mut meta = ItemMeta::for_material(Material::Stone).unwrap();
  assert!(!meta.set_color(Color::RED));
  assert_eq!(meta.color(), None);
}
