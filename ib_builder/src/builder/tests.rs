use super::*;
use crate::{
  item::meta::{
    pdc, DyeColor, FireworkEffect, FireworkType, Generation, Pattern, PatternType, PotionData,
    PotionEffect, PotionEffectType, PotionType, SkullOwner,
  },
  ErrorKind,
};
use ib_common::util::UUID;
use pretty_assertions::assert_eq;
use std::{cell::RefCell, rc::Rc};

fn modern() -> FeatureFlags { FeatureFlags::modern() }
fn legacy() -> FeatureFlags { FeatureFlags::legacy() }

fn lore(item: &ItemStack) -> Vec<String> {
  item.meta_ref().and_then(|m| m.lore()).map(<[String]>::to_vec).unwrap_or_default()
}

/// Records every call, and otherwise does what [`PersistentNbt`] does.
#[derive(Debug, Default)]
struct Recording {
  calls: Rc<RefCell<Vec<String>>>,
}

impl NbtService for Recording {
  fn set_string(
    &self,
    plugin: &Plugin,
    item: ItemStack,
    key: &str,
    value: &str,
  ) -> Result<ItemStack, ItemError> {
    self.calls.borrow_mut().push(format!("set_string {key}={value}"));
    PersistentNbt.set_string(plugin, item, key, value)
  }
  fn set_boolean(
    &self,
    plugin: &Plugin,
    item: ItemStack,
    key: &str,
    value: bool,
  ) -> Result<ItemStack, ItemError> {
    self.calls.borrow_mut().push(format!("set_boolean {key}={value}"));
    PersistentNbt.set_boolean(plugin, item, key, value)
  }
  fn remove_tag(
    &self,
    plugin: &Plugin,
    item: ItemStack,
    key: &str,
  ) -> Result<ItemStack, ItemError> {
    self.calls.borrow_mut().push(format!("remove_tag {key}"));
    PersistentNbt.remove_tag(plugin, item, key)
  }
}

#[test]
fn material_and_amount() {
  for (material, amount) in
    [(Material::Stone, 1), (Material::DiamondSword, 1), (Material::Apple, 64), (Material::Potion, 3)]
  {
    let item = PlainBuilder::from_material(material, modern()).unwrap().amount(amount).build();
    assert_eq!(item.material(), material);
    assert_eq!(item.amount(), amount);
  }
  let item = PlainBuilder::create(modern()).build();
  assert_eq!(item.material(), Material::Stone);
  assert_eq!(item.amount(), 1);
}

#[test]
fn lore_lines() {
  let b = PlainBuilder::create(modern()).set_lore(["a", "b"]);
  assert_eq!(lore(&b.build()), ["a", "b"]);
  let b = b.add_lore(["c"]);
  assert_eq!(lore(&b.build()), ["a", "b", "c"]);

  let b = b.remove_lore_at(1).unwrap();
  assert_eq!(lore(&b.build()), ["a", "c"]);
  let err = b.clone().remove_lore_at(5).unwrap_err();
  assert_eq!(err, ItemError::IndexOutOfRange { index: 5, len: 2 });
  assert_eq!(err.kind(), ErrorKind::IndexOutOfRange);

  let b = b.remove_lore("a").remove_lore("missing");
  assert_eq!(lore(&b.build()), ["c"]);

  // Lore is created if there is none.
  let item = PlainBuilder::create(modern()).add_lore(["x", "y"]).build();
  assert_eq!(lore(&item), ["x", "y"]);
}

#[test]
fn color_codes() {
  let item = PlainBuilder::create(modern())
    .set_name("&aGreen &lBold")
    .set_lore(["&7gray", "a & b"])
    .build();
  let meta = item.meta().unwrap();
  assert_eq!(meta.display_name(), Some("§aGreen §lBold"));
  assert_eq!(lore(&item), ["§7gray", "a & b"]);

  let config = Config { color_marker: '$', ..Config::default() };
  let item = PlainBuilder::create(modern()).config(&config).set_name("$cRed &c").build();
  assert_eq!(item.meta().unwrap().display_name(), Some("§cRed &c"));
}

#[test]
fn enchants() {
  let item = PlainBuilder::from_material(Material::DiamondSword, modern())
    .unwrap()
    .enchant(Enchantment::Looting)
    .enchant_level(Enchantment::Sharpness, 10)
    .enchant_with(Enchantment::Unbreaking, 9, false)
    .enchants([(Enchantment::FireAspect, 2), (Enchantment::Knockback, 7)], false)
    .disenchant(Enchantment::Looting)
    .build();
  let meta = item.meta().unwrap();
  assert_eq!(meta.enchant_level(Enchantment::Sharpness), Some(10));
  assert_eq!(meta.enchant_level(Enchantment::FireAspect), Some(2));
  // Past the max level, and the restriction was not ignored.
  assert!(!meta.has_enchant(Enchantment::Unbreaking));
  assert!(!meta.has_enchant(Enchantment::Knockback));
  assert!(!meta.has_enchant(Enchantment::Looting));

  // Through the helpers, level 0 clears.
  let mut item = item;
  mutate::add_enchant(&mut item, Enchantment::Smite, 3);
  mutate::add_enchant(&mut item, Enchantment::Smite, 0);
  assert!(!item.meta().unwrap().has_enchant(Enchantment::Smite));
}

#[test]
fn glow() {
  let b = PlainBuilder::create(modern()).glow();
  let meta = b.build().meta().unwrap();
  assert_eq!(meta.enchants().len(), 1);
  assert!(meta.has_enchant(Enchantment::Lure));
  assert!(meta.has_flag(ItemFlag::HideEnchants));

  let item = b.enchant_level(Enchantment::Sharpness, 2).set_glow(false).build();
  let meta = item.meta().unwrap();
  // Every enchantment is removed, not only the glow.
  assert!(meta.enchants().is_empty());
  assert!(meta.has_flag(ItemFlag::HideEnchants));
}

#[test]
fn unbreakable_modern() {
  let calls = Rc::new(RefCell::new(vec![]));
  let b = PlainBuilder::from_material(Material::DiamondSword, modern())
    .unwrap()
    .nbt_service(Recording { calls: calls.clone() })
    .unbreakable()
    .unwrap();
  assert!(b.build().meta().unwrap().is_unbreakable());
  let item = b.set_unbreakable(false).unwrap().build();
  assert!(!item.meta().unwrap().is_unbreakable());
  // Never touched nbt, and didn't need a plugin.
  assert!(calls.borrow().is_empty());
}

#[test]
fn unbreakable_legacy() {
  let err = PlainBuilder::from_material(Material::DiamondSword, legacy())
    .unwrap()
    .unbreakable()
    .unwrap_err();
  assert_eq!(err, ItemError::MissingPlugin("set_nbt"));
  assert_eq!(err.kind(), ErrorKind::Precondition);

  let calls = Rc::new(RefCell::new(vec![]));
  let plugin = Plugin::new("Tools");
  let item = PlainBuilder::from_material(Material::DiamondSword, legacy())
    .unwrap()
    .plugin(plugin.clone())
    .nbt_service(Recording { calls: calls.clone() })
    .set_unbreakable(true)
    .unwrap()
    .set_unbreakable(false)
    .unwrap()
    .build();
  assert_eq!(*calls.borrow(), ["set_boolean Unbreakable=true", "set_boolean Unbreakable=false"]);
  let meta = item.meta().unwrap();
  assert!(!meta.is_unbreakable());
  assert_eq!(meta.pdc().get(&plugin.key("unbreakable").unwrap(), pdc::Bool), Some(false));
}

#[test]
fn nbt() {
  let err = PlainBuilder::create(modern()).set_nbt("owner", "macmv").unwrap_err();
  assert_eq!(err, ItemError::MissingPlugin("set_nbt"));
  let err = PlainBuilder::create(modern()).remove_nbt("owner").unwrap_err();
  assert_eq!(err, ItemError::MissingPlugin("remove_nbt"));

  let plugin = Plugin::new("Tools");
  let key = plugin.key("owner").unwrap();
  // Changes made before the nbt call must survive it.
  let b = PlainBuilder::create(modern())
    .plugin(plugin.clone())
    .set_name("Rock")
    .set_nbt("Owner", "macmv")
    .unwrap()
    .add_lore(["after"]);
  let meta = b.build().meta().unwrap();
  assert_eq!(meta.display_name(), Some("Rock"));
  assert_eq!(meta.pdc().get(&key, pdc::Str), Some("macmv".to_string()));
  assert_eq!(meta.lore(), Some(&["after".to_string()][..]));

  let meta = b.remove_nbt("owner").unwrap().build().meta().unwrap();
  assert!(!meta.pdc().has(&key, pdc::Str));
  assert_eq!(meta.display_name(), Some("Rock"));

  let err = PlainBuilder::create(modern())
    .plugin(Plugin::new("Bad Name"))
    .set_nbt_bool("a", true)
    .unwrap_err();
  assert_eq!(err.kind(), ErrorKind::InvalidOperation);
}

#[test]
fn model_data() {
  let item = PlainBuilder::create(modern()).model(42).build();
  assert_eq!(item.meta().unwrap().custom_model_data(), Some(42));
  let item = PlainBuilder::create(legacy()).model(42).build();
  assert_eq!(item.meta().unwrap().custom_model_data(), None);
}

#[test]
fn colors() {
  let item =
    PlainBuilder::from_material(Material::LeatherBoots, modern()).unwrap().color(Color::RED).build();
  assert_eq!(item.meta().unwrap().color(), Some(Color::RED));
  let item = PlainBuilder::create(modern()).color(Color::RED).build();
  assert_eq!(item.meta().unwrap().color(), None);
  let item = PotionBuilder::create(modern()).color(Color::BLUE).build();
  assert_eq!(item.meta().unwrap().color(), Some(Color::BLUE));
  let item = MapBuilder::create(modern()).color(Color::GREEN).build();
  assert_eq!(item.meta().unwrap().color(), Some(Color::GREEN));
}

#[test]
fn pdc_and_tags() {
  let kills = NamespacedKey::new("tools", "kills").unwrap();
  let owner = NamespacedKey::new("tools", "owner").unwrap();
  let item = PlainBuilder::create(modern())
    .pdc(|pdc| pdc.set(kills.clone(), pdc::Int, 7))
    .persistent_tag(owner.clone(), pdc::Str, "macmv".to_string())
    .build();
  let meta = item.meta().unwrap();
  assert_eq!(meta.pdc().get(&kills, pdc::Int), Some(7));
  assert_eq!(meta.pdc().get(&owner, pdc::Str), Some("macmv".to_string()));
}

#[test]
fn attributes_and_flags() {
  let modifier = AttributeModifier {
    uuid:      UUID::from_u128(1),
    name:      "armor".into(),
    amount:    2.0,
    operation: Operation::AddNumber,
    slot:      Some(EquipmentSlot::Head),
  };
  let item = PlainBuilder::from_material(Material::IronHelmet, modern())
    .unwrap()
    .attribute(Attribute::GenericArmor, modifier.clone())
    .attribute_with(Attribute::GenericMaxHealth, 4.0, Operation::AddNumber, None)
    .attribute_with(Attribute::GenericArmorToughness, 1.0, Operation::AddNumber, Some(EquipmentSlot::Head))
    .flags([ItemFlag::HideAttributes])
    .build();
  let meta = item.meta().unwrap();
  let mods = meta.attribute_modifiers();
  assert_eq!(mods.len(), 3);
  assert_eq!(mods[0], (Attribute::GenericArmor, modifier));
  assert_eq!(mods[1].1.name, "GENERIC_MAX_HEALTH");
  assert_eq!(mods[2].1.slot, Some(EquipmentSlot::Head));
  assert!(meta.has_flag(ItemFlag::HideAttributes));
}

#[test]
fn damage() {
  let item = PlainBuilder::from_material(Material::IronSword, legacy())
    .unwrap()
    .damage(5)
    .unwrap()
    .build();
  assert_eq!(item.durability(), 5);

  let item = PlainBuilder::from_material(Material::IronSword, modern())
    .unwrap()
    .damage(5)
    .unwrap()
    .build();
  assert_eq!(item.meta().unwrap().damage(), Some(5));
  assert_eq!(item.durability(), 0);

  let b = PlainBuilder::create(modern()).set_name("Rock");
  let err = b.clone().damage(5).unwrap_err();
  assert_eq!(err.kind(), ErrorKind::InvalidOperation);
  // The failed call didn't change anything.
  assert_eq!(b.build().meta().unwrap().display_name(), Some("Rock"));

  let item = PlainBuilder::from_material(Material::Bow, legacy()).unwrap().durability(30).build();
  assert_eq!(item.durability(), 30);
}

#[test]
fn build_is_repeatable() {
  let b = PlainBuilder::from_material(Material::DiamondSword, modern())
    .unwrap()
    .set_name("Twice")
    .set_lore(["a"])
    .glow();
  assert_eq!(b.build(), b.build());
  let first = b.build();
  let b = b.set_name("Changed");
  assert_ne!(b.build(), first);
}

#[test]
fn air() {
  let item = PlainBuilder::from_material(Material::Air, modern())
    .unwrap()
    .set_name("Nothing")
    .add_lore(["a"])
    .glow()
    .remove_lore_at(3)
    .unwrap()
    .build();
  assert_eq!(item, ItemStack::empty());

  // Setting the amount to zero also makes air.
  let item = PlainBuilder::create(modern()).amount(0).set_name("Gone").build();
  assert!(item.is_empty());
  assert!(!item.has_meta());
}

#[test]
fn wrong_material() {
  let err = PotionBuilder::from_material(Material::Stone, modern()).unwrap_err();
  assert_eq!(
    err,
    ItemError::WrongMaterial {
      builder:  "PotionBuilder",
      got:      Material::Stone,
      expected: crate::item::POTIONS,
    }
  );
  assert_eq!(err.kind(), ErrorKind::InvalidOperation);
  assert!(BannerBuilder::from_material(Material::Potion, modern()).is_err());
  assert!(BookBuilder::from_material(Material::Stone, modern()).is_err());
  assert!(FireworkBuilder::from_material(Material::Diamond, modern()).is_err());
  assert!(MapBuilder::from_material(Material::Stick, modern()).is_err());
  assert!(SkullBuilder::from_material(Material::Apple, modern()).is_err());
  for m in crate::item::POTIONS {
    assert!(PotionBuilder::from_material(*m, modern()).is_ok());
  }

  // An item whose meta doesn't match its material.
  let mut stack = ItemStack::new(Material::Potion);
  stack.set_meta(ItemMeta::for_material(Material::Stone));
  let err = PotionBuilder::from_stack(stack, modern()).unwrap_err();
  assert_eq!(err, ItemError::MissingCapability { material: Material::Potion, capability: "potion" });
}

#[test]
fn potion() {
  let fire = PotionEffect::new(PotionEffectType::FireResistance, 200, 0);
  let stronger = PotionEffect::new(PotionEffectType::FireResistance, 400, 1);
  let data = PotionData::with(PotionType::Speed, false, true).unwrap();
  let b = PotionBuilder::create(modern())
    .data(data)
    .custom_effect(fire, false)
    .custom_effect(stronger, false);
  let meta = b.build().meta().unwrap();
  match meta.kind() {
    MetaKind::Potion(p) => {
      assert_eq!(p.base, data);
      assert_eq!(p.custom_effects, vec![fire]);
    }
    k => panic!("expected potion meta, got {k:?}"),
  }

  let b = b.custom_effect(stronger, true);
  match b.build().meta().unwrap().kind() {
    MetaKind::Potion(p) => assert_eq!(p.custom_effects, vec![stronger]),
    k => panic!("expected potion meta, got {k:?}"),
  }
  match b.clear_custom_effects().build().meta().unwrap().kind() {
    MetaKind::Potion(p) => assert!(p.custom_effects.is_empty()),
    k => panic!("expected potion meta, got {k:?}"),
  }
}

#[test]
fn banner() {
  let b = BannerBuilder::from_material(Material::BlackBanner, modern())
    .unwrap()
    .pattern(DyeColor::Red, PatternType::Cross)
    .patterns([Pattern::new(DyeColor::White, PatternType::Border)]);
  let b = b.set_pattern(0, Pattern::new(DyeColor::Blue, PatternType::Cross)).unwrap();
  let err = b.clone().set_pattern(2, Pattern::new(DyeColor::Blue, PatternType::Cross)).unwrap_err();
  assert_eq!(err, ItemError::IndexOutOfRange { index: 2, len: 2 });
  match b.build().meta().unwrap().kind() {
    MetaKind::Banner(banner) => assert_eq!(
      banner.patterns,
      vec![
        Pattern::new(DyeColor::Blue, PatternType::Cross),
        Pattern::new(DyeColor::White, PatternType::Border)
      ]
    ),
    k => panic!("expected banner meta, got {k:?}"),
  }
  match b.remove_pattern(0).unwrap().build().meta().unwrap().kind() {
    MetaKind::Banner(banner) => assert_eq!(banner.patterns.len(), 1),
    k => panic!("expected banner meta, got {k:?}"),
  }
}

#[test]
fn book() {
  let b = BookBuilder::create(modern())
    .author("macmv")
    .title("&6Guide")
    .unwrap()
    .generation(Generation::Original)
    .page("one")
    .pages(["&ltwo", "three"]);
  let b = b.set_page(3, "3").unwrap();
  assert_eq!(b.clone().set_page(0, "").unwrap_err().kind(), ErrorKind::IndexOutOfRange);
  assert!(b.clone().set_page(4, "").is_err());
  assert_eq!(b.clone().title(&"x".repeat(40)).unwrap_err().kind(), ErrorKind::InvalidOperation);

  match b.build().meta().unwrap().kind() {
    MetaKind::Book(book) => {
      assert_eq!(book.author(), Some("macmv"));
      assert_eq!(book.title(), Some("§6Guide"));
      assert_eq!(book.generation(), Some(Generation::Original));
      assert_eq!(book.pages(), ["one".to_string(), "§ltwo".to_string(), "3".to_string()]);
    }
    k => panic!("expected book meta, got {k:?}"),
  }
}

#[test]
fn firework() {
  let red = FireworkEffect::new(FireworkType::Ball, Color::RED);
  let blue = FireworkEffect::new(FireworkType::Star, Color::BLUE).with_trail();

  let b = FireworkBuilder::create(modern()).effect(red.clone()).effects([blue.clone()]);
  let b = b.power(3).unwrap();
  let err = b.clone().power(128).unwrap_err();
  assert_eq!(err.kind(), ErrorKind::InvalidOperation);
  match b.build().meta().unwrap().kind() {
    MetaKind::Firework(f) => {
      assert_eq!(f.effects(), &[red.clone(), blue.clone()]);
      assert_eq!(f.power(), 3);
    }
    k => panic!("expected firework meta, got {k:?}"),
  }

  let star = FireworkBuilder::from_material(Material::FireworkStar, modern())
    .unwrap()
    .effect(red)
    .effect(blue.clone())
    .power(500)
    .unwrap()
    .build();
  match star.meta().unwrap().kind() {
    MetaKind::FireworkStar(s) => assert_eq!(s.effect, Some(blue)),
    k => panic!("expected firework star meta, got {k:?}"),
  }
}

#[test]
fn map() {
  let item = MapBuilder::create(modern()).location_name("Spawn").scaling(true).map_id(12).build();
  match item.meta().unwrap().kind() {
    MetaKind::Map(m) => {
      assert_eq!(m.location_name.as_deref(), Some("Spawn"));
      assert!(m.scaling);
      assert_eq!(m.map_id, Some(12));
    }
    k => panic!("expected map meta, got {k:?}"),
  }
}

#[test]
fn skull() {
  let id = UUID::from_u128(0x1234);
  let b = SkullBuilder::create(modern()).owner("macmv").texture("e3RleHR1cmVzOnt9fQ==");
  match b.build().meta().unwrap().kind() {
    MetaKind::Skull(s) => {
      assert_eq!(s.owner, Some(SkullOwner::Name("macmv".into())));
      assert_eq!(s.texture.as_deref(), Some("e3RleHR1cmVzOnt9fQ=="));
    }
    k => panic!("expected skull meta, got {k:?}"),
  }
  match b.owner_uuid(id).build().meta().unwrap().kind() {
    MetaKind::Skull(s) => assert_eq!(s.owner, Some(SkullOwner::Uuid(id))),
    k => panic!("expected skull meta, got {k:?}"),
  }
}

#[test]
fn factory() {
  let config = Config { version: Some("1.8.8".into()), ..Config::default() };
  let factory = ItemFactory::detect(config, "1.16.5-R0.1-SNAPSHOT").unwrap();
  assert!(factory.features().uses_legacy_unbreakable);

  let factory = ItemFactory::detect(Config::default(), "1.16.5-R0.1-SNAPSHOT").unwrap();
  assert!(!factory.features().uses_legacy_unbreakable);
  assert_eq!(factory.from_material(Material::Apple).build().material(), Material::Apple);
  assert_eq!(factory.banner().material(), Material::WhiteBanner);
  assert_eq!(factory.firework().material(), Material::FireworkRocket);
  assert_eq!(factory.star().material(), Material::FireworkStar);
  assert_eq!(factory.map().material(), Material::FilledMap);
  assert_eq!(factory.skull().material(), Material::PlayerHead);
  assert_eq!(factory.potion().material(), Material::Potion);
  assert!(factory.book(ItemStack::new(Material::WritableBook)).is_ok());
  assert!(factory.book(ItemStack::new(Material::Stone)).is_err());
  assert!(factory.potion_from(ItemStack::new(Material::SplashPotion)).is_ok());
  assert!(factory.banner_from(ItemStack::new(Material::Potion)).is_err());

  let err = ItemFactory::detect(Config::default(), "unknown").unwrap_err();
  assert_eq!(err.kind(), ErrorKind::Configuration);
}

#[test]
fn factory_select() {
  let factory = ItemFactory::new(modern(), Config::default());
  let cases = [
    (Material::Stone, "plain"),
    (Material::LingeringPotion, "potion"),
    (Material::RedBanner, "banner"),
    (Material::WrittenBook, "book"),
    (Material::FireworkStar, "firework"),
    (Material::Map, "map"),
    (Material::PlayerHead, "skull"),
  ];
  for (material, expected) in cases {
    let b = factory.select(ItemStack::new(material).with_amount(2)).unwrap();
    let kind = match &b {
      AnyBuilder::Plain(_) => "plain",
      AnyBuilder::Potion(_) => "potion",
      AnyBuilder::Banner(_) => "banner",
      AnyBuilder::Book(_) => "book",
      AnyBuilder::Firework(_) => "firework",
      AnyBuilder::Map(_) => "map",
      AnyBuilder::Skull(_) => "skull",
    };
    assert_eq!(kind, expected);
    assert_eq!(b.material(), material);
    assert_eq!(b.build().amount(), 2);
  }

  let config = Config { color_marker: '%', ..Config::default() };
  let factory = ItemFactory::new(modern(), config);
  let item = factory.from_material(Material::Stick).set_name("%eWand").build();
  assert_eq!(item.meta().unwrap().display_name(), Some("§eWand"));
}
