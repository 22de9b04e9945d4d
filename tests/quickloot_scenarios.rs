// End-to-end scenarios driven entirely through the host-facing surface:
// launch probe, menu-change notifications, and button presses.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use quick_loot::{
    AudioSink, Button, Container, ExtensionRegistry, GameWorld, InputSnapshot, Item, KeybindList,
    Menu, MenuBacking, ModConfig, PlayerInventory, QuickLoot, ReflectedObject,
    favorites::CONVENIENT_INVENTORY_ID,
};

const GRAB_MENU_TYPE: &str = "Menus.ItemGrabMenu";
const SPAWNER_MENU_TYPE: &str = "CJBItemSpawner.Framework.ItemMenu";

struct RecordingAudio(Rc<RefCell<Vec<String>>>);

impl AudioSink for RecordingAudio {
    fn play(&mut self, cue: &str) {
        self.0.borrow_mut().push(cue.to_string());
    }
}

fn world_with(player: PlayerInventory) -> (GameWorld, Rc<RefCell<Vec<String>>>) {
    let played = Rc::new(RefCell::new(Vec::new()));
    let world = GameWorld::new(player, Box::new(RecordingAudio(played.clone())));
    (world, played)
}

fn press(button: Button) -> InputSnapshot {
    InputSnapshot::new().press(button)
}

fn open_grab_menu(
    quick_loot: &mut QuickLoot,
    world: &mut GameWorld,
    type_name: &str,
    items: Vec<Item>,
) -> quick_loot::ContainerId {
    let chest_id = world.add_container(Container::with_items(36, items));
    let (_, event) = world
        .menus
        .open(Menu::item_grab(type_name, MenuBacking::Container(chest_id)));
    quick_loot.on_menu_changed(&world.menus, &event);
    chest_id
}

/// Registry shaped like a working ConvenientInventory install.
fn convenient_inventory(favorite_slots: Vec<bool>) -> ExtensionRegistry {
    let mut registry = ExtensionRegistry::new();
    registry.register_extension(CONVENIENT_INVENTORY_ID);

    let holder = ReflectedObject::new("ConvenientInventory.ConvenientInventory");
    holder.set_member("FavoriteItemSlots", favorite_slots);
    registry.register_type(Arc::new(holder));

    let entry = ReflectedObject::new("ConvenientInventory.ModEntry");
    let config = ReflectedObject::new("ConvenientInventory.ModConfig");
    config.set_member("IsEnableFavoriteItems", true);
    entry.set_member("Config", config);
    registry.register_type(Arc::new(entry));

    registry
}

#[test]
fn loot_press_drains_the_chest_in_order_and_closes_the_menu() {
    let mut quick_loot = QuickLoot::new(ModConfig::default());
    let (mut world, played) = world_with(PlayerInventory::new(8));
    let chest_id = open_grab_menu(
        &mut quick_loot,
        &mut world,
        GRAB_MENU_TYPE,
        vec![
            Item::unstackable(1, "A"),
            Item::unstackable(2, "B"),
            Item::unstackable(3, "C"),
            Item::unstackable(4, "D"),
        ],
    );

    quick_loot.on_button_pressed(&press(Button::Tab), &mut world);

    let names: Vec<&str> = world
        .player
        .slots()
        .iter()
        .flatten()
        .map(|item| item.name.as_str())
        .collect();
    assert_eq!(names, vec!["A", "B", "C", "D"]);
    assert!(world.container(chest_id).unwrap().is_empty());
    assert_eq!(*played.borrow(), vec!["Ship".to_string()]);
    assert_eq!(world.menus.active(), None);
    assert_eq!(quick_loot.tracked_menu(), None);
}

#[test]
fn loot_press_halts_at_the_first_item_that_cannot_fit() {
    // Inventory is one full unstackable slot; the first chest item fails
    // even though the two wood stacks behind it would have merged.
    let player = PlayerInventory::from_slots(vec![Some(Item::unstackable(10, "Hoe"))]);
    let mut quick_loot = QuickLoot::new(ModConfig::default());
    let (mut world, played) = world_with(player);
    let chest_id = open_grab_menu(
        &mut quick_loot,
        &mut world,
        GRAB_MENU_TYPE,
        vec![
            Item::unstackable(1, "Sword"),
            Item::new(2, "Wood", 10, 100),
            Item::new(3, "Wood", 10, 100),
        ],
    );

    quick_loot.on_button_pressed(&press(Button::Tab), &mut world);

    assert_eq!(world.container(chest_id).unwrap().len(), 3);
    assert_eq!(world.player.count_items(), 1);
    assert!(played.borrow().is_empty());
    assert!(quick_loot.tracked_menu().is_some());
}

#[test]
fn stow_press_respects_favorites_and_empty_slots() {
    let mut config = ModConfig::default();
    config.use_quick_stow_hotkey = true;
    let mut quick_loot = QuickLoot::new(config);
    quick_loot.on_game_launched(&convenient_inventory(vec![false, false, true]));

    let player = PlayerInventory::from_slots(vec![
        Some(Item::unstackable(1, "Sword")),
        None,
        Some(Item::new(2, "Rock", 5, 100)),
    ]);
    let (mut world, played) = world_with(player);
    let chest_id = open_grab_menu(&mut quick_loot, &mut world, GRAB_MENU_TYPE, Vec::new());

    quick_loot.on_button_pressed(&press(Button::Letter('L')), &mut world);

    assert!(world.player.item(0).is_none());
    assert_eq!(world.player.item(2).unwrap().name, "Rock");
    let chest: Vec<&str> = world
        .container(chest_id)
        .unwrap()
        .items()
        .iter()
        .map(|item| item.name.as_str())
        .collect();
    assert_eq!(chest, vec!["Sword"]);
    assert_eq!(*played.borrow(), vec!["Ship".to_string()]);
}

#[test]
fn excluded_spawner_menu_blocks_both_bindings() {
    let mut config = ModConfig::default();
    config.use_quick_stow_hotkey = true;
    let mut quick_loot = QuickLoot::new(config);

    let player = PlayerInventory::from_slots(vec![Some(Item::unstackable(1, "Sword"))]);
    let (mut world, played) = world_with(player);
    let chest_id = open_grab_menu(
        &mut quick_loot,
        &mut world,
        SPAWNER_MENU_TYPE,
        vec![Item::unstackable(2, "Bait")],
    );

    quick_loot.on_button_pressed(&press(Button::Tab), &mut world);
    quick_loot.on_button_pressed(&press(Button::Letter('L')), &mut world);

    assert_eq!(world.container(chest_id).unwrap().len(), 1);
    assert_eq!(world.player.count_items(), 1);
    assert!(played.borrow().is_empty());
}

#[test]
fn presses_without_an_open_container_do_nothing() {
    let mut config = ModConfig::default();
    config.use_quick_stow_hotkey = true;
    let mut quick_loot = QuickLoot::new(config);

    let player = PlayerInventory::from_slots(vec![Some(Item::unstackable(1, "Sword"))]);
    let (mut world, played) = world_with(player);

    // A non-container menu is open; the tracker must ignore it.
    let (_, event) = world.menus.open(Menu::other("Menus.GameMenu"));
    quick_loot.on_menu_changed(&world.menus, &event);

    quick_loot.on_button_pressed(&press(Button::Tab), &mut world);
    quick_loot.on_button_pressed(&press(Button::Letter('L')), &mut world);

    assert_eq!(world.player.count_items(), 1);
    assert!(played.borrow().is_empty());
}

#[test]
fn a_40_stack_chest_takes_two_presses_to_drain() {
    let mut quick_loot = QuickLoot::new(ModConfig::default());
    let (mut world, played) = world_with(PlayerInventory::new(64));
    let items: Vec<Item> = (0..40)
        .map(|i| Item::unstackable(i, &format!("Trinket{}", i)))
        .collect();
    let chest_id = open_grab_menu(&mut quick_loot, &mut world, GRAB_MENU_TYPE, items);

    quick_loot.on_button_pressed(&press(Button::Tab), &mut world);
    assert_eq!(world.container(chest_id).unwrap().len(), 8);
    assert!(world.menus.active().is_some());

    quick_loot.on_button_pressed(&press(Button::Tab), &mut world);
    assert!(world.container(chest_id).unwrap().is_empty());
    assert_eq!(world.player.count_items(), 40);
    assert_eq!(
        *played.borrow(),
        vec!["Ship".to_string(), "Ship".to_string()]
    );
    assert_eq!(world.menus.active(), None);
}

#[test]
fn custom_bindings_from_a_config_file_drive_the_dispatch() {
    let mut config = ModConfig::default();
    config.loot_hotkey = "Ctrl + Q".parse::<KeybindList>().unwrap();
    // Keep the menu open after the loot press so the stow press still has
    // a tracked session to act on.
    config.close_menu_after_loot = false;
    config.use_quick_stow_hotkey = true;
    config.quick_stow_hotkey = "Ctrl + W".parse::<KeybindList>().unwrap();
    let mut quick_loot = QuickLoot::new(config);

    let player = PlayerInventory::from_slots(vec![Some(Item::unstackable(1, "Sword")), None]);
    let (mut world, _) = world_with(player);
    let chest_id = open_grab_menu(
        &mut quick_loot,
        &mut world,
        GRAB_MENU_TYPE,
        vec![Item::unstackable(2, "Rock")],
    );

    // The default Tab binding is gone.
    quick_loot.on_button_pressed(&press(Button::Tab), &mut world);
    assert_eq!(world.container(chest_id).unwrap().len(), 1);

    let loot_combo = InputSnapshot::new()
        .hold(Button::LeftCtrl)
        .press(Button::Letter('Q'));
    quick_loot.on_button_pressed(&loot_combo, &mut world);
    assert!(world.container(chest_id).unwrap().is_empty());

    let stow_combo = InputSnapshot::new()
        .hold(Button::LeftCtrl)
        .press(Button::Letter('W'));
    quick_loot.on_button_pressed(&stow_combo, &mut world);
    assert_eq!(world.player.count_items(), 0);
    assert_eq!(world.container(chest_id).unwrap().len(), 2);
}
