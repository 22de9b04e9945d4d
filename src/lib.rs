// Quick loot / quick stow automation core: tracks the open container menu,
// drains it into the player inventory on one keybind, pushes inventory
// items back into it on another, and respects favorite-item markings from
// an optional cooperating extension when present.

mod compat;
pub mod config;
pub mod containers;
pub mod extensions;
pub mod favorites;
pub mod input;
pub mod items;
pub mod menu_tracker;
pub mod menus;
pub mod player_inventory;
pub mod settings;
mod transfer;

pub use config::{ConfigError, ModConfig};
pub use containers::{Container, ContainerId};
pub use extensions::{ExtensionRegistry, ReflectedObject};
pub use favorites::{FavoritesProvider, NoFavorites};
pub use input::{Button, InputSnapshot, Keybind, KeybindList};
pub use items::{Item, ItemId};
pub use menu_tracker::MenuTracker;
pub use menus::{Menu, MenuArena, MenuBacking, MenuChangeEvent, MenuId, MenuKind};
pub use player_inventory::PlayerInventory;
pub use settings::{SettingDescriptor, SettingId, SettingValue, SETTINGS};

// --- Host Seams ---

/// Sound playback by named cue; the host owns the actual audio backend.
pub trait AudioSink {
    fn play(&mut self, cue: &str);
}

/// Sink for hosts without audio, and for tests that do not care.
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _cue: &str) {}
}

// --- Game World ---

/// The host-owned mutable state handed into every callback: live menus,
/// world containers, the player's item list, and the audio backend. All
/// access is serialized by the host's single-threaded update loop.
pub struct GameWorld {
    pub menus: MenuArena,
    pub containers: Vec<Container>,
    pub player: PlayerInventory,
    pub audio: Box<dyn AudioSink>,
}

impl GameWorld {
    pub fn new(player: PlayerInventory, audio: Box<dyn AudioSink>) -> Self {
        GameWorld {
            menus: MenuArena::new(),
            containers: Vec::new(),
            player,
            audio,
        }
    }

    pub fn add_container(&mut self, container: Container) -> ContainerId {
        self.containers.push(container);
        ContainerId(self.containers.len() - 1)
    }

    pub fn container(&self, id: ContainerId) -> Option<&Container> {
        self.containers.get(id.0)
    }
}

// --- Controller ---

/// Top-level controller wired into the host's callbacks. Owns the config,
/// the menu tracker, and the favorites capability adapter installed by the
/// launch-time probe.
pub struct QuickLoot {
    config: ModConfig,
    tracker: MenuTracker,
    favorites: Box<dyn FavoritesProvider>,
}

impl QuickLoot {
    pub fn new(config: ModConfig) -> Self {
        QuickLoot {
            config,
            tracker: MenuTracker::new(),
            favorites: Box::new(NoFavorites),
        }
    }

    pub fn config(&self) -> &ModConfig {
        &self.config
    }

    /// Mutable settings access for the host's config UI; the host persists
    /// the config after edits.
    pub fn config_mut(&mut self) -> &mut ModConfig {
        &mut self.config
    }

    /// The currently tracked container-menu session, if any.
    pub fn tracked_menu(&self) -> Option<MenuId> {
        self.tracker.current()
    }

    /// Launch notification: probe optional extensions once and install the
    /// resulting capability adapter for the rest of the session.
    pub fn on_game_launched(&mut self, registry: &ExtensionRegistry) {
        self.favorites = favorites::probe_favorites(registry);
    }

    /// Menu-change notification from the host.
    pub fn on_menu_changed(&mut self, menus: &MenuArena, event: &MenuChangeEvent) {
        self.tracker.on_menu_changed(menus, event);
    }

    /// Input notification from the host. The loot binding wins when both
    /// would fire; the stow binding only counts while it is enabled.
    pub fn on_button_pressed(&mut self, input: &InputSnapshot, world: &mut GameWorld) {
        if self.config.loot_hotkey.just_pressed(input) {
            self.perform_loot(world);
        } else if self.config.use_quick_stow_hotkey
            && self.config.quick_stow_hotkey.just_pressed(input)
        {
            self.perform_stow(world);
        }
    }

    pub fn perform_loot(&mut self, world: &mut GameWorld) {
        if let Some(event) = transfer::perform_loot(&self.tracker, &self.config, world) {
            // Auto-close comes back through the same notification path the
            // host uses, so the tracker sees the close like any other.
            self.tracker.on_menu_changed(&world.menus, &event);
        }
    }

    pub fn perform_stow(&mut self, world: &mut GameWorld) {
        transfer::perform_stow(&self.tracker, self.favorites.as_ref(), world);
    }
}
