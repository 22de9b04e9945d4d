use crate::compat;
use crate::config::ModConfig;
use crate::containers::ContainerId;
use crate::favorites::FavoritesProvider;
use crate::items::{Item, ItemId};
use crate::menu_tracker::MenuTracker;
use crate::menus::{MenuBacking, MenuChangeEvent, MenuKind};
use crate::GameWorld;

// --- Constants ---

/// Upper bound on stacks processed per loot press, to cap the work a single
/// input event can trigger. Anything left stays for the next press.
pub(crate) const MAX_LOOT_PER_PRESS: usize = 32;

/// Cue played when at least one item moved.
pub(crate) const TRANSFER_SOUND: &str = "Ship";
/// Cue played when a stow press had nothing it could move.
pub(crate) const BLOCKED_SOUND: &str = "cancel";

/// Where the tracked menu's item list lives, resolved before any borrows.
enum LootSource {
    Container(ContainerId),
    Loose,
}

// --- Quick Loot ---

/// Drains the tracked menu's item list into the player inventory, front
/// first. An item leaves the list only when the player inventory absorbed
/// all of it; the first stack that does not fully fit stops the pass.
/// Returns the menu-change notification when auto-close fired, so the
/// caller can replay it through the tracker like any host notification.
pub(crate) fn perform_loot(
    tracker: &MenuTracker,
    config: &ModConfig,
    world: &mut GameWorld,
) -> Option<MenuChangeEvent> {
    let Some(menu_id) = tracker.current() else {
        return None;
    };
    let source = {
        // A stale handle means the session was torn down since tracking.
        let menu = world.menus.get(menu_id)?;
        if compat::is_excluded_menu(menu) {
            log::debug!("[QuickLoot] Ignoring excluded menu '{}'.", menu.type_name);
            return None;
        }
        match &menu.kind {
            MenuKind::ItemGrab(MenuBacking::Container(id)) => LootSource::Container(*id),
            MenuKind::ItemGrab(MenuBacking::Loose(_)) => LootSource::Loose,
            MenuKind::Other => return None,
        }
    };

    let (removed, emptied) = {
        let items: &mut Vec<Item> = match source {
            LootSource::Container(id) => world.containers.get_mut(id.0)?.items_mut(),
            LootSource::Loose => match world.menus.get_mut(menu_id).map(|menu| &mut menu.kind) {
                Some(MenuKind::ItemGrab(MenuBacking::Loose(items))) => items,
                _ => return None,
            },
        };
        let player = &mut world.player;

        let before = items.len();
        let mut attempts_left = MAX_LOOT_PER_PRESS;
        while !items.is_empty() && attempts_left > 0 {
            attempts_left -= 1;
            let item = items[0].clone();
            match player.add_item(item) {
                None => {
                    items.remove(0);
                }
                Some(remainder) => {
                    // Partial absorption leaves the rest at the front and
                    // ends the pass; looting past a full inventory only
                    // churns the list.
                    items[0] = remainder;
                    break;
                }
            }
        }
        (before - items.len(), items.is_empty())
    };

    if removed > 0 {
        log::debug!("[QuickLoot] Looted {} stack(s) from the open container.", removed);
        world.audio.play(TRANSFER_SOUND);
    }

    if config.close_menu_after_loot && emptied && world.menus.active() == Some(menu_id) {
        return world.menus.close(menu_id);
    }
    None
}

// --- Quick Stow ---

/// Pushes every non-empty, non-favorited player slot into the tracked
/// menu's backing container. The player list shifts while this runs, so the
/// pass walks an identity snapshot and re-resolves each item's live slot
/// just before using it.
pub(crate) fn perform_stow(
    tracker: &MenuTracker,
    favorites: &dyn FavoritesProvider,
    world: &mut GameWorld,
) {
    let Some(menu_id) = tracker.current() else {
        return;
    };
    let chest_id = {
        let Some(menu) = world.menus.get(menu_id) else {
            return;
        };
        if compat::is_excluded_menu(menu) {
            log::debug!("[QuickStow] Ignoring excluded menu '{}'.", menu.type_name);
            return;
        }
        match &menu.kind {
            MenuKind::ItemGrab(MenuBacking::Container(id)) => *id,
            // Grab menus without a world container behind them cannot take
            // items back.
            _ => return,
        }
    };
    let Some(chest) = world.containers.get_mut(chest_id.0) else {
        return;
    };
    let player = &mut world.player;

    let snapshot: Vec<ItemId> = player.slots().iter().flatten().map(|item| item.id).collect();
    let mut moved_any = false;

    for item_id in snapshot {
        // Earlier moves may have emptied slots; the live index decides both
        // the favorite check and which stack gets updated.
        let Some(slot) = player.index_of(item_id) else {
            continue;
        };
        if favorites.is_favorited(slot) {
            continue;
        }
        let Some(item) = player.item(slot).cloned() else {
            continue;
        };
        let stack_before = item.stack;
        match chest.add_item(item) {
            None => {
                player.remove_item(item_id);
                moved_any = true;
            }
            Some(remainder) => {
                if remainder.stack < stack_before {
                    if let Some(live) = player.item_mut(slot) {
                        live.stack = remainder.stack;
                    }
                    moved_any = true;
                }
            }
        }
    }

    if moved_any {
        log::debug!("[QuickStow] Stowed items into the open container.");
        world.audio.play(TRANSFER_SOUND);
    } else {
        world.audio.play(BLOCKED_SOUND);
    }
}
