use crate::menus::{MenuArena, MenuChangeEvent, MenuId};

// --- Menu Tracker ---

/// Tracks which item-grab menu is currently open, by identity. At most one
/// session is tracked; a newly opened grab menu always takes it over, and
/// only a close notification carrying that exact handle clears it. A
/// non-grab menu opening on top leaves the session in place.
#[derive(Debug, Default)]
pub struct MenuTracker {
    current: Option<MenuId>,
}

impl MenuTracker {
    pub fn new() -> Self {
        MenuTracker { current: None }
    }

    /// The tracked session, if any. Callers must still resolve the handle
    /// against the arena before acting on it.
    pub fn current(&self) -> Option<MenuId> {
        self.current
    }

    pub fn on_menu_changed(&mut self, menus: &MenuArena, event: &MenuChangeEvent) {
        if let Some(new_id) = event.new_menu {
            if menus.get(new_id).is_some_and(|menu| menu.is_item_grab()) {
                log::debug!("[MenuTracker] Tracking grab menu {:?}.", new_id);
                self.current = Some(new_id);
            }
        }
        if event.old_menu.is_some() && event.old_menu == self.current {
            log::debug!("[MenuTracker] Tracked menu {:?} closed.", event.old_menu);
            self.current = None;
        }
    }
}
