use crate::containers::ContainerId;
use crate::items::Item;

// --- Menu Handles ---

/// Generation-stamped handle to a menu in the arena. Comparing two handles
/// compares session identity; a handle whose slot has since been reused
/// resolves to nothing instead of aliasing the newer menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MenuId {
    index: u32,
    generation: u32,
}

// --- Menu Shapes ---

/// What sits behind an item-grab menu's item list.
#[derive(Clone, Debug)]
pub enum MenuBacking {
    /// The list belongs to a container object in the world (chest, box).
    Container(ContainerId),
    /// The menu owns a loose list with no world object behind it
    /// (e.g. a reward or fishing-chest surface). Lootable, not stowable.
    Loose(Vec<Item>),
}

#[derive(Clone, Debug)]
pub enum MenuKind {
    /// A container-backed grab surface exposing an ordered item list.
    ItemGrab(MenuBacking),
    /// Any other host menu; ignored by the tracker.
    Other,
}

/// A host UI surface, as reported through menu-change notifications.
#[derive(Clone, Debug)]
pub struct Menu {
    /// Fully-qualified runtime type name reported by the host.
    pub type_name: String,
    pub kind: MenuKind,
}

impl Menu {
    pub fn item_grab(type_name: &str, backing: MenuBacking) -> Self {
        Menu {
            type_name: type_name.to_string(),
            kind: MenuKind::ItemGrab(backing),
        }
    }

    pub fn other(type_name: &str) -> Self {
        Menu {
            type_name: type_name.to_string(),
            kind: MenuKind::Other,
        }
    }

    pub fn is_item_grab(&self) -> bool {
        matches!(self.kind, MenuKind::ItemGrab(_))
    }
}

// --- Menu Change Notifications ---

/// Before/after pair the host raises whenever the open menu changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuChangeEvent {
    pub old_menu: Option<MenuId>,
    pub new_menu: Option<MenuId>,
}

// --- Menu Arena ---

#[derive(Debug)]
struct MenuSlot {
    generation: u32,
    menu: Option<Menu>,
}

/// Host-owned registry of live menus. Slots are reused with a bumped
/// generation so that handles to closed menus go stale instead of pointing
/// at whatever opens next.
#[derive(Debug, Default)]
pub struct MenuArena {
    slots: Vec<MenuSlot>,
    active: Option<MenuId>,
}

impl MenuArena {
    pub fn new() -> Self {
        MenuArena {
            slots: Vec::new(),
            active: None,
        }
    }

    /// Opens a menu, makes it the active one, and returns its handle along
    /// with the change notification the host would raise for it. Opening
    /// does not close whatever was active before (menus may stack), so the
    /// notification carries no `old_menu`; a close is its own event.
    pub fn open(&mut self, menu: Menu) -> (MenuId, MenuChangeEvent) {
        let id = match self.slots.iter().position(|slot| slot.menu.is_none()) {
            Some(index) => {
                self.slots[index].menu = Some(menu);
                MenuId {
                    index: index as u32,
                    generation: self.slots[index].generation,
                }
            }
            None => {
                self.slots.push(MenuSlot {
                    generation: 0,
                    menu: Some(menu),
                });
                MenuId {
                    index: (self.slots.len() - 1) as u32,
                    generation: 0,
                }
            }
        };
        self.active = Some(id);
        (
            id,
            MenuChangeEvent {
                old_menu: None,
                new_menu: Some(id),
            },
        )
    }

    /// Closes the menu behind the handle, if it is still live. The slot's
    /// generation is bumped so the handle can never resolve again.
    pub fn close(&mut self, id: MenuId) -> Option<MenuChangeEvent> {
        let slot = self.slots.get_mut(id.index as usize)?;
        if slot.generation != id.generation || slot.menu.is_none() {
            return None;
        }
        slot.menu = None;
        slot.generation += 1;
        if self.active == Some(id) {
            self.active = None;
        }
        Some(MenuChangeEvent {
            old_menu: Some(id),
            new_menu: self.active,
        })
    }

    pub fn get(&self, id: MenuId) -> Option<&Menu> {
        let slot = self.slots.get(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        slot.menu.as_ref()
    }

    pub fn get_mut(&mut self, id: MenuId) -> Option<&mut Menu> {
        let slot = self.slots.get_mut(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        slot.menu.as_mut()
    }

    /// The menu the host currently displays, if any.
    pub fn active(&self) -> Option<MenuId> {
        self.active
    }
}
