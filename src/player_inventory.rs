use crate::items::{merge_stacks, Item, ItemId};

// --- Constants ---

/// Default number of player inventory slots.
pub const DEFAULT_PLAYER_SLOTS: usize = 24;

// --- Player Inventory ---

/// The player's slot-indexed item list. Slots may be empty (`None`); slot
/// indices are stable identifiers only between mutations, which is why
/// callers re-resolve them by item identity before each use.
#[derive(Clone, Debug)]
pub struct PlayerInventory {
    slots: Vec<Option<Item>>,
}

impl PlayerInventory {
    pub fn new(capacity: usize) -> Self {
        PlayerInventory {
            slots: vec![None; capacity],
        }
    }

    pub fn from_slots(slots: Vec<Option<Item>>) -> Self {
        PlayerInventory { slots }
    }

    pub fn slots(&self) -> &[Option<Item>] {
        &self.slots
    }

    pub fn item(&self, slot: usize) -> Option<&Item> {
        self.slots.get(slot)?.as_ref()
    }

    pub(crate) fn item_mut(&mut self, slot: usize) -> Option<&mut Item> {
        self.slots.get_mut(slot)?.as_mut()
    }

    /// Current slot of the item with the given identity, if it is still held.
    pub fn index_of(&self, id: ItemId) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| slot.as_ref().is_some_and(|item| item.id == id))
    }

    /// Removes an item by identity, leaving its slot empty.
    pub fn remove_item(&mut self, id: ItemId) -> Option<Item> {
        let slot = self.index_of(id)?;
        self.slots[slot].take()
    }

    /// Number of occupied slots.
    pub fn count_items(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    /// Adds an item, merging into compatible stacks first and then filling
    /// empty slots. Returns `None` on full absorption, otherwise the
    /// remainder that found no room.
    pub fn add_item(&mut self, mut item: Item) -> Option<Item> {
        for slot in self.slots.iter_mut().flatten() {
            if item.stack == 0 {
                break;
            }
            merge_stacks(slot, &mut item);
        }
        while item.stack > 0 {
            let Some(free) = self.slots.iter().position(|slot| slot.is_none()) else {
                break;
            };
            let take = item.stack.min(item.max_stack);
            let mut placed = item.clone();
            placed.stack = take;
            self.slots[free] = Some(placed);
            item.stack -= take;
        }
        if item.stack == 0 {
            None
        } else {
            Some(item)
        }
    }
}
