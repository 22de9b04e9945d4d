use crate::items::{merge_stacks, Item};

// --- Constants ---

/// Default number of stacks a chest-style container can hold.
pub const DEFAULT_CONTAINER_CAPACITY: usize = 36;

// --- Container ---

/// Index of a container within the world's container list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ContainerId(pub usize);

/// A world object holding an ordered list of item stacks (chest, box, etc.).
/// The list is host-owned; the transfer logic mutates it only through
/// `add_item` and front removal.
#[derive(Clone, Debug)]
pub struct Container {
    items: Vec<Item>,
    capacity: usize,
}

impl Container {
    pub fn new(capacity: usize) -> Self {
        Container {
            items: Vec::new(),
            capacity,
        }
    }

    pub fn with_items(capacity: usize, items: Vec<Item>) -> Self {
        Container { items, capacity }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub(crate) fn items_mut(&mut self) -> &mut Vec<Item> {
        &mut self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Merge-aware add: tops up compatible existing stacks first, then opens
    /// new stacks while capacity remains. Returns `None` if the item was
    /// fully absorbed, otherwise the remainder that did not fit.
    pub fn add_item(&mut self, mut item: Item) -> Option<Item> {
        for existing in self.items.iter_mut() {
            if item.stack == 0 {
                break;
            }
            merge_stacks(existing, &mut item);
        }
        while item.stack > 0 && self.items.len() < self.capacity {
            let take = item.stack.min(item.max_stack);
            let mut placed = item.clone();
            placed.stack = take;
            self.items.push(placed);
            item.stack -= take;
        }
        if item.stack == 0 {
            None
        } else {
            Some(item)
        }
    }
}
