// --- Item Handles ---

/// Unique identifier for one item stack instance. The host mints these; the
/// transfer logic only ever compares them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ItemId(pub u64);

/// A stack of items as it sits in a container list or a player slot.
#[derive(Clone, Debug, PartialEq)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub stack: u32,
    pub max_stack: u32,
}

impl Item {
    pub fn new(id: u64, name: &str, stack: u32, max_stack: u32) -> Self {
        Item {
            id: ItemId(id),
            name: name.to_string(),
            stack,
            max_stack,
        }
    }

    /// A single non-stackable item (tools, placeables, etc.).
    pub fn unstackable(id: u64, name: &str) -> Self {
        Item::new(id, name, 1, 1)
    }

    /// Whether `other` can be merged onto this stack at all.
    pub(crate) fn can_merge_with(&self, other: &Item) -> bool {
        self.max_stack > 1 && self.name == other.name && self.max_stack == other.max_stack
    }

    pub(crate) fn space_left(&self) -> u32 {
        self.max_stack.saturating_sub(self.stack)
    }
}

// --- Merge Helper ---

/// Moves as much of `incoming` onto `target` as fits. Returns the quantity
/// actually transferred; `incoming.stack` is reduced by the same amount.
pub(crate) fn merge_stacks(target: &mut Item, incoming: &mut Item) -> u32 {
    if !target.can_merge_with(incoming) {
        return 0;
    }
    let moved = target.space_left().min(incoming.stack);
    target.stack += moved;
    incoming.stack -= moved;
    moved
}
