use std::sync::Arc;

use crate::extensions::{ExtensionRegistry, ReflectedObject};

// --- Favorites Capability ---

/// Narrow view onto an optional "favorite item" extension. Stow consults
/// this per slot; every implementation must be infallible, answering
/// "not favorited" rather than surfacing a lookup problem.
pub trait FavoritesProvider {
    fn favorites_enabled(&self) -> bool;

    /// Whether the item in the given live inventory slot is marked as a
    /// favorite and must not be auto-transferred.
    fn is_favorited(&self, slot: usize) -> bool;
}

/// Safe default when no favorites extension is usable.
pub struct NoFavorites;

impl FavoritesProvider for NoFavorites {
    fn favorites_enabled(&self) -> bool {
        false
    }

    fn is_favorited(&self, _slot: usize) -> bool {
        false
    }
}

// --- ConvenientInventory Binding ---

/// Well-known identifier of the cooperating extension.
pub const CONVENIENT_INVENTORY_ID: &str = "alanperrow.ConvenientInventory";

const FAVORITES_HOLDER_TYPE: &str = "ConvenientInventory.ConvenientInventory";
const FAVORITES_ENTRY_TYPE: &str = "ConvenientInventory.ModEntry";

const CONFIG_MEMBER: &str = "Config";
const FAVORITES_ENABLED_MEMBER: &str = "IsEnableFavoriteItems";
const FAVORITE_SLOTS_MEMBER: &str = "FavoriteItemSlots";

/// Adapter bound to ConvenientInventory's reflected types. Holds the type
/// handles found at startup; every query re-reads the members so that the
/// extension's live state is honored.
struct ConvenientInventoryFavorites {
    holder: Arc<ReflectedObject>,
    entry: Arc<ReflectedObject>,
}

impl FavoritesProvider for ConvenientInventoryFavorites {
    fn favorites_enabled(&self) -> bool {
        let Some(config) = self.entry.member::<ReflectedObject>(CONFIG_MEMBER) else {
            log::debug!("[Favorites] ConvenientInventory config not reachable.");
            return false;
        };
        config
            .member::<bool>(FAVORITES_ENABLED_MEMBER)
            .map(|flag| *flag)
            .unwrap_or(false)
    }

    fn is_favorited(&self, slot: usize) -> bool {
        if !self.favorites_enabled() {
            return false;
        }
        let Some(slots) = self.holder.member::<Vec<bool>>(FAVORITE_SLOTS_MEMBER) else {
            log::debug!("[Favorites] Favorite slot table not reachable.");
            return false;
        };
        slots.get(slot).copied().unwrap_or(false)
    }
}

// --- Startup Probe ---

/// One-time capability probe, run at the host's launch notification. Any
/// absence or mismatch degrades to `NoFavorites`; startup never fails on
/// behalf of another extension.
pub fn probe_favorites(registry: &ExtensionRegistry) -> Box<dyn FavoritesProvider> {
    if !registry.is_loaded(CONVENIENT_INVENTORY_ID) {
        log::debug!("[Favorites] ConvenientInventory not loaded; favorite checks disabled.");
        return Box::new(NoFavorites);
    }
    match (
        registry.find_type(FAVORITES_HOLDER_TYPE),
        registry.find_type(FAVORITES_ENTRY_TYPE),
    ) {
        (Some(holder), Some(entry)) => {
            log::info!("[Favorites] Bound to ConvenientInventory favorite slots.");
            Box::new(ConvenientInventoryFavorites { holder, entry })
        }
        _ => {
            log::warn!(
                "[Favorites] ConvenientInventory is loaded but its types were not found; favorite checks disabled."
            );
            Box::new(NoFavorites)
        }
    }
}

/// Registry populated the way a healthy ConvenientInventory install would
/// look, with favorites enabled and the given slot flags.
#[cfg(test)]
pub(crate) fn convenient_inventory_registry(favorite_slots: Vec<bool>) -> ExtensionRegistry {
    let mut registry = ExtensionRegistry::new();
    registry.register_extension(CONVENIENT_INVENTORY_ID);

    let holder = ReflectedObject::new(FAVORITES_HOLDER_TYPE);
    holder.set_member(FAVORITE_SLOTS_MEMBER, favorite_slots);
    registry.register_type(Arc::new(holder));

    let entry = ReflectedObject::new(FAVORITES_ENTRY_TYPE);
    let config = ReflectedObject::new("ConvenientInventory.ModConfig");
    config.set_member(FAVORITES_ENABLED_MEMBER, true);
    entry.set_member(CONFIG_MEMBER, config);
    registry.register_type(Arc::new(entry));

    registry
}
