use crate::menus::Menu;

// --- Known-Incompatible Menus ---

/// CJB Item Spawner reuses the generic grab-menu surface for its browsing
/// UI. Draining it would duplicate items; stowing into it would destroy
/// them. Its menus are matched by reported type name and skipped entirely.
pub(crate) const ITEM_SPAWNER_MENU_TYPE: &str = "CJBItemSpawner.Framework.ItemMenu";

pub(crate) fn is_excluded_menu(menu: &Menu) -> bool {
    menu.type_name == ITEM_SPAWNER_MENU_TYPE || menu.type_name.contains(ITEM_SPAWNER_MENU_TYPE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::containers::ContainerId;
    use crate::menus::MenuBacking;

    #[test]
    fn matches_exact_and_embedded_type_names() {
        let backing = || MenuBacking::Container(ContainerId(0));
        let exact = Menu::item_grab("CJBItemSpawner.Framework.ItemMenu", backing());
        let embedded = Menu::item_grab("Proxy<CJBItemSpawner.Framework.ItemMenu>", backing());
        let ordinary = Menu::item_grab("Menus.ItemGrabMenu", backing());
        assert!(is_excluded_menu(&exact));
        assert!(is_excluded_menu(&embedded));
        assert!(!is_excluded_menu(&ordinary));
    }
}
