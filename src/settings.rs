use crate::config::ModConfig;
use crate::input::KeybindList;

// --- Settings Surface ---

/// Identifier for one editable setting, for use by an external config UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettingId {
    LootHotkey,
    CloseMenuAfterLoot,
    UseQuickStowHotkey,
    QuickStowHotkey,
}

/// A typed setting value travelling between the config and the UI.
#[derive(Clone, Debug, PartialEq)]
pub enum SettingValue {
    Bool(bool),
    Keybinds(KeybindList),
}

pub struct SettingDescriptor {
    pub id: SettingId,
    pub name: &'static str,
    pub tooltip: &'static str,
}

/// The options a settings UI should offer, in display order.
pub const SETTINGS: &[SettingDescriptor] = &[
    SettingDescriptor {
        id: SettingId::CloseMenuAfterLoot,
        name: "Close menu after loot",
        tooltip: "Close the container menu automatically once everything has been looted.",
    },
    SettingDescriptor {
        id: SettingId::LootHotkey,
        name: "Loot hotkey",
        tooltip: "Keybind(s) that drain the open container into your inventory.",
    },
    SettingDescriptor {
        id: SettingId::UseQuickStowHotkey,
        name: "Enable stow hotkey",
        tooltip: "Whether the quick-stow keybind does anything.",
    },
    SettingDescriptor {
        id: SettingId::QuickStowHotkey,
        name: "Stow hotkey",
        tooltip: "Keybind(s) that push your inventory into the open container.",
    },
];

impl ModConfig {
    pub fn setting(&self, id: SettingId) -> SettingValue {
        match id {
            SettingId::LootHotkey => SettingValue::Keybinds(self.loot_hotkey.clone()),
            SettingId::CloseMenuAfterLoot => SettingValue::Bool(self.close_menu_after_loot),
            SettingId::UseQuickStowHotkey => SettingValue::Bool(self.use_quick_stow_hotkey),
            SettingId::QuickStowHotkey => SettingValue::Keybinds(self.quick_stow_hotkey.clone()),
        }
    }

    /// Applies a single edit from the settings UI. The caller saves the
    /// config afterwards; a wrong-typed value changes nothing.
    pub fn apply_setting(&mut self, id: SettingId, value: SettingValue) -> Result<(), String> {
        match (id, value) {
            (SettingId::LootHotkey, SettingValue::Keybinds(list)) => self.loot_hotkey = list,
            (SettingId::CloseMenuAfterLoot, SettingValue::Bool(flag)) => {
                self.close_menu_after_loot = flag
            }
            (SettingId::UseQuickStowHotkey, SettingValue::Bool(flag)) => {
                self.use_quick_stow_hotkey = flag
            }
            (SettingId::QuickStowHotkey, SettingValue::Keybinds(list)) => {
                self.quick_stow_hotkey = list
            }
            (id, value) => {
                return Err(format!("setting {:?} cannot take value {:?}", id, value));
            }
        }
        Ok(())
    }

    /// Resets every setting to its default in one step.
    pub fn reset_to_defaults(&mut self) {
        *self = ModConfig::default();
    }
}
