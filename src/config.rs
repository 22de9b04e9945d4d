use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::input::{Button, Keybind, KeybindList};

// --- Mod Configuration ---

/// User-facing settings. Loaded once at startup and saved whenever the
/// settings surface commits an edit; the host owns the file location.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModConfig {
    /// Keybind(s) for draining the open container into the inventory.
    pub loot_hotkey: KeybindList,
    /// Close the container menu automatically once it has been emptied.
    pub close_menu_after_loot: bool,
    /// Whether the stow keybind is active at all.
    pub use_quick_stow_hotkey: bool,
    /// Keybind(s) for pushing inventory items into the open container.
    pub quick_stow_hotkey: KeybindList,
}

impl Default for ModConfig {
    fn default() -> Self {
        ModConfig {
            loot_hotkey: KeybindList::new(vec![
                Keybind::single(Button::Tab),
                Keybind::single(Button::LeftStick),
            ]),
            close_menu_after_loot: true,
            use_quick_stow_hotkey: false,
            quick_stow_hotkey: KeybindList::single(Button::Letter('L')),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ModConfig {
    pub fn load(path: &Path) -> Result<ModConfig, ConfigError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Loads the config, falling back to defaults when the file is missing
    /// and when it cannot be parsed. A broken file is reported once and left
    /// untouched rather than overwritten.
    pub fn load_or_default(path: &Path) -> ModConfig {
        match ModConfig::load(path) {
            Ok(config) => config,
            Err(ConfigError::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => {
                ModConfig::default()
            }
            Err(err) => {
                log::warn!("[Config] Could not read {}: {}. Using defaults.", path.display(), err);
                ModConfig::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}
