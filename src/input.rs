use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// --- Buttons ---

/// A single physical input the host can report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Button {
    Tab,
    Space,
    Enter,
    Escape,
    LeftShift,
    LeftCtrl,
    LeftAlt,
    LeftStick,
    RightStick,
    ControllerA,
    ControllerB,
    ControllerX,
    ControllerY,
    /// A letter key, stored uppercase.
    Letter(char),
}

impl FromStr for Button {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Tab" => Ok(Button::Tab),
            "Space" => Ok(Button::Space),
            "Enter" => Ok(Button::Enter),
            "Escape" => Ok(Button::Escape),
            "LeftShift" | "Shift" => Ok(Button::LeftShift),
            "LeftControl" | "LeftCtrl" | "Ctrl" => Ok(Button::LeftCtrl),
            "LeftAlt" | "Alt" => Ok(Button::LeftAlt),
            "LeftStick" => Ok(Button::LeftStick),
            "RightStick" => Ok(Button::RightStick),
            "ControllerA" => Ok(Button::ControllerA),
            "ControllerB" => Ok(Button::ControllerB),
            "ControllerX" => Ok(Button::ControllerX),
            "ControllerY" => Ok(Button::ControllerY),
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_alphabetic() => {
                        Ok(Button::Letter(c.to_ascii_uppercase()))
                    }
                    _ => Err(format!("unknown button name '{}'", other)),
                }
            }
        }
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Button::Tab => write!(f, "Tab"),
            Button::Space => write!(f, "Space"),
            Button::Enter => write!(f, "Enter"),
            Button::Escape => write!(f, "Escape"),
            Button::LeftShift => write!(f, "LeftShift"),
            Button::LeftCtrl => write!(f, "LeftControl"),
            Button::LeftAlt => write!(f, "LeftAlt"),
            Button::LeftStick => write!(f, "LeftStick"),
            Button::RightStick => write!(f, "RightStick"),
            Button::ControllerA => write!(f, "ControllerA"),
            Button::ControllerB => write!(f, "ControllerB"),
            Button::ControllerX => write!(f, "ControllerX"),
            Button::ControllerY => write!(f, "ControllerY"),
            Button::Letter(c) => write!(f, "{}", c),
        }
    }
}

// --- Input Snapshot ---

/// The host's view of the input state at one button event: everything held
/// down, and the subset that went down on this very event.
#[derive(Clone, Debug, Default)]
pub struct InputSnapshot {
    held: HashSet<Button>,
    pressed: HashSet<Button>,
}

impl InputSnapshot {
    pub fn new() -> Self {
        InputSnapshot::default()
    }

    /// Marks a button as held from some earlier event.
    pub fn hold(mut self, button: Button) -> Self {
        self.held.insert(button);
        self
    }

    /// Marks a button as pressed on this event (and therefore held).
    pub fn press(mut self, button: Button) -> Self {
        self.held.insert(button);
        self.pressed.insert(button);
        self
    }

    pub fn is_down(&self, button: Button) -> bool {
        self.held.contains(&button)
    }

    pub fn was_pressed(&self, button: Button) -> bool {
        self.pressed.contains(&button)
    }
}

// --- Keybinds ---

/// One key combination: every button must be down and at least one of them
/// must have been pressed on this event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Keybind {
    buttons: Vec<Button>,
}

impl Keybind {
    pub fn single(button: Button) -> Self {
        Keybind {
            buttons: vec![button],
        }
    }

    pub fn just_pressed(&self, input: &InputSnapshot) -> bool {
        !self.buttons.is_empty()
            && self.buttons.iter().all(|b| input.is_down(*b))
            && self.buttons.iter().any(|b| input.was_pressed(*b))
    }
}

impl FromStr for Keybind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let buttons = s
            .split('+')
            .map(|part| part.trim().parse::<Button>())
            .collect::<Result<Vec<_>, _>>()?;
        if buttons.is_empty() {
            return Err("empty keybind".to_string());
        }
        Ok(Keybind { buttons })
    }
}

impl fmt::Display for Keybind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self.buttons.iter().map(|b| b.to_string()).collect();
        write!(f, "{}", names.join(" + "))
    }
}

/// A comma-separated list of alternative keybinds; the binding fires when
/// any one of them does.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeybindList {
    keybinds: Vec<Keybind>,
}

impl KeybindList {
    pub fn new(keybinds: Vec<Keybind>) -> Self {
        KeybindList { keybinds }
    }

    pub fn single(button: Button) -> Self {
        KeybindList {
            keybinds: vec![Keybind::single(button)],
        }
    }

    pub fn just_pressed(&self, input: &InputSnapshot) -> bool {
        self.keybinds.iter().any(|bind| bind.just_pressed(input))
    }
}

impl FromStr for KeybindList {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let keybinds = s
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| part.parse::<Keybind>())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(KeybindList { keybinds })
    }
}

impl fmt::Display for KeybindList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self.keybinds.iter().map(|b| b.to_string()).collect();
        write!(f, "{}", names.join(", "))
    }
}

// Keybind lists travel through config files in their display form
// ("Tab, LeftStick"), not as nested structures.
impl Serialize for KeybindList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for KeybindList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(D::Error::custom)
    }
}
