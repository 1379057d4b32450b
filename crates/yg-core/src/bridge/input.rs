//! Input normalization
//!
//! Raw host events carry the path of targets they passed through, innermost
//! first. Only events that originate from a year control become grid input.

use serde::{Serialize, Deserialize};
use tracing::trace;

use crate::grid::GridInput;
use crate::navigation::NavigationCommand;

/// Kind of element an event passed through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    YearControl,
    Other,
}

/// One element of an event's path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventTarget {
    pub kind: TargetKind,
    /// Raw year attribute as stored on the control
    pub year_attr: Option<String>,
}

impl EventTarget {
    /// A year button carrying its year
    pub fn year_control(year: i32) -> Self {
        Self {
            kind: TargetKind::YearControl,
            year_attr: Some(year.to_string()),
        }
    }

    /// Anything that is not a year button
    pub fn other() -> Self {
        Self { kind: TargetKind::Other, year_attr: None }
    }

    fn year(&self) -> Option<i32> {
        if self.kind != TargetKind::YearControl {
            return None;
        }
        self.year_attr.as_deref()?.trim().parse().ok()
    }
}

/// Key identifiers, named after DOM `KeyboardEvent.key` values
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum KeyCode {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Tab,
    Enter,
    Space,
    Other(String),
}

impl KeyCode {
    pub fn from_key_name(name: &str) -> Self {
        match name {
            "ArrowUp" | "Up" => KeyCode::ArrowUp,
            "ArrowDown" | "Down" => KeyCode::ArrowDown,
            "ArrowLeft" | "Left" => KeyCode::ArrowLeft,
            "ArrowRight" | "Right" => KeyCode::ArrowRight,
            "Tab" => KeyCode::Tab,
            "Enter" => KeyCode::Enter,
            " " | "Space" | "Spacebar" => KeyCode::Space,
            other => KeyCode::Other(other.to_string()),
        }
    }

    pub fn key_name(&self) -> &str {
        match self {
            KeyCode::ArrowUp => "ArrowUp",
            KeyCode::ArrowDown => "ArrowDown",
            KeyCode::ArrowLeft => "ArrowLeft",
            KeyCode::ArrowRight => "ArrowRight",
            KeyCode::Tab => "Tab",
            KeyCode::Enter => "Enter",
            KeyCode::Space => " ",
            KeyCode::Other(name) => name,
        }
    }
}

impl From<String> for KeyCode {
    fn from(name: String) -> Self {
        KeyCode::from_key_name(&name)
    }
}

impl From<&str> for KeyCode {
    fn from(name: &str) -> Self {
        KeyCode::from_key_name(name)
    }
}

impl From<KeyCode> for String {
    fn from(code: KeyCode) -> Self {
        code.key_name().to_string()
    }
}

/// Raw input as delivered by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawInput {
    Pointer { path: Vec<EventTarget> },
    Key { code: KeyCode, path: Vec<EventTarget> },
}

impl RawInput {
    /// Pointer click landing on the button for `year`
    pub fn click_on(year: i32) -> Self {
        RawInput::Pointer { path: vec![EventTarget::year_control(year)] }
    }

    /// Key press while the button for `year` holds focus
    pub fn key_on(code: impl Into<KeyCode>, year: i32) -> Self {
        RawInput::Key {
            code: code.into(),
            path: vec![EventTarget::year_control(year)],
        }
    }

    fn path(&self) -> &[EventTarget] {
        match self {
            RawInput::Pointer { path } | RawInput::Key { path, .. } => path,
        }
    }

    /// Year of the first year control on the event path
    pub fn origin_year(&self) -> Option<i32> {
        self.path().iter().find_map(EventTarget::year)
    }
}

/// Keyboard command mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMap {
    /// Whether activation keys commit the focused year
    pub keyboard_commit: bool,
    pub activation_keys: Vec<KeyCode>,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            keyboard_commit: true,
            activation_keys: vec![KeyCode::Enter, KeyCode::Space],
        }
    }
}

impl KeyMap {
    /// Grid input for a key, if it means anything to the grid
    pub fn input_for(&self, code: &KeyCode) -> Option<GridInput> {
        let command = match code {
            KeyCode::ArrowUp => NavigationCommand::MoveUp,
            KeyCode::ArrowDown => NavigationCommand::MoveDown,
            KeyCode::ArrowLeft => NavigationCommand::MoveLeft,
            KeyCode::ArrowRight => NavigationCommand::MoveRight,
            KeyCode::Tab => return Some(GridInput::Passthrough),
            code if self.keyboard_commit && self.activation_keys.contains(code) => {
                NavigationCommand::Activate
            }
            _ => return None,
        };
        Some(GridInput::Command(command))
    }
}

/// Map a raw host event to grid input
///
/// Events that did not pass through a year control, or whose year attribute
/// does not parse, produce nothing.
pub fn normalize_input(raw: &RawInput, keymap: &KeyMap) -> Option<GridInput> {
    let Some(year) = raw.origin_year() else {
        trace!("Ignoring input outside of year controls: {:?}", raw);
        return None;
    };

    match raw {
        RawInput::Pointer { .. } => Some(GridInput::Command(NavigationCommand::DirectSelect(year))),
        RawInput::Key { code, .. } => keymap.input_for(code),
    }
}
