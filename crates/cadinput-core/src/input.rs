//! Pointer events and keyboard commands understood by a digitizing session.

use crate::constraints::Axis;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Modifier keys state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    #[serde(default)]
    pub shift: bool,
    #[serde(default)]
    pub ctrl: bool,
    #[serde(default)]
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers { shift: false, ctrl: false, alt: false };
    pub const SHIFT: Modifiers = Modifiers { shift: true, ctrl: false, alt: false };
    pub const CTRL: Modifiers = Modifiers { shift: false, ctrl: true, alt: false };
    pub const ALT: Modifiers = Modifiers { shift: false, ctrl: false, alt: true };

    fn lock_chord(self) -> bool {
        (self.ctrl || self.alt) && !self.shift
    }

    fn only_shift(self) -> bool {
        self == Self::SHIFT
    }
}

/// Pointer event in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PointerEvent {
    Down { position: Point, button: MouseButton },
    Up { position: Point, button: MouseButton },
    Move { position: Point },
}

impl PointerEvent {
    pub fn position(&self) -> Point {
        match self {
            PointerEvent::Down { position, .. }
            | PointerEvent::Up { position, .. }
            | PointerEvent::Move { position } => *position,
        }
    }
}

/// A discrete command triggered from the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", content = "axis", rename_all = "snake_case")]
pub enum Command {
    ToggleLock(Axis),
    ToggleRelative(Axis),
    /// Move keyboard focus to the axis field. Handled by the host UI.
    FocusField(Axis),
    ToggleConstruction,
    /// none -> parallel -> perpendicular -> none
    CycleAlign,
    UnlockAll,
    RemoveLastPoint,
    Cancel,
}

impl Command {
    /// Map a key press to a command.
    ///
    /// Keys are named as in the host's key events: single letters in any
    /// case, plus `"Escape"`, `"Backspace"` and `"Delete"`. Escape cancels the
    /// geometry; Shift+Escape only releases the locks.
    pub fn from_key(key: &str, modifiers: Modifiers) -> Option<Command> {
        let axis = match key.to_ascii_lowercase().as_str() {
            "x" => Some(Axis::X),
            "y" => Some(Axis::Y),
            "a" => Some(Axis::Angle),
            "d" => Some(Axis::Distance),
            _ => None,
        };

        if let Some(axis) = axis {
            return Some(if modifiers.lock_chord() {
                Command::ToggleLock(axis)
            } else if modifiers.only_shift() && axis != Axis::Distance {
                Command::ToggleRelative(axis)
            } else {
                Command::FocusField(axis)
            });
        }

        match key {
            "c" | "C" => Some(Command::ToggleConstruction),
            "p" | "P" => Some(Command::CycleAlign),
            "Escape" if modifiers.only_shift() => Some(Command::UnlockAll),
            "Escape" => Some(Command::Cancel),
            "Backspace" | "Delete" => Some(Command::RemoveLastPoint),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lock_chords() {
        assert_eq!(Command::from_key("x", Modifiers::CTRL), Some(Command::ToggleLock(Axis::X)));
        assert_eq!(Command::from_key("Y", Modifiers::ALT), Some(Command::ToggleLock(Axis::Y)));
        assert_eq!(
            Command::from_key("d", Modifiers::CTRL),
            Some(Command::ToggleLock(Axis::Distance))
        );
    }

    #[test]
    fn test_relative_chords() {
        assert_eq!(
            Command::from_key("a", Modifiers::SHIFT),
            Some(Command::ToggleRelative(Axis::Angle))
        );
        // Distance is always relative.
        assert_eq!(
            Command::from_key("d", Modifiers::SHIFT),
            Some(Command::FocusField(Axis::Distance))
        );
    }

    #[test]
    fn test_plain_keys() {
        assert_eq!(Command::from_key("x", Modifiers::NONE), Some(Command::FocusField(Axis::X)));
        assert_eq!(Command::from_key("c", Modifiers::NONE), Some(Command::ToggleConstruction));
        assert_eq!(Command::from_key("P", Modifiers::NONE), Some(Command::CycleAlign));
        assert_eq!(Command::from_key("Escape", Modifiers::NONE), Some(Command::Cancel));
        assert_eq!(Command::from_key("Escape", Modifiers::SHIFT), Some(Command::UnlockAll));
        assert_eq!(Command::from_key("Delete", Modifiers::NONE), Some(Command::RemoveLastPoint));
        assert_eq!(Command::from_key("q", Modifiers::NONE), None);
    }

    #[test]
    fn test_command_serde() {
        let json = serde_json::to_string(&Command::ToggleLock(Axis::Angle)).unwrap();
        assert_eq!(json, r#"{"command":"toggle_lock","axis":"angle"}"#);
        let back: Command = serde_json::from_str(r#"{"command":"cancel"}"#).unwrap();
        assert_eq!(back, Command::Cancel);
    }

    #[test]
    fn test_pointer_event_serde() {
        let json = r#"{"type":"down","position":{"x":1.0,"y":2.0},"button":"Left"}"#;
        let event: PointerEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.position(), Point::new(1.0, 2.0));
    }
}
