//! Keyboard shortcut registry and documentation.

use cadinput_core::{Command, Modifiers};

/// A keyboard shortcut definition.
#[derive(Debug, Clone)]
pub struct Shortcut {
    pub key: &'static str,
    pub modifiers: Modifiers,
    pub description: &'static str,
}

impl Shortcut {
    pub const fn new(key: &'static str, modifiers: Modifiers, description: &'static str) -> Self {
        Self {
            key,
            modifiers,
            description,
        }
    }

    /// Format the shortcut for display (e.g., "Ctrl+X").
    pub fn format(&self) -> String {
        let mut parts = Vec::new();
        if self.modifiers.ctrl {
            parts.push("Ctrl");
        }
        if self.modifiers.alt {
            parts.push("Alt");
        }
        if self.modifiers.shift {
            parts.push("Shift");
        }
        parts.push(self.key);
        parts.join("+")
    }

    pub fn command(&self) -> Option<Command> {
        Command::from_key(self.key, self.modifiers)
    }
}

/// Registry of all keyboard shortcuts.
pub struct ShortcutRegistry;

impl ShortcutRegistry {
    /// Get all registered shortcuts.
    pub fn all() -> Vec<Shortcut> {
        vec![
            Shortcut::new("X", Modifiers::CTRL, "Lock X"),
            Shortcut::new("Y", Modifiers::CTRL, "Lock Y"),
            Shortcut::new("A", Modifiers::CTRL, "Lock angle"),
            Shortcut::new("D", Modifiers::CTRL, "Lock distance"),
            Shortcut::new("X", Modifiers::SHIFT, "Toggle relative X"),
            Shortcut::new("Y", Modifiers::SHIFT, "Toggle relative Y"),
            Shortcut::new("A", Modifiers::SHIFT, "Toggle relative angle"),
            Shortcut::new("X", Modifiers::NONE, "Edit X"),
            Shortcut::new("Y", Modifiers::NONE, "Edit Y"),
            Shortcut::new("A", Modifiers::NONE, "Edit angle"),
            Shortcut::new("D", Modifiers::NONE, "Edit distance"),
            Shortcut::new("C", Modifiers::NONE, "Toggle construction mode"),
            Shortcut::new("P", Modifiers::NONE, "Cycle parallel/perpendicular"),
            Shortcut::new("Escape", Modifiers::NONE, "Cancel the current geometry"),
            Shortcut::new("Escape", Modifiers::SHIFT, "Unlock all"),
            Shortcut::new("Backspace", Modifiers::NONE, "Remove last point"),
            Shortcut::new("Delete", Modifiers::NONE, "Remove last point"),
        ]
    }

    /// Print all shortcuts to console.
    pub fn print_all() {
        println!("\n=== Keyboard Shortcuts ===");
        for shortcut in Self::all() {
            println!("  {:20} {}", shortcut.format(), shortcut.description);
        }
        println!();
    }
}
