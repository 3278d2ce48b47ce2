//! Keyboard shortcut mapping.
//!
//! Maps key + modifier combos to semantic `ShortcutAction`s so bindings
//! are shared across hosts. Platform-aware: ⌘ on macOS and Ctrl elsewhere
//! both count as the command modifier.

use crate::input::InputEvent;

/// Actions that keyboard shortcuts can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    // ── History ──
    Undo,
    Redo,

    // ── Style ──
    ToggleBold,
    ToggleItalic,
    ToggleUnderline,
    FontSizeUp,
    FontSizeDown,

    // ── Canvas ──
    AddText,
}

/// Resolves key events into shortcut actions.
pub struct ShortcutMap;

impl ShortcutMap {
    /// Resolve a key event to an action.
    ///
    /// `key` is the `KeyboardEvent.key` value (e.g. `"z"`, `"Enter"`).
    /// Returns `None` if the combo has no binding.
    pub fn resolve(
        key: &str,
        ctrl: bool,
        shift: bool,
        _alt: bool,
        meta: bool,
    ) -> Option<ShortcutAction> {
        let cmd = ctrl || meta;

        // ── Modifier combos first (most specific) ──
        if cmd && shift {
            return match key {
                "z" | "Z" => Some(ShortcutAction::Redo),
                _ => None,
            };
        }

        if cmd {
            return match key {
                "z" | "Z" => Some(ShortcutAction::Undo),
                "y" | "Y" => Some(ShortcutAction::Redo),
                "b" | "B" => Some(ShortcutAction::ToggleBold),
                "i" | "I" => Some(ShortcutAction::ToggleItalic),
                "u" | "U" => Some(ShortcutAction::ToggleUnderline),
                "=" | "+" => Some(ShortcutAction::FontSizeUp),
                "-" => Some(ShortcutAction::FontSizeDown),
                _ => None,
            };
        }

        match key {
            "Enter" => Some(ShortcutAction::AddText),
            _ => None,
        }
    }

    /// Resolve directly from a normalized input event.
    pub fn resolve_event(event: &InputEvent) -> Option<ShortcutAction> {
        match event {
            InputEvent::Key {
                key,
                ctrl,
                shift,
                alt,
                meta,
            } => Self::resolve(key, *ctrl, *shift, *alt, *meta),
            _ => None,
        }
    }
}
