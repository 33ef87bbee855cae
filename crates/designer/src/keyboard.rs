//! Keyboard shortcut mapping for the design canvas
//!
//! Pure translation from key events to designer actions. Shortcuts are
//! suppressed entirely while a text-input element has focus, so typing in
//! a name field never deletes slots.

/// Direction of an arrow-key nudge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NudgeDirection {
    Up,
    Down,
    Left,
    Right,
}

/// Keys the designer reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Delete,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    KeyZ,
    KeyD,
}

/// Modifier state at the time of the key event. `command` is Cmd on macOS
/// and Ctrl elsewhere.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub command: bool,
    pub shift: bool,
}

/// Action a shortcut resolves to
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DesignerAction {
    Deselect,
    RemoveActive,
    Undo,
    Redo,
    DuplicateActive,
    Nudge(NudgeDirection, f64),
}

/// Base arrow-key nudge in page percent; Shift multiplies by 5
pub const ARROW_NUDGE_PERCENT: f64 = 1.0;

/// Map a key event to a designer action, or `None` when the event should
/// fall through (unbound key, or a text input has focus).
pub fn resolve_shortcut(
    key: Key,
    mods: Modifiers,
    text_input_focused: bool,
) -> Option<DesignerAction> {
    if text_input_focused {
        return None;
    }
    let nudge = if mods.shift {
        ARROW_NUDGE_PERCENT * 5.0
    } else {
        ARROW_NUDGE_PERCENT
    };
    match key {
        Key::Escape => Some(DesignerAction::Deselect),
        Key::Delete => Some(DesignerAction::RemoveActive),
        Key::KeyZ if mods.command && mods.shift => Some(DesignerAction::Redo),
        Key::KeyZ if mods.command => Some(DesignerAction::Undo),
        Key::KeyD if mods.command => Some(DesignerAction::DuplicateActive),
        Key::ArrowUp => Some(DesignerAction::Nudge(NudgeDirection::Up, nudge)),
        Key::ArrowDown => Some(DesignerAction::Nudge(NudgeDirection::Down, nudge)),
        Key::ArrowLeft => Some(DesignerAction::Nudge(NudgeDirection::Left, nudge)),
        Key::ArrowRight => Some(DesignerAction::Nudge(NudgeDirection::Right, nudge)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CMD: Modifiers = Modifiers { command: true, shift: false };
    const CMD_SHIFT: Modifiers = Modifiers { command: true, shift: true };

    #[test]
    fn test_undo_redo_shortcuts() {
        assert_eq!(
            resolve_shortcut(Key::KeyZ, CMD, false),
            Some(DesignerAction::Undo)
        );
        assert_eq!(
            resolve_shortcut(Key::KeyZ, CMD_SHIFT, false),
            Some(DesignerAction::Redo)
        );
    }

    #[test]
    fn test_plain_z_is_unbound() {
        assert_eq!(resolve_shortcut(Key::KeyZ, Modifiers::default(), false), None);
    }

    #[test]
    fn test_shift_multiplies_nudge() {
        let shift = Modifiers { command: false, shift: true };
        assert_eq!(
            resolve_shortcut(Key::ArrowLeft, shift, false),
            Some(DesignerAction::Nudge(NudgeDirection::Left, 5.0))
        );
        assert_eq!(
            resolve_shortcut(Key::ArrowLeft, Modifiers::default(), false),
            Some(DesignerAction::Nudge(NudgeDirection::Left, 1.0))
        );
    }

    #[test]
    fn test_text_input_focus_suppresses_everything() {
        assert_eq!(resolve_shortcut(Key::Delete, Modifiers::default(), true), None);
        assert_eq!(resolve_shortcut(Key::KeyZ, CMD, true), None);
    }
}
