use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// One whole currency unit, in cents
pub const UNIT: i64 = 100;

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    /// Stop or resume applying driver values
    TogglePause,
    ToggleAnimation,
    /// Add a signed number of cents
    Nudge(i64),
    Negate,
    /// Back to the configured starting value
    Reset,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Esc, _) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,

        (KeyCode::Char(' '), _) | (KeyCode::Char('p'), KeyModifiers::NONE) => Action::TogglePause,
        (KeyCode::Char('a'), KeyModifiers::NONE) => Action::ToggleAnimation,

        // Whole units
        (KeyCode::Char('k'), KeyModifiers::NONE) | (KeyCode::Up, _) => Action::Nudge(UNIT),
        (KeyCode::Char('j'), KeyModifiers::NONE) | (KeyCode::Down, _) => Action::Nudge(-UNIT),
        (KeyCode::Char('K'), _) | (KeyCode::PageUp, _) => Action::Nudge(1_000 * UNIT),
        (KeyCode::Char('J'), _) | (KeyCode::PageDown, _) => Action::Nudge(-1_000 * UNIT),

        // Cents
        (KeyCode::Char('l'), KeyModifiers::NONE) | (KeyCode::Right, _) => Action::Nudge(1),
        (KeyCode::Char('h'), KeyModifiers::NONE) | (KeyCode::Left, _) => Action::Nudge(-1),

        (KeyCode::Char('-'), _) | (KeyCode::Char('n'), KeyModifiers::NONE) => Action::Negate,
        (KeyCode::Char('r'), KeyModifiers::NONE) => Action::Reset,

        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(handle_key_event(key(KeyCode::Char('q'))), Action::Quit);
        assert_eq!(handle_key_event(key(KeyCode::Esc)), Action::Quit);
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Action::Quit
        );
    }

    #[test]
    fn test_nudges() {
        assert_eq!(handle_key_event(key(KeyCode::Up)), Action::Nudge(100));
        assert_eq!(handle_key_event(key(KeyCode::Char('j'))), Action::Nudge(-100));
        assert_eq!(handle_key_event(key(KeyCode::Char('l'))), Action::Nudge(1));
        assert_eq!(handle_key_event(key(KeyCode::Left)), Action::Nudge(-1));
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('K'), KeyModifiers::SHIFT)),
            Action::Nudge(100_000)
        );
    }

    #[test]
    fn test_toggles() {
        assert_eq!(handle_key_event(key(KeyCode::Char(' '))), Action::TogglePause);
        assert_eq!(handle_key_event(key(KeyCode::Char('a'))), Action::ToggleAnimation);
        assert_eq!(handle_key_event(key(KeyCode::Char('-'))), Action::Negate);
        assert_eq!(handle_key_event(key(KeyCode::Char('r'))), Action::Reset);
        assert_eq!(handle_key_event(key(KeyCode::Char('x'))), Action::None);
    }
}
