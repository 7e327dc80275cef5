//! Key mapping from terminal events to run commands.

use crate::types::Command;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to run commands.
pub fn handle_key_event(key: KeyEvent) -> Option<Command> {
    if should_quit(key) {
        return Some(Command::Quit);
    }

    match key.code {
        KeyCode::Char(' ') | KeyCode::Char('p') | KeyCode::Char('P') => Some(Command::TogglePause),
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Up => Some(Command::SpeedUp),
        KeyCode::Char('-') | KeyCode::Char('_') | KeyCode::Down => Some(Command::SlowDown),
        _ => None,
    }
}

/// Check if key should end the run.
///
/// Raw mode swallows the interrupt signal, so Ctrl-C arrives as a key.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_quit_keys() {
        for code in [KeyCode::Char('q'), KeyCode::Char('Q'), KeyCode::Esc] {
            assert_eq!(handle_key_event(KeyEvent::from(code)), Some(Command::Quit));
        }
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(should_quit(ctrl_c));
        assert_eq!(handle_key_event(ctrl_c), Some(Command::Quit));
    }

    #[test]
    fn test_plain_c_does_not_quit() {
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('c'))), None);
    }

    #[test]
    fn test_pause_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char(' '))),
            Some(Command::TogglePause)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('p'))),
            Some(Command::TogglePause)
        );
    }

    #[test]
    fn test_speed_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('+'))),
            Some(Command::SpeedUp)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Down)),
            Some(Command::SlowDown)
        );
    }

    #[test]
    fn test_unmapped_key() {
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
    }
}
