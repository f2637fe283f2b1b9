//! Keyboard input for the terminal game.
//!
//! Translates crossterm key events into driver commands. Nothing here
//! touches game state; commands are queued and applied on the next tick.

use crate::core::game_loop::GameCommand;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Result of handling a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Queue this command for the next tick.
    Command(GameCommand),
    /// Stop the driver and leave the game.
    Quit,
    /// Not a game key.
    Ignored,
}

/// Map one key event.
///
/// Space, Up and Enter flap (and restart after a crash), `r` restarts,
/// `d` toggles the debug overlay, Esc, `q` and Ctrl-C quit.
pub fn handle_key(key: KeyEvent) -> InputResult {
    // Some terminals report releases and repeats as separate events.
    if key.kind != KeyEventKind::Press {
        return InputResult::Ignored;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => InputResult::Quit,
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => {
            InputResult::Command(GameCommand::Jump)
        }
        KeyCode::Char('r') | KeyCode::Char('R') => InputResult::Command(GameCommand::Restart),
        KeyCode::Char('d') | KeyCode::Char('D') => InputResult::Command(GameCommand::ToggleDebug),
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => InputResult::Quit,
        _ => InputResult::Ignored,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_flap_keys() {
        for code in [KeyCode::Char(' '), KeyCode::Up, KeyCode::Enter] {
            assert_eq!(handle_key(press(code)), InputResult::Command(GameCommand::Jump));
        }
    }

    #[test]
    fn test_restart_and_debug_keys() {
        assert_eq!(
            handle_key(press(KeyCode::Char('r'))),
            InputResult::Command(GameCommand::Restart)
        );
        assert_eq!(
            handle_key(press(KeyCode::Char('d'))),
            InputResult::Command(GameCommand::ToggleDebug)
        );
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(handle_key(press(KeyCode::Esc)), InputResult::Quit);
        assert_eq!(handle_key(press(KeyCode::Char('q'))), InputResult::Quit);
        assert_eq!(
            handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            InputResult::Quit
        );
    }

    #[test]
    fn test_release_is_ignored() {
        let release = KeyEvent {
            code: KeyCode::Char(' '),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(handle_key(release), InputResult::Ignored);
    }

    #[test]
    fn test_other_keys_ignored() {
        assert_eq!(handle_key(press(KeyCode::Char('x'))), InputResult::Ignored);
        assert_eq!(handle_key(press(KeyCode::Left)), InputResult::Ignored);
    }
}
