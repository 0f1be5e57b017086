//! Keyboard input mapping.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use game_core::Action;

/// What a key press asks the client to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputCommand {
    /// Leave the game loop.
    Quit,
    /// Store a directional action for the next round.
    Move(Action),
}

/// Maps a key event to a command, if it means anything to the game.
///
/// Arrow keys move (vi keys work too), `Esc` and `q` quit. Key releases and
/// repeats from terminals that report them are ignored.
pub fn map_key(key: KeyEvent) -> Option<InputCommand> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => Some(InputCommand::Quit),
        KeyCode::Right | KeyCode::Char('l') => Some(InputCommand::Move(Action::MoveRight)),
        KeyCode::Left | KeyCode::Char('h') => Some(InputCommand::Move(Action::MoveLeft)),
        KeyCode::Down | KeyCode::Char('j') => Some(InputCommand::Move(Action::MoveDown)),
        KeyCode::Up | KeyCode::Char('k') => Some(InputCommand::Move(Action::MoveUp)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, KeyModifiers};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn arrows_map_to_directions() {
        assert_eq!(
            map_key(press(KeyCode::Right)),
            Some(InputCommand::Move(Action::MoveRight))
        );
        assert_eq!(
            map_key(press(KeyCode::Up)),
            Some(InputCommand::Move(Action::MoveUp))
        );
    }

    #[test]
    fn escape_and_q_quit() {
        assert_eq!(map_key(press(KeyCode::Esc)), Some(InputCommand::Quit));
        assert_eq!(map_key(press(KeyCode::Char('q'))), Some(InputCommand::Quit));
    }

    #[test]
    fn unrelated_keys_are_ignored() {
        assert_eq!(map_key(press(KeyCode::Char('x'))), None);
        assert_eq!(map_key(press(KeyCode::Enter)), None);
    }

    #[test]
    fn key_releases_are_ignored() {
        let mut release = press(KeyCode::Right);
        release.kind = KeyEventKind::Release;
        assert_eq!(map_key(release), None);
    }
}
