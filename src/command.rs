use crate::game::Direction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Something the player asked for
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    Quit,
    Turn(Direction),
    TogglePause,
    Restart,
}

impl Command {
    pub(crate) fn from_key_event(ev: KeyEvent) -> Option<Command> {
        let normal_modifiers = KeyModifiers::NONE | KeyModifiers::SHIFT;
        if (ev.modifiers, ev.code) == (KeyModifiers::CONTROL, KeyCode::Char('c')) {
            return Some(Command::Quit);
        }
        if !normal_modifiers.contains(ev.modifiers) {
            return None;
        }
        match ev.code {
            KeyCode::Char('w' | 'W' | 'k') | KeyCode::Up => Some(Command::Turn(Direction::North)),
            KeyCode::Char('s' | 'S' | 'j') | KeyCode::Down => Some(Command::Turn(Direction::South)),
            KeyCode::Char('a' | 'A' | 'h') | KeyCode::Left => Some(Command::Turn(Direction::West)),
            KeyCode::Char('d' | 'D' | 'l') | KeyCode::Right => Some(Command::Turn(Direction::East)),
            KeyCode::Char('p' | 'P') => Some(Command::TogglePause),
            KeyCode::Char('r' | 'R') => Some(Command::Restart),
            KeyCode::Char('q' | 'Q') | KeyCode::Esc => Some(Command::Quit),
            _ => None,
        }
    }
}
