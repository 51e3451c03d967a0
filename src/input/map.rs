//! Pure key-to-action mapping for each game.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::blocks::BlocksAction;
use crate::fighter::FighterInputs;

use super::held::HeldKeys;

/// `q` or Ctrl-C leaves the arcade entirely.
pub fn should_quit(event: &Event) -> bool {
    match event {
        Event::Key(KeyEvent {
            code, modifiers, ..
        }) => {
            matches!(code, KeyCode::Char('q') | KeyCode::Char('Q'))
                || (*code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL))
        }
        _ => false,
    }
}

/// Esc closes the current game back to the menu.
pub fn is_close(code: KeyCode) -> bool {
    code == KeyCode::Esc
}

pub fn is_restart(code: KeyCode) -> bool {
    matches!(code, KeyCode::Char('r') | KeyCode::Char('R'))
}

/// Key presses only; release events never map to an action.
pub fn is_press(event: &KeyEvent) -> bool {
    event.kind != KeyEventKind::Release
}

pub fn blocks_action(code: KeyCode) -> Option<BlocksAction> {
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(BlocksAction::MoveLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(BlocksAction::MoveRight),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(BlocksAction::SoftDrop),
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(BlocksAction::Rotate),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(BlocksAction::Pause),
        _ => None,
    }
}

/// Assemble one frame of fighter intent from the held-key tracker.
pub fn fighter_inputs(held: &HeldKeys) -> FighterInputs {
    FighterInputs {
        left: held.is_held(KeyCode::Char('a')) || held.is_held(KeyCode::Left),
        right: held.is_held(KeyCode::Char('d')) || held.is_held(KeyCode::Right),
        jump: held.is_held(KeyCode::Char('w')) || held.is_held(KeyCode::Up),
        punch: held.is_held(KeyCode::Char('j')),
        kick: held.is_held(KeyCode::Char('k')),
        power: held.is_held(KeyCode::Char('u')),
    }
}
