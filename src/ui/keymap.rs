//! Key bindings for the reader.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::AppEvent;
use crate::engine::Direction;

/// What a key press asks for.
#[derive(Debug, Clone, PartialEq)]
pub enum KeyAction {
    Event(AppEvent),
    /// Open the command line with the given leader (`:` or `/`).
    OpenPrompt(char),
    Ignore,
}

pub fn map_key(key: KeyEvent) -> KeyAction {
    if key.kind == KeyEventKind::Release {
        return KeyAction::Ignore;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let event = match key.code {
        KeyCode::Char('c') if ctrl => AppEvent::Quit,
        KeyCode::Char(' ') => AppEvent::TogglePlayback,
        KeyCode::Up => AppEvent::AdjustWpm(1),
        KeyCode::Down => AppEvent::AdjustWpm(-1),
        KeyCode::Left if ctrl => AppEvent::SkipParagraph(Direction::Backward),
        KeyCode::Right if ctrl => AppEvent::SkipParagraph(Direction::Forward),
        KeyCode::Left => AppEvent::SkipWords(Direction::Backward),
        KeyCode::Right => AppEvent::SkipWords(Direction::Forward),
        KeyCode::Char('[') => AppEvent::SkipParagraph(Direction::Backward),
        KeyCode::Char(']') => AppEvent::SkipParagraph(Direction::Forward),
        KeyCode::Char('p') => AppEvent::CycleProgress,
        KeyCode::Char('r') => AppEvent::Reset,
        KeyCode::Char('q') => AppEvent::Quit,
        KeyCode::Char('?') => AppEvent::Help,
        KeyCode::Char(leader @ (':' | '/' | '@')) => return KeyAction::OpenPrompt(leader),
        _ => return KeyAction::Ignore,
    };
    KeyAction::Event(event)
}
