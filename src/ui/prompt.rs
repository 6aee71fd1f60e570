//! Single-line command input opened by `:`, `/` or `@`.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use super::command::{command_to_app_event, parse_command};
use crate::app::AppEvent;

#[derive(Debug, Clone, PartialEq)]
pub enum PromptOutcome {
    /// Still editing.
    Editing,
    Cancelled,
    Submitted(AppEvent),
}

#[derive(Debug, Default)]
pub struct CommandLine {
    buffer: Option<String>,
}

impl CommandLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.buffer.is_some()
    }

    pub fn text(&self) -> Option<&str> {
        self.buffer.as_deref()
    }

    pub fn open(&mut self, leader: char) {
        self.buffer = Some(leader.to_string());
    }

    /// Feeds a key to the open prompt. Backspacing over the leader closes it.
    pub fn handle_key(&mut self, key: KeyEvent) -> PromptOutcome {
        let Some(buffer) = self.buffer.as_mut() else {
            return PromptOutcome::Cancelled;
        };
        if key.kind == KeyEventKind::Release {
            return PromptOutcome::Editing;
        }

        match key.code {
            KeyCode::Esc => {
                self.buffer = None;
                PromptOutcome::Cancelled
            }
            KeyCode::Enter => {
                let input = self.buffer.take().unwrap_or_default();
                PromptOutcome::Submitted(command_to_app_event(parse_command(&input)))
            }
            KeyCode::Backspace => {
                buffer.pop();
                if buffer.is_empty() {
                    self.buffer = None;
                    PromptOutcome::Cancelled
                } else {
                    PromptOutcome::Editing
                }
            }
            KeyCode::Char(c) => {
                buffer.push(c);
                PromptOutcome::Editing
            }
            _ => PromptOutcome::Editing,
        }
    }
}
