pub mod command;
pub mod keymap;
pub mod prompt;
pub mod reader;
pub mod terminal;
pub mod terminal_guard;
pub mod theme;

pub use command::{command_to_app_event, parse_command, Command};
pub use keymap::{map_key, KeyAction};
pub use prompt::{CommandLine, PromptOutcome};
pub use terminal::TuiManager;
pub use terminal_guard::TerminalGuard;
pub use theme::Theme;
