//! Command line parsing
//!
//! Input typed after `:` or `/` in the reader is parsed here:
//! - `:q` or `:quit` → Quit
//! - `:h` or `:help` → Help
//! - `:wpm N` → set the reading rate
//! - `:goto N` → jump to word N
//! - `@path` → load a file
//! - `/phrase` → sync to the first occurrence of a phrase

use crate::app::AppEvent;

/// Commands that can be parsed from the command line
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Quit,
    Help,
    LoadFile(String),
    Find(String),
    SetWpm(u32),
    Goto(usize),
    Unknown(String),
}

pub fn parse_command(input: &str) -> Command {
    let input = input.trim();

    if input.is_empty() {
        return Command::Unknown(input.to_string());
    }

    if let Some(cmd) = input.strip_prefix(':') {
        let mut parts = cmd.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some("q" | "quit"), None, _) => Command::Quit,
            (Some("h" | "help"), None, _) => Command::Help,
            (Some("wpm"), Some(value), None) => value
                .parse()
                .map(Command::SetWpm)
                .unwrap_or_else(|_| Command::Unknown(input.to_string())),
            (Some("goto"), Some(value), None) => value
                .parse()
                .map(Command::Goto)
                .unwrap_or_else(|_| Command::Unknown(input.to_string())),
            _ => Command::Unknown(input.to_string()),
        }
    } else if let Some(rest) = input.strip_prefix('@') {
        let filename = rest.trim();
        if filename.is_empty() {
            Command::Unknown(input.to_string())
        } else {
            Command::LoadFile(filename.to_string())
        }
    } else if let Some(phrase) = input.strip_prefix('/') {
        let phrase = phrase.trim();
        if phrase.is_empty() {
            Command::Unknown(input.to_string())
        } else {
            Command::Find(phrase.to_string())
        }
    } else {
        Command::Unknown(input.to_string())
    }
}

/// Translates a parsed command into an AppEvent.
pub fn command_to_app_event(command: Command) -> AppEvent {
    match command {
        Command::Quit => AppEvent::Quit,
        Command::Help => AppEvent::Help,
        Command::LoadFile(path) => AppEvent::LoadFile(path),
        Command::Find(phrase) => AppEvent::FindPhrase(phrase),
        Command::SetWpm(wpm) => AppEvent::SetWpm(wpm),
        Command::Goto(index) => AppEvent::JumpTo(index),
        Command::Unknown(input) => AppEvent::InvalidCommand(input),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quit_variants() {
        assert_eq!(parse_command(":q"), Command::Quit);
        assert_eq!(parse_command(":quit"), Command::Quit);
    }

    #[test]
    fn test_parse_help_variants() {
        assert_eq!(parse_command(":h"), Command::Help);
        assert_eq!(parse_command(":help"), Command::Help);
    }

    #[test]
    fn test_parse_load_file() {
        assert_eq!(
            parse_command("@book.txt"),
            Command::LoadFile("book.txt".to_string())
        );
        assert_eq!(
            parse_command("@  tokens.json"),
            Command::LoadFile("tokens.json".to_string())
        );
    }

    #[test]
    fn test_parse_load_without_path() {
        assert!(matches!(parse_command("@"), Command::Unknown(_)));
    }

    #[test]
    fn test_parse_find_phrase() {
        assert_eq!(
            parse_command("/brown fox"),
            Command::Find("brown fox".to_string())
        );
        assert!(matches!(parse_command("/   "), Command::Unknown(_)));
    }

    #[test]
    fn test_parse_wpm() {
        assert_eq!(parse_command(":wpm 450"), Command::SetWpm(450));
        assert!(matches!(parse_command(":wpm fast"), Command::Unknown(_)));
        assert!(matches!(parse_command(":wpm"), Command::Unknown(_)));
        assert!(matches!(parse_command(":wpm 1 2"), Command::Unknown(_)));
    }

    #[test]
    fn test_parse_goto() {
        assert_eq!(parse_command(":goto 120"), Command::Goto(120));
        assert!(matches!(parse_command(":goto -3"), Command::Unknown(_)));
    }

    #[test]
    fn test_parse_empty_and_invalid() {
        assert!(matches!(parse_command(""), Command::Unknown(_)));
        assert!(matches!(parse_command("   "), Command::Unknown(_)));
        assert!(matches!(parse_command("invalid"), Command::Unknown(_)));
        assert!(matches!(parse_command(":quit now"), Command::Unknown(_)));
    }

    #[test]
    fn test_command_to_app_event() {
        assert_eq!(command_to_app_event(Command::Quit), AppEvent::Quit);
        assert_eq!(command_to_app_event(Command::Help), AppEvent::Help);
        assert_eq!(
            command_to_app_event(Command::LoadFile("a.txt".to_string())),
            AppEvent::LoadFile("a.txt".to_string())
        );
        assert_eq!(
            command_to_app_event(Command::Find("fox".to_string())),
            AppEvent::FindPhrase("fox".to_string())
        );
        assert_eq!(command_to_app_event(Command::SetWpm(500)), AppEvent::SetWpm(500));
        assert_eq!(command_to_app_event(Command::Goto(7)), AppEvent::JumpTo(7));
        assert!(matches!(
            command_to_app_event(Command::Unknown("x".to_string())),
            AppEvent::InvalidCommand(_)
        ));
    }
}
