use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent};
use log::debug;
use ratatui::{backend::CrosstermBackend, Terminal};

use super::keymap::{map_key, KeyAction};
use super::prompt::{CommandLine, PromptOutcome};
use super::reader::view;
use super::terminal_guard::TerminalGuard;
use super::theme::Theme;
use crate::app::{App, AppMode};
use crate::engine::Scheduler;

const RENDER_TICK: Duration = Duration::from_millis(1000 / 60);

pub struct TuiManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    theme: Theme,
    command_line: CommandLine,
    _guard: TerminalGuard,
}

impl TuiManager {
    pub fn new(theme: Theme) -> Result<Self, io::Error> {
        let guard = TerminalGuard::new()?;
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(TuiManager {
            terminal,
            theme,
            command_line: CommandLine::new(),
            _guard: guard,
        })
    }

    /// Runs until the app quits. Pending playback ticks bound the poll
    /// timeout so words change on time even without input.
    pub fn run_event_loop<S: Scheduler>(&mut self, app: &mut App<S>) -> io::Result<()> {
        loop {
            app.pump();
            self.render_frame(app)?;

            if app.mode() == AppMode::Quit {
                debug!("leaving event loop");
                return Ok(());
            }

            let timeout = app
                .time_until_next_tick()
                .map_or(RENDER_TICK, |due| due.min(RENDER_TICK));

            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key(app, key);
                }
            }
        }
    }

    fn handle_key<S: Scheduler>(&mut self, app: &mut App<S>, key: KeyEvent) {
        if self.command_line.is_open() {
            if let PromptOutcome::Submitted(event) = self.command_line.handle_key(key) {
                app.handle_event(event);
            }
            return;
        }

        match map_key(key) {
            KeyAction::Event(event) => app.handle_event(event),
            KeyAction::OpenPrompt(leader) => {
                app.clear_status();
                self.command_line.open(leader);
            }
            KeyAction::Ignore => {}
        }
    }

    pub fn render_frame<S: Scheduler>(&mut self, app: &App<S>) -> io::Result<()> {
        let theme = self.theme;
        let prompt = self.command_line.text();
        self.terminal
            .draw(|frame| view::draw(frame, app, prompt, &theme))?;
        Ok(())
    }
}
