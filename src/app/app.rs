use std::time::Duration;

use log::{debug, warn};

use super::event::AppEvent;
use super::mode::AppMode;
use super::render_state::RenderState;
use crate::engine::{
    Config, Direction, Pacer, PlaybackConfig, ReaderUi, Renderable, Scheduler, WallClockScheduler,
};
use crate::input;
use crate::reading::{ProgressMode, Token};

pub const HELP_TEXT: &str =
    "space play/pause  ←/→ skip  [/] paragraph  ↑/↓ speed  p progress  r reset  / find  @ load  : command  q quit";

const NOTHING_LOADED: &str = "Load a document first (@file)";

/// The host shell: owns the pacing engine and turns user intents into
/// engine calls plus short status messages.
pub struct App<S: Scheduler = WallClockScheduler> {
    engine: Pacer<RenderState, S>,
    playback: PlaybackConfig,
    source: Option<String>,
    status: Option<String>,
    quit: bool,
}

impl<S: Scheduler> App<S> {
    pub fn new(config: &Config, scheduler: S) -> Self {
        let ui = RenderState::new(config.playback.default_wpm);
        let mut engine = Pacer::new(ui, scheduler, config.timing.clone());
        engine.set_progress_mode(config.playback.progress_mode);

        Self {
            engine,
            playback: config.playback.clone(),
            source: None,
            status: None,
            quit: false,
        }
    }

    pub fn mode(&self) -> AppMode {
        if self.quit {
            AppMode::Quit
        } else if self.engine.tokens().is_empty() {
            AppMode::Idle
        } else if self.engine.is_playing() {
            AppMode::Reading
        } else {
            AppMode::Paused
        }
    }

    pub fn engine(&self) -> &Pacer<RenderState, S> {
        &self.engine
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        self.engine.scheduler_mut()
    }

    pub fn render_state(&self) -> &RenderState {
        self.engine.ui()
    }

    pub fn wpm(&self) -> u32 {
        self.engine.ui().wpm()
    }

    pub fn progress_mode(&self) -> ProgressMode {
        self.engine.progress_mode()
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }

    /// Loads a token sequence and shows the token at `start_index`. The
    /// shown token counts as read, so playback and skips continue after it.
    pub fn load_tokens(&mut self, tokens: Vec<Token>, source: String, start_index: usize) {
        self.engine.load_content(tokens, start_index);

        let start = self.engine.cursor();
        if self.engine.jump_to(start).is_none() {
            self.engine.ui_mut().render_word(Renderable::Ready);
        }

        if start > 0 {
            self.set_status(format!("Resumed at word {}", start));
        } else {
            self.set_status(format!("Loaded {}", source));
        }
        self.source = Some(source);
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        debug!("event: {:?}", event);
        match event {
            AppEvent::TogglePlayback => {
                if self.require_content() {
                    self.engine.toggle();
                }
            }
            AppEvent::Reset => {
                self.engine.reset();
                self.set_status("Reset");
            }
            AppEvent::SkipWords(direction) => {
                if let Some(jump) = self.engine.skip_words(direction) {
                    let message = match direction {
                        Direction::Backward => format!("⏪ -{}", jump),
                        Direction::Forward => format!("⏩ +{}", jump),
                    };
                    self.set_status(message);
                }
            }
            AppEvent::SkipParagraph(direction) => {
                if self.engine.skip_paragraph(direction).is_some() {
                    let message = match direction {
                        Direction::Backward => "⏮ Paragraph start",
                        Direction::Forward => "⏭ Next paragraph",
                    };
                    self.set_status(message);
                }
            }
            AppEvent::AdjustWpm(steps) => {
                let delta = i64::from(steps) * i64::from(self.playback.wpm_step);
                self.set_wpm_clamped(i64::from(self.wpm()) + delta);
            }
            AppEvent::SetWpm(wpm) => self.set_wpm_clamped(i64::from(wpm)),
            AppEvent::CycleProgress => {
                self.engine.cycle_progress_mode();
            }
            AppEvent::FindPhrase(phrase) => {
                if self.require_content() {
                    match self.engine.sync_to_phrase(&phrase) {
                        Some(_) => self.set_status("Synced!"),
                        None => self.set_status("Phrase not found."),
                    }
                }
            }
            AppEvent::JumpTo(index) => {
                if self.require_content() {
                    if let Some(shown) = self.engine.jump_to(index) {
                        self.set_status(format!("Jump to word {}", shown));
                    }
                }
            }
            AppEvent::LoadFile(path) => match input::load(&path) {
                Ok(doc) => self.load_tokens(doc.tokens, doc.source, 0),
                Err(err) => {
                    warn!("failed to load {}: {}", path, err);
                    self.set_status(err.to_string());
                }
            },
            AppEvent::Quit => {
                if self.engine.is_playing() {
                    self.engine.pause();
                }
                self.quit = true;
            }
            AppEvent::Help => self.set_status(HELP_TEXT),
            AppEvent::Warning(message) => self.set_status(message),
            AppEvent::InvalidCommand(command) => {
                self.set_status(format!("Unknown command: {}", command))
            }
            AppEvent::None => {}
        }
    }

    /// Delivers every expired timer to the engine. Returns true when at
    /// least one tick ran.
    pub fn pump(&mut self) -> bool {
        let mut fired = false;
        while let Some(id) = self.engine.scheduler_mut().poll_due() {
            self.engine.tick(id);
            fired = true;
        }

        if self.engine.ui_mut().take_finished() {
            self.set_status("Finished");
        }
        fired
    }

    pub fn time_until_next_tick(&self) -> Option<Duration> {
        self.engine.scheduler().time_until_next()
    }

    fn set_wpm_clamped(&mut self, wpm: i64) {
        let wpm = self.playback.clamp_wpm(wpm);
        self.engine.ui_mut().wpm = wpm;
        self.engine.update_progress();
        self.set_status(format!("Speed: {} WPM", wpm));
    }

    fn require_content(&mut self) -> bool {
        if self.engine.tokens().is_empty() {
            self.set_status(NOTHING_LOADED);
            return false;
        }
        true
    }
}
