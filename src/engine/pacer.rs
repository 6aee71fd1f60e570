//! The pacing engine.
//!
//! Owns the token sequence, the cursor and the play flag, and steps through
//! the sequence one token per scheduled tick. The cursor always names the
//! next token to display: after any render of index `i`, `cursor == i + 1`.
//! Playback, skips, seeks and phrase sync all follow this rule, so resuming
//! never repeats the token already on screen.

use log::{debug, trace};

use crate::engine::config::TimingConfig;
use crate::engine::host::{ReaderUi, Renderable};
use crate::engine::scheduler::{Scheduler, TimerId};
use crate::reading::progress::{format_progress, ProgressMode};
use crate::reading::search::find_phrase_index;
use crate::reading::timing::{skip_jump_size, token_delay};
use crate::reading::Token;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Backward,
    Forward,
}

pub struct Pacer<U: ReaderUi, S: Scheduler> {
    tokens: Vec<Token>,
    cursor: usize,
    playing: bool,
    pending: Option<TimerId>,
    progress_mode: ProgressMode,
    config: TimingConfig,
    ui: U,
    scheduler: S,
}

impl<U: ReaderUi, S: Scheduler> Pacer<U, S> {
    pub fn new(ui: U, scheduler: S, config: TimingConfig) -> Self {
        Self {
            tokens: Vec::new(),
            cursor: 0,
            playing: false,
            pending: None,
            progress_mode: ProgressMode::default(),
            config,
            ui,
            scheduler,
        }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn progress_mode(&self) -> ProgressMode {
        self.progress_mode
    }

    pub fn config(&self) -> &TimingConfig {
        &self.config
    }

    pub fn has_pending_tick(&self) -> bool {
        self.pending.is_some()
    }

    pub fn ui(&self) -> &U {
        &self.ui
    }

    pub fn ui_mut(&mut self) -> &mut U {
        &mut self.ui
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Replaces the sequence and places the cursor at `start_index`, clamped
    /// to `[0, len]`. Playback is stopped, never started.
    pub fn load_content(&mut self, tokens: Vec<Token>, start_index: usize) {
        if self.playing {
            self.pause();
        } else {
            self.cancel_pending();
        }

        self.tokens = tokens;
        self.cursor = start_index.min(self.tokens.len());
        debug!(
            "loaded {} tokens, cursor at {}",
            self.tokens.len(),
            self.cursor
        );
        self.update_progress();
    }

    pub fn start(&mut self) {
        if self.tokens.is_empty() {
            return;
        }

        self.cancel_pending();
        if self.cursor >= self.tokens.len() {
            self.cursor = 0;
        }

        self.playing = true;
        debug!("playback started at {}", self.cursor);
        self.ui.on_state_change(true);
        self.step();
    }

    pub fn pause(&mut self) {
        self.playing = false;
        self.cancel_pending();
        self.ui.on_state_change(false);
    }

    pub fn toggle(&mut self) {
        if self.playing {
            self.pause();
        } else {
            self.start();
        }
    }

    pub fn reset(&mut self) {
        self.pause();
        self.cursor = 0;
        match self.tokens.first() {
            Some(token) => self.ui.render_word(Renderable::Token(token)),
            None => self.ui.render_word(Renderable::Ready),
        }
        debug!("reset");
        self.update_progress();
    }

    /// Continuation entry point. Ticks other than the one currently armed
    /// are stale and ignored.
    pub fn tick(&mut self, id: TimerId) {
        if self.pending != Some(id) {
            trace!("ignoring stale tick {:?}", id);
            return;
        }
        self.pending = None;
        self.step();
    }

    /// Jumps by a rate-dependent number of words and displays the landing
    /// token. Returns the jump size, `None` when nothing is loaded.
    pub fn skip_words(&mut self, direction: Direction) -> Option<usize> {
        let last = self.tokens.len().checked_sub(1)?;
        let jump = skip_jump_size(self.ui.wpm(), &self.config);

        let target = match direction {
            Direction::Backward => self.cursor.saturating_sub(jump),
            Direction::Forward => self.cursor.saturating_add(jump),
        };
        self.show(target.min(last));
        Some(jump)
    }

    /// Moves to the first word of the previous or next paragraph, measured
    /// from the token on screen. Returns the index displayed.
    pub fn skip_paragraph(&mut self, direction: Direction) -> Option<usize> {
        let last = self.tokens.len().checked_sub(1)?;
        let mut index = self.cursor.saturating_sub(1);

        match direction {
            Direction::Backward => {
                index = index.saturating_sub(2);
                while index > 0 && !self.tokens[index].is_break() {
                    index -= 1;
                }
                if self.tokens[index].is_break() {
                    index += 1;
                }
            }
            Direction::Forward => {
                while index < self.tokens.len() && !self.tokens[index].is_break() {
                    index += 1;
                }
                if index < self.tokens.len() {
                    index += 1;
                }
            }
        }

        Some(self.show(index.min(last)))
    }

    /// Displays the token at `index` (clamped) and resumes after it.
    pub fn jump_to(&mut self, index: usize) -> Option<usize> {
        let last = self.tokens.len().checked_sub(1)?;
        Some(self.show(index.min(last)))
    }

    /// Finds `phrase` in the loaded sequence and jumps to where it starts.
    /// On a miss the cursor is left alone.
    pub fn sync_to_phrase(&mut self, phrase: &str) -> Option<usize> {
        let index = find_phrase_index(&self.tokens, phrase)?;
        debug!("phrase found at {}", index);
        self.jump_to(index)
    }

    pub fn cycle_progress_mode(&mut self) -> ProgressMode {
        self.set_progress_mode(self.progress_mode.next());
        self.progress_mode
    }

    pub fn set_progress_mode(&mut self, mode: ProgressMode) {
        self.progress_mode = mode;
        self.update_progress();
    }

    pub fn update_progress(&mut self) {
        let text = format_progress(
            self.progress_mode,
            &self.tokens,
            self.cursor,
            self.ui.wpm(),
            &self.config,
        );
        self.ui.render_progress(&text);
    }

    fn step(&mut self) {
        if !self.playing {
            return;
        }

        if self.cursor >= self.tokens.len() {
            self.pause();
            self.cursor = 0;
            debug!("playback finished");
            self.ui.on_finish();
            return;
        }

        let index = self.cursor;
        self.ui.render_word(Renderable::Token(&self.tokens[index]));
        self.cursor = index + 1;
        self.update_progress();
        self.arm(index);
    }

    fn show(&mut self, index: usize) -> usize {
        self.cancel_pending();

        self.ui.render_word(Renderable::Token(&self.tokens[index]));
        self.cursor = index + 1;
        self.update_progress();

        if self.playing {
            self.arm(index);
        }
        index
    }

    /// Schedules the next step after the display time of `tokens[index]`.
    fn arm(&mut self, index: usize) {
        let delay = token_delay(&self.tokens[index], self.ui.wpm(), &self.config);
        let id = self.scheduler.schedule(delay);
        trace!("token {} shown, next tick in {:?}", index, delay);
        self.pending = Some(id);
    }

    fn cancel_pending(&mut self) {
        if let Some(id) = self.pending.take() {
            self.scheduler.cancel(id);
        }
    }
}
