use crate::engine::{ReaderUi, Renderable};
use crate::reading::{Token, Word};

/// What the word area currently shows.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayItem {
    Word(Word),
    Break,
    Ready,
}

/// Screen state written by the pacing engine and read by the view.
///
/// Also the engine's rate provider: `wpm` is owned here and adjusted by the
/// shell.
#[derive(Debug, Clone)]
pub struct RenderState {
    pub current: DisplayItem,
    pub progress: String,
    pub playing: bool,
    pub wpm: u32,
    finished: bool,
}

impl RenderState {
    pub fn new(wpm: u32) -> Self {
        Self {
            current: DisplayItem::Ready,
            progress: String::new(),
            playing: false,
            wpm,
            finished: false,
        }
    }

    /// Returns true once after playback ran off the end.
    pub fn take_finished(&mut self) -> bool {
        std::mem::take(&mut self.finished)
    }
}

impl ReaderUi for RenderState {
    fn wpm(&self) -> u32 {
        self.wpm
    }

    fn render_word(&mut self, item: Renderable<'_>) {
        self.current = match item {
            Renderable::Token(Token::Word(word)) => DisplayItem::Word(word.clone()),
            Renderable::Token(Token::Break) => DisplayItem::Break,
            Renderable::Ready => DisplayItem::Ready,
        };
    }

    fn render_progress(&mut self, text: &str) {
        self.progress.clear();
        self.progress.push_str(text);
    }

    fn on_state_change(&mut self, playing: bool) {
        self.playing = playing;
    }

    fn on_finish(&mut self) {
        self.finished = true;
    }
}
