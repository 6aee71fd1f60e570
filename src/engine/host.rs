use crate::reading::Token;

/// What the engine asks the host to put on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Renderable<'a> {
    Token(&'a Token),
    /// Placeholder shown when nothing is loaded.
    Ready,
}

/// Capabilities the host shell lends to the pacing engine.
///
/// These calls are the engine's only side effects; it never touches
/// presentation state directly.
pub trait ReaderUi {
    /// Current pacing rate. Must be at least 1 for playback.
    fn wpm(&self) -> u32;

    /// Called once per displayed token.
    fn render_word(&mut self, item: Renderable<'_>);

    fn render_progress(&mut self, text: &str);

    /// Fired on every start and pause.
    fn on_state_change(&mut self, playing: bool);

    /// Fired when playback runs off the end of the sequence.
    fn on_finish(&mut self);
}
