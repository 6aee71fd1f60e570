use crate::engine::Direction;

/// Application events
#[derive(Debug, PartialEq, Clone)]
pub enum AppEvent {
    TogglePlayback,
    Reset,
    SkipWords(Direction),
    SkipParagraph(Direction),
    /// Speed change in configured steps (+1 faster, -1 slower)
    AdjustWpm(i32),
    SetWpm(u32),
    CycleProgress,
    FindPhrase(String),
    JumpTo(usize),
    LoadFile(String),
    Quit,
    Help,
    Warning(String),
    InvalidCommand(String),
    None,
}
