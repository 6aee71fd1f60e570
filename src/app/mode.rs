#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Nothing loaded yet
    Idle,
    Reading,
    Paused,
    Quit,
}
