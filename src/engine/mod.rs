pub mod config;
pub mod error;
pub mod host;
pub mod pacer;
pub mod scheduler;

pub use config::{Config, PlaybackConfig, ThemeConfig, TimingConfig};
pub use error::ConfigError;
pub use host::{ReaderUi, Renderable};
pub use pacer::{Direction, Pacer};
pub use scheduler::{ManualScheduler, Scheduler, TimerId, WallClockScheduler};
