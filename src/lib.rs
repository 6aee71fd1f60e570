//! Rapid serial visual presentation reader.
//!
//! `reading` holds the token model and the pure pacing math, `engine` the
//! scheduler-driven playback state machine, `app` and `ui` the terminal
//! shell built on top of it.

pub mod app;
pub mod engine;
pub mod input;
pub mod logging;
pub mod reading;
pub mod ui;
