//! File-backed logging.
//!
//! The terminal shell owns stderr's tty while it draws, so log records go to
//! a file instead: `RSVP_SYNC_LOG` when set, otherwise `rsvp-sync.log` in
//! the system temp directory.

use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use env_logger::{Builder, Env, Target};

pub const LOG_FILE_ENV: &str = "RSVP_SYNC_LOG";

fn default_log_file() -> PathBuf {
    std::env::temp_dir().join("rsvp-sync.log")
}

/// Resolves the log file from the value of `RSVP_SYNC_LOG`.
pub fn log_file_path(specified: Option<OsString>) -> PathBuf {
    specified
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(default_log_file)
}

/// Logger writing to `file`, filtered by `RUST_LOG` (default `warn`).
pub fn file_logger(file: File) -> Builder {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    builder.target(Target::Pipe(Box::new(file)));
    builder
}

/// Installs the global logger, appending to `path`.
pub fn init(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    file_logger(file).try_init().map_err(io::Error::other)
}
