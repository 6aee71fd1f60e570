//! Progress reporting for the pacing engine.
//!
//! `current` is always the cursor: the number of tokens already displayed.
//! Percent therefore reads 100% exactly when the cursor reaches the end.

use serde::{Deserialize, Serialize};

use crate::engine::config::TimingConfig;
use crate::reading::timing::token_weight;
use crate::reading::Token;

/// Shown in time-remaining mode when the rate is unusable.
pub const UNKNOWN_TIME: &str = "--";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProgressMode {
    Off,
    #[default]
    Percent,
    Fraction,
    TimeRemaining,
}

impl ProgressMode {
    pub const ALL: [ProgressMode; 4] = [
        ProgressMode::Off,
        ProgressMode::Percent,
        ProgressMode::Fraction,
        ProgressMode::TimeRemaining,
    ];

    /// Next mode in the cycle, wrapping back to `Off`.
    pub fn next(self) -> Self {
        match self {
            ProgressMode::Off => ProgressMode::Percent,
            ProgressMode::Percent => ProgressMode::Fraction,
            ProgressMode::Fraction => ProgressMode::TimeRemaining,
            ProgressMode::TimeRemaining => ProgressMode::Off,
        }
    }
}

pub fn format_progress(
    mode: ProgressMode,
    tokens: &[Token],
    cursor: usize,
    wpm: u32,
    config: &TimingConfig,
) -> String {
    if tokens.is_empty() {
        return String::new();
    }

    let total = tokens.len();
    let current = cursor.min(total);

    match mode {
        ProgressMode::Off => String::new(),
        ProgressMode::Percent => format!("{}%", current * 100 / total),
        ProgressMode::Fraction => format!("{} / {}", current, total),
        ProgressMode::TimeRemaining => estimate_minutes_remaining(tokens, current, wpm, config)
            .map(format_minutes)
            .unwrap_or_else(|| UNKNOWN_TIME.to_string()),
    }
}

/// Minutes needed to read `tokens[from..]` at `wpm`; `None` when `wpm` is zero.
///
/// Short remainders are summed token by token. Above `exact_estimate_limit`
/// an average weight stands in for the scan.
pub fn estimate_minutes_remaining(
    tokens: &[Token],
    from: usize,
    wpm: u32,
    config: &TimingConfig,
) -> Option<f64> {
    if wpm == 0 {
        return None;
    }

    let remaining = &tokens[from.min(tokens.len())..];
    let weight = if remaining.len() < config.exact_estimate_limit {
        remaining
            .iter()
            .map(|token| token_weight(token, config))
            .sum::<f64>()
    } else {
        remaining.len() as f64 * config.average_weight
    };

    Some(weight / f64::from(wpm))
}

pub fn format_minutes(total_minutes: f64) -> String {
    if total_minutes < 1.0 {
        return "< 1m".to_string();
    }

    let hours = (total_minutes / 60.0).floor() as u64;
    let minutes = (total_minutes % 60.0).floor() as u64;
    if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{}m", minutes)
    }
}
