//! Optical anchor letter for the word display.
//!
//! Words are shifted horizontally so the anchor letter stays in a fixed
//! column. The anchor is chosen from the grapheme count:
//! - 1 grapheme → 1st letter
//! - 2-5 → 2nd letter
//! - 6-9 → 3rd letter
//! - 10+ → 4th letter

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// 0-based grapheme index of the anchor letter.
pub fn calculate_anchor_position(word: &str) -> usize {
    match word.graphemes(true).count() {
        0..=1 => 0,
        2..=5 => 1,
        6..=9 => 2,
        _ => 3,
    }
}

/// A word cut around its anchor grapheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchoredWord<'a> {
    pub prefix: &'a str,
    pub anchor: &'a str,
    pub suffix: &'a str,
}

impl<'a> AnchoredWord<'a> {
    pub fn split(word: &'a str) -> Self {
        let position = calculate_anchor_position(word);
        match word.grapheme_indices(true).nth(position) {
            Some((start, grapheme)) => {
                let end = start + grapheme.len();
                Self {
                    prefix: &word[..start],
                    anchor: grapheme,
                    suffix: &word[end..],
                }
            }
            None => Self {
                prefix: word,
                anchor: "",
                suffix: "",
            },
        }
    }

    /// Terminal columns before the anchor letter.
    pub fn prefix_width(&self) -> usize {
        self.prefix.width()
    }
}

/// Column where a word must start so its anchor lands in the middle of an
/// area `width` columns wide.
pub fn start_column(word: &AnchoredWord<'_>, width: u16) -> u16 {
    let center = usize::from(width / 2);
    let start = center.saturating_sub(word.prefix_width());
    u16::try_from(start).unwrap_or(u16::MAX)
}
