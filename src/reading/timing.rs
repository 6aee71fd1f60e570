use std::time::Duration;

use crate::engine::config::TimingConfig;
use crate::reading::Token;

fn is_clause_terminator(c: char) -> bool {
    c == ',' || c == ';'
}

fn is_sentence_terminator(c: char) -> bool {
    matches!(c, '.' | '?' | '!' | ':' | '”' | '。')
}

/// Only the final character counts, so clause and sentence pauses never stack.
fn get_punctuation_multiplier(text: &str, config: &TimingConfig) -> f64 {
    match text.chars().last() {
        Some(c) if is_clause_terminator(c) => config.clause_multiplier,
        Some(c) if is_sentence_terminator(c) => config.sentence_multiplier,
        _ => 1.0,
    }
}

fn get_word_length_penalty(text: &str, config: &TimingConfig) -> f64 {
    let len = text.chars().count();
    if len > config.very_long_word_threshold {
        config.very_long_word_multiplier
    } else if len > config.long_word_threshold {
        config.long_word_multiplier
    } else {
        1.0
    }
}

/// Display-time multiplier for a token relative to the base per-word delay.
pub fn token_weight(token: &Token, config: &TimingConfig) -> f64 {
    match token {
        Token::Break => config.break_multiplier,
        Token::Word(word) => {
            get_punctuation_multiplier(&word.text, config)
                * get_word_length_penalty(&word.text, config)
        }
    }
}

/// Milliseconds per unit weight. Callers guarantee `wpm > 0`; zero is treated as 1.
pub fn base_delay_ms(wpm: u32) -> f64 {
    60_000.0 / f64::from(wpm.max(1))
}

pub fn token_delay(token: &Token, wpm: u32, config: &TimingConfig) -> Duration {
    let delay_ms = base_delay_ms(wpm) * token_weight(token, config);
    Duration::from_nanos((delay_ms * 1_000_000.0).round() as u64)
}

/// Words covered by one skip: `skip_seconds` of reading at `wpm`, floored at `min_skip_words`.
pub fn skip_jump_size(wpm: u32, config: &TimingConfig) -> usize {
    let jump = (f64::from(wpm) / 60.0 * f64::from(config.skip_seconds)).floor() as usize;
    jump.max(config.min_skip_words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reading::Word;

    fn weight(text: &str) -> f64 {
        token_weight(&Token::word(text), &TimingConfig::default())
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_break_weight() {
        assert_close(token_weight(&Token::Break, &TimingConfig::default()), 4.0);
    }

    #[test]
    fn test_plain_word_weight() {
        assert_close(weight("hello"), 1.0);
    }

    #[test]
    fn test_clause_punctuation() {
        assert_close(weight("hello,"), 2.0);
        assert_close(weight("hello;"), 2.0);
    }

    #[test]
    fn test_sentence_punctuation() {
        for text in ["end.", "what?", "wow!", "note:", "said”", "终。"] {
            assert_close(weight(text), 3.0);
        }
    }

    #[test]
    fn test_only_last_char_counts() {
        // "," is not final, "." is: sentence class only
        assert_close(weight("a,b."), 3.0);
        // "." is not final
        assert_close(weight("e.g"), 1.0);
        assert_close(weight("wait.,"), 2.0);
    }

    #[test]
    fn test_length_penalties() {
        assert_close(weight("abcdefghij"), 1.0); // 10 chars
        assert_close(weight("abcdefghijk"), 1.7); // 11 chars
        assert_close(weight("abcdefghijklmno"), 1.7); // 15 chars
        assert_close(weight("abcdefghijklmnop"), 2.0); // 16 chars
    }

    #[test]
    fn test_length_and_punctuation_multiply() {
        // 11 chars incl. the comma
        assert_close(weight("abcdefghij,"), 2.0 * 1.7);
        assert_close(weight("incomprehensibly."), 3.0 * 2.0);
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        assert_close(weight("ñññññññññññ"), 1.7);
        assert_close(weight("ñññññ"), 1.0);
    }

    #[test]
    fn test_emphasis_does_not_affect_weight() {
        let config = TimingConfig::default();
        let heading: Token = Word::new("Intro").bold().heading(1).into();
        assert_close(token_weight(&heading, &config), 1.0);
    }

    #[test]
    fn test_weight_respects_config() {
        let config = TimingConfig {
            sentence_multiplier: 2.5,
            break_multiplier: 5.0,
            ..TimingConfig::default()
        };
        assert_close(token_weight(&Token::word("end."), &config), 2.5);
        assert_close(token_weight(&Token::Break, &config), 5.0);
    }

    #[test]
    fn test_base_delay_ms() {
        assert_close(base_delay_ms(300), 200.0);
        assert_close(base_delay_ms(600), 100.0);
        assert_close(base_delay_ms(0), 60_000.0);
    }

    #[test]
    fn test_token_delay() {
        let config = TimingConfig::default();
        assert_eq!(
            token_delay(&Token::word("hello"), 300, &config),
            Duration::from_millis(200)
        );
        assert_eq!(
            token_delay(&Token::word("hello."), 300, &config),
            Duration::from_millis(600)
        );
        assert_eq!(
            token_delay(&Token::Break, 600, &config),
            Duration::from_millis(400)
        );
    }

    #[test]
    fn test_skip_jump_size() {
        let config = TimingConfig::default();
        assert_eq!(skip_jump_size(60, &config), 5);
        assert_eq!(skip_jump_size(150, &config), 5);
        assert_eq!(skip_jump_size(180, &config), 6);
        assert_eq!(skip_jump_size(300, &config), 10);
        assert_eq!(skip_jump_size(1200, &config), 40);
    }

    #[test]
    fn test_skip_jump_size_monotonic() {
        let config = TimingConfig::default();
        let mut previous = 0;
        for wpm in 1..=1500 {
            let jump = skip_jump_size(wpm, &config);
            assert!(jump >= previous);
            assert!(jump >= 5);
            previous = jump;
        }
    }
}
