//! Phrase search used to re-synchronize playback against outside text.
//!
//! Matching is case-insensitive and ignores punctuation. Breaks never take
//! part in a match and never interrupt one.

use crate::reading::Token;

/// Accented letters kept alongside ASCII word characters.
const ACCENTED_LETTERS: [char; 7] = ['á', 'é', 'í', 'ó', 'ú', 'ñ', 'ü'];

fn is_kept_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || ACCENTED_LETTERS.contains(&c)
}

/// Lowercases `raw` and drops every character that is not an ASCII word
/// character or one of the accented allowlist.
pub fn normalize_word(raw: &str) -> String {
    raw.chars()
        .flat_map(char::to_lowercase)
        .filter(|&c| is_kept_char(c))
        .collect()
}

/// Splits a free-text phrase into normalized query words, dropping words
/// that normalize to nothing.
pub fn normalize_phrase(phrase: &str) -> Vec<String> {
    phrase
        .split_whitespace()
        .map(normalize_word)
        .filter(|word| !word.is_empty())
        .collect()
}

/// Index of the first word token that starts a full match of `phrase`.
///
/// Each occurrence of the first query word is tried once as an anchor; the
/// following query words must appear on the next word tokens in order, with
/// any breaks in between skipped. `None` for an empty or punctuation-only
/// phrase.
pub fn find_phrase_index(tokens: &[Token], phrase: &str) -> Option<usize> {
    let query = normalize_phrase(phrase);
    let (first, rest) = query.split_first()?;

    tokens.iter().enumerate().find_map(|(index, token)| {
        let text = token.text()?;
        if normalize_word(text) != *first {
            return None;
        }
        matches_from(&tokens[index + 1..], rest).then_some(index)
    })
}

fn matches_from(tokens: &[Token], query: &[String]) -> bool {
    let mut words = tokens.iter().filter_map(Token::text);
    query.iter().all(|expected| {
        words
            .next()
            .is_some_and(|text| normalize_word(text) == *expected)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reading::tokenize_text;

    #[test]
    fn test_normalize_word() {
        assert_eq!(normalize_word("Hello,"), "hello");
        assert_eq!(normalize_word("“Quoted!”"), "quoted");
        assert_eq!(normalize_word("snake_case"), "snake_case");
        assert_eq!(normalize_word("R2-D2"), "r2d2");
        assert_eq!(normalize_word("—"), "");
    }

    #[test]
    fn test_normalize_keeps_accent_allowlist() {
        assert_eq!(normalize_word("Niño"), "niño");
        assert_eq!(normalize_word("ÉPOCA"), "época");
        assert_eq!(normalize_word("pingüino"), "pingüino");
        // Not in the allowlist
        assert_eq!(normalize_word("garçon"), "garon");
        assert_eq!(normalize_word("è"), "");
    }

    #[test]
    fn test_normalize_phrase_drops_empty_words() {
        assert_eq!(normalize_phrase("  The -- quick!  "), vec!["the", "quick"]);
        assert!(normalize_phrase("... ,, !").is_empty());
    }

    #[test]
    fn test_find_simple_phrase() {
        let tokens = tokenize_text("The quick brown fox");
        assert_eq!(find_phrase_index(&tokens, "quick brown"), Some(1));
        assert_eq!(find_phrase_index(&tokens, "slow brown"), None);
    }

    #[test]
    fn test_find_is_case_and_punctuation_insensitive() {
        let tokens = tokenize_text("Well, said the Fox. \"Indeed!\"");
        assert_eq!(find_phrase_index(&tokens, "the fox indeed"), Some(2));
        assert_eq!(find_phrase_index(&tokens, "WELL SAID"), Some(0));
    }

    #[test]
    fn test_single_word_phrase() {
        let tokens = tokenize_text("alpha beta gamma beta");
        assert_eq!(find_phrase_index(&tokens, "beta"), Some(1));
    }

    #[test]
    fn test_empty_phrase_not_found() {
        let tokens = tokenize_text("some words here");
        assert_eq!(find_phrase_index(&tokens, ""), None);
        assert_eq!(find_phrase_index(&tokens, "   \t "), None);
        assert_eq!(find_phrase_index(&tokens, "?! ..."), None);
    }

    #[test]
    fn test_empty_sequence() {
        assert_eq!(find_phrase_index(&[], "anything"), None);
    }

    #[test]
    fn test_retries_each_anchor() {
        let tokens = tokenize_text("the cat the dog the end");
        assert_eq!(find_phrase_index(&tokens, "the dog"), Some(2));
        assert_eq!(find_phrase_index(&tokens, "the end"), Some(4));
        assert_eq!(find_phrase_index(&tokens, "the bird"), None);
    }

    #[test]
    fn test_match_running_off_the_end() {
        let tokens = tokenize_text("one two three");
        assert_eq!(find_phrase_index(&tokens, "two three four"), None);
    }

    #[test]
    fn test_break_does_not_bridge_a_missing_word() {
        let tokens = vec![
            Token::word("A"),
            Token::Break,
            Token::word("B"),
            Token::word("C"),
        ];
        assert_eq!(find_phrase_index(&tokens, "A C"), None);
        assert_eq!(find_phrase_index(&tokens, "B C"), Some(2));
    }

    #[test]
    fn test_match_spans_a_break() {
        let tokens = vec![Token::word("A"), Token::Break, Token::word("B")];
        assert_eq!(find_phrase_index(&tokens, "A B"), Some(0));
    }

    #[test]
    fn test_match_spans_consecutive_breaks() {
        let tokens = vec![
            Token::word("end."),
            Token::Break,
            Token::Break,
            Token::word("Chapter"),
            Token::word("Two"),
        ];
        assert_eq!(find_phrase_index(&tokens, "end chapter two"), Some(0));
    }

    #[test]
    fn test_punctuation_only_token_breaks_a_match() {
        let tokens = tokenize_text("wait — what");
        assert_eq!(find_phrase_index(&tokens, "wait what"), None);
    }
}
