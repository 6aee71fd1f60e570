use crate::reading::Token;

/// Tokenizes plain text line by line.
///
/// Every line that contributed at least one word is closed by a `Break`, so
/// blank-line runs collapse into one boundary. No leading or trailing break.
pub fn tokenize_text(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();

    for line in text.lines() {
        let mut words = line.split_whitespace().peekable();
        if words.peek().is_none() {
            continue;
        }

        if !tokens.is_empty() {
            tokens.push(Token::Break);
        }
        tokens.extend(words.map(Token::word));
    }

    tokens
}
