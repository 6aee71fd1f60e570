use serde::{Deserialize, Serialize};

/// Inline emphasis carried over from the source document.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Emphasis {
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub bold: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub italic: bool,
}

/// Marks a word as part of a document heading. Presentation only, never pacing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Heading {
    pub level: u8,
}

/// A displayable word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub text: String,
    #[serde(flatten)]
    pub emphasis: Emphasis,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<Heading>,
}

impl Word {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasis: Emphasis::default(),
            heading: None,
        }
    }

    pub fn bold(mut self) -> Self {
        self.emphasis.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.emphasis.italic = true;
        self
    }

    pub fn heading(mut self, level: u8) -> Self {
        self.heading = Some(Heading { level });
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Word,
    Break,
}

/// Atomic unit of playback.
///
/// A `Break` marks a paragraph or section boundary and has no text, so the
/// "breaks never carry text" rule holds by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Token {
    Word(Word),
    Break,
}

impl Token {
    pub fn word(text: impl Into<String>) -> Self {
        Token::Word(Word::new(text))
    }

    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Word(_) => TokenKind::Word,
            Token::Break => TokenKind::Break,
        }
    }

    pub fn is_break(&self) -> bool {
        matches!(self, Token::Break)
    }

    /// Display text, `None` for breaks.
    pub fn text(&self) -> Option<&str> {
        match self {
            Token::Word(word) => Some(&word.text),
            Token::Break => None,
        }
    }
}

impl From<Word> for Token {
    fn from(word: Word) -> Self {
        Token::Word(word)
    }
}
