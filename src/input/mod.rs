use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;
use thiserror::Error;

use crate::reading::{tokenize_text, Token};

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("File is empty: {0}")]
    EmptyFile(PathBuf),

    #[error("Token file parse error: {0}")]
    TokenParse(#[from] serde_json::Error),
}

pub struct LoadedDocument {
    pub tokens: Vec<Token>,
    pub source: String,
}

/// Loads a document for playback.
///
/// `.json` files hold a pre-tokenized sequence; anything else is read as
/// UTF-8 plain text and tokenized line by line.
pub fn load(path: &str) -> Result<LoadedDocument, LoadError> {
    let path = Path::new(path);

    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    let content = fs::read_to_string(path)?;
    let is_token_file = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let (tokens, kind) = if is_token_file {
        (serde_json::from_str::<Vec<Token>>(&content)?, "tokens")
    } else {
        (tokenize_text(&content), "text")
    };

    if tokens.is_empty() {
        return Err(LoadError::EmptyFile(path.to_path_buf()));
    }

    debug!("loaded {} tokens from {}", tokens.len(), path.display());
    Ok(LoadedDocument {
        tokens,
        source: format!("{}:{}", kind, path.display()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;

    fn write_file(dir: &tempfile::TempDir, name: &str, content: &str) -> String {
        let path = dir.path().join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = load("/nonexistent/path/book.txt");
        assert!(matches!(result, Err(LoadError::FileNotFound(_))));
    }

    #[test]
    fn test_load_plain_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "story.txt", "Hello world.\nSecond line");

        let doc = load(&path).unwrap();
        assert_eq!(doc.tokens.len(), 5);
        assert_eq!(doc.tokens[2], Token::Break);
        assert!(doc.source.starts_with("text:"));
    }

    #[test]
    fn test_load_token_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "chapter.JSON",
            r#"[{"type":"word","text":"One","heading":1},{"type":"break"},{"type":"word","text":"two"}]"#,
        );

        let doc = load(&path).unwrap();
        assert_eq!(doc.tokens.len(), 3);
        assert!(doc.tokens[1].is_break());
        assert!(doc.source.starts_with("tokens:"));
    }

    #[test]
    fn test_load_whitespace_only_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "blank.txt", "  \n\n\t");
        assert!(matches!(load(&path), Err(LoadError::EmptyFile(_))));
    }

    #[test]
    fn test_load_malformed_token_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "bad.json", r#"[{"type":"sparkle"}]"#);
        assert!(matches!(load(&path), Err(LoadError::TokenParse(_))));
    }
}
