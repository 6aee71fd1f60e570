pub mod progress;
pub mod search;
pub mod timing;
pub mod token;
pub mod tokenizer;

pub use progress::{format_progress, ProgressMode};
pub use search::find_phrase_index;
pub use timing::{skip_jump_size, token_delay, token_weight};
pub use token::{Emphasis, Heading, Token, TokenKind, Word};
pub use tokenizer::tokenize_text;
