//! Rule-based tokenizer for short, emoji-heavy social media text.
//!
//! - [`emoji`] separates emoji codepoints from surrounding text.
//! - [`lexer`] splits a line into tokens by a fixed precedence of pattern classes.
//! - [`corpus`] turns raw sentences (text or bytes) into lowercase word lists.

pub mod corpus;
pub mod emoji;
pub mod engine;
pub mod lexer;

pub use corpus::{check_ascii, convert_unicode_word, Sentence, SentenceSource, WordGenerator};
pub use emoji::{extract_emojis, remove_variation_selectors, separate_emojis_and_text};
pub use engine::{MojitokError, WordGeneratorConfig};
pub use lexer::{tokenize, Token, TokenKind, Tokenizer};
