pub mod patterns;
pub mod scanner;
pub mod token;

pub use patterns::{PatternClass, PATTERN_CLASSES};
pub use scanner::{match_at, tokenize, tokens, Tokenizer, Tokens};
pub use token::{Token, TokenKind};
