use lazy_static::lazy_static;

use super::patterns::{first_match, run_len};
use super::token::{Token, TokenKind};
use crate::engine::config::Lexicon;

lazy_static! {
    static ref DEFAULT_TOKENIZER: Tokenizer = Tokenizer::default();
}

/// Splits a single line of text into tokens, left to right.
///
/// At every position the first matching pattern class wins; whitespace only
/// separates tokens and is never emitted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tokenizer {
    lexicon: Lexicon,
}

impl Tokenizer {
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    pub fn tokens<'t, 'a>(&'t self, text: &'a str) -> Tokens<'t, 'a> {
        Tokens {
            tokenizer: self,
            text,
            pos: 0,
        }
    }

    pub fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.tokens(text).map(|t| t.text).collect()
    }

    /// Pattern class and byte length claimed at `pos`, which must be a char boundary.
    pub fn match_at(&self, text: &str, pos: usize) -> Option<(TokenKind, usize)> {
        first_match(text, pos, &self.lexicon)
    }
}

pub struct Tokens<'t, 'a> {
    tokenizer: &'t Tokenizer,
    text: &'a str,
    pos: usize,
}

impl<'t, 'a> Iterator for Tokens<'t, 'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        self.pos += run_len(&self.text[self.pos..], char::is_whitespace);
        if self.pos >= self.text.len() {
            return None;
        }

        // The fallback class claims any single character, so this always matches
        let (kind, len) = self.tokenizer.match_at(self.text, self.pos)?;
        let token = Token {
            kind,
            text: &self.text[self.pos..self.pos + len],
            offset: self.pos,
        };
        self.pos += len;
        Some(token)
    }
}

/// Tokenizes with the default lexicon.
pub fn tokenize(text: &str) -> Vec<&str> {
    DEFAULT_TOKENIZER.tokenize(text)
}

pub fn tokens(text: &str) -> Tokens<'static, '_> {
    DEFAULT_TOKENIZER.tokens(text)
}

pub fn match_at(text: &str, pos: usize) -> Option<(TokenKind, usize)> {
    DEFAULT_TOKENIZER.match_at(text, pos)
}
