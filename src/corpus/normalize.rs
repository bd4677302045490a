// Optional word normalization applied after tokenization

use crate::engine::config::SpecialTokens;
use crate::lexer::{match_at, TokenKind};

/// Collapses runs of 3+ identical characters to two ("!!!!" -> "!!"). Only ASCII words are touched.
pub fn shorten_word(word: &str) -> String {
    if !word.is_ascii() || word.len() < 3 {
        return word.to_string();
    }

    let mut shortened = String::with_capacity(word.len());
    let mut prev: Option<char> = None;
    let mut run = 0;
    for c in word.chars() {
        if prev == Some(c) {
            run += 1;
        } else {
            run = 1;
            prev = Some(c);
        }
        if run <= 2 {
            shortened.push(c);
        }
    }
    shortened
}

fn is_integer(word: &str) -> bool {
    let digits = word.strip_prefix(['+', '-']).unwrap_or(word);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn contains_mention(word: &str) -> bool {
    word.match_indices('@')
        .any(|(i, _)| matches!(match_at(word, i), Some((TokenKind::Mention, _))))
}

fn is_url(word: &str) -> bool {
    matches!(match_at(word, 0), Some((TokenKind::Url, _)))
}

/// Maps numbers, mentions and URLs to their reserved vocabulary words.
pub fn detect_special_token<'a>(word: &'a str, special: &'a SpecialTokens) -> &'a str {
    if is_integer(word) {
        special.number()
    } else if contains_mention(word) {
        special.at()
    } else if is_url(word) {
        special.url()
    } else {
        word
    }
}

pub fn process_word(word: &str, special: &SpecialTokens) -> String {
    let shortened = shorten_word(word);
    detect_special_token(&shortened, special).to_string()
}
