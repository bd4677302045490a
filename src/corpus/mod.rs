pub mod generator;
pub mod normalize;
pub mod sentence;
pub mod unicode;

use serde_json::Value;

use crate::engine::error::MojitokError;

pub use generator::{GeneratorStats, Metadata, WordGenerator, Words};
pub use normalize::{detect_special_token, process_word, shorten_word};
pub use sentence::{Sentence, SentenceSource};
pub use unicode::{check_ascii, convert_unicode_word, escape_unicode};

/// Non-blank lines of a plain text corpus, one sentence each.
pub fn parse_lines(content: &str) -> Vec<&str> {
    content.lines().filter(|l| !l.trim().is_empty()).collect()
}

/// One JSON value per non-blank line; type checking is left to the generator.
pub fn parse_json_lines(content: &str) -> Result<Vec<Value>, MojitokError> {
    content
        .lines()
        .enumerate()
        .filter(|(_, l)| !l.trim().is_empty())
        .map(|(i, l)| {
            serde_json::from_str::<Value>(l)
                .map_err(|source| MojitokError::Json { line: i + 1, source })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lines_skips_blank() {
        assert_eq!(parse_lines("a b\n\n  \nc\n"), vec!["a b", "c"]);
    }

    #[test]
    fn test_parse_json_lines() {
        let values = parse_json_lines("\"hi\"\n[111, 107]\n\n5\n").unwrap();
        assert_eq!(values.len(), 3);
        assert!(values[0].is_string());
        assert!(values[2].is_number());
    }

    #[test]
    fn test_parse_json_lines_reports_line() {
        match parse_json_lines("\"ok\"\n{broken\n") {
            Err(MojitokError::Json { line, .. }) => assert_eq!(line, 2),
            _ => panic!("Expected Json error"),
        }
    }
}
