use std::io;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MojitokError {
    #[error("Invalid sentence type: expected text or bytes, got {0}")]
    InvalidInputType(String),

    #[error("Sentence is not valid UTF-8: {0}")]
    Decode(#[from] std::str::Utf8Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Corpus is empty: {0}")]
    EmptyCorpus(String),

    #[error("Invalid JSON on line {line}: {source}")]
    Json {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

pub fn load_corpus<P: AsRef<Path>>(path: P) -> Result<String, MojitokError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;

    if content.trim().is_empty() {
        return Err(MojitokError::EmptyCorpus(path.display().to_string()));
    }

    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use std::io::Write;

    #[test]
    fn test_empty_corpus_error() {
        let test_file = "test_empty_corpus.txt";
        File::create(test_file).unwrap();

        let result = load_corpus(test_file);
        match result {
            Err(MojitokError::EmptyCorpus(_)) => (),
            _ => panic!("Expected EmptyCorpus error"),
        }

        fs::remove_file(test_file).unwrap();
    }

    #[test]
    fn test_nonexistent_corpus_error() {
        let result = load_corpus("nonexistent_corpus_12345.txt");
        match result {
            Err(MojitokError::Io(_)) => (),
            _ => panic!("Expected Io error"),
        }
    }

    #[test]
    fn test_valid_corpus_loads() {
        let test_file = "test_valid_corpus.txt";
        let mut file = File::create(test_file).unwrap();
        file.write_all(b"hello world\n").unwrap();

        let result = load_corpus(test_file);
        assert_eq!(result.unwrap(), "hello world\n");

        fs::remove_file(test_file).unwrap();
    }

    #[test]
    fn test_invalid_type_message() {
        let err = MojitokError::InvalidInputType("number".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid sentence type: expected text or bytes, got number"
        );
    }
}
