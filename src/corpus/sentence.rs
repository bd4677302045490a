use std::borrow::Cow;

use serde_json::Value;

use crate::engine::error::MojitokError;

/// One raw corpus sentence: text, or bytes expected to hold UTF-8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sentence<'a> {
    Text(Cow<'a, str>),
    Bytes(Cow<'a, [u8]>),
}

impl<'a> Sentence<'a> {
    pub fn decode(&self) -> Result<&str, MojitokError> {
        match self {
            Sentence::Text(text) => Ok(text.as_ref()),
            Sentence::Bytes(bytes) => Ok(std::str::from_utf8(bytes)?),
        }
    }
}

impl From<String> for Sentence<'static> {
    fn from(text: String) -> Self {
        Sentence::Text(Cow::Owned(text))
    }
}

impl<'a> From<&'a str> for Sentence<'a> {
    fn from(text: &'a str) -> Self {
        Sentence::Text(Cow::Borrowed(text))
    }
}

impl From<Vec<u8>> for Sentence<'static> {
    fn from(bytes: Vec<u8>) -> Self {
        Sentence::Bytes(Cow::Owned(bytes))
    }
}

impl<'a> From<&'a [u8]> for Sentence<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Sentence::Bytes(Cow::Borrowed(bytes))
    }
}

/// Anything the word generator can read a sentence from.
///
/// Type validation happens here, once per sentence; dynamic sources such as
/// JSON values fail with `InvalidInputType` when they hold neither text nor bytes.
pub trait SentenceSource {
    fn to_sentence(&self) -> Result<Sentence<'_>, MojitokError>;
}

impl<T: SentenceSource + ?Sized> SentenceSource for &T {
    fn to_sentence(&self) -> Result<Sentence<'_>, MojitokError> {
        (**self).to_sentence()
    }
}

impl SentenceSource for str {
    fn to_sentence(&self) -> Result<Sentence<'_>, MojitokError> {
        Ok(Sentence::Text(Cow::Borrowed(self)))
    }
}

impl SentenceSource for String {
    fn to_sentence(&self) -> Result<Sentence<'_>, MojitokError> {
        Ok(Sentence::Text(Cow::Borrowed(self.as_str())))
    }
}

impl SentenceSource for [u8] {
    fn to_sentence(&self) -> Result<Sentence<'_>, MojitokError> {
        Ok(Sentence::Bytes(Cow::Borrowed(self)))
    }
}

impl<const N: usize> SentenceSource for [u8; N] {
    fn to_sentence(&self) -> Result<Sentence<'_>, MojitokError> {
        Ok(Sentence::Bytes(Cow::Borrowed(&self[..])))
    }
}

impl SentenceSource for Vec<u8> {
    fn to_sentence(&self) -> Result<Sentence<'_>, MojitokError> {
        Ok(Sentence::Bytes(Cow::Borrowed(self.as_slice())))
    }
}

impl SentenceSource for Sentence<'_> {
    fn to_sentence(&self) -> Result<Sentence<'_>, MojitokError> {
        Ok(match self {
            Sentence::Text(text) => Sentence::Text(Cow::Borrowed(&**text)),
            Sentence::Bytes(bytes) => Sentence::Bytes(Cow::Borrowed(&**bytes)),
        })
    }
}

impl SentenceSource for Value {
    fn to_sentence(&self) -> Result<Sentence<'_>, MojitokError> {
        match self {
            Value::String(text) => Ok(Sentence::Text(Cow::Borrowed(text.as_str()))),
            Value::Array(items) => items
                .iter()
                .map(|v| v.as_u64().and_then(|n| u8::try_from(n).ok()))
                .collect::<Option<Vec<u8>>>()
                .map(|bytes| Sentence::Bytes(Cow::Owned(bytes)))
                .ok_or_else(|| MojitokError::InvalidInputType("array of non-bytes".to_string())),
            Value::Null => Err(MojitokError::InvalidInputType("null".to_string())),
            Value::Bool(_) => Err(MojitokError::InvalidInputType("boolean".to_string())),
            Value::Number(_) => Err(MojitokError::InvalidInputType("number".to_string())),
            Value::Object(_) => Err(MojitokError::InvalidInputType("object".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bytes_decode() {
        let sentence = b"Hello World!".to_sentence().unwrap();
        assert_eq!(sentence.decode().unwrap(), "Hello World!");
    }

    #[test]
    fn test_invalid_utf8_is_decode_error() {
        let bytes: Vec<u8> = vec![0x66, 0xff, 0x6f];
        let sentence = bytes.to_sentence().unwrap();
        assert!(matches!(sentence.decode(), Err(MojitokError::Decode(_))));
    }

    #[test]
    fn test_json_string_and_byte_array() {
        let text = json!("hi there");
        assert_eq!(
            text.to_sentence().unwrap(),
            Sentence::Text(Cow::Borrowed("hi there"))
        );

        let bytes = json!([104, 105]);
        assert_eq!(bytes.to_sentence().unwrap().decode().unwrap(), "hi");
    }

    #[test]
    fn test_json_other_types_are_invalid() {
        for value in [json!(123), json!(null), json!(true), json!({"a": 1}), json!([1, 300])] {
            assert!(matches!(
                value.to_sentence(),
                Err(MojitokError::InvalidInputType(_))
            ));
        }
    }
}
