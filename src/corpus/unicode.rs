use unicode_normalization::UnicodeNormalization;

use crate::emoji::separate_emojis_and_text;

/// True iff every byte of `word` is in the 0..=127 range; accepts text or bytes.
pub fn check_ascii<W: AsRef<[u8]> + ?Sized>(word: &W) -> bool {
    word.as_ref().is_ascii()
}

/// Renders non-ASCII characters as `\uxxxx` (or `\Uxxxxxxxx` beyond the BMP),
/// leaving ASCII untouched.
pub fn escape_unicode(word: &str) -> String {
    let mut escaped = String::with_capacity(word.len());
    for c in word.chars() {
        let code = c as u32;
        if c.is_ascii() {
            escaped.push(c);
        } else if code <= 0xFFFF {
            escaped.push_str(&format!("\\u{:04x}", code));
        } else {
            escaped.push_str(&format!("\\U{:08x}", code));
        }
    }
    escaped
}

/// Decides whether a whitespace-delimited word may enter the corpus.
///
/// Returns `(true, word)` for ASCII words, `(true, escaped)` for non-ASCII
/// words when unicode is allowed and `(false, "")` otherwise. Words are NFKC
/// normalized first, so compatibility forms such as "‼" become plain ASCII.
pub fn convert_unicode_word(
    word: &str,
    allow_unicode_text: bool,
    ignore_emojis: bool,
) -> (bool, String) {
    if check_ascii(word) {
        return (true, word.to_string());
    }

    let mut normalized: String = word.nfkc().collect();

    if ignore_emojis {
        let (_, text) = separate_emojis_and_text(&normalized);
        normalized = text;
    }

    if check_ascii(&normalized) {
        return (true, normalized);
    }

    if !allow_unicode_text {
        return (false, String::new());
    }

    (true, escape_unicode(&normalized))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_ascii_handles_bytes_and_strings() {
        assert!(check_ascii("ASCII"));
        assert!(check_ascii(b"ASCII"));
        assert!(!check_ascii("ščřžýá"));
        assert!(!check_ascii("❤ ☀ ☆ ☂ ☻ ♞ ☯ ☭ ☢"));
    }

    #[test]
    fn test_convert_unicode_word() {
        assert_eq!(convert_unicode_word("č", true, false), (true, "\\u010d".to_string()));
    }

    #[test]
    fn test_convert_unicode_word_ignores_if_set() {
        assert_eq!(convert_unicode_word("č", false, false), (false, String::new()));
    }

    #[test]
    fn test_convert_unicode_chars() {
        let (ok, converted) = convert_unicode_word("ěščřžýáíé", true, false);
        assert!(ok);
        assert_eq!(
            converted,
            "\\u011b\\u0161\\u010d\\u0159\\u017e\\u00fd\\u00e1\\u00ed\\u00e9"
        );
    }

    #[test]
    fn test_ascii_word_passes_through() {
        assert_eq!(convert_unicode_word("hello", false, false), (true, "hello".to_string()));
    }

    #[test]
    fn test_decomposed_input_is_composed_first() {
        assert_eq!(
            convert_unicode_word("c\u{030C}", true, false),
            (true, "\\u010d".to_string())
        );
    }

    #[test]
    fn test_compatibility_punctuation_becomes_ascii() {
        assert_eq!(convert_unicode_word("wow\u{203C}", false, false), (true, "wow!!".to_string()));
    }

    #[test]
    fn test_ignore_emojis_accepts_remaining_ascii() {
        assert_eq!(convert_unicode_word("lol😂", false, true), (true, "lol".to_string()));
        assert_eq!(convert_unicode_word("lol😂", false, false), (false, String::new()));
    }

    #[test]
    fn test_escape_astral_codepoint() {
        assert_eq!(escape_unicode("a😂"), "a\\U0001f602");
    }
}
