/// Pattern class that produced a token
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Url,
    Email,
    /// Two letter runs joined by `-` or `_` (e.g. "red-haired")
    Compound,
    Hashtag,
    Mention,
    /// `<3` and friends
    Heart,
    Emoticon,
    Contraction,
    Title,
    /// Dotted initials such as "a.m."
    Abbreviation,
    Number,
    Word,
    /// Run of one repeated punctuation character
    Symbol,
    Emoji,
    /// Any other single character
    Other,
}

/// A slice of the input produced by the tokenizer.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    /// Byte offset of `text` in the tokenized input
    pub offset: usize,
}

impl<'a> Token<'a> {
    pub fn end(&self) -> usize {
        self.offset + self.text.len()
    }
}
