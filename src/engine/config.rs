// Configuration for the tokenizer and word generator
// All values are immutable once built; defaults mirror the pretrained vocabulary

/// Dotted abbreviations the tokenizer keeps whole (e.g. "Mr.").
#[derive(Debug, Clone, PartialEq)]
pub struct Lexicon {
    /// Matched case-insensitively, tried in order
    pub titles: Vec<String>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            titles: ["Mr.", "Ms.", "Mrs.", "Dr.", "Prof."]
                .iter()
                .map(|t| t.to_string())
                .collect(),
        }
    }
}

impl Lexicon {
    pub fn with_titles<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            titles: titles.into_iter().map(Into::into).collect(),
        }
    }
}

/// Reserved vocabulary words. The order is significant: slot `i` is vocabulary id `i`.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecialTokens {
    pub prefix: String,
    pub names: Vec<String>,
}

const AT_SLOT: usize = 2;
const URL_SLOT: usize = 3;
const NUMBER_SLOT: usize = 4;

impl Default for SpecialTokens {
    fn default() -> Self {
        let prefix = "CUSTOM_".to_string();
        let mut names: Vec<String> = ["MASK", "UNKNOWN", "AT", "URL", "NUMBER", "BREAK"]
            .iter()
            .map(|n| format!("{}{}", prefix, n))
            .collect();
        names.extend((6..10).map(|i| format!("{}BLANK_{}", prefix, i)));
        Self { prefix, names }
    }
}

impl SpecialTokens {
    fn slot(&self, index: usize) -> &str {
        self.names.get(index).map_or("", String::as_str)
    }

    pub fn at(&self) -> &str {
        self.slot(AT_SLOT)
    }

    pub fn url(&self) -> &str {
        self.slot(URL_SLOT)
    }

    pub fn number(&self) -> &str {
        self.slot(NUMBER_SLOT)
    }
}

/// Word generator settings; fixed for the generator's lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct WordGeneratorConfig {
    /// Escape non-ASCII words instead of dropping the whole sentence (default false)
    pub allow_unicode_text: bool,

    /// Strip U+FE00..U+FE0F style selectors before the unicode gate (default true)
    pub remove_variation_selectors: bool,

    /// Drop emoji codepoints from non-ASCII words before deciding (default false)
    pub ignore_emojis: bool,

    /// Shorten character floods and map numbers/mentions/URLs to special tokens (default false)
    pub normalize_words: bool,

    pub special_tokens: SpecialTokens,
    pub lexicon: Lexicon,
}

impl Default for WordGeneratorConfig {
    fn default() -> Self {
        Self {
            allow_unicode_text: false,
            remove_variation_selectors: true,
            ignore_emojis: false,
            normalize_words: false,
            special_tokens: SpecialTokens::default(),
            lexicon: Lexicon::default(),
        }
    }
}

impl WordGeneratorConfig {
    pub fn with_unicode(allow_unicode_text: bool) -> Self {
        Self {
            allow_unicode_text,
            ..Self::default()
        }
    }
}
