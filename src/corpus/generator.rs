use serde_json::{Map, Value};
use tracing::{debug, trace};

use super::normalize::process_word;
use super::sentence::SentenceSource;
use super::unicode::convert_unicode_word;
use crate::emoji::remove_variation_selectors;
use crate::engine::config::WordGeneratorConfig;
use crate::engine::error::MojitokError;
use crate::lexer::Tokenizer;

/// Per-sentence annotations; empty unless a later stage fills it in.
pub type Metadata = Map<String, Value>;

/// Counters for one pass over the corpus
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GeneratorStats {
    pub total: usize,
    /// Sentences that produced at least one word
    pub valid: usize,
    /// Sentences emptied by the unicode gate
    pub unicode_filtered: usize,
}

/// Result of running one sentence through the pipeline
enum Outcome {
    Tokenized(Vec<String>),
    /// A word failed the unicode gate
    Rejected,
}

/// Turns raw corpus sentences into lowercase word lists.
///
/// Iterating is restartable: every call to [`WordGenerator::iter`] starts a
/// fresh pass with its own cursor and statistics.
pub struct WordGenerator<T> {
    sentences: Vec<T>,
    config: WordGeneratorConfig,
    tokenizer: Tokenizer,
}

impl<T: SentenceSource> WordGenerator<T> {
    pub fn new(sentences: Vec<T>, allow_unicode_text: bool) -> Self {
        let config = WordGeneratorConfig::with_unicode(allow_unicode_text);
        Self::with_config(sentences, config)
    }

    pub fn with_config(sentences: Vec<T>, config: WordGeneratorConfig) -> Self {
        let tokenizer = Tokenizer::new(config.lexicon.clone());
        Self {
            sentences,
            config,
            tokenizer,
        }
    }

    pub fn config(&self) -> &WordGeneratorConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    pub fn convert_unicode_word(&self, word: &str) -> (bool, String) {
        convert_unicode_word(word, self.config.allow_unicode_text, self.config.ignore_emojis)
    }

    /// Words of a single sentence; empty when the unicode gate rejects it.
    pub fn get_words<S>(&self, sentence: &S) -> Result<Vec<String>, MojitokError>
    where
        S: SentenceSource + ?Sized,
    {
        match self.process(sentence)? {
            Outcome::Tokenized(words) => Ok(words),
            Outcome::Rejected => Ok(Vec::new()),
        }
    }

    fn process<S>(&self, sentence: &S) -> Result<Outcome, MojitokError>
    where
        S: SentenceSource + ?Sized,
    {
        let sentence = sentence.to_sentence()?;
        let decoded = sentence.decode()?.trim();

        let cleaned;
        let text = if self.config.remove_variation_selectors {
            cleaned = remove_variation_selectors(decoded);
            cleaned.as_str()
        } else {
            decoded
        };

        let mut converted = Vec::new();
        for word in text.split_whitespace() {
            let (accepted, word) = self.convert_unicode_word(word);
            if !accepted {
                debug!(sentence = %text, "dropping sentence with unicode text");
                return Ok(Outcome::Rejected);
            }
            converted.push(word);
        }
        let joined = converted.join(" ");

        let words: Vec<String> = self
            .tokenizer
            .tokenize(&joined)
            .into_iter()
            .map(|token| {
                let lowered = token.to_lowercase();
                if self.config.normalize_words {
                    process_word(&lowered, &self.config.special_tokens)
                } else {
                    lowered
                }
            })
            .collect();

        trace!(?words, "tokenized sentence");
        Ok(Outcome::Tokenized(words))
    }

    pub fn iter(&self) -> Words<'_, T> {
        Words {
            generator: self,
            cursor: 0,
            stats: GeneratorStats::default(),
            finished: false,
        }
    }

    /// Non-empty word lists of the whole corpus, stopping at the first bad sentence.
    pub fn generate_array(&self) -> Result<Vec<Vec<String>>, MojitokError> {
        let mut sentences = Vec::new();
        for item in self.iter() {
            let (words, _) = item?;
            if !words.is_empty() {
                sentences.push(words);
            }
        }
        Ok(sentences)
    }
}

impl<'g, T: SentenceSource> IntoIterator for &'g WordGenerator<T> {
    type Item = Result<(Vec<String>, Metadata), MojitokError>;
    type IntoIter = Words<'g, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// One forward pass over a generator's sentences.
pub struct Words<'g, T> {
    generator: &'g WordGenerator<T>,
    cursor: usize,
    stats: GeneratorStats,
    finished: bool,
}

impl<'g, T> Words<'g, T> {
    pub fn stats(&self) -> GeneratorStats {
        self.stats
    }

    pub fn position(&self) -> usize {
        self.cursor
    }
}

impl<'g, T: SentenceSource> Iterator for Words<'g, T> {
    type Item = Result<(Vec<String>, Metadata), MojitokError>;

    fn next(&mut self) -> Option<Self::Item> {
        let Some(sentence) = self.generator.sentences.get(self.cursor) else {
            if !self.finished {
                self.finished = true;
                debug!(
                    total = self.stats.total,
                    valid = self.stats.valid,
                    unicode_filtered = self.stats.unicode_filtered,
                    "corpus pass finished"
                );
            }
            return None;
        };
        self.cursor += 1;
        self.stats.total += 1;

        let words = match self.generator.process(sentence) {
            Ok(Outcome::Tokenized(words)) => words,
            Ok(Outcome::Rejected) => {
                self.stats.unicode_filtered += 1;
                Vec::new()
            }
            Err(err) => return Some(Err(err)),
        };

        if !words.is_empty() {
            self.stats.valid += 1;
        }

        Some(Ok((words, Metadata::new())))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.generator.sentences.len().saturating_sub(self.cursor);
        (remaining, Some(remaining))
    }
}
