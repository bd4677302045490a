use std::collections::HashSet;

use super::classify::{is_emoji, is_emoji_component, is_variation_selector};

/// A maximal run of emoji codepoints, with attached modifiers and selectors.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct EmojiRun<'a> {
    pub text: &'a str,
    /// Byte offset of the run in the source text
    pub offset: usize,
}

pub fn remove_variation_selectors(text: &str) -> String {
    text.chars().filter(|&c| !is_variation_selector(c)).collect()
}

/// Splits `text` into (emoji part, text part), keeping the order inside each part.
/// Zero-width joiners land in the text part.
pub fn separate_emojis_and_text(text: &str) -> (String, String) {
    let mut emoji_part = String::new();
    let mut text_part = String::new();

    for c in text.chars() {
        if is_emoji_component(c) {
            emoji_part.push(c);
        } else {
            text_part.push(c);
        }
    }

    (emoji_part, text_part)
}

/// Emoji codepoints of `text` in order, duplicates kept.
///
/// With `wanted`, only codepoints equal to one of the wanted emoji (compared
/// without variation selectors) are returned.
pub fn extract_emojis(text: &str, wanted: Option<&[&str]>) -> Vec<String> {
    let wanted: Option<HashSet<String>> =
        wanted.map(|w| w.iter().map(|e| remove_variation_selectors(e)).collect());

    remove_variation_selectors(text)
        .chars()
        .filter(|&c| is_emoji(c))
        .map(String::from)
        .filter(|e| wanted.as_ref().map_or(true, |w| w.contains(e)))
        .collect()
}

pub fn emoji_runs(text: &str) -> Vec<EmojiRun<'_>> {
    let mut runs = Vec::new();
    let mut start: Option<usize> = None;

    for (i, c) in text.char_indices() {
        match (start, is_emoji_component(c)) {
            (None, true) => start = Some(i),
            (Some(s), false) => {
                runs.push(EmojiRun {
                    text: &text[s..i],
                    offset: s,
                });
                start = None;
            }
            _ => {}
        }
    }

    if let Some(s) = start {
        runs.push(EmojiRun {
            text: &text[s..],
            offset: s,
        });
    }

    runs
}
