use std::ops::RangeInclusive;

pub const ZERO_WIDTH_JOINER: char = '\u{200D}';

/// Codepoint blocks treated as emoji/symbol characters.
const EMOJI_RANGES: &[RangeInclusive<char>] = &[
    // Miscellaneous symbols and dingbats (hearts, stars, notes)
    '\u{2600}'..='\u{27BF}',
    // Pictographs, emoticons and the skin-tone modifiers
    '\u{1F300}'..='\u{1F64F}',
    // Transport and map symbols
    '\u{1F680}'..='\u{1F6FF}',
    '\u{1F900}'..='\u{1F9FF}',
    '\u{1FA70}'..='\u{1FAFF}',
];

const SKIN_TONES: RangeInclusive<char> = '\u{1F3FB}'..='\u{1F3FF}';

const VARIATION_SELECTORS: &[RangeInclusive<char>] =
    &['\u{FE00}'..='\u{FE0F}', '\u{E0100}'..='\u{E01EF}'];

pub fn is_emoji(c: char) -> bool {
    EMOJI_RANGES.iter().any(|r| r.contains(&c))
}

pub fn is_skin_tone_modifier(c: char) -> bool {
    SKIN_TONES.contains(&c)
}

pub fn is_variation_selector(c: char) -> bool {
    VARIATION_SELECTORS.iter().any(|r| r.contains(&c))
}

/// Belongs to an emoji run: an emoji codepoint or a selector attached to one.
/// The joiner is not part of a run.
pub fn is_emoji_component(c: char) -> bool {
    is_emoji(c) || is_variation_selector(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols_are_emoji() {
        for c in ['\u{266B}', '\u{2605}', '\u{2661}', '\u{2764}', '\u{26BD}'] {
            assert!(is_emoji(c), "{:?} should be emoji", c);
        }
    }

    #[test]
    fn test_pictographs_are_emoji() {
        assert!(is_emoji('😂'));
        assert!(is_emoji('👍'));
        assert!(is_emoji('🚀'));
        assert!(is_emoji('🤔'));
    }

    #[test]
    fn test_skin_tone_is_emoji_and_modifier() {
        assert!(is_emoji('\u{1F3FD}'));
        assert!(is_skin_tone_modifier('\u{1F3FD}'));
        assert!(!is_skin_tone_modifier('👍'));
    }

    #[test]
    fn test_joiner_and_text_are_not_emoji() {
        assert!(!is_emoji(ZERO_WIDTH_JOINER));
        assert!(!is_emoji_component(ZERO_WIDTH_JOINER));
        assert!(!is_emoji('a'));
        assert!(!is_emoji('č'));
    }

    #[test]
    fn test_variation_selectors() {
        assert!(is_variation_selector('\u{FE0F}'));
        assert!(is_variation_selector('\u{FE0E}'));
        assert!(is_variation_selector('\u{E0100}'));
        assert!(!is_variation_selector('\u{200D}'));
        assert!(!is_emoji('\u{FE0F}'));
        assert!(is_emoji_component('\u{FE0F}'));
    }
}
