pub mod classify;
pub mod filter;

pub use classify::{
    is_emoji, is_emoji_component, is_skin_tone_modifier, is_variation_selector,
    ZERO_WIDTH_JOINER,
};
pub use filter::{
    emoji_runs, extract_emojis, remove_variation_selectors, separate_emojis_and_text, EmojiRun,
};
