pub mod config;
pub mod error;

pub use config::{Lexicon, SpecialTokens, WordGeneratorConfig};
pub use error::{load_corpus, MojitokError};
