//! Tokenizers and counters over a normalized [`Document`](crate::Document).

pub mod counts;
pub mod syllables;
pub mod tokenizer;

pub use counts::TextCounts;
pub use syllables::{is_polysyllabic, syllable_groups, syllables};
pub use tokenizer::{count_non_whitespace, split_sentences, split_words, syllable_tokens};
