// crates/domain/src/text/counts.rs
use readability_shared_kernel::{CharCount, PolysyllableCount, SentenceCount, SyllableCount, WordCount};
use serde::{Deserialize, Serialize};

use super::{syllables, tokenizer};
use crate::model::Document;

/// Raw statistics of one document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextCounts {
    pub words: WordCount,
    pub sentences: SentenceCount,
    pub chars: CharCount,
    pub syllables: SyllableCount,
    pub polysyllables: PolysyllableCount,
}

impl TextCounts {
    /// Count everything in a single pass over each tokenization.
    pub fn measure(document: &Document) -> Self {
        let text = document.as_str();

        let mut counts = Self {
            words: WordCount::new(tokenizer::split_words(text).len()),
            sentences: SentenceCount::new(tokenizer::split_sentences(text).len()),
            chars: CharCount::new(tokenizer::count_non_whitespace(text)),
            ..Self::default()
        };

        for token in tokenizer::syllable_tokens(text) {
            let groups = syllables::syllable_groups(token);
            counts.syllables += groups.max(1);
            if groups >= syllables::POLYSYLLABLE_THRESHOLD {
                counts.polysyllables += 1;
            }
        }

        log::debug!(
            "measured {} words, {} sentences, {} chars, {} syllables, {} polysyllables",
            counts.words,
            counts.sentences,
            counts.chars,
            counts.syllables,
            counts.polysyllables
        );
        counts
    }

    /// Scoring divides by words and sentences; neither may be zero.
    pub const fn is_scorable(&self) -> bool {
        !self.words.is_zero() && !self.sentences.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measures_two_short_sentences() {
        let counts = TextCounts::measure(&Document::new("The cat sat. The dog ran!"));
        assert_eq!(counts.sentences, 2usize);
        assert_eq!(counts.words, 6usize);
        assert_eq!(counts.chars, 20usize);
        assert_eq!(counts.syllables, 6usize);
        assert_eq!(counts.polysyllables, 0usize);
        assert!(counts.is_scorable());
    }

    #[test]
    fn counts_polysyllables() {
        let counts = TextCounts::measure(&Document::new("Readability matters. Every sentence counts!"));
        assert_eq!(counts.words, 5usize);
        assert_eq!(counts.sentences, 2usize);
        assert_eq!(counts.chars, 39usize);
        assert_eq!(counts.syllables, 13usize);
        assert_eq!(counts.polysyllables, 2usize);
    }

    #[test]
    fn empty_document_is_not_scorable() {
        let counts = TextCounts::measure(&Document::new(""));
        assert_eq!(counts, TextCounts::default());
        assert!(!counts.is_scorable());
    }

    #[test]
    fn consecutive_whitespace_does_not_inflate_syllables() {
        let tight = TextCounts::measure(&Document::new("a cat sat."));
        let loose = TextCounts::measure(&Document::new("a   cat\n\nsat."));
        assert_eq!(tight.syllables, loose.syllables);
        assert_eq!(tight.words, loose.words);
    }
}
