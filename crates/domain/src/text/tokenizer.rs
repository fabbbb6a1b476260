// crates/domain/src/text/tokenizer.rs
use std::sync::LazyLock;

use regex::Regex;

/// A terminal mark followed by a whitespace run ends a sentence.
static SENTENCE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.?!]\s+").expect("sentence pattern is valid"));

/// One whitespace character, optionally bordered by `,` `:` `'` or `"`.
static SYLLABLE_DELIMITER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[,:'"]?\s[,:'"]?"#).expect("syllable delimiter pattern is valid"));

/// Split text into sentences.
///
/// Segments holding nothing but whitespace are dropped, including the empty
/// tail left behind when the text ends with a terminal mark and whitespace.
pub fn split_sentences(text: &str) -> Vec<&str> {
    SENTENCE_BREAK
        .split(text)
        .filter(|segment| !segment.trim().is_empty())
        .collect()
}

/// Split text into words on whitespace runs. Never yields empty tokens.
pub fn split_words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Number of non-whitespace characters (punctuation counts).
pub fn count_non_whitespace(text: &str) -> usize {
    text.chars().filter(|c| !c.is_whitespace()).count()
}

/// Tokens fed to the syllable counter.
///
/// Splitting happens on single whitespace characters, so runs of whitespace
/// leave empty tokens behind; those are skipped.
pub fn syllable_tokens(text: &str) -> impl Iterator<Item = &str> {
    SYLLABLE_DELIMITER.split(text).filter(|token| !token.is_empty())
}
