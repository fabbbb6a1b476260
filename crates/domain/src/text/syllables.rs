// crates/domain/src/text/syllables.rs
use std::sync::LazyLock;

use regex::Regex;

static VOWEL_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[aeiouy]+").expect("vowel pattern is valid"));

/// Groups needed for a word to count as polysyllabic.
pub const POLYSYLLABLE_THRESHOLD: usize = 3;

/// Maximal vowel runs in `word` after dropping one trailing `e`.
///
/// "rain" has a single run ("ai"); "side" is counted as "sid".
pub fn syllable_groups(word: &str) -> usize {
    let stem = word.strip_suffix('e').unwrap_or(word);
    VOWEL_RUN.find_iter(stem).count()
}

/// Syllables contributed by `word`: its group count, but never less than one.
pub fn syllables(word: &str) -> usize {
    syllable_groups(word).max(1)
}

pub fn is_polysyllabic(word: &str) -> bool {
    syllable_groups(word) >= POLYSYLLABLE_THRESHOLD
}
