// crates/shared-kernel/src/value_objects/mod.rs
pub mod counts;

pub use counts::{CharCount, PolysyllableCount, SentenceCount, SyllableCount, WordCount};
