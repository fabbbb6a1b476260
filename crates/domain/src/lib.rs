//! # Domain
//!
//! Pure text analysis: tokenizing a lower-cased document, counting words,
//! sentences, characters and syllables, scoring the counts with four
//! readability formulas and turning the scores into reader ages.
//!
//! - [`model`]: the [`Document`](model::Document) input and its [`Analysis`](model::Analysis)
//! - [`text`]: tokenizers and the [`TextCounts`](text::TextCounts) aggregate
//! - [`scoring`]: readability formulas
//! - [`age`]: score → age mapping
//! - [`selection`] / [`report`]: what the user asked to see
//!
//! Nothing here performs I/O.

#![allow(clippy::multiple_crate_versions)]

pub mod age;
pub mod model;
pub mod report;
pub mod scoring;
pub mod selection;
pub mod text;

pub use age::estimate_age;
pub use model::{Analysis, Assessment, Document};
pub use report::Report;
pub use scoring::{Formula, Scores};
pub use selection::ScoreSelection;
pub use text::TextCounts;
