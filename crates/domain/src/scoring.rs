// crates/domain/src/scoring.rs
use std::fmt;

use readability_shared_kernel::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};

use crate::text::TextCounts;

/// The four readability formulas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Formula {
    /// Automated Readability Index
    Ari,
    /// Flesch–Kincaid grade level
    #[serde(rename = "fk")]
    FleschKincaid,
    /// Simple Measure of Gobbledygook
    Smog,
    /// Coleman–Liau index
    #[serde(rename = "cl")]
    ColemanLiau,
}

impl Formula {
    pub const ALL: [Self; 4] = [Self::Ari, Self::FleschKincaid, Self::Smog, Self::ColemanLiau];

    /// Short key used on the command line.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Ari => "ari",
            Self::FleschKincaid => "fk",
            Self::Smog => "smog",
            Self::ColemanLiau => "cl",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Ari => "Automated Readability Index",
            Self::FleschKincaid => "Flesch–Kincaid readability tests",
            Self::Smog => "Simple Measure of Gobbledygook",
            Self::ColemanLiau => "Coleman–Liau index",
        }
    }

    /// Raw grade level. Callers must check [`TextCounts::is_scorable`] first;
    /// [`Scores::compute`] does.
    pub fn evaluate(self, counts: &TextCounts) -> f64 {
        let words = counts.words.as_f64();
        let sentences = counts.sentences.as_f64();
        let chars = counts.chars.as_f64();

        match self {
            Self::Ari => 4.71 * (chars / words) + 0.5 * (words / sentences) - 21.43,
            Self::FleschKincaid => {
                0.39 * (words / sentences) + 11.8 * (counts.syllables.as_f64() / words) - 15.59
            }
            Self::Smog => 1.043 * (counts.polysyllables.as_f64() * 30.0 / sentences).sqrt() + 3.1291,
            Self::ColemanLiau => {
                0.0588 * (chars / words * 100.0) - 0.296 * (sentences / words * 100.0) - 15.8
            }
        }
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Grade-level scores for one document. Always finite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scores {
    pub ari: f64,
    pub fk: f64,
    pub smog: f64,
    pub cl: f64,
}

impl Scores {
    /// # Errors
    ///
    /// `DegenerateDocument` when there are no words or no sentences, and
    /// `NonFiniteScore` if a formula still produces NaN or infinity.
    pub fn compute(counts: &TextCounts) -> DomainResult<Self> {
        if !counts.is_scorable() {
            return Err(DomainError::DegenerateDocument {
                words: counts.words.value(),
                sentences: counts.sentences.value(),
            });
        }

        let checked = |formula: Formula| {
            let value = formula.evaluate(counts);
            if value.is_finite() {
                Ok(value)
            } else {
                Err(DomainError::NonFiniteScore { formula: formula.key().to_uppercase(), value })
            }
        };

        let scores = Self {
            ari: checked(Formula::Ari)?,
            fk: checked(Formula::FleschKincaid)?,
            smog: checked(Formula::Smog)?,
            cl: checked(Formula::ColemanLiau)?,
        };
        log::debug!("scores: {scores:?}");
        Ok(scores)
    }

    pub const fn get(&self, formula: Formula) -> f64 {
        match formula {
            Formula::Ari => self.ari,
            Formula::FleschKincaid => self.fk,
            Formula::Smog => self.smog,
            Formula::ColemanLiau => self.cl,
        }
    }
}
