use readability_shared_kernel::DomainResult;
use serde::{Deserialize, Serialize};

use crate::{
    age::estimate_age,
    model::Document,
    scoring::{Formula, Scores},
    text::TextCounts,
};

/// One formula's score together with the reader age it maps to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub formula: Formula,
    pub score: f64,
    pub age: i64,
}

impl Assessment {
    pub fn new(formula: Formula, score: f64) -> Self {
        Self { formula, score, age: estimate_age(score) }
    }
}

/// Counts and scores computed once per document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Analysis {
    pub counts: TextCounts,
    pub scores: Scores,
}

impl Analysis {
    /// Normalize → count → score.
    ///
    /// # Errors
    ///
    /// Propagates [`Scores::compute`] failures for empty or unscorable text.
    pub fn of(document: &Document) -> DomainResult<Self> {
        Self::from_counts(TextCounts::measure(document))
    }

    /// # Errors
    ///
    /// See [`Scores::compute`].
    pub fn from_counts(counts: TextCounts) -> DomainResult<Self> {
        let scores = Scores::compute(&counts)?;
        Ok(Self { counts, scores })
    }

    pub fn assessment(&self, formula: Formula) -> Assessment {
        Assessment::new(formula, self.scores.get(formula))
    }

    /// ARI, FK, SMOG, CL in that order.
    pub fn assessments(&self) -> [Assessment; 4] {
        Formula::ALL.map(|formula| self.assessment(formula))
    }

    /// Mean of the four estimated ages.
    #[allow(clippy::cast_precision_loss)]
    pub fn average_age(&self) -> f64 {
        let assessments = self.assessments();
        let total: i64 = assessments.iter().map(|a| a.age).sum();
        total as f64 / assessments.len() as f64
    }
}
