// crates/domain/src/report.rs
use serde::Serialize;

use crate::{
    model::{Analysis, Assessment},
    scoring::Formula,
    selection::ScoreSelection,
};

/// What gets shown for a given [`ScoreSelection`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Report {
    Single {
        assessment: Assessment,
    },
    All {
        assessments: Vec<Assessment>,
        average_age: f64,
    },
    Unsupported {
        selection: String,
    },
}

impl Report {
    pub fn build(analysis: &Analysis, selection: &ScoreSelection) -> Self {
        match selection {
            ScoreSelection::All => Self::All {
                assessments: analysis.assessments().to_vec(),
                average_age: analysis.average_age(),
            },
            ScoreSelection::Unsupported(raw) => Self::Unsupported { selection: raw.clone() },
            ScoreSelection::Ari => Self::single(analysis, Formula::Ari),
            ScoreSelection::Fk => Self::single(analysis, Formula::FleschKincaid),
            ScoreSelection::Smog => Self::single(analysis, Formula::Smog),
            ScoreSelection::Cl => Self::single(analysis, Formula::ColemanLiau),
        }
    }

    fn single(analysis: &Analysis, formula: Formula) -> Self {
        Self::Single { assessment: analysis.assessment(formula) }
    }

    pub const fn is_supported(&self) -> bool {
        !matches!(self, Self::Unsupported { .. })
    }
}
