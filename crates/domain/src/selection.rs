// crates/domain/src/selection.rs
use std::{convert::Infallible, fmt, str::FromStr};

use serde::Serialize;

use crate::scoring::Formula;

/// Which scores the user wants reported.
///
/// Parsing never fails: anything that is not a recognized key becomes
/// [`ScoreSelection::Unsupported`] and is reported as such.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreSelection {
    Ari,
    Fk,
    Smog,
    Cl,
    All,
    Unsupported(String),
}

impl ScoreSelection {
    /// Trimmed, case-insensitive match against `ari | fk | smog | cl | all`.
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "ari" => Self::Ari,
            "fk" => Self::Fk,
            "smog" => Self::Smog,
            "cl" => Self::Cl,
            "all" => Self::All,
            _ => Self::Unsupported(trimmed.to_string()),
        }
    }

    /// The single formula this selection names, if any.
    pub const fn formula(&self) -> Option<Formula> {
        match self {
            Self::Ari => Some(Formula::Ari),
            Self::Fk => Some(Formula::FleschKincaid),
            Self::Smog => Some(Formula::Smog),
            Self::Cl => Some(Formula::ColemanLiau),
            Self::All | Self::Unsupported(_) => None,
        }
    }
}

impl FromStr for ScoreSelection {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<Formula> for ScoreSelection {
    fn from(formula: Formula) -> Self {
        match formula {
            Formula::Ari => Self::Ari,
            Formula::FleschKincaid => Self::Fk,
            Formula::Smog => Self::Smog,
            Formula::ColemanLiau => Self::Cl,
        }
    }
}

impl fmt::Display for ScoreSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Unsupported(raw) => f.write_str(raw),
            single => f.write_str(single.formula().map_or("", Formula::key)),
        }
    }
}
