// src/config.rs
use std::path::PathBuf;

use readability_domain::ScoreSelection;
use readability_shared_kernel::{PresentationError, PresentationResult};
use serde::Serialize;

use crate::cli::Args;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

impl OutputFormat {
    /// Machine-readable formats keep stdout free of anything but the document.
    pub const fn is_structured(self) -> bool {
        matches!(self, Self::Json | Self::Yaml)
    }
}

/// Resolved settings for one run. Missing `path` / `selection` are prompted for.
#[derive(Debug, Clone)]
pub struct Config {
    pub path: Option<PathBuf>,
    pub selection: Option<ScoreSelection>,
    pub format: OutputFormat,
}

impl TryFrom<Args> for Config {
    type Error = PresentationError;

    fn try_from(args: Args) -> PresentationResult<Self> {
        if let Some(path) = &args.path {
            validate_not_blank("PATH", &path.to_string_lossy())?;
        }
        if let Some(score) = &args.score {
            validate_not_blank("--score", score)?;
        }

        Ok(Self {
            path: args.path,
            selection: args.score.as_deref().map(ScoreSelection::parse),
            format: args.format.into(),
        })
    }
}

fn validate_not_blank(flag: &str, value: &str) -> PresentationResult<()> {
    if value.trim().is_empty() {
        return Err(PresentationError::InvalidValue {
            flag: flag.to_string(),
            value: value.to_string(),
            reason: "must not be empty".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    fn config(argv: &[&str]) -> PresentationResult<Config> {
        let mut full = vec!["readability"];
        full.extend_from_slice(argv);
        Config::try_from(Args::try_parse_from(full).expect("valid argv"))
    }

    #[test]
    fn score_is_parsed_once() {
        let config = config(&["doc.txt", "--score", "Smog", "--format", "json"]).unwrap();
        assert_eq!(config.selection, Some(ScoreSelection::Smog));
        assert_eq!(config.format, OutputFormat::Json);
        assert!(config.format.is_structured());
    }

    #[test]
    fn unknown_score_is_kept_for_reporting() {
        let config = config(&["--score", "fog"]).unwrap();
        assert_eq!(config.selection, Some(ScoreSelection::Unsupported("fog".to_string())));
        assert!(config.path.is_none());
    }

    #[test]
    fn blank_values_are_rejected() {
        let err = config(&["--score", "  "]).unwrap_err();
        assert!(err.to_string().contains("--score"));
        assert!(config(&[""]).is_err());
    }
}
