use std::path::PathBuf;

use readability_domain::{Analysis, Report, ScoreSelection, TextCounts};
use serde::Serialize;

/// A document that was loaded and scored successfully.
#[derive(Debug, Clone)]
pub struct AnalysisOutput {
    pub path: PathBuf,
    pub analysis: Analysis,
}

impl AnalysisOutput {
    pub const fn counts(&self) -> &TextCounts {
        &self.analysis.counts
    }

    /// Resolve the user's selection into the final report.
    pub fn report(&self, selection: &ScoreSelection) -> ReportOutput {
        ReportOutput {
            path: self.path.clone(),
            counts: self.analysis.counts,
            report: Report::build(&self.analysis, selection),
        }
    }
}

/// Everything a presenter needs for one run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportOutput {
    pub path: PathBuf,
    pub counts: TextCounts,
    pub report: Report,
}
