use std::path::Path;

use readability_domain::{Analysis, Document};
use readability_ports::DocumentSource;
use readability_shared_kernel::{ErrorContext, Result};

use crate::dto::AnalysisOutput;

pub struct AnalyzeDocument<'a> {
    source: &'a dyn DocumentSource,
}

impl<'a> AnalyzeDocument<'a> {
    pub fn new(source: &'a dyn DocumentSource) -> Self {
        Self { source }
    }

    /// Load, normalize, count and score the document at `path`.
    ///
    /// # Errors
    ///
    /// Loading errors come from the [`DocumentSource`]; empty or unscorable
    /// text fails with a domain error before any report is produced.
    pub fn run(&self, path: &Path) -> Result<AnalysisOutput> {
        let raw = self.source.load(path)?;
        let document = Document::new(&raw);
        log::debug!("loaded {} ({} bytes)", path.display(), raw.len());

        let analysis = Analysis::of(&document)
            .with_context(|| format!("scoring {}", path.display()))?;
        Ok(AnalysisOutput { path: path.to_path_buf(), analysis })
    }
}
