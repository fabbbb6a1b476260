// src/app.rs
use std::{io::Write, path::PathBuf};

use anyhow::{Context, Result};
use readability_domain::ScoreSelection;
use readability_ports::{DocumentSource, UserInteraction};
use readability_usecase::AnalyzeDocument;

use crate::{
    config::{Config, OutputFormat},
    presentation,
    prompt::{PATH_PROMPT, SCORE_PROMPT},
};

/// Resolve the document → analyze it → ask for a score → print the report.
///
/// # Errors
///
/// Missing input, unscorable documents, prompt failures and output errors.
/// The caller is responsible for the farewell line.
pub fn run(
    config: &Config,
    source: &dyn DocumentSource,
    interaction: &dyn UserInteraction,
    out: &mut dyn Write,
) -> Result<()> {
    let path = match &config.path {
        Some(path) => path.clone(),
        None => PathBuf::from(interaction.ask(PATH_PROMPT)?),
    };
    log::info!("analyzing {}", path.display());

    let analysis = AnalyzeDocument::new(source).run(&path)?;

    if config.format == OutputFormat::Text {
        presentation::write_counts(analysis.counts(), out).context("failed to print counts")?;
        out.flush().context("failed to print counts")?;
    }

    let selection = match &config.selection {
        Some(selection) => selection.clone(),
        None => ScoreSelection::parse(&interaction.ask(SCORE_PROMPT)?),
    };
    log::info!("reporting selection '{selection}'");

    let report = analysis.report(&selection);
    presentation::write_report(&report, config.format, out).context("failed to print report")?;
    Ok(())
}
