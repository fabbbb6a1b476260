// src/presentation.rs
use std::io::{self, Write};

use readability_domain::{Assessment, Report, TextCounts};
use readability_shared_kernel::{InfrastructureError, ReadabilityError};
use readability_usecase::ReportOutput;

use crate::config::OutputFormat;

pub const FAREWELL: &str = "Thanks for using the readability calculator";

/// Raw counts, shown before the score prompt in text mode.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_counts(counts: &TextCounts, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "Words: {}", counts.words)?;
    writeln!(out, "Sentences: {}", counts.sentences)?;
    writeln!(out, "Characters: {}", counts.chars)?;
    writeln!(out, "Syllables: {}", counts.syllables)?;
    writeln!(out, "Polysyllables: {}", counts.polysyllables)
}

/// # Errors
///
/// Serialization failures for JSON/YAML and any writer error.
pub fn write_report(output: &ReportOutput, format: OutputFormat, out: &mut dyn Write) -> Result<(), ReadabilityError> {
    match format {
        OutputFormat::Text => write_text_report(&output.report, out)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, output)?;
            writeln!(out)?;
        }
        OutputFormat::Yaml => out.write_all(serde_yaml::to_string(output)?.as_bytes())?,
    }
    out.flush()?;
    Ok(())
}

fn write_text_report(report: &Report, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out)?;
    match report {
        Report::Single { assessment } => write_assessment(assessment, out),
        Report::All { assessments, average_age } => {
            for assessment in assessments {
                write_assessment(assessment, out)?;
            }
            writeln!(out)?;
            writeln!(out, "This text should be understood on average by {average_age:.6} year olds.")
        }
        Report::Unsupported { .. } => writeln!(out, "I can't calculate that :("),
    }
}

fn write_assessment(assessment: &Assessment, out: &mut dyn Write) -> io::Result<()> {
    writeln!(
        out,
        "{}: {:.6} (about {} year olds)",
        assessment.formula.label(),
        assessment.score,
        assessment.age
    )
}

/// User-facing message for a failed run.
pub fn describe_error(err: &anyhow::Error) -> String {
    let Some(readability) = err.downcast_ref::<ReadabilityError>() else {
        return format!("Error: {err:#}");
    };

    match readability.root() {
        ReadabilityError::Infrastructure(InfrastructureError::InputNotFound { path }) => {
            format!("{} was not found", path.display())
        }
        _ if readability.is_degenerate() => {
            "Seems like the file was empty or its content could not be scored".to_string()
        }
        _ => format!("Error: {err:#}"),
    }
}

/// Closing line, printed after every run. Structured formats send it to
/// stderr so stdout stays parseable.
pub fn farewell(format: OutputFormat, stdout: &mut dyn Write) {
    let written = if format.is_structured() {
        writeln!(io::stderr(), "{FAREWELL}")
    } else {
        writeln!(stdout, "\n{FAREWELL}").and_then(|()| stdout.flush())
    };
    if let Err(err) = written {
        log::warn!("could not print farewell: {err}");
    }
}
