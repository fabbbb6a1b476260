// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum ReadabilityError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<ReadabilityError>,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),

    #[error("Presentation error: {0}")]
    Presentation(#[from] PresentationError),
}

pub type Result<T> = std::result::Result<T, ReadabilityError>;

impl ReadabilityError {
    /// Strip every `Context` layer and return the underlying error.
    pub fn root(&self) -> &Self {
        let mut current = self;
        while let Self::Context { source, .. } = current {
            current = source.as_ref();
        }
        current
    }

    /// The document path did not resolve to a readable file.
    pub fn is_input_not_found(&self) -> bool {
        matches!(self.root(), Self::Infrastructure(InfrastructureError::InputNotFound { .. }))
    }

    /// The document could not be scored (empty, or a formula left the finite range).
    pub fn is_degenerate(&self) -> bool {
        matches!(
            self.root(),
            Self::Domain(DomainError::DegenerateDocument { .. } | DomainError::NonFiniteScore { .. })
        )
    }
}

/// Domain-layer specific errors.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Degenerate document: {words} words and {sentences} sentences cannot be scored")]
    DegenerateDocument { words: usize, sentences: usize },

    #[error("Score {formula} is not finite: {value}")]
    NonFiniteScore { formula: String, value: f64 },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("Input '{path}' was not found")]
    InputNotFound { path: PathBuf },

    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize {format} output: {details}")]
    SerializationError { format: String, details: String },

    #[error("Output error: {message}")]
    OutputError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

pub type InfraResult<T> = std::result::Result<T, InfrastructureError>;

/// Presentation-layer errors.
#[derive(Debug, Error)]
pub enum PresentationError {
    #[error("Prompt '{prompt}' failed: {reason}")]
    PromptFailed { prompt: String, reason: String },

    #[error("Invalid CLI value: {flag} = {value} - {reason}")]
    InvalidValue {
        flag: String,
        value: String,
        reason: String,
    },
}

pub type PresentationResult<T> = std::result::Result<T, PresentationError>;

impl From<std::io::Error> for InfrastructureError {
    fn from(err: std::io::Error) -> Self {
        Self::OutputError { message: err.to_string(), source: Some(Box::new(err)) }
    }
}

impl From<std::io::Error> for ReadabilityError {
    fn from(err: std::io::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

impl From<serde_json::Error> for InfrastructureError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError {
            format: "JSON".to_string(),
            details: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ReadabilityError {
    fn from(err: serde_json::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

#[cfg(feature = "yaml")]
impl From<serde_yaml::Error> for InfrastructureError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::SerializationError {
            format: "YAML".to_string(),
            details: err.to_string(),
        }
    }
}

#[cfg(feature = "yaml")]
impl From<serde_yaml::Error> for ReadabilityError {
    fn from(err: serde_yaml::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<ReadabilityError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| ReadabilityError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| ReadabilityError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
