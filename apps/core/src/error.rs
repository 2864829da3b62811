use std::io;
use thiserror::Error;

/// Application-wide error type, consolidating all possible errors into a single enum.
#[derive(Debug, Error)]
pub enum AppError {
    /// The input file has an extension no extractor handles.
    /// The extension is kept with its leading dot (empty when the file has none).
    #[error("Unsupported file format: {extension}")]
    UnsupportedFormat { extension: String },

    /// Represents a failure to pull text out of a PDF, DOCX or text document.
    #[error("Extraction error: {0}")]
    Extraction(String),

    /// Linguistic resources (stopword lists) could not be loaded.
    #[error("Resource error: {0}")]
    Resource(String),

    /// Represents standard input/output errors.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Represents failures while writing tabular exports.
    #[error("Export error: {0}")]
    Export(String),

    /// Represents data validation errors (e.g., out-of-range counts).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Represents configuration-related errors (e.g., malformed environment variables).
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    pub fn unsupported_format(extension: impl Into<String>) -> Self {
        AppError::UnsupportedFormat {
            extension: extension.into(),
        }
    }
}

impl From<csv::Error> for AppError {
    fn from(err: csv::Error) -> Self {
        AppError::Export(format!("CSV error: {}", err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Export(format!("JSON error: {}", err))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(format!("Validation errors: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
