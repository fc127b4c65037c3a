// seating-chart: error types for the command-line host

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Failed to create PDF: {0}")]
    PdfError(String),
    #[error("Failed to read seed file: {0}")]
    SeedError(String),
    #[error("Failed to read script: {0}")]
    ScriptReadError(String),
    #[error("Script line {line}: {message}")]
    ScriptError { line: usize, message: String },
    #[error("Invalid date format: {0}")]
    DateError(String),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
