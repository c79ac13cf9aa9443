//! Error types for the wall form.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by form operations.
#[derive(Debug, Error)]
pub enum FormError {
    /// No input field is registered under this id.
    #[error("unknown form field '{key}'")]
    UnknownField { key: String },

    /// Strict assembly rejected the current input.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The payload could not be handed to its sink.
    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Named validation failures produced by strict assembly.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("element type '{element_type}' has no field group")]
    UnsupportedElementType { element_type: String },

    #[error("field '{field}' must not be empty")]
    EmptyField { field: String },

    #[error("field '{field}' is not a number: '{value}'")]
    NotANumber { field: String, value: String },

    #[error("field '{field}' must be greater than zero, got {value}")]
    NotPositive { field: String, value: f64 },

    #[error("field '{field}' must not be negative, got {value}")]
    NegativeOffset { field: String, value: f64 },

    /// Void number is 1-based, matching the field ids.
    #[error("void {void} does not fit inside the wall: {reason}")]
    VoidOutsideWall { void: usize, reason: String },
}

/// Errors that can occur when exporting a payload.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Failed to create the output file.
    #[error("failed to create file '{path}': {source}")]
    FileCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write data to the file.
    #[error("failed to write data: {message}")]
    WriteError { message: String },

    /// Failed to serialize data to JSON.
    #[error("JSON serialization failed: {source}")]
    JsonSerialize {
        #[from]
        source: serde_json::Error,
    },

    /// Failed to write CSV data.
    #[error("CSV write failed: {source}")]
    CsvWrite {
        #[from]
        source: csv::Error,
    },
}

/// Errors that can occur when loading a payload preset.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid payload JSON in '{path}': {source}")]
    JsonParse {
        path: PathBuf,
        source: serde_json::Error,
    },
}
