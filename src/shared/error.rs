use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Report generated (warnings may have been emitted)
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Fatal error: unreadable export, missing columns, write failure, etc.
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Fatal errors raised while loading inputs or writing the report.
///
/// Per-line and per-record anomalies are never represented here; they are
/// absorbed by the loaders and surfaced as warnings.
#[derive(Debug, Error)]
pub enum RadarError {
    #[error("Release export unavailable: {path}\nDetails: {details}\n\n💡 Hint: Pass the export explicitly with --export, or place a Product-Pages-Export*.csv file in the search directory")]
    DataSource { path: PathBuf, details: String },

    #[error("Release export is missing required column(s): {}\nFile: {path}\n\n💡 Hint: The export must contain Product, Release, BU, GA date, GA name and Link columns", columns.join(", "))]
    MissingColumns { path: PathBuf, columns: Vec<String> },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileRead { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWrite { path: PathBuf, details: String },

    #[error("Invalid path: {path}\nReason: {reason}\n\n💡 Hint: Please specify an existing directory")]
    InvalidPath { path: PathBuf, reason: String },

    /// Validation error for configuration and request values
    #[error("Validation error: {message}")]
    Validation { message: String },
}

/// A malformed line in the operator mapping table.
///
/// Recovered locally: the line is skipped and the error is collected so the
/// caller can print a single summary once loading completes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line_number}: {reason} ({line:?})")]
pub struct MappingFormatError {
    pub line_number: usize,
    pub line: String,
    pub reason: String,
}
