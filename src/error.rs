//! Error types for ferro-alteration
//!
//! Grammar outcomes (no match, warning, invalid keyword) are reported through
//! [`crate::ParsingStatus`]. [`FerroError`] covers everything around them:
//! input that no grammar recognises, configuration, and I/O.

use crate::config::ConfigError;
use std::fmt;
use thiserror::Error;

/// Error codes for categorizing errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum ErrorCode {
    // Parse errors (E1xxx)
    /// Nothing left to parse after preprocessing
    EmptyInput = 1001,
    /// No grammar recognised the input
    Unparseable = 1002,

    // Configuration errors (E8xxx)
    /// Configuration file could not be loaded
    ConfigError = 8001,

    // IO errors (E9xxx)
    /// File IO error
    IoError = 9001,
    /// JSON serialization error
    JsonError = 9002,
}

impl ErrorCode {
    /// Get the error code as a string (e.g., "E1001")
    pub fn as_str(&self) -> String {
        format!("E{:04}", *self as u16)
    }

    /// Get a brief description of this error code
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::EmptyInput => "empty protein change",
            ErrorCode::Unparseable => "unrecognised protein change notation",
            ErrorCode::ConfigError => "configuration error",
            ErrorCode::IoError => "file I/O error",
            ErrorCode::JsonError => "JSON serialization error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Main error type for ferro-alteration operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FerroError {
    /// Input was empty once prefixes, annotations and whitespace were removed
    #[error("Empty protein change")]
    EmptyInput,

    /// No grammar recognised the input
    #[error("Unable to parse protein change: {input}")]
    Unparseable { input: String },

    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// IO error (for file operations)
    #[error("IO error: {msg}")]
    Io { msg: String },

    /// JSON serialization error
    #[error("JSON error: {msg}")]
    Json { msg: String },
}

impl FerroError {
    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            FerroError::EmptyInput => ErrorCode::EmptyInput,
            FerroError::Unparseable { .. } => ErrorCode::Unparseable,
            FerroError::Config(_) => ErrorCode::ConfigError,
            FerroError::Io { .. } => ErrorCode::IoError,
            FerroError::Json { .. } => ErrorCode::JsonError,
        }
    }

    /// Error message prefixed with its code, e.g. `[E1002] Unable to parse ...`
    pub fn detailed_message(&self) -> String {
        format!("[{}] {}", self.code(), self)
    }
}

impl From<std::io::Error> for FerroError {
    fn from(err: std::io::Error) -> Self {
        FerroError::Io {
            msg: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for FerroError {
    fn from(err: serde_json::Error) -> Self {
        FerroError::Json {
            msg: err.to_string(),
        }
    }
}
