//! Error types for CLI operations.

use thiserror::Error;

/// CLI-specific error types
#[allow(dead_code)]
#[derive(Error, Debug)]
pub enum CliError {
    /// Manifest file not found
    #[error("Manifest file not found: {path}")]
    ManifestNotFound { path: String },

    /// Manifest loading or validation error
    #[error("Failed to load manifest: {message}")]
    ManifestLoad { message: String },

    /// Scan execution error
    #[error("Contract scan failed: {message}")]
    ScanFailed { message: String },

    /// Integrity server reporting error
    #[error("Failed to report to integrity server: {message}")]
    ReportFailed { message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error wrapper
    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

#[allow(dead_code)]
impl CliError {
    pub fn manifest_not_found(path: impl Into<String>) -> Self {
        Self::ManifestNotFound { path: path.into() }
    }

    pub fn manifest_load(message: impl Into<String>) -> Self {
        Self::ManifestLoad {
            message: message.into(),
        }
    }

    pub fn scan_failed(message: impl Into<String>) -> Self {
        Self::ScanFailed {
            message: message.into(),
        }
    }

    pub fn report_failed(message: impl Into<String>) -> Self {
        Self::ReportFailed {
            message: message.into(),
        }
    }
}

/// Result type alias for CLI operations
#[allow(dead_code)]
pub type Result<T> = std::result::Result<T, CliError>;
