//! Layered error definitions
//!
//! Categorized by source: manifest / discovery / attribution / report.
//! Every variant is fatal to the current run; there is no internal retry.

use thiserror::Error;

/// Unified error type
#[derive(Debug, Error)]
pub enum GuardError {
    // ===== Manifest Errors =====
    /// Descriptor manifest parse error
    #[error("manifest parse error: {message}")]
    ManifestParse {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Descriptor manifest validation error
    #[error("manifest validation error at '{field}': {message}")]
    ManifestValidation { field: String, message: String },

    // ===== Discovery Errors =====
    /// A provider or consumer component implements no contract-marked interface
    #[error("no contract found for component '{component}'")]
    ContractNotFound { component: String },

    // ===== Attribution Errors =====
    /// A discovered contract resolves in no declared dependency
    #[error("no dependency declares contract type '{contract}'")]
    DependencyNotFound { contract: String },

    /// An artifact type index could not be loaded
    #[error("unable to load type index for '{artifact}': {message}")]
    IndexLoad { artifact: String, message: String },

    // ===== Report Errors =====
    /// Integrity-server request failed
    #[error("request to '{url}' failed: {reason}")]
    RequestFailed {
        url: String,
        reason: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // ===== General Errors =====
    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Other error
    #[error("{0}")]
    Other(String),
}

impl GuardError {
    /// Create manifest parse error
    pub fn manifest_parse(message: impl Into<String>) -> Self {
        Self::ManifestParse {
            message: message.into(),
            source: None,
        }
    }

    /// Create manifest validation error
    pub fn manifest_validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ManifestValidation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create contract-not-found error for a component
    pub fn contract_not_found(component: impl Into<String>) -> Self {
        Self::ContractNotFound {
            component: component.into(),
        }
    }

    /// Create dependency-not-found error for a contract type
    pub fn dependency_not_found(contract: impl Into<String>) -> Self {
        Self::DependencyNotFound {
            contract: contract.into(),
        }
    }

    /// Create index-load error for an artifact
    pub fn index_load(artifact: impl Into<String>, message: impl Into<String>) -> Self {
        Self::IndexLoad {
            artifact: artifact.into(),
            message: message.into(),
        }
    }

    /// Create request-failed error from a non-success status code
    pub fn request_status(url: impl Into<String>, status: u16) -> Self {
        Self::RequestFailed {
            url: url.into(),
            reason: format!("status code {status}"),
            source: None,
        }
    }

    /// Create request-failed error from an underlying transport error
    pub fn request_io(
        url: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::RequestFailed {
            url: url.into(),
            reason: source.to_string(),
            source: Some(Box::new(source)),
        }
    }
}
