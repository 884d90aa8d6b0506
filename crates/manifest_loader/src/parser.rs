//! Manifest parsing module
//!
//! Supports TOML (primary) and JSON (optional) formats.

use contracts::{DescriptorManifest, GuardError};

/// Manifest file format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    /// TOML format (recommended)
    Toml,
    /// JSON format
    Json,
}

impl ManifestFormat {
    /// Infer format from file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Parse a TOML manifest
pub fn parse_toml(content: &str) -> Result<DescriptorManifest, GuardError> {
    toml::from_str(content).map_err(|e| GuardError::ManifestParse {
        message: format!("TOML parse error: {e}"),
        source: Some(Box::new(e)),
    })
}

/// Parse a JSON manifest
pub fn parse_json(content: &str) -> Result<DescriptorManifest, GuardError> {
    serde_json::from_str(content).map_err(|e| GuardError::ManifestParse {
        message: format!("JSON parse error: {e}"),
        source: Some(Box::new(e)),
    })
}

/// Parse a manifest in the given format
pub fn parse(content: &str, format: ManifestFormat) -> Result<DescriptorManifest, GuardError> {
    match format {
        ManifestFormat::Toml => parse_toml(content),
        ManifestFormat::Json => parse_json(content),
    }
}
