//! # Manifest Loader
//!
//! Descriptor-manifest loading and parsing module.
//!
//! Responsibilities:
//! - Parse TOML/JSON descriptor manifests
//! - Validate manifest legality
//! - Load per-artifact type indexes from a local package repository
//!
//! # Example
//!
//! ```no_run
//! use manifest_loader::ManifestLoader;
//! use std::path::Path;
//!
//! let manifest = ManifestLoader::load_from_path(Path::new("contracts.toml")).unwrap();
//! println!("Microservice: {}", manifest.microservice);
//! ```

mod parser;
mod repository;
mod validator;

pub use contracts::DescriptorManifest;
pub use parser::ManifestFormat;
pub use repository::PackageRepository;

use contracts::GuardError;
use std::path::Path;

/// Descriptor-manifest loader
///
/// Provides static methods to load a manifest from files or strings.
pub struct ManifestLoader;

impl ManifestLoader {
    /// Load a manifest from a file path
    ///
    /// Automatically detects format from file extension (.toml / .json).
    ///
    /// # Errors
    /// - File read failure
    /// - Unsupported format
    /// - Parse failure
    /// - Validation failure
    pub fn load_from_path(path: &Path) -> Result<DescriptorManifest, GuardError> {
        let format = Self::detect_format(path)?;
        let content = Self::read_file(path)?;
        Self::load_from_str(&content, format)
    }

    /// Load a manifest from a string
    ///
    /// # Errors
    /// - Parse failure
    /// - Validation failure
    pub fn load_from_str(
        content: &str,
        format: ManifestFormat,
    ) -> Result<DescriptorManifest, GuardError> {
        let manifest = parser::parse(content, format)?;
        validator::validate(&manifest)?;
        Ok(manifest)
    }

    /// Serialize a manifest to a TOML string
    pub fn to_toml(manifest: &DescriptorManifest) -> Result<String, GuardError> {
        toml::to_string_pretty(manifest)
            .map_err(|e| GuardError::manifest_parse(format!("TOML serialize error: {e}")))
    }

    /// Serialize a manifest to a JSON string
    pub fn to_json(manifest: &DescriptorManifest) -> Result<String, GuardError> {
        serde_json::to_string_pretty(manifest)
            .map_err(|e| GuardError::manifest_parse(format!("JSON serialize error: {e}")))
    }
}

impl ManifestLoader {
    /// Infer manifest format from file extension
    fn detect_format(path: &Path) -> Result<ManifestFormat, GuardError> {
        let ext = path.extension().and_then(|e| e.to_str()).ok_or_else(|| {
            GuardError::manifest_parse("cannot determine file format from extension")
        })?;

        ManifestFormat::from_extension(ext).ok_or_else(|| {
            GuardError::manifest_parse(format!("unsupported manifest format: .{ext}"))
        })
    }

    /// Read manifest file content
    fn read_file(path: &Path) -> Result<String, GuardError> {
        Ok(std::fs::read_to_string(path)?)
    }
}
