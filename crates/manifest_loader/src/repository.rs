//! Local package repository access
//!
//! Each dependency artifact carries a type-index file alongside its build
//! output, listing the qualified type names the artifact declares:
//!
//! ```text
//! <root>/<group as path>/<artifact>/<version>/<artifact>-<version>.types.json
//! ```
//!
//! The file is a JSON array of strings. Index loading preserves the
//! manifest's declared dependency order, which defines attribution
//! precedence.

use std::path::{Path, PathBuf};

use contracts::{DependencyInfo, GuardError, TypeIndex};
use tracing::debug;

/// Handle to the local package repository root.
pub struct PackageRepository {
    root: PathBuf,
}

impl PackageRepository {
    /// Create a repository handle rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Repository root path.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the type-index file for one dependency.
    pub fn index_path(&self, dependency: &DependencyInfo) -> PathBuf {
        let mut path = self.root.clone();
        for part in dependency.group_id.split('.') {
            path.push(part);
        }
        path.push(&dependency.artifact_id);
        path.push(&dependency.version);
        path.push(format!(
            "{}-{}.types.json",
            dependency.artifact_id, dependency.version
        ));
        path
    }

    /// Load the type index of one dependency.
    ///
    /// # Errors
    /// Returns [`GuardError::IndexLoad`] when the index file is missing or
    /// malformed.
    pub fn load_index(&self, dependency: &DependencyInfo) -> Result<TypeIndex, GuardError> {
        let path = self.index_path(dependency);
        debug!(dependency = %dependency, path = %path.display(), "loading type index");

        let content = std::fs::read_to_string(&path).map_err(|e| {
            GuardError::index_load(
                dependency.to_string(),
                format!("cannot read '{}': {e}", path.display()),
            )
        })?;

        let names: Vec<String> = serde_json::from_str(&content).map_err(|e| {
            GuardError::index_load(
                dependency.to_string(),
                format!("malformed index '{}': {e}", path.display()),
            )
        })?;

        Ok(TypeIndex::new(names))
    }

    /// Load indexes for all declared dependencies, preserving declaration
    /// order.
    pub fn load_indexes(
        &self,
        dependencies: &[DependencyInfo],
    ) -> Result<Vec<(DependencyInfo, TypeIndex)>, GuardError> {
        dependencies
            .iter()
            .map(|dep| {
                let index = self.load_index(dep)?;
                debug!(dependency = %dep, types = index.len(), "type index loaded");
                Ok((dep.clone(), index))
            })
            .collect()
    }
}
