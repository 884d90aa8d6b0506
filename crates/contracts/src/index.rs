//! TypeIndex - isolated type-resolution context for one artifact
//!
//! Answers "does this artifact declare a type of this qualified name?".
//! Read-only once constructed; safe to query concurrently.

use std::collections::HashSet;

/// Set of qualified type names declared by one dependency artifact.
#[derive(Debug, Clone, Default)]
pub struct TypeIndex {
    names: HashSet<String>,
}

impl TypeIndex {
    /// Build an index from an iterator of qualified names.
    pub fn new(names: impl IntoIterator<Item = String>) -> Self {
        Self {
            names: names.into_iter().collect(),
        }
    }

    /// Whether the artifact declares a type of this qualified name.
    #[inline]
    pub fn resolves(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Number of declared types.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the index is empty.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
