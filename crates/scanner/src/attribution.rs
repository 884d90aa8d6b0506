//! Dependency attribution
//!
//! Resolves which declared dependency owns a contract type. First match in
//! declared-dependency order wins; when two artifacts bundle a type of the
//! same qualified name the earlier declaration takes precedence.

use contracts::{DependencyInfo, GuardError, TypeIndex};
use tracing::trace;

/// Attribute a contract type to the first dependency whose index resolves
/// its qualified name.
///
/// # Errors
/// Returns [`GuardError::DependencyNotFound`] when no index resolves the
/// name.
pub fn attribute<'a>(
    contract: &str,
    dependencies: &'a [(DependencyInfo, TypeIndex)],
) -> Result<&'a DependencyInfo, GuardError> {
    let owner = dependencies
        .iter()
        .find(|(_, index)| index.resolves(contract))
        .map(|(dependency, _)| dependency)
        .ok_or_else(|| GuardError::dependency_not_found(contract))?;

    trace!(contract, dependency = %owner, "contract attributed");
    Ok(owner)
}
