//! Manifest validation module
//!
//! Validation rules:
//! - microservice name and contract marker non-empty
//! - component names unique
//! - consumer service_name non-empty
//! - every component implements at least one interface name
//! - interface and type names unique
//! - dependency coordinates complete and unique

use std::collections::HashSet;

use contracts::{ComponentRole, DescriptorManifest, GuardError};

/// Validate a DescriptorManifest
///
/// Returns the first error encountered, or Ok(()).
pub fn validate(manifest: &DescriptorManifest) -> Result<(), GuardError> {
    validate_identity(manifest)?;
    validate_components(manifest)?;
    validate_interfaces(manifest)?;
    validate_types(manifest)?;
    validate_dependencies(manifest)?;
    Ok(())
}

/// Validate microservice name and contract marker
fn validate_identity(manifest: &DescriptorManifest) -> Result<(), GuardError> {
    if manifest.microservice.is_empty() {
        return Err(GuardError::manifest_validation(
            "microservice",
            "microservice name cannot be empty",
        ));
    }
    if manifest.contract_marker.is_empty() {
        return Err(GuardError::manifest_validation(
            "contract_marker",
            "contract marker cannot be empty",
        ));
    }
    Ok(())
}

/// Validate component uniqueness, roles and implemented interfaces
fn validate_components(manifest: &DescriptorManifest) -> Result<(), GuardError> {
    let mut seen = HashSet::new();
    for component in &manifest.components {
        if !seen.insert(component.name.as_str()) {
            return Err(GuardError::manifest_validation(
                format!("components[name={}]", component.name),
                "duplicate component name",
            ));
        }

        if let ComponentRole::Consumer { service_name } = &component.role {
            if service_name.is_empty() {
                return Err(GuardError::manifest_validation(
                    format!("components[{}].service_name", component.name),
                    "consumer service_name cannot be empty",
                ));
            }
        }

        if component.implements.is_empty() {
            return Err(GuardError::manifest_validation(
                format!("components[{}].implements", component.name),
                "component must implement at least one interface",
            ));
        }
    }
    Ok(())
}

/// Validate interface name uniqueness
fn validate_interfaces(manifest: &DescriptorManifest) -> Result<(), GuardError> {
    let mut seen = HashSet::new();
    for interface in &manifest.interfaces {
        if !seen.insert(interface.name.as_str()) {
            return Err(GuardError::manifest_validation(
                format!("interfaces[name={}]", interface.name),
                "duplicate interface name",
            ));
        }
    }
    Ok(())
}

/// Validate type name uniqueness
fn validate_types(manifest: &DescriptorManifest) -> Result<(), GuardError> {
    let mut seen = HashSet::new();
    for ty in &manifest.types {
        if !seen.insert(ty.name.as_str()) {
            return Err(GuardError::manifest_validation(
                format!("types[name={}]", ty.name),
                "duplicate type name",
            ));
        }
    }
    Ok(())
}

/// Validate dependency coordinates
fn validate_dependencies(manifest: &DescriptorManifest) -> Result<(), GuardError> {
    let mut seen = HashSet::new();
    for (idx, dep) in manifest.dependencies.iter().enumerate() {
        if dep.group_id.is_empty() || dep.artifact_id.is_empty() || dep.version.is_empty() {
            return Err(GuardError::manifest_validation(
                format!("dependencies[{idx}]"),
                format!("incomplete coordinates: '{dep}'"),
            ));
        }
        if !seen.insert((dep.group_id.as_str(), dep.artifact_id.as_str())) {
            return Err(GuardError::manifest_validation(
                format!("dependencies[{idx}]"),
                format!("duplicate dependency '{}:{}'", dep.group_id, dep.artifact_id),
            ));
        }
    }
    Ok(())
}
