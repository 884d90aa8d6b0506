//! Contract discovery
//!
//! For each provider/consumer component: take its directly implemented
//! interfaces, keep exactly those that directly extend the contract marker.
//! A component marked as a contract participant with no actual contract is
//! a configuration bug, so discovery halts on it.

use std::collections::{BTreeMap, BTreeSet};

use contracts::{ComponentRole, ComponentShape, DescriptorManifest, GuardError};
use tracing::debug;

/// Contracts exposed by provider components, deduplicated across providers.
pub fn discover_provided(manifest: &DescriptorManifest) -> Result<BTreeSet<&str>, GuardError> {
    let mut contracts = BTreeSet::new();
    for component in providers(manifest) {
        let found = component_contracts(manifest, component)?;
        debug!(
            component = %component.name,
            contracts = found.len(),
            "provider contracts found"
        );
        contracts.extend(found);
    }
    Ok(contracts)
}

/// Contracts consumed by consumer components, grouped by upstream service
/// name. Consumers sharing an upstream name merge into one entry.
pub fn discover_consumed(
    manifest: &DescriptorManifest,
) -> Result<BTreeMap<&str, BTreeSet<&str>>, GuardError> {
    let mut by_service: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
    for (component, service_name) in consumers(manifest) {
        let found = component_contracts(manifest, component)?;
        debug!(
            component = %component.name,
            service = service_name,
            contracts = found.len(),
            "consumer contracts found"
        );
        by_service.entry(service_name).or_default().extend(found);
    }
    Ok(by_service)
}

fn providers(manifest: &DescriptorManifest) -> impl Iterator<Item = &ComponentShape> {
    manifest
        .components
        .iter()
        .filter(|c| c.role == ComponentRole::Provider)
}

fn consumers(manifest: &DescriptorManifest) -> impl Iterator<Item = (&ComponentShape, &str)> {
    manifest.components.iter().filter_map(|c| match &c.role {
        ComponentRole::Consumer { service_name } => Some((c, service_name.as_str())),
        ComponentRole::Provider => None,
    })
}

/// Contract-marked interfaces directly implemented by one component.
///
/// # Errors
/// Returns [`GuardError::ContractNotFound`] when the component implements
/// no contract-marked interface.
fn component_contracts<'a>(
    manifest: &'a DescriptorManifest,
    component: &'a ComponentShape,
) -> Result<Vec<&'a str>, GuardError> {
    let contracts: Vec<&str> = component
        .implements
        .iter()
        .map(|name| name.as_str())
        .filter(|name| is_contract(manifest, name))
        .collect();

    if contracts.is_empty() {
        return Err(GuardError::contract_not_found(component.name.as_str()));
    }
    Ok(contracts)
}

/// An interface is a contract iff it directly extends the marker interface.
fn is_contract(manifest: &DescriptorManifest, name: &str) -> bool {
    manifest
        .interface(name)
        .is_some_and(|i| i.extends.iter().any(|s| *s == manifest.contract_marker))
}
