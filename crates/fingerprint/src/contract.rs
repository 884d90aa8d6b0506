//! Contract fingerprinter
//!
//! Combines per-method fingerprints (type shapes + route metadata + binding
//! metadata) into one digest per contract interface. The return type is
//! counted twice, weighting it double relative to other method aspects.
//!
//! Methods carrying no route mapping and no parameter binding are helper
//! methods outside the observable contract surface; they do not contribute.

use contracts::{InterfaceShape, MethodShape, ParamBinding, ParamShape, RouteAttrs, RouteMapping};
use sha2::{Digest, Sha256};
use tracing::trace;

use crate::hash::{bool_hash, hex_encode, seq_hash, str_hash};
use crate::shape::{fp_type_ref, TypeRegistry};

/// Compute the checksum digest of one contract interface.
///
/// Additive sum of method fingerprints, rendered as a decimal string and
/// digested with SHA-256 into lowercase hex.
pub fn contract_checksum(interface: &InterfaceShape, registry: &TypeRegistry<'_>) -> String {
    let mut sum: i64 = 0;
    for method in interface.methods.iter().filter(|m| is_observable(m)) {
        sum = sum.wrapping_add(method_fingerprint(method, registry));
    }
    let digest = Sha256::digest(sum.to_string().as_bytes());
    let checksum = hex_encode(&digest);
    trace!(contract = %interface.name, %checksum, "contract checksum computed");
    checksum
}

/// Fingerprint of one contract method.
pub fn method_fingerprint(method: &MethodShape, registry: &TypeRegistry<'_>) -> i64 {
    let return_fp = return_type_fingerprint(method, registry);
    let mut sum = return_fp;
    sum = sum.wrapping_add(routes_fingerprint(method));
    sum = sum.wrapping_add(params_fingerprint(method, registry));
    // Return type weighted double
    sum = sum.wrapping_add(return_fp);
    sum = sum.wrapping_add(i64::from(method.modifiers));
    sum = sum.wrapping_add(str_hash(&method.name));
    sum
}

// Helper methods with no route or binding metadata are not part of the
// contract's observable shape.
fn is_observable(method: &MethodShape) -> bool {
    !method.routes.is_empty() || method.params.iter().any(|p| p.binding.is_some())
}

fn return_type_fingerprint(method: &MethodShape, registry: &TypeRegistry<'_>) -> i64 {
    let mut visited = Vec::new();
    fp_type_ref(registry, &method.return_ty, &mut visited)
}

fn params_fingerprint(method: &MethodShape, registry: &TypeRegistry<'_>) -> i64 {
    method.params.iter().fold(0i64, |acc, param| {
        acc.wrapping_add(param_fingerprint(param, registry))
    })
}

fn param_fingerprint(param: &ParamShape, registry: &TypeRegistry<'_>) -> i64 {
    let mut sum: i64 = 0;
    if let Some(binding) = &param.binding {
        sum = sum.wrapping_add(binding_fingerprint(binding));
    }
    let mut visited = Vec::new();
    sum = sum.wrapping_add(fp_type_ref(registry, &param.ty, &mut visited));
    sum = sum.wrapping_add(str_hash(&param.name));
    sum
}

fn binding_fingerprint(binding: &ParamBinding) -> i64 {
    match binding {
        ParamBinding::Body { required } => bool_hash(*required).wrapping_add(str_hash("Body")),
        ParamBinding::Path {
            value,
            name,
            required,
        } => str_hash(value)
            .wrapping_add(bool_hash(*required))
            .wrapping_add(str_hash(name))
            .wrapping_add(str_hash("Path")),
        ParamBinding::Query {
            value,
            name,
            required,
            default_value,
        } => str_hash(value)
            .wrapping_add(str_hash(name))
            .wrapping_add(bool_hash(*required))
            .wrapping_add(str_hash(default_value))
            .wrapping_add(str_hash("Query")),
    }
}

fn routes_fingerprint(method: &MethodShape) -> i64 {
    method.routes.iter().fold(0i64, |acc, route| {
        acc.wrapping_add(route_fingerprint(route))
    })
}

fn route_fingerprint(route: &RouteMapping) -> i64 {
    match route {
        RouteMapping::Request { name, verbs, attrs } => {
            let verb_names: Vec<&str> = verbs.iter().map(|v| v.as_str()).collect();
            attrs_fingerprint(attrs)
                .wrapping_add(seq_hash(&verb_names))
                .wrapping_add(str_hash(name))
                .wrapping_add(str_hash("Request"))
        }
        RouteMapping::Get { attrs } => attrs_fingerprint(attrs).wrapping_add(str_hash("Get")),
        RouteMapping::Post { attrs } => attrs_fingerprint(attrs).wrapping_add(str_hash("Post")),
        RouteMapping::Put { attrs } => attrs_fingerprint(attrs).wrapping_add(str_hash("Put")),
        RouteMapping::Delete { attrs } => {
            attrs_fingerprint(attrs).wrapping_add(str_hash("Delete"))
        }
        RouteMapping::Patch { attrs } => attrs_fingerprint(attrs).wrapping_add(str_hash("Patch")),
    }
}

fn attrs_fingerprint(attrs: &RouteAttrs) -> i64 {
    seq_hash(&attrs.paths)
        .wrapping_add(seq_hash(&attrs.params))
        .wrapping_add(seq_hash(&attrs.headers))
        .wrapping_add(seq_hash(&attrs.consumes))
        .wrapping_add(seq_hash(&attrs.produces))
}
