//! Type shape fingerprinter
//!
//! Pure recursive fingerprint over the descriptor type table. A type
//! contributes its name hash; data shapes additionally contribute every
//! accessor-backed field. Types absent from the table, and scalar-kind
//! types, are opaque leaves: name hash only. This is how String, void,
//! primitives and wrappers are represented.
//!
//! A visited stack keyed by qualified name guards against cyclic shapes:
//! a type already on the recursion path contributes only its name hash.

use std::collections::HashMap;

use contracts::{FieldShape, TypeKind, TypeRef, TypeShape};

use crate::hash::str_hash;

/// Read-only view over the manifest's declared type shapes.
pub struct TypeRegistry<'a> {
    shapes: HashMap<&'a str, &'a TypeShape>,
}

impl<'a> TypeRegistry<'a> {
    /// Build a registry from the manifest's type table.
    pub fn new(types: &'a [TypeShape]) -> Self {
        Self {
            shapes: types.iter().map(|t| (t.name.as_str(), t)).collect(),
        }
    }

    /// Look up the shape of a qualified name.
    pub fn shape(&self, name: &str) -> Option<&'a TypeShape> {
        self.shapes.get(name).copied()
    }
}

/// Fingerprint of a type identified by qualified name.
pub fn type_fingerprint(registry: &TypeRegistry<'_>, name: &str) -> i64 {
    let mut visited = Vec::new();
    fp_type(registry, name, &mut visited)
}

/// Fingerprint of a type reference: erased type plus generic arguments.
pub fn type_ref_fingerprint(registry: &TypeRegistry<'_>, ty: &TypeRef) -> i64 {
    let mut visited = Vec::new();
    fp_type_ref(registry, ty, &mut visited)
}

/// Fingerprint of a generic-argument list.
pub fn generic_args_fingerprint(registry: &TypeRegistry<'_>, args: &[TypeRef]) -> i64 {
    let mut visited = Vec::new();
    fp_generic_args(registry, args, &mut visited)
}

pub(crate) fn fp_type_ref<'a>(
    registry: &TypeRegistry<'a>,
    ty: &TypeRef,
    visited: &mut Vec<&'a str>,
) -> i64 {
    let mut sum = fp_type(registry, &ty.name, visited);
    if !ty.args.is_empty() {
        sum = sum.wrapping_add(fp_generic_args(registry, &ty.args, visited));
    }
    sum
}

fn fp_type<'a>(registry: &TypeRegistry<'a>, name: &str, visited: &mut Vec<&'a str>) -> i64 {
    let sum = str_hash(name);
    let Some(shape) = registry.shape(name) else {
        return sum;
    };
    if shape.kind == TypeKind::Scalar {
        return sum;
    }
    // Cycle guard: a shape already on the path contributes its name only
    if visited.contains(&shape.name.as_str()) {
        return sum;
    }

    visited.push(shape.name.as_str());
    let sum = shape
        .fields
        .iter()
        .filter(|field| field.has_accessor)
        .fold(sum, |acc, field| {
            acc.wrapping_add(fp_field(registry, field, visited))
        });
    visited.pop();
    sum
}

fn fp_field<'a>(
    registry: &TypeRegistry<'a>,
    field: &FieldShape,
    visited: &mut Vec<&'a str>,
) -> i64 {
    let mut sum = str_hash(&field.name);
    sum = sum.wrapping_add(fp_type(registry, &field.ty.name, visited));
    if !field.ty.args.is_empty() {
        sum = sum.wrapping_add(fp_generic_args(registry, &field.ty.args, visited));
    }
    sum
}

// A parameterized argument contributes only its own arguments, not its
// erased name: List<List<String>> counts the inner String but not the
// inner List.
fn fp_generic_args<'a>(
    registry: &TypeRegistry<'a>,
    args: &[TypeRef],
    visited: &mut Vec<&'a str>,
) -> i64 {
    let mut sum: i64 = 0;
    for arg in args {
        if !arg.args.is_empty() {
            sum = sum.wrapping_add(fp_generic_args(registry, &arg.args, visited));
        } else {
            sum = sum.wrapping_add(fp_type(registry, &arg.name, visited));
        }
    }
    sum
}
