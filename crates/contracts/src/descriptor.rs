//! Descriptor manifest - the precomputed type-descriptor model
//!
//! Stands in for runtime reflection: the host build's introspection step
//! emits one manifest describing components, contract interfaces, nested
//! data shapes and the declared dependency list. The dependency list is
//! ordered; that order defines attribution precedence.

use serde::{Deserialize, Serialize};

use crate::{DependencyInfo, ParamBinding, QualifiedName, RouteMapping};

/// Erased type reference plus generic type arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeRef {
    /// Qualified name of the erased type
    pub name: QualifiedName,

    /// Generic type arguments, recursively
    #[serde(default)]
    pub args: Vec<TypeRef>,
}

impl TypeRef {
    /// Non-generic reference to a named type.
    pub fn plain(name: impl Into<QualifiedName>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// Generic reference with type arguments.
    pub fn generic(name: impl Into<QualifiedName>, args: Vec<TypeRef>) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }
}

/// How a described type participates in fingerprinting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    /// Opaque leaf: contributes only its name hash (String, primitives, wrappers)
    Scalar,
    /// Data shape: accessor-backed fields contribute recursively
    #[default]
    Data,
}

/// One declared field of a data shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldShape {
    /// Field name
    pub name: String,

    /// Declared field type
    pub ty: TypeRef,

    /// Whether a getter-style accessor matching the field name exists.
    /// Fields without one are not part of the observable shape.
    #[serde(default = "default_has_accessor")]
    pub has_accessor: bool,
}

fn default_has_accessor() -> bool {
    true
}

/// Shape of one named type reachable from a contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeShape {
    /// Qualified type name
    pub name: QualifiedName,

    /// Scalar or data
    #[serde(default)]
    pub kind: TypeKind,

    /// Declared fields (data shapes only)
    #[serde(default)]
    pub fields: Vec<FieldShape>,
}

/// One parameter of a contract method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamShape {
    /// Parameter name
    pub name: String,

    /// Declared parameter type
    pub ty: TypeRef,

    /// Binding metadata, if any
    #[serde(default)]
    pub binding: Option<ParamBinding>,
}

/// One public method reachable on a contract interface.
///
/// The introspection step flattens inheritance: the `methods` list on an
/// [`InterfaceShape`] already includes inherited methods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodShape {
    /// Method name
    pub name: String,

    /// Modifier bit set as emitted by the introspection step
    #[serde(default = "default_modifiers")]
    pub modifiers: u32,

    /// Declared return type
    pub return_ty: TypeRef,

    /// Parameters in declaration order
    #[serde(default)]
    pub params: Vec<ParamShape>,

    /// Route mappings present on the method
    #[serde(default)]
    pub routes: Vec<RouteMapping>,
}

/// `public abstract`, the modifier set of an ordinary interface method.
pub const PUBLIC_ABSTRACT: u32 = 0x0401;

fn default_modifiers() -> u32 {
    PUBLIC_ABSTRACT
}

/// One interface type visible to the scanner.
///
/// An interface is a contract iff `extends` directly contains the designated
/// marker interface name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceShape {
    /// Qualified interface name
    pub name: QualifiedName,

    /// Directly extended interfaces
    #[serde(default)]
    pub extends: Vec<QualifiedName>,

    /// All reachable public methods, inherited included
    #[serde(default)]
    pub methods: Vec<MethodShape>,
}

/// Role marker on a component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum ComponentRole {
    /// Exposes contracts to other services
    Provider,
    /// Implements contracts on behalf of a named upstream service
    Consumer {
        /// Logical name of the upstream microservice (non-empty)
        service_name: String,
    },
}

/// One component participating in contract exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentShape {
    /// Qualified component type name
    pub name: QualifiedName,

    /// Provider or consumer marker
    #[serde(flatten)]
    pub role: ComponentRole,

    /// Directly implemented interface names
    #[serde(default)]
    pub implements: Vec<QualifiedName>,
}

/// Complete descriptor manifest for one microservice build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptorManifest {
    /// Microservice name reported to the integrity server
    pub microservice: String,

    /// Qualified name of the contract marker interface
    pub contract_marker: QualifiedName,

    /// Declared dependencies, in attribution-precedence order
    #[serde(default)]
    pub dependencies: Vec<DependencyInfo>,

    /// Provider and consumer components
    #[serde(default)]
    pub components: Vec<ComponentShape>,

    /// Interfaces implemented by components
    #[serde(default)]
    pub interfaces: Vec<InterfaceShape>,

    /// Nested data shapes reachable from contract signatures
    #[serde(default)]
    pub types: Vec<TypeShape>,
}

impl DescriptorManifest {
    /// Look up an interface shape by qualified name.
    pub fn interface(&self, name: &str) -> Option<&InterfaceShape> {
        self.interfaces.iter().find(|i| i.name == name)
    }
}
