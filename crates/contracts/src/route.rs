//! Route-mapping and parameter-binding metadata
//!
//! Closed tagged-variant model: one case per recognized annotation kind,
//! each carrying its specific attribute set.

use serde::{Deserialize, Serialize};

/// HTTP verbs recognized by route mappings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpVerb {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Head,
    Options,
}

impl HttpVerb {
    /// Canonical verb name used in fingerprinting.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
            Self::Patch => "PATCH",
            Self::Head => "HEAD",
            Self::Options => "OPTIONS",
        }
    }
}

/// Attributes shared by every route-mapping kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteAttrs {
    /// Path templates (e.g., "/orders/{id}")
    #[serde(default)]
    pub paths: Vec<String>,

    /// Request-parameter constraints
    #[serde(default)]
    pub params: Vec<String>,

    /// Header constraints
    #[serde(default)]
    pub headers: Vec<String>,

    /// Consumed media types
    #[serde(default)]
    pub consumes: Vec<String>,

    /// Produced media types
    #[serde(default)]
    pub produces: Vec<String>,
}

/// Route-mapping metadata on a contract method.
///
/// A method may carry more than one mapping; fingerprint contributions from
/// each are summed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RouteMapping {
    /// Generic mapping carrying an explicit verb list
    Request {
        #[serde(default)]
        name: String,
        #[serde(default)]
        verbs: Vec<HttpVerb>,
        #[serde(flatten)]
        attrs: RouteAttrs,
    },
    /// GET shortcut
    Get {
        #[serde(flatten)]
        attrs: RouteAttrs,
    },
    /// POST shortcut
    Post {
        #[serde(flatten)]
        attrs: RouteAttrs,
    },
    /// PUT shortcut
    Put {
        #[serde(flatten)]
        attrs: RouteAttrs,
    },
    /// DELETE shortcut
    Delete {
        #[serde(flatten)]
        attrs: RouteAttrs,
    },
    /// PATCH shortcut
    Patch {
        #[serde(flatten)]
        attrs: RouteAttrs,
    },
}

impl RouteMapping {
    /// Shared attributes regardless of mapping kind.
    pub fn attrs(&self) -> &RouteAttrs {
        match self {
            Self::Request { attrs, .. }
            | Self::Get { attrs }
            | Self::Post { attrs }
            | Self::Put { attrs }
            | Self::Delete { attrs }
            | Self::Patch { attrs } => attrs,
        }
    }
}

/// Parameter-binding metadata on a contract method parameter.
///
/// Absence of a binding contributes nothing to the fingerprint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ParamBinding {
    /// Bound from the request body
    Body {
        #[serde(default = "default_required")]
        required: bool,
    },
    /// Bound from a path segment
    Path {
        #[serde(default)]
        value: String,
        #[serde(default)]
        name: String,
        #[serde(default = "default_required")]
        required: bool,
    },
    /// Bound from a query parameter
    Query {
        #[serde(default)]
        value: String,
        #[serde(default)]
        name: String,
        #[serde(default = "default_required")]
        required: bool,
        #[serde(default)]
        default_value: String,
    },
}

fn default_required() -> bool {
    true
}
