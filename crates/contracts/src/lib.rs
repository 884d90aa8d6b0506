//! # Contracts
//!
//! Frozen interface contracts (ICD), defining inter-module data structures.
//! All business crates can only depend on this crate, reverse dependencies are prohibited.
//!
//! ## Descriptor Model
//! - Type metadata arrives as a precomputed descriptor manifest emitted by the
//!   host build's introspection step (Rust has no runtime reflection)
//! - Qualified names are the sole type identity used for discovery,
//!   attribution and fingerprinting

mod descriptor;
mod error;
mod index;
mod qualified_name;
mod report;
mod route;

pub use descriptor::*;
pub use error::*;
pub use index::TypeIndex;
pub use qualified_name::QualifiedName;
pub use report::*;
pub use route::*;
