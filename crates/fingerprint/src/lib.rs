//! # Fingerprint
//!
//! Deterministic structural fingerprinting of contract interfaces.
//!
//! The fingerprint of a contract is an additive sum of per-method
//! fingerprints over a stable string hash. Addition is commutative and
//! associative, so the order in which the descriptor manifest lists methods,
//! fields or parameters never affects the result. The final sum is rendered
//! as a decimal string and digested with SHA-256 into a fixed-size lowercase
//! hex checksum.
//!
//! The additive combination can collide (distinct shapes summing to the same
//! value); this is a deliberate simplicity trade-off, not a defect.

mod contract;
mod hash;
mod shape;

pub use contract::{contract_checksum, method_fingerprint};
pub use hash::{hex_encode, seq_hash, str_hash};
pub use shape::{
    generic_args_fingerprint, type_fingerprint, type_ref_fingerprint, TypeRegistry,
};
