//! # Scanner
//!
//! Contract discovery, dependency attribution and report assembly.
//!
//! Control flow: the descriptor manifest supplies the component model and
//! the ordered dependency/type-index list -> discovery extracts contract
//! types per provider/consumer -> attribution resolves each contract's
//! owning artifact -> the fingerprinter computes each contract's digest ->
//! the scanner assembles the aggregate report for the transport.
//!
//! All failures abort the scan; partial reports are never produced.

mod attribution;
mod discovery;
mod metrics;
mod scanner;

pub use attribution::attribute;
pub use discovery::{discover_consumed, discover_provided};
pub use scanner::ContractScanner;
