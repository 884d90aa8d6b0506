//! Scanner metric recording

use metrics::{counter, gauge};

/// Record contracts discovered for one scan, by kind.
pub(crate) fn record_contracts_discovered(providing: usize, consuming: usize) {
    gauge!("contract_guard_providing_contracts").set(providing as f64);
    gauge!("contract_guard_consuming_contracts").set(consuming as f64);
}

/// Record one computed contract checksum.
pub(crate) fn record_checksum_computed(kind: &'static str) {
    counter!("contract_guard_checksums_total", "kind" => kind).increment(1);
}
