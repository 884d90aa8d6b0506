//! Scan metric recording and summary reporting

use std::collections::BTreeMap;

use contracts::MicroserviceContractsInfo;
use metrics::histogram;

/// Record wall-clock duration of one full scan.
pub fn record_scan_duration_ms(duration_ms: f64) {
    histogram!("contract_guard_scan_duration_ms").record(duration_ms);
}

/// Human-readable summary of one scan, printed by the CLI after a run.
#[derive(Debug, Clone, Default)]
pub struct ScanSummary {
    /// Microservice name
    pub microservice: String,

    /// Number of providing contracts
    pub providing: usize,

    /// Number of consuming contracts
    pub consuming: usize,

    /// Consuming contracts per upstream service
    pub upstream_counts: BTreeMap<String, usize>,
}

impl From<&MicroserviceContractsInfo> for ScanSummary {
    fn from(info: &MicroserviceContractsInfo) -> Self {
        let mut upstream_counts: BTreeMap<String, usize> = BTreeMap::new();
        for consuming in &info.consuming {
            *upstream_counts
                .entry(consuming.service_name.clone())
                .or_insert(0) += 1;
        }

        Self {
            microservice: info.microservice_name.clone(),
            providing: info.providing.len(),
            consuming: info.consuming.len(),
            upstream_counts,
        }
    }
}

impl std::fmt::Display for ScanSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== Contract Scan Summary ===")?;
        writeln!(f, "Microservice: {}", self.microservice)?;
        writeln!(f, "Providing contracts: {}", self.providing)?;
        writeln!(f, "Consuming contracts: {}", self.consuming)?;

        if !self.upstream_counts.is_empty() {
            writeln!(f, "Upstream services:")?;
            for (service, count) in &self.upstream_counts {
                writeln!(f, "  {service}: {count}")?;
            }
        }

        Ok(())
    }
}
