//! Command implementations.

mod scan;
mod update;
mod validate;
mod verify;

pub use scan::run_scan;
pub use update::run_update;
pub use validate::run_validate;
pub use verify::run_verify;

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use contracts::MicroserviceContractsInfo;
use manifest_loader::{ManifestLoader, PackageRepository};
use scanner::ContractScanner;
use tracing::info;

/// Load the manifest, resolve dependency type indexes and run one full scan.
///
/// Shared by every command that needs a report.
fn produce_report(manifest_path: &Path, repo_path: &Path) -> Result<MicroserviceContractsInfo> {
    if !manifest_path.exists() {
        anyhow::bail!("Manifest file not found: {}", manifest_path.display());
    }

    info!(manifest = %manifest_path.display(), "Loading descriptor manifest");
    let manifest = ManifestLoader::load_from_path(manifest_path)
        .with_context(|| format!("Failed to load manifest from {}", manifest_path.display()))?;

    info!(
        microservice = %manifest.microservice,
        dependencies = manifest.dependencies.len(),
        components = manifest.components.len(),
        "Manifest loaded"
    );

    let repository = PackageRepository::new(repo_path);
    let dependencies = repository
        .load_indexes(&manifest.dependencies)
        .with_context(|| format!("Failed to load type indexes from {}", repo_path.display()))?;

    let started = Instant::now();
    let report = ContractScanner::new(&manifest, &dependencies)
        .scan()
        .context("Contract scan failed")?;
    observability::record_scan_duration_ms(started.elapsed().as_secs_f64() * 1000.0);

    info!(
        providing = report.providing.len(),
        consuming = report.consuming.len(),
        "Contract scan completed"
    );

    Ok(report)
}

/// Start the Prometheus exporter when a non-zero port was requested.
fn maybe_init_metrics(port: u16) -> Result<()> {
    if port != 0 {
        observability::init_metrics_only(port)?;
    }
    Ok(())
}
