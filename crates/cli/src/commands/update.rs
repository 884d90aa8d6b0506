//! `update` command implementation.

use anyhow::{Context, Result};
use reporter::IntegrityClient;
use tracing::info;

use crate::cli::UpdateArgs;

/// Execute the `update` command
pub async fn run_update(args: &UpdateArgs) -> Result<()> {
    super::maybe_init_metrics(args.metrics_port)?;

    let report = super::produce_report(&args.manifest, &args.repo)?;

    info!(server = %args.server, "Registering contract graph");
    let client = IntegrityClient::new(&args.server);
    client
        .update_graph(&report)
        .await
        .context("Integrity server rejected the contract graph update")?;

    println!(
        "✓ Contract graph for '{}' registered with {}",
        report.microservice_name, args.server
    );
    Ok(())
}
