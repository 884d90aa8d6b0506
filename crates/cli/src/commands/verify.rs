//! `verify` command implementation.

use anyhow::{Context, Result};
use reporter::IntegrityClient;
use tracing::info;

use crate::cli::VerifyArgs;

/// Execute the `verify` command
pub async fn run_verify(args: &VerifyArgs) -> Result<()> {
    super::maybe_init_metrics(args.metrics_port)?;

    let report = super::produce_report(&args.manifest, &args.repo)?;

    info!(server = %args.server, change_id = %args.change_id, "Verifying change graph");
    let client = IntegrityClient::new(&args.server);
    client
        .verify(&report, &args.change_id)
        .await
        .with_context(|| format!("Change graph '{}' failed verification", args.change_id))?;

    println!(
        "✓ Microservice '{}' verified against change graph '{}'",
        report.microservice_name, args.change_id
    );
    Ok(())
}
