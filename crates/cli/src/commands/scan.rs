//! `scan` command implementation.

use anyhow::{Context, Result};
use observability::ScanSummary;
use tracing::info;

use crate::cli::ScanArgs;

/// Execute the `scan` command
pub fn run_scan(args: &ScanArgs) -> Result<()> {
    super::maybe_init_metrics(args.metrics_port)?;

    let report = super::produce_report(&args.manifest, &args.repo)?;

    if args.json {
        let json =
            serde_json::to_string_pretty(&report).context("Failed to serialize contracts report")?;
        println!("{}", json);
    } else {
        println!("{}", ScanSummary::from(&report));
        print_contracts(&report);
    }

    info!("Scan finished");
    Ok(())
}

fn print_contracts(report: &contracts::MicroserviceContractsInfo) {
    if !report.providing.is_empty() {
        println!("Providing:");
        for providing in &report.providing {
            println!(
                "  {} [{}] {}",
                providing.contract_name, providing.dependency, providing.checksum
            );
        }
    }

    if !report.consuming.is_empty() {
        println!("Consuming:");
        for consuming in &report.consuming {
            println!(
                "  {} <- {} [{}] {}",
                consuming.service_name,
                consuming.contract_name,
                consuming.dependency,
                consuming.checksum
            );
        }
    }
}
