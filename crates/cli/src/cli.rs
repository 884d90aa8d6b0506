//! CLI argument definitions using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Contract Guard - microservice contract fingerprinting and reporting
#[derive(Parser, Debug)]
#[command(
    name = "contract-guard",
    author,
    version,
    about = "Microservice contract fingerprinting and integrity reporting",
    long_about = "Scans a microservice's descriptor manifest, fingerprints every \n\
                  provided and consumed contract, attributes each contract to the \n\
                  dependency artifact that declares it, and reports the result to \n\
                  a microservice integrity server."
)]
pub struct Cli {
    /// Increase logging verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true, env = "CONTRACT_GUARD_VERBOSE")]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log output format
    #[arg(
        long,
        value_enum,
        default_value = "pretty",
        global = true,
        env = "CONTRACT_GUARD_LOG_FORMAT"
    )]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan the manifest and print the contracts report locally
    Scan(ScanArgs),

    /// Scan and register the contract graph with the integrity server
    Update(UpdateArgs),

    /// Scan and verify a pending change-set against the integrity server
    Verify(VerifyArgs),

    /// Validate the descriptor manifest without scanning
    Validate(ValidateArgs),
}

/// Arguments for the `scan` command
#[derive(Parser, Debug, Clone)]
pub struct ScanArgs {
    /// Path to the descriptor manifest (TOML or JSON)
    #[arg(
        short,
        long,
        default_value = "contract-guard.toml",
        env = "CONTRACT_GUARD_MANIFEST"
    )]
    pub manifest: PathBuf,

    /// Root of the local package repository holding type indexes
    #[arg(short, long, default_value = ".packages", env = "CONTRACT_GUARD_REPO")]
    pub repo: PathBuf,

    /// Output the report as JSON instead of a summary
    #[arg(long)]
    pub json: bool,

    /// Metrics server port (0 = disabled)
    #[arg(long, default_value = "0", env = "CONTRACT_GUARD_METRICS_PORT")]
    pub metrics_port: u16,
}

/// Arguments for the `update` command
#[derive(Parser, Debug, Clone)]
pub struct UpdateArgs {
    /// Path to the descriptor manifest (TOML or JSON)
    #[arg(
        short,
        long,
        default_value = "contract-guard.toml",
        env = "CONTRACT_GUARD_MANIFEST"
    )]
    pub manifest: PathBuf,

    /// Root of the local package repository holding type indexes
    #[arg(short, long, default_value = ".packages", env = "CONTRACT_GUARD_REPO")]
    pub repo: PathBuf,

    /// Base URL of the integrity server
    #[arg(short, long, env = "CONTRACT_GUARD_SERVER")]
    pub server: String,

    /// Metrics server port (0 = disabled)
    #[arg(long, default_value = "0", env = "CONTRACT_GUARD_METRICS_PORT")]
    pub metrics_port: u16,
}

/// Arguments for the `verify` command
#[derive(Parser, Debug, Clone)]
pub struct VerifyArgs {
    /// Path to the descriptor manifest (TOML or JSON)
    #[arg(
        short,
        long,
        default_value = "contract-guard.toml",
        env = "CONTRACT_GUARD_MANIFEST"
    )]
    pub manifest: PathBuf,

    /// Root of the local package repository holding type indexes
    #[arg(short, long, default_value = ".packages", env = "CONTRACT_GUARD_REPO")]
    pub repo: PathBuf,

    /// Base URL of the integrity server
    #[arg(short, long, env = "CONTRACT_GUARD_SERVER")]
    pub server: String,

    /// Identifier of the change graph to verify against
    #[arg(short, long, env = "CONTRACT_GUARD_CHANGE_ID")]
    pub change_id: String,

    /// Metrics server port (0 = disabled)
    #[arg(long, default_value = "0", env = "CONTRACT_GUARD_METRICS_PORT")]
    pub metrics_port: u16,
}

/// Arguments for the `validate` command
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Path to the descriptor manifest to validate
    #[arg(short, long, default_value = "contract-guard.toml")]
    pub manifest: PathBuf,

    /// Output validation result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Log output format
#[derive(ValueEnum, Clone, Debug, Default)]
pub enum LogFormat {
    /// JSON structured logging
    Json,
    /// Human-readable pretty format
    #[default]
    Pretty,
    /// Compact single-line format
    Compact,
}
