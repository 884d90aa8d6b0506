//! `validate` command implementation.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::cli::ValidateArgs;

/// Validation result for JSON output
#[derive(Serialize)]
struct ValidationResult {
    valid: bool,
    manifest_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    warnings: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<ManifestSummary>,
}

#[derive(Serialize)]
struct ManifestSummary {
    microservice: String,
    contract_marker: String,
    dependency_count: usize,
    component_count: usize,
    interface_count: usize,
    type_count: usize,
}

/// Execute the `validate` command
pub fn run_validate(args: &ValidateArgs) -> Result<()> {
    info!(manifest = %args.manifest.display(), "Validating descriptor manifest");

    let result = validate_manifest(args);

    if args.json {
        let json = serde_json::to_string_pretty(&result)
            .context("Failed to serialize validation result")?;
        println!("{}", json);
    } else {
        print_validation_result(&result);
    }

    if result.valid {
        Ok(())
    } else {
        anyhow::bail!("Manifest validation failed")
    }
}

fn validate_manifest(args: &ValidateArgs) -> ValidationResult {
    let manifest_path = args.manifest.display().to_string();

    // Check file exists
    if !args.manifest.exists() {
        return ValidationResult {
            valid: false,
            manifest_path,
            error: Some(format!("File not found: {}", args.manifest.display())),
            warnings: None,
            summary: None,
        };
    }

    // Try to load and validate
    match manifest_loader::ManifestLoader::load_from_path(&args.manifest) {
        Ok(manifest) => {
            let warnings = collect_warnings(&manifest);

            ValidationResult {
                valid: true,
                manifest_path,
                error: None,
                warnings: if warnings.is_empty() {
                    None
                } else {
                    Some(warnings)
                },
                summary: Some(ManifestSummary {
                    microservice: manifest.microservice.clone(),
                    contract_marker: manifest.contract_marker.to_string(),
                    dependency_count: manifest.dependencies.len(),
                    component_count: manifest.components.len(),
                    interface_count: manifest.interfaces.len(),
                    type_count: manifest.types.len(),
                }),
            }
        }
        Err(e) => ValidationResult {
            valid: false,
            manifest_path,
            error: Some(e.to_string()),
            warnings: None,
            summary: None,
        },
    }
}

/// Collect manifest warnings (non-fatal issues)
fn collect_warnings(manifest: &contracts::DescriptorManifest) -> Vec<String> {
    let mut warnings = Vec::new();

    if manifest.components.is_empty() {
        warnings.push("No components declared - the contracts report will be empty".to_string());
    }

    if manifest.dependencies.is_empty() && !manifest.components.is_empty() {
        warnings.push(
            "No dependencies declared - contract attribution will fail for every contract"
                .to_string(),
        );
    }

    // Contract interfaces whose methods are all unobservable contribute
    // nothing to the checksum
    for interface in &manifest.interfaces {
        let observable = interface.methods.iter().any(|m| {
            !m.routes.is_empty() || m.params.iter().any(|p| p.binding.is_some())
        });
        if !interface.methods.is_empty() && !observable {
            warnings.push(format!(
                "Interface '{}' has no route mappings or parameter bindings",
                interface.name
            ));
        }
    }

    for ty in &manifest.types {
        if ty.fields.iter().all(|f| !f.has_accessor) && !ty.fields.is_empty() {
            warnings.push(format!(
                "Type '{}' has no accessor-backed fields - it fingerprints as opaque",
                ty.name
            ));
        }
    }

    warnings
}

fn print_validation_result(result: &ValidationResult) {
    if result.valid {
        println!("✓ Manifest is valid: {}", result.manifest_path);

        if let Some(ref summary) = result.summary {
            println!("\n  Microservice: {}", summary.microservice);
            println!("  Contract marker: {}", summary.contract_marker);
            println!("  Dependencies: {}", summary.dependency_count);
            println!("  Components: {}", summary.component_count);
            println!("  Interfaces: {}", summary.interface_count);
            println!("  Types: {}", summary.type_count);
        }

        if let Some(ref warnings) = result.warnings {
            println!("\n⚠ Warnings:");
            for warning in warnings {
                println!("  - {}", warning);
            }
        }
    } else {
        println!("✗ Manifest is invalid: {}", result.manifest_path);
        if let Some(ref error) = result.error {
            println!("\n  Error: {}", error);
        }
    }
}
