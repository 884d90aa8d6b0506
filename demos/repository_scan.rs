//! Repository Scan Demo
//!
//! Materializes a manifest file and a package repository on disk, then runs
//! the same load-and-scan path the CLI uses.
//!
//! Run with: cargo run --bin repository_scan

use contracts::DependencyInfo;
use manifest_loader::{ManifestLoader, PackageRepository};
use observability::ScanSummary;
use scanner::ContractScanner;

const MANIFEST: &str = r#"
microservice = "catalog"
contract_marker = "acme.api.Contract"

[[dependencies]]
groupId = "acme.platform"
artifactId = "catalog-api"
version = "3.1.0"

[[components]]
name = "acme.catalog.ItemController"
role = "provider"
implements = ["acme.catalog.api.ItemContract"]

[[interfaces]]
name = "acme.catalog.api.ItemContract"
extends = ["acme.api.Contract"]

[[interfaces.methods]]
name = "getItem"
return_ty = { name = "acme.catalog.api.ItemDto" }

[[interfaces.methods.params]]
name = "sku"
ty = { name = "String" }
binding = { kind = "path", value = "sku" }

[[interfaces.methods.routes]]
kind = "get"
paths = ["/items/{sku}"]

[[types]]
name = "acme.catalog.api.ItemDto"

[[types.fields]]
name = "sku"
ty = { name = "String" }
"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let dir = tempfile::tempdir()?;

    // Manifest file
    let manifest_path = dir.path().join("contract-guard.toml");
    std::fs::write(&manifest_path, MANIFEST)?;

    // Package repository with one type index
    let repo = PackageRepository::new(dir.path().join("packages"));
    let dep = DependencyInfo::new("acme.platform", "catalog-api", "3.1.0");
    let index_path = repo.index_path(&dep);
    if let Some(parent) = index_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(
        &index_path,
        serde_json::to_string(&["acme.catalog.api.ItemContract", "acme.catalog.api.ItemDto"])?,
    )?;

    tracing::info!(manifest = %manifest_path.display(), "Loading manifest");
    let manifest = ManifestLoader::load_from_path(&manifest_path)?;
    let dependencies = repo.load_indexes(&manifest.dependencies)?;

    let report = ContractScanner::new(&manifest, &dependencies).scan()?;

    println!("{}", ScanSummary::from(&report));
    for providing in &report.providing {
        println!(
            "{} [{}] {}",
            providing.contract_name, providing.dependency, providing.checksum
        );
    }

    Ok(())
}
