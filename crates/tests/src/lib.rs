//! # Integration Tests
//!
//! End-to-end tests over the full scan path:
//! manifest file -> package repository -> scanner -> report -> transport.

#[cfg(test)]
mod fixtures {
    use std::path::Path;

    use contracts::DependencyInfo;
    use manifest_loader::PackageRepository;

    /// Complete billing-service manifest: one provided contract, one
    /// consumed contract from the "orders" service.
    pub const BILLING_MANIFEST: &str = r#"
microservice = "billing"
contract_marker = "acme.api.Contract"

[[dependencies]]
groupId = "acme.platform"
artifactId = "billing-api"
version = "2.0.0"

[[dependencies]]
groupId = "acme.platform"
artifactId = "orders-api"
version = "1.4.2"

[[components]]
name = "acme.billing.InvoiceController"
role = "provider"
implements = ["acme.billing.api.InvoiceContract"]

[[components]]
name = "acme.billing.OrdersClient"
role = "consumer"
service_name = "orders"
implements = ["acme.orders.api.OrderContract"]

[[interfaces]]
name = "acme.billing.api.InvoiceContract"
extends = ["acme.api.Contract"]

[[interfaces.methods]]
name = "getInvoice"
return_ty = { name = "acme.billing.api.InvoiceDto" }

[[interfaces.methods.params]]
name = "id"
ty = { name = "String" }
binding = { kind = "path", value = "id" }

[[interfaces.methods.routes]]
kind = "get"
paths = ["/invoices/{id}"]

[[interfaces.methods]]
name = "createInvoice"
return_ty = { name = "acme.billing.api.InvoiceDto" }

[[interfaces.methods.params]]
name = "draft"
ty = { name = "acme.billing.api.InvoiceDto" }
binding = { kind = "body" }

[[interfaces.methods.routes]]
kind = "post"
paths = ["/invoices"]

[[interfaces]]
name = "acme.orders.api.OrderContract"
extends = ["acme.api.Contract"]

[[interfaces.methods]]
name = "findOrders"
return_ty = { name = "java.util.List", args = [{ name = "acme.orders.api.OrderDto" }] }

[[interfaces.methods.params]]
name = "status"
ty = { name = "String" }
binding = { kind = "query", value = "status", required = false }

[[interfaces.methods.routes]]
kind = "request"
verbs = ["GET"]
paths = ["/orders"]

[[types]]
name = "acme.billing.api.InvoiceDto"

[[types.fields]]
name = "id"
ty = { name = "String" }

[[types.fields]]
name = "total"
ty = { name = "long" }

[[types]]
name = "acme.orders.api.OrderDto"

[[types.fields]]
name = "id"
ty = { name = "String" }
"#;

    /// Materialize a type index for one artifact in a package repository.
    pub fn write_index(root: &Path, dep: &DependencyInfo, names: &[&str]) {
        let path = PackageRepository::new(root).index_path(dep);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, serde_json::to_string(names).unwrap()).unwrap();
    }

    /// Populate a repository matching [`BILLING_MANIFEST`]'s dependencies.
    pub fn populate_billing_repo(root: &Path) {
        write_index(
            root,
            &DependencyInfo::new("acme.platform", "billing-api", "2.0.0"),
            &[
                "acme.billing.api.InvoiceContract",
                "acme.billing.api.InvoiceDto",
            ],
        );
        write_index(
            root,
            &DependencyInfo::new("acme.platform", "orders-api", "1.4.2"),
            &["acme.orders.api.OrderContract", "acme.orders.api.OrderDto"],
        );
    }
}

#[cfg(test)]
mod scan_pipeline_tests {
    use contracts::MicroserviceContractsInfo;
    use manifest_loader::{ManifestFormat, ManifestLoader, PackageRepository};
    use scanner::ContractScanner;

    use crate::fixtures::{populate_billing_repo, BILLING_MANIFEST};

    /// Full path: manifest file on disk -> repository indexes -> report.
    fn scan_billing_from_disk() -> MicroserviceContractsInfo {
        let dir = tempfile::tempdir().unwrap();
        let manifest_path = dir.path().join("contract-guard.toml");
        std::fs::write(&manifest_path, BILLING_MANIFEST).unwrap();

        let repo_root = dir.path().join("packages");
        populate_billing_repo(&repo_root);

        let manifest = ManifestLoader::load_from_path(&manifest_path).unwrap();
        let dependencies = PackageRepository::new(&repo_root)
            .load_indexes(&manifest.dependencies)
            .unwrap();

        ContractScanner::new(&manifest, &dependencies)
            .scan()
            .unwrap()
    }

    #[test]
    fn test_scan_from_files_produces_full_report() {
        let report = scan_billing_from_disk();

        assert_eq!(report.microservice_name, "billing");
        assert_eq!(report.providing.len(), 1);
        assert_eq!(report.consuming.len(), 1);

        let providing = &report.providing[0];
        assert_eq!(providing.contract_name, "acme.billing.api.InvoiceContract");
        assert_eq!(providing.dependency.to_string(), "acme.platform:billing-api:2.0.0");

        let consuming = &report.consuming[0];
        assert_eq!(consuming.contract_name, "acme.orders.api.OrderContract");
        assert_eq!(consuming.service_name, "orders");
        assert_eq!(consuming.dependency.artifact_id, "orders-api");
    }

    #[test]
    fn test_checksums_are_lowercase_sha256_hex() {
        let report = scan_billing_from_disk();
        for checksum in report
            .providing
            .iter()
            .map(|p| &p.checksum)
            .chain(report.consuming.iter().map(|c| &c.checksum))
        {
            assert_eq!(checksum.len(), 64);
            assert!(checksum.chars().all(|c| c.is_ascii_hexdigit()));
            assert_eq!(checksum.to_lowercase(), *checksum);
        }
    }

    #[test]
    fn test_scan_is_deterministic_across_runs() {
        assert_eq!(scan_billing_from_disk(), scan_billing_from_disk());
    }

    #[test]
    fn test_manifest_format_does_not_affect_checksums() {
        let dir = tempfile::tempdir().unwrap();
        let repo_root = dir.path().join("packages");
        populate_billing_repo(&repo_root);

        let from_toml =
            ManifestLoader::load_from_str(BILLING_MANIFEST, ManifestFormat::Toml).unwrap();
        let json = ManifestLoader::to_json(&from_toml).unwrap();
        let from_json = ManifestLoader::load_from_str(&json, ManifestFormat::Json).unwrap();

        let repo = PackageRepository::new(&repo_root);
        let deps_toml = repo.load_indexes(&from_toml.dependencies).unwrap();
        let deps_json = repo.load_indexes(&from_json.dependencies).unwrap();

        let report_toml = ContractScanner::new(&from_toml, &deps_toml).scan().unwrap();
        let report_json = ContractScanner::new(&from_json, &deps_json).scan().unwrap();
        assert_eq!(report_toml, report_json);
    }

    #[test]
    fn test_consumers_sharing_an_upstream_merge() {
        let dir = tempfile::tempdir().unwrap();
        populate_billing_repo(dir.path());

        // Second consumer component targeting the same "orders" service
        let extended = format!(
            "{BILLING_MANIFEST}\n{}",
            r#"
[[components]]
name = "acme.billing.OrdersAdminClient"
role = "consumer"
service_name = "orders"
implements = ["acme.orders.api.OrderAdminContract"]

[[interfaces]]
name = "acme.orders.api.OrderAdminContract"
extends = ["acme.api.Contract"]

[[interfaces.methods]]
name = "cancelOrder"
return_ty = { name = "void" }

[[interfaces.methods.params]]
name = "id"
ty = { name = "String" }
binding = { kind = "path", value = "id" }

[[interfaces.methods.routes]]
kind = "delete"
paths = ["/orders/{id}"]
"#
        );
        crate::fixtures::write_index(
            dir.path(),
            &contracts::DependencyInfo::new("acme.platform", "orders-api", "1.4.2"),
            &[
                "acme.orders.api.OrderContract",
                "acme.orders.api.OrderDto",
                "acme.orders.api.OrderAdminContract",
            ],
        );

        let manifest = ManifestLoader::load_from_str(&extended, ManifestFormat::Toml).unwrap();
        let dependencies = PackageRepository::new(dir.path())
            .load_indexes(&manifest.dependencies)
            .unwrap();
        let report = ContractScanner::new(&manifest, &dependencies)
            .scan()
            .unwrap();

        assert_eq!(report.consuming.len(), 2);
        assert!(report
            .consuming
            .iter()
            .all(|c| c.service_name == "orders"));
    }

    #[test]
    fn test_report_serializes_camel_case() {
        let report = scan_billing_from_disk();
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"microserviceName\":\"billing\""));
        assert!(json.contains("\"contractName\""));
        assert!(json.contains("\"serviceName\":\"orders\""));
        assert!(json.contains("\"groupId\":\"acme.platform\""));
    }
}

#[cfg(test)]
mod checksum_sensitivity_tests {
    use manifest_loader::{ManifestFormat, ManifestLoader, PackageRepository};
    use scanner::ContractScanner;

    use crate::fixtures::{populate_billing_repo, BILLING_MANIFEST};

    /// Checksum of the provided invoice contract for a manifest variant.
    fn invoice_checksum(manifest_toml: &str) -> String {
        let dir = tempfile::tempdir().unwrap();
        populate_billing_repo(dir.path());

        let manifest = ManifestLoader::load_from_str(manifest_toml, ManifestFormat::Toml).unwrap();
        let dependencies = PackageRepository::new(dir.path())
            .load_indexes(&manifest.dependencies)
            .unwrap();
        let report = ContractScanner::new(&manifest, &dependencies)
            .scan()
            .unwrap();
        report.providing[0].checksum.clone()
    }

    #[test]
    fn test_route_path_change_changes_checksum() {
        let baseline = invoice_checksum(BILLING_MANIFEST);
        let moved = BILLING_MANIFEST.replace("/invoices/{id}", "/v2/invoices/{id}");
        assert_ne!(baseline, invoice_checksum(&moved));
    }

    #[test]
    fn test_method_rename_changes_checksum() {
        let baseline = invoice_checksum(BILLING_MANIFEST);
        let renamed = BILLING_MANIFEST.replace("\"getInvoice\"", "\"fetchInvoice\"");
        assert_ne!(baseline, invoice_checksum(&renamed));
    }

    #[test]
    fn test_observable_field_change_changes_checksum() {
        let baseline = invoice_checksum(BILLING_MANIFEST);
        let widened = BILLING_MANIFEST.replace(
            "name = \"total\"\nty = { name = \"long\" }",
            "name = \"total\"\nty = { name = \"java.math.BigDecimal\" }",
        );
        assert_ne!(BILLING_MANIFEST, widened);
        assert_ne!(baseline, invoice_checksum(&widened));
    }

    #[test]
    fn test_unannotated_method_does_not_change_checksum() {
        let baseline = invoice_checksum(BILLING_MANIFEST);

        // Default helper with neither routes nor bindings is not part of
        // the observable surface
        let with_helper = BILLING_MANIFEST.replace(
            "[[interfaces]]\nname = \"acme.orders.api.OrderContract\"",
            "[[interfaces.methods]]\n\
             name = \"describe\"\n\
             return_ty = { name = \"String\" }\n\n\
             [[interfaces]]\nname = \"acme.orders.api.OrderContract\"",
        );
        assert_ne!(BILLING_MANIFEST, with_helper);
        assert_eq!(baseline, invoice_checksum(&with_helper));
    }

    #[test]
    fn test_binding_required_toggle_changes_checksum() {
        let baseline = invoice_checksum(BILLING_MANIFEST);
        let optional = BILLING_MANIFEST.replace(
            "binding = { kind = \"path\", value = \"id\" }",
            "binding = { kind = \"path\", value = \"id\", required = false }",
        );
        assert_ne!(baseline, invoice_checksum(&optional));
    }
}

#[cfg(test)]
mod attribution_tests {
    use contracts::DependencyInfo;
    use manifest_loader::{ManifestFormat, ManifestLoader, PackageRepository};
    use scanner::ContractScanner;

    use crate::fixtures::{write_index, BILLING_MANIFEST};

    #[test]
    fn test_first_declared_dependency_wins_ambiguity() {
        let dir = tempfile::tempdir().unwrap();

        // Both artifacts claim every contract
        let all = [
            "acme.billing.api.InvoiceContract",
            "acme.orders.api.OrderContract",
        ];
        write_index(
            dir.path(),
            &DependencyInfo::new("acme.platform", "billing-api", "2.0.0"),
            &all,
        );
        write_index(
            dir.path(),
            &DependencyInfo::new("acme.platform", "orders-api", "1.4.2"),
            &all,
        );

        let manifest =
            ManifestLoader::load_from_str(BILLING_MANIFEST, ManifestFormat::Toml).unwrap();
        let dependencies = PackageRepository::new(dir.path())
            .load_indexes(&manifest.dependencies)
            .unwrap();
        let report = ContractScanner::new(&manifest, &dependencies)
            .scan()
            .unwrap();

        assert_eq!(report.providing[0].dependency.artifact_id, "billing-api");
        assert_eq!(report.consuming[0].dependency.artifact_id, "billing-api");
    }

    #[test]
    fn test_missing_attribution_fails_scan() {
        let dir = tempfile::tempdir().unwrap();
        write_index(
            dir.path(),
            &DependencyInfo::new("acme.platform", "billing-api", "2.0.0"),
            &["acme.billing.api.InvoiceContract"],
        );
        // orders-api index exists but does not declare the consumed contract
        write_index(
            dir.path(),
            &DependencyInfo::new("acme.platform", "orders-api", "1.4.2"),
            &["acme.orders.api.OrderDto"],
        );

        let manifest =
            ManifestLoader::load_from_str(BILLING_MANIFEST, ManifestFormat::Toml).unwrap();
        let dependencies = PackageRepository::new(dir.path())
            .load_indexes(&manifest.dependencies)
            .unwrap();

        let err = ContractScanner::new(&manifest, &dependencies)
            .scan()
            .unwrap_err();
        assert!(err
            .to_string()
            .contains("acme.orders.api.OrderContract"));
    }
}

#[cfg(test)]
mod transport_tests {
    use std::io::{Read, Write};
    use std::net::TcpListener;

    use manifest_loader::{ManifestFormat, ManifestLoader, PackageRepository};
    use reporter::IntegrityClient;
    use scanner::ContractScanner;

    use crate::fixtures::{populate_billing_repo, BILLING_MANIFEST};

    /// One-shot HTTP server answering with `status`.
    fn spawn_server(status: u16) -> (String, std::thread::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut buf = [0u8; 16384];
            let n = stream.read(&mut buf).unwrap();
            let request = String::from_utf8_lossy(&buf[..n]).to_string();
            let response = format!("HTTP/1.1 {status} X\r\ncontent-length: 0\r\n\r\n");
            stream.write_all(response.as_bytes()).unwrap();
            request
        });
        (format!("http://{addr}"), handle)
    }

    #[tokio::test]
    async fn test_scanned_report_reaches_integrity_server() {
        let dir = tempfile::tempdir().unwrap();
        populate_billing_repo(dir.path());

        let manifest =
            ManifestLoader::load_from_str(BILLING_MANIFEST, ManifestFormat::Toml).unwrap();
        let dependencies = PackageRepository::new(dir.path())
            .load_indexes(&manifest.dependencies)
            .unwrap();
        let report = ContractScanner::new(&manifest, &dependencies)
            .scan()
            .unwrap();

        let (base, handle) = spawn_server(200);
        IntegrityClient::new(base).update_graph(&report).await.unwrap();

        let request = handle.join().unwrap();
        assert!(request.starts_with("POST /graph/microservice"));
        assert!(request.contains("\"microserviceName\":\"billing\""));
        assert!(request.contains("\"acme.billing.api.InvoiceContract\""));
        assert!(request.contains("\"serviceName\":\"orders\""));
    }

    #[tokio::test]
    async fn test_verify_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        populate_billing_repo(dir.path());

        let manifest =
            ManifestLoader::load_from_str(BILLING_MANIFEST, ManifestFormat::Toml).unwrap();
        let dependencies = PackageRepository::new(dir.path())
            .load_indexes(&manifest.dependencies)
            .unwrap();
        let report = ContractScanner::new(&manifest, &dependencies)
            .scan()
            .unwrap();

        let (base, handle) = spawn_server(201);
        IntegrityClient::new(base)
            .verify(&report, "cg-7")
            .await
            .unwrap();

        let request = handle.join().unwrap();
        assert!(request.starts_with("PUT /change-graph/cg-7"));
    }
}
