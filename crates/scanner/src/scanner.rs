//! ContractScanner - report assembly
//!
//! Pure composition of discovery, attribution and fingerprinting into the
//! reporting data model. Failures propagate unchanged; a scan either yields
//! a complete report or nothing.

use contracts::{
    ConsumingContractInfo, DependencyInfo, DescriptorManifest, GuardError,
    MicroserviceContractsInfo, ProvidingContractInfo, TypeIndex,
};
use fingerprint::{contract_checksum, TypeRegistry};
use tracing::{info, instrument};

use crate::attribution::attribute;
use crate::discovery::{discover_consumed, discover_provided};
use crate::metrics::{record_checksum_computed, record_contracts_discovered};

/// Scans one microservice's descriptor manifest into a contracts report.
pub struct ContractScanner<'a> {
    manifest: &'a DescriptorManifest,
    registry: TypeRegistry<'a>,
    dependencies: &'a [(DependencyInfo, TypeIndex)],
}

impl<'a> ContractScanner<'a> {
    /// Create a scanner over a validated manifest and its ordered
    /// dependency type indexes.
    pub fn new(
        manifest: &'a DescriptorManifest,
        dependencies: &'a [(DependencyInfo, TypeIndex)],
    ) -> Self {
        Self {
            manifest,
            registry: TypeRegistry::new(&manifest.types),
            dependencies,
        }
    }

    /// Produce the complete report for the manifest's microservice.
    #[instrument(name = "contract_scan", skip(self), fields(microservice = %self.manifest.microservice))]
    pub fn scan(&self) -> Result<MicroserviceContractsInfo, GuardError> {
        let providing = self.providing_contracts_info()?;
        let consuming = self.consuming_contracts_info()?;
        record_contracts_discovered(providing.len(), consuming.len());

        Ok(MicroserviceContractsInfo {
            microservice_name: self.manifest.microservice.clone(),
            providing,
            consuming,
        })
    }

    /// Providing-contract records, ordered by contract name.
    pub fn providing_contracts_info(&self) -> Result<Vec<ProvidingContractInfo>, GuardError> {
        let contracts = discover_provided(self.manifest)?;
        info!(contracts = ?contracts, "providing contracts found");

        contracts
            .into_iter()
            .map(|contract| {
                record_checksum_computed("providing");
                Ok(ProvidingContractInfo {
                    contract_name: contract.to_string(),
                    dependency: attribute(contract, self.dependencies)?.clone(),
                    checksum: self.checksum(contract)?,
                })
            })
            .collect()
    }

    /// Consuming-contract records, ordered by (service name, contract name).
    pub fn consuming_contracts_info(&self) -> Result<Vec<ConsumingContractInfo>, GuardError> {
        let by_service = discover_consumed(self.manifest)?;
        info!(services = by_service.len(), "consuming contracts found");

        let mut infos = Vec::new();
        for (service_name, contracts) in by_service {
            for contract in contracts {
                record_checksum_computed("consuming");
                infos.push(ConsumingContractInfo {
                    contract_name: contract.to_string(),
                    service_name: service_name.to_string(),
                    dependency: attribute(contract, self.dependencies)?.clone(),
                    checksum: self.checksum(contract)?,
                });
            }
        }
        Ok(infos)
    }

    // Discovery only yields names present in the manifest's interface table
    fn checksum(&self, contract: &str) -> Result<String, GuardError> {
        let interface = self.manifest.interface(contract).ok_or_else(|| {
            GuardError::Other(format!("no interface shape for contract '{contract}'"))
        })?;
        Ok(contract_checksum(interface, &self.registry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::{
        ComponentRole, ComponentShape, FieldShape, InterfaceShape, MethodShape, QualifiedName,
        RouteAttrs, RouteMapping, TypeKind, TypeRef, TypeShape,
    };

    fn marker() -> QualifiedName {
        QualifiedName::new("acme.api.Contract")
    }

    fn contract_interface(name: &str) -> InterfaceShape {
        InterfaceShape {
            name: QualifiedName::new(name),
            extends: vec![marker()],
            methods: vec![MethodShape {
                name: "get".to_string(),
                modifiers: contracts::PUBLIC_ABSTRACT,
                return_ty: TypeRef::plain("acme.api.Dto"),
                params: vec![],
                routes: vec![RouteMapping::Get {
                    attrs: RouteAttrs {
                        paths: vec![format!("/{name}")],
                        ..Default::default()
                    },
                }],
            }],
        }
    }

    fn fixture_manifest() -> DescriptorManifest {
        DescriptorManifest {
            microservice: "billing".to_string(),
            contract_marker: marker(),
            dependencies: vec![
                DependencyInfo::new("acme", "billing-api", "2.0.0"),
                DependencyInfo::new("acme", "orders-api", "1.4.2"),
            ],
            components: vec![
                ComponentShape {
                    name: QualifiedName::new("acme.billing.InvoiceController"),
                    role: ComponentRole::Provider,
                    implements: vec![QualifiedName::new("acme.billing.api.InvoiceContract")],
                },
                ComponentShape {
                    name: QualifiedName::new("acme.billing.OrdersClient"),
                    role: ComponentRole::Consumer {
                        service_name: "orders".to_string(),
                    },
                    implements: vec![QualifiedName::new("acme.orders.api.OrderContract")],
                },
            ],
            interfaces: vec![
                contract_interface("acme.billing.api.InvoiceContract"),
                contract_interface("acme.orders.api.OrderContract"),
            ],
            types: vec![TypeShape {
                name: QualifiedName::new("acme.api.Dto"),
                kind: TypeKind::Data,
                fields: vec![FieldShape {
                    name: "id".to_string(),
                    ty: TypeRef::plain("String"),
                    has_accessor: true,
                }],
            }],
        }
    }

    fn fixture_dependencies() -> Vec<(DependencyInfo, TypeIndex)> {
        vec![
            (
                DependencyInfo::new("acme", "billing-api", "2.0.0"),
                TypeIndex::new(vec!["acme.billing.api.InvoiceContract".to_string()]),
            ),
            (
                DependencyInfo::new("acme", "orders-api", "1.4.2"),
                TypeIndex::new(vec!["acme.orders.api.OrderContract".to_string()]),
            ),
        ]
    }

    #[test]
    fn test_scan_assembles_full_report() {
        let manifest = fixture_manifest();
        let deps = fixture_dependencies();
        let scanner = ContractScanner::new(&manifest, &deps);

        let report = scanner.scan().unwrap();
        assert_eq!(report.microservice_name, "billing");

        assert_eq!(report.providing.len(), 1);
        let providing = &report.providing[0];
        assert_eq!(providing.contract_name, "acme.billing.api.InvoiceContract");
        assert_eq!(providing.dependency.artifact_id, "billing-api");
        assert_eq!(providing.checksum.len(), 64);

        assert_eq!(report.consuming.len(), 1);
        let consuming = &report.consuming[0];
        assert_eq!(consuming.contract_name, "acme.orders.api.OrderContract");
        assert_eq!(consuming.service_name, "orders");
        assert_eq!(consuming.dependency.artifact_id, "orders-api");
    }

    #[test]
    fn test_scan_is_deterministic() {
        let manifest = fixture_manifest();
        let deps = fixture_dependencies();
        let scanner = ContractScanner::new(&manifest, &deps);
        assert_eq!(scanner.scan().unwrap(), scanner.scan().unwrap());
    }

    #[test]
    fn test_unattributable_contract_aborts_scan() {
        let manifest = fixture_manifest();
        let deps = vec![(
            DependencyInfo::new("acme", "billing-api", "2.0.0"),
            TypeIndex::new(vec!["acme.billing.api.InvoiceContract".to_string()]),
        )];
        let scanner = ContractScanner::new(&manifest, &deps);

        let err = scanner.scan().unwrap_err();
        assert!(matches!(err, GuardError::DependencyNotFound { .. }));
    }

    #[test]
    fn test_componentless_manifest_yields_empty_report() {
        let mut manifest = fixture_manifest();
        manifest.components.clear();
        let deps = fixture_dependencies();
        let scanner = ContractScanner::new(&manifest, &deps);

        let report = scanner.scan().unwrap();
        assert!(report.providing.is_empty());
        assert!(report.consuming.is_empty());
    }
}
