//! Local Scan Demo
//!
//! Builds a descriptor manifest in memory, scans it and prints the report.
//! Runs without a package repository or integrity server.
//!
//! Run with: cargo run --bin local_scan

use contracts::{
    ComponentRole, ComponentShape, DependencyInfo, DescriptorManifest, FieldShape, InterfaceShape,
    MethodShape, ParamBinding, ParamShape, QualifiedName, RouteAttrs, RouteMapping, TypeIndex,
    TypeKind, TypeRef, TypeShape, PUBLIC_ABSTRACT,
};
use observability::ScanSummary;
use scanner::ContractScanner;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    tracing::info!("Starting local scan demo");

    let manifest = build_manifest();
    let dependencies = build_dependencies();

    let scanner = ContractScanner::new(&manifest, &dependencies);
    let report = scanner.scan()?;

    println!("{}", ScanSummary::from(&report));
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}

fn build_manifest() -> DescriptorManifest {
    DescriptorManifest {
        microservice: "billing".to_string(),
        contract_marker: QualifiedName::new("acme.api.Contract"),
        dependencies: vec![
            DependencyInfo::new("acme.platform", "billing-api", "2.0.0"),
            DependencyInfo::new("acme.platform", "orders-api", "1.4.2"),
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
            InterfaceShape {
                name: QualifiedName::new("acme.billing.api.InvoiceContract"),
                extends: vec![QualifiedName::new("acme.api.Contract")],
                methods: vec![MethodShape {
                    name: "getInvoice".to_string(),
                    modifiers: PUBLIC_ABSTRACT,
                    return_ty: TypeRef::plain("acme.billing.api.InvoiceDto"),
                    params: vec![ParamShape {
                        name: "id".to_string(),
                        ty: TypeRef::plain("String"),
                        binding: Some(ParamBinding::Path {
                            value: "id".to_string(),
                            name: String::new(),
                            required: true,
                        }),
                    }],
                    routes: vec![RouteMapping::Get {
                        attrs: RouteAttrs {
                            paths: vec!["/invoices/{id}".to_string()],
                            ..Default::default()
                        },
                    }],
                }],
            },
            InterfaceShape {
                name: QualifiedName::new("acme.orders.api.OrderContract"),
                extends: vec![QualifiedName::new("acme.api.Contract")],
                methods: vec![MethodShape {
                    name: "findOrders".to_string(),
                    modifiers: PUBLIC_ABSTRACT,
                    return_ty: TypeRef::generic(
                        "java.util.List",
                        vec![TypeRef::plain("acme.orders.api.OrderDto")],
                    ),
                    params: vec![],
                    routes: vec![RouteMapping::Request {
                        name: String::new(),
                        verbs: vec![contracts::HttpVerb::Get],
                        attrs: RouteAttrs {
                            paths: vec!["/orders".to_string()],
                            ..Default::default()
                        },
                    }],
                }],
            },
        ],
        types: vec![
            TypeShape {
                name: QualifiedName::new("acme.billing.api.InvoiceDto"),
                kind: TypeKind::Data,
                fields: vec![
                    FieldShape {
                        name: "id".to_string(),
                        ty: TypeRef::plain("String"),
                        has_accessor: true,
                    },
                    FieldShape {
                        name: "total".to_string(),
                        ty: TypeRef::plain("long"),
                        has_accessor: true,
                    },
                ],
            },
            TypeShape {
                name: QualifiedName::new("acme.orders.api.OrderDto"),
                kind: TypeKind::Data,
                fields: vec![FieldShape {
                    name: "id".to_string(),
                    ty: TypeRef::plain("String"),
                    has_accessor: true,
                }],
            },
        ],
    }
}

fn build_dependencies() -> Vec<(DependencyInfo, TypeIndex)> {
    vec![
        (
            DependencyInfo::new("acme.platform", "billing-api", "2.0.0"),
            TypeIndex::new(vec![
                "acme.billing.api.InvoiceContract".to_string(),
                "acme.billing.api.InvoiceDto".to_string(),
            ]),
        ),
        (
            DependencyInfo::new("acme.platform", "orders-api", "1.4.2"),
            TypeIndex::new(vec![
                "acme.orders.api.OrderContract".to_string(),
                "acme.orders.api.OrderDto".to_string(),
            ]),
        ),
    ]
}
