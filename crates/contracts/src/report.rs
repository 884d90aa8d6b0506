//! Reporting data model - the payload handed to the integrity server
//!
//! Field names are camelCase on the wire; the server keys each contract by
//! `contractName` with an embedded `dependency` block and a `checksum`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coordinates identifying one external library build.
///
/// Acts as the unit of attribution: every reported contract is owned by
/// exactly one dependency.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyInfo {
    /// Group identifier (e.g., "acme.platform")
    pub group_id: String,

    /// Artifact identifier (e.g., "orders-api")
    pub artifact_id: String,

    /// Version string (e.g., "1.4.2")
    pub version: String,
}

impl DependencyInfo {
    /// Create a new DependencyInfo from coordinate parts.
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
        }
    }
}

impl fmt::Display for DependencyInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }
}

/// One contract exposed by a provider component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvidingContractInfo {
    /// Fully-qualified contract type name
    pub contract_name: String,

    /// Dependency that declares the contract type
    pub dependency: DependencyInfo,

    /// Structural fingerprint digest (lowercase hex)
    pub checksum: String,
}

/// One contract consumed on behalf of a named upstream service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsumingContractInfo {
    /// Fully-qualified contract type name
    pub contract_name: String,

    /// Logical name of the upstream microservice the consumer talks to
    pub service_name: String,

    /// Dependency that declares the contract type
    pub dependency: DependencyInfo,

    /// Structural fingerprint digest (lowercase hex)
    pub checksum: String,
}

/// Aggregate report for one microservice, the unit handed to the transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MicroserviceContractsInfo {
    /// Microservice name as declared in the descriptor manifest
    pub microservice_name: String,

    /// Contracts this service provides, ordered by contract name
    pub providing: Vec<ProvidingContractInfo>,

    /// Contracts this service consumes, ordered by (service, contract) name
    pub consuming: Vec<ConsumingContractInfo>,
}
