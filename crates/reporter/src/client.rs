//! IntegrityClient - integrity-server transport

use contracts::{GuardError, MicroserviceContractsInfo};
use metrics::counter;
use tracing::{debug, info, instrument};

const UPDATE_GRAPH_PATH: &str = "/graph/microservice";
const VERIFY_PATH: &str = "/change-graph";

/// Client for the microservice integrity server.
pub struct IntegrityClient {
    client: reqwest::Client,
    base_url: String,
}

impl IntegrityClient {
    /// Create a client against a server base URL (e.g., "http://graph:8080").
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Register or update the microservice's contract graph.
    #[instrument(name = "update_graph", skip(self, info), fields(microservice = %info.microservice_name))]
    pub async fn update_graph(
        &self,
        info: &MicroserviceContractsInfo,
    ) -> Result<(), GuardError> {
        let url = format!("{}{UPDATE_GRAPH_PATH}", self.base_url);
        let request = self.client.post(&url).json(info);
        self.send(request, &url).await
    }

    /// Verify a pending change-set against the microservice's contracts.
    #[instrument(name = "verify_microservice", skip(self, info), fields(microservice = %info.microservice_name, change_graph_id))]
    pub async fn verify(
        &self,
        info: &MicroserviceContractsInfo,
        change_graph_id: &str,
    ) -> Result<(), GuardError> {
        let url = format!("{}{VERIFY_PATH}/{change_graph_id}", self.base_url);
        let request = self.client.put(&url).json(info);
        self.send(request, &url).await
    }

    async fn send(&self, request: reqwest::RequestBuilder, url: &str) -> Result<(), GuardError> {
        info!(url, "sending request to integrity server");
        let response = request.send().await.map_err(|e| {
            counter!("contract_guard_reports_total", "status" => "transport_error").increment(1);
            GuardError::request_io(url, e)
        })?;

        match response.status().as_u16() {
            200 | 201 => {
                counter!("contract_guard_reports_total", "status" => "success").increment(1);
                debug!(url, "request sent successfully");
                Ok(())
            }
            code => {
                counter!("contract_guard_reports_total", "status" => "rejected").increment(1);
                Err(GuardError::request_status(url, code))
            }
        }
    }
}
