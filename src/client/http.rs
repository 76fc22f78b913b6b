//! Reqwest-backed implementation of the upstream client.

use super::types::*;
use super::{ClientError, ImageAttachment, WorkforceApi};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// HTTP client for the upstream field-service API.
///
/// Wraps a shared `reqwest::Client` with connection pooling and a single
/// request timeout taken from configuration. Base URL is fixed for the
/// lifetime of the client.
pub struct WorkforceClient {
    base_url: String,
    client: Client,
    timeout_ms: u64,
}

impl WorkforceClient {
    /// Create a client for the given upstream base URL.
    ///
    /// `timeout_secs` bounds every request issued through this client.
    pub fn new(base_url: impl Into<String>, timeout_secs: u64) -> Result<Self, ClientError> {
        let base_url = base_url.into();
        if base_url.is_empty() {
            return Err(ClientError::Configuration(
                "upstream base URL cannot be empty".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .pool_max_idle_per_host(10)
            .build()
            .map_err(|e| ClientError::Configuration(e.to_string()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            timeout_ms: timeout_secs * 1000,
        })
    }

    /// Base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .client
            .get(&url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| ClientError::from_transport(e, self.timeout_ms))?;

        Self::parse_json(response).await
    }

    async fn post_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .client
            .post(&url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| ClientError::from_transport(e, self.timeout_ms))?;

        Self::parse_json(response).await
    }

    async fn parse_json<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await.map_err(|e| {
            ClientError::InvalidResponse(format!("Failed to read response body: {}", e))
        })?;

        serde_json::from_str(&body)
            .map_err(|e| ClientError::InvalidResponse(format!("Failed to parse response: {}", e)))
    }
}

#[async_trait]
impl WorkforceApi for WorkforceClient {
    async fn active_cases(&self) -> Result<Vec<ActiveCase>, ClientError> {
        self.get_json("/api/active_cases").await
    }

    async fn triage_assessment(&self, ticket_id: &str) -> Result<TriageAssessment, ClientError> {
        self.get_json(&format!("/api/triage/{}", ticket_id)).await
    }

    async fn cost_breakdown(&self, ticket_id: &str) -> Result<CostBreakdown, ClientError> {
        self.get_json(&format!("/api/cost/{}", ticket_id)).await
    }

    async fn worker_matches(&self, ticket_id: &str) -> Result<WorkerMatches, ClientError> {
        self.get_json(&format!("/api/worker/{}", ticket_id)).await
    }

    async fn assign(
        &self,
        ticket_id: &str,
        worker_id: &str,
    ) -> Result<AssignmentResponse, ClientError> {
        self.post_json(&format!("/api/assign/{}/{}", ticket_id, worker_id))
            .await
    }

    async fn create_service_call(
        &self,
        input: &ServiceCallInput,
        image: Option<ImageAttachment>,
    ) -> Result<ServiceCallResponse, ClientError> {
        let url = format!("{}/api/servicecall", self.base_url);

        let metadata = serde_json::to_string(input)
            .map_err(|e| ClientError::Configuration(format!("service call input: {}", e)))?;

        let mut form = reqwest::multipart::Form::new().text("service_call_input", metadata);

        if let Some(image) = image {
            let part = reqwest::multipart::Part::bytes(image.bytes)
                .file_name(image.file_name)
                .mime_str(&image.content_type)
                .map_err(|e| ClientError::Configuration(format!("image content type: {}", e)))?;
            form = form.part("issue_image", part);
        }

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| ClientError::from_transport(e, self.timeout_ms))?;

        Self::parse_json(response).await
    }

    async fn issue_image(&self, ticket_id: &str) -> Result<IssueImage, ClientError> {
        self.get_json(&format!("/api/issue_image/{}", ticket_id))
            .await
    }

    async fn reset_database(&self) -> Result<ResetResponse, ClientError> {
        self.post_json("/reset-database").await
    }

    async fn table_html(&self, table_name: &str) -> Result<String, ClientError> {
        let url = format!("{}/table/{}", self.base_url, table_name);

        let response = self
            .client
            .get(&url)
            .header("accept", "text/html")
            .send()
            .await
            .map_err(|e| ClientError::from_transport(e, self.timeout_ms))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        response
            .text()
            .await
            .map_err(|e| ClientError::InvalidResponse(format!("Failed to read table body: {}", e)))
    }
}
