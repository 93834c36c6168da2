//! HTTP implementation of the loan service client

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use super::types::{ContactMessage, ContactReply, HealthStatus, PredictionRequest, PredictionResult};
use super::{ContactService, PredictionService};
use crate::config::WizardConfig;
use crate::error::ApiError;

/// Client for the `/predict`, `/contact` and `/health` endpoints.
pub struct LoanApiClient {
    config: WizardConfig,
    client: reqwest::Client,
}

impl LoanApiClient {
    pub fn new(config: WizardConfig) -> Result<Self, ApiError> {
        config.validate()?;
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;
        Ok(Self { config, client })
    }

    pub fn base_url(&self) -> &str {
        &self.config.api_base_url
    }

    /// Probe the service (`GET /health`)
    pub async fn health(&self) -> Result<HealthStatus, ApiError> {
        let url = self.config.endpoint("/health");
        debug!(%url, "checking service health");
        let response = self.client.get(&url).send().await?;
        read_json(response).await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.config.endpoint(path);
        debug!(%url, "POST");
        let response = self.client.post(&url).json(body).send().await?;
        read_json(response).await
    }
}

async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        warn!(status = status.as_u16(), "loan service returned an error");
        return Err(ApiError::Status {
            status: status.as_u16(),
            body,
        });
    }

    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode(e.to_string()))
}

#[async_trait]
impl PredictionService for LoanApiClient {
    async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResult, ApiError> {
        self.post_json("/predict", request).await
    }
}

#[async_trait]
impl ContactService for LoanApiClient {
    async fn send_contact(&self, message: &ContactMessage) -> Result<ContactReply, ApiError> {
        self.post_json("/contact", message).await
    }
}
