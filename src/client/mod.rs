//! Loan service client
//!
//! The controllers only see the `PredictionService` and `ContactService`
//! traits; `LoanApiClient` implements both over HTTP.

mod api;
mod types;

use async_trait::async_trait;

use crate::error::ApiError;

pub use api::LoanApiClient;
pub use types::{
    ContactMessage, ContactReply, Decision, HealthStatus, PredictionRequest, PredictionResult,
};

/// Submits a completed application and returns the model's decision.
#[async_trait]
pub trait PredictionService: Send + Sync {
    async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResult, ApiError>;
}

/// Delivers a contact form message.
#[async_trait]
pub trait ContactService: Send + Sync {
    async fn send_contact(&self, message: &ContactMessage) -> Result<ContactReply, ApiError>;
}
