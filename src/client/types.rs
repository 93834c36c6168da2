//! Wire types of the loan service

use serde::{Deserialize, Serialize};

use crate::form::{LoanInput, ProfileInput};

/// Body of `POST /predict`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub profile: ProfileInput,
    pub loan_details: LoanInput,
}

/// Outcome reported by the prediction model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    #[serde(rename = "Y")]
    Approved,
    #[serde(rename = "N")]
    Rejected,
}

impl Decision {
    pub fn is_approved(&self) -> bool {
        matches!(self, Self::Approved)
    }

    /// Wire code, `Y` or `N`
    pub fn code(&self) -> &'static str {
        match self {
            Self::Approved => "Y",
            Self::Rejected => "N",
        }
    }
}

/// Response of `POST /predict`
///
/// Probabilities are percentages in `[0, 100]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub prediction: Decision,
    pub prediction_label: String,
    pub applicant_name: String,
    pub probability_approved: f64,
    pub probability_rejected: f64,
    /// Probability of the predicted class
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

/// Body of `POST /contact`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Response of `POST /contact`; `message` is shown to the user as is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactReply {
    #[serde(default)]
    pub success: bool,
    pub message: String,
}

/// Response of `GET /health`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub service: String,
    #[serde(default)]
    pub version: String,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy") || self.status.eq_ignore_ascii_case("ok")
    }
}
