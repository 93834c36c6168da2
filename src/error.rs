//! Error types shared by the wizard and contact controllers.

use thiserror::Error;

use crate::config::ConfigError;
use crate::form::ValidationErrors;
use crate::wizard::WizardStep;

/// Failures talking to the loan service.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Failed to parse response: {0}")]
    Decode(String),
    #[error("Invalid client configuration: {0}")]
    Config(#[from] ConfigError),
}

impl ApiError {
    /// HTTP status code, when the service answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Why a wizard or contact operation did not go through.
///
/// None of these are fatal: the controller is left in a state from which the
/// user can correct the input and submit again.
#[derive(Debug, Error)]
pub enum WizardError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("Network error: {0}")]
    Network(#[from] ApiError),
    #[error("Cannot {action} from the {from} step")]
    InvalidTransition {
        from: WizardStep,
        action: &'static str,
    },
}

impl WizardError {
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}
