//! Loan Application Wizard
//!
//! Guides an applicant through a two-step loan application, submits it to a
//! prediction service and renders the approval result with a probability
//! chart. A separate contact form can be sent to the same service.
//!
//! ## Module Structure
//!
//! - `form/`: raw field text and the constraint checks that turn it into typed input
//! - `wizard/`: step state machine, panel layout and the wizard controller
//! - `client/`: HTTP client for the prediction, contact and health endpoints
//! - `render/`: results renderer, probability chart and user feedback
//! - `contact`: contact form controller
//! - `config`: client configuration
//! - `error`: error types shared by the controllers

/// Form fields and constraint checking
pub mod form;

/// Step state machine and controller
pub mod wizard;

/// Loan service HTTP client
pub mod client;

/// Result rendering and user feedback
pub mod render;

/// Contact form controller
pub mod contact;

/// Client configuration
pub mod config;

/// Error types
pub mod error;

pub use client::{
    ContactMessage, ContactReply, ContactService, Decision, HealthStatus, LoanApiClient,
    PredictionRequest, PredictionResult, PredictionService,
};
pub use config::{ConfigError, WizardConfig};
pub use contact::ContactController;
pub use error::{ApiError, WizardError};
pub use form::{
    ContactForm, FieldError, LoanForm, LoanInput, ProfileForm, ProfileInput, ValidationErrors,
};
pub use render::{
    ChartSlot, ProbabilityChart, ResultsRenderer, TerminalFeedback, TerminalRenderer, UserFeedback,
};
pub use wizard::{Panel, ProgressMark, StepLayout, WizardController, WizardState, WizardStep};
