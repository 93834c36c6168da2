//! Loan Application Wizard
//!
//! Two form steps and a result view:
//! 1. Applicant profile
//! 2. Loan details, submitted for prediction
//! 3. Results

pub mod controller;
pub mod layout;
pub mod state;

pub use controller::{WizardController, LOADING_MESSAGE, PREDICTION_FAILED_MESSAGE};
pub use layout::{Panel, ProgressMark, StepLayout};
pub use state::{WizardState, WizardStep};
