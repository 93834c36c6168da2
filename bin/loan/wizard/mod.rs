//! Interactive loan application
//!
//! Walks the applicant through:
//! 1. Profile
//! 2. Loan details and submission
//! 3. Results, with the option to save a report or start over

pub mod apply_wizard;
pub mod prompts;

pub use apply_wizard::run_apply_wizard;
