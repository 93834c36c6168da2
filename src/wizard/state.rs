//! Wizard State Management

use std::fmt;

use crate::form::{LoanInput, ProfileInput};

/// Current step in the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum WizardStep {
    #[default]
    Profile,
    LoanDetails,
    Results,
}

impl WizardStep {
    pub const ALL: [WizardStep; 3] = [Self::Profile, Self::LoanDetails, Self::Results];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Profile => "Profile",
            Self::LoanDetails => "Loan Details",
            Self::Results => "Results",
        }
    }

    /// 1-based position shown in the progress indicator
    pub fn step_number(&self) -> usize {
        match self {
            Self::Profile => 1,
            Self::LoanDetails => 2,
            Self::Results => 3,
        }
    }

    /// Only the loan step can go back.
    pub fn prev(&self) -> Option<WizardStep> {
        match self {
            Self::LoanDetails => Some(Self::Profile),
            Self::Profile | Self::Results => None,
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Complete wizard state
///
/// `profile` is set when the applicant leaves the profile step with valid
/// data, `loan` when valid loan details are submitted. Both stay until
/// `reset`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WizardState {
    pub step: WizardStep,
    pub profile: Option<ProfileInput>,
    pub loan: Option<LoanInput>,
}

impl WizardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Profile → LoanDetails with the captured profile.
    pub(crate) fn capture_profile(&mut self, profile: ProfileInput) {
        self.profile = Some(profile);
        self.step = WizardStep::LoanDetails;
    }

    pub(crate) fn capture_loan(&mut self, loan: LoanInput) {
        self.loan = Some(loan);
    }

    pub(crate) fn go_to(&mut self, step: WizardStep) {
        self.step = step;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
