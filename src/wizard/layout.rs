//! Which panels are visible for a step, and how the progress indicator looks.

use std::collections::BTreeSet;

use super::state::WizardStep;

/// A view area that is either shown or hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Panel {
    ProfileForm,
    LoanForm,
    Results,
}

impl Panel {
    pub fn for_step(step: WizardStep) -> Self {
        match step {
            WizardStep::Profile => Self::ProfileForm,
            WizardStep::LoanDetails => Self::LoanForm,
            WizardStep::Results => Self::Results,
        }
    }
}

/// State of one entry of the progress indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressMark {
    Completed,
    Active,
    Pending,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepLayout {
    pub step: WizardStep,
    pub visible: BTreeSet<Panel>,
    /// One mark per entry of `WizardStep::ALL`
    pub progress: [(WizardStep, ProgressMark); 3],
}

impl StepLayout {
    pub fn for_step(step: WizardStep) -> Self {
        let mark = |entry: WizardStep| {
            if entry < step {
                ProgressMark::Completed
            } else if entry == step {
                ProgressMark::Active
            } else {
                ProgressMark::Pending
            }
        };

        Self {
            step,
            visible: BTreeSet::from([Panel::for_step(step)]),
            progress: WizardStep::ALL.map(|entry| (entry, mark(entry))),
        }
    }

    pub fn is_visible(&self, panel: Panel) -> bool {
        self.visible.contains(&panel)
    }
}
