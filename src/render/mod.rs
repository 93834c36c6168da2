//! Result rendering and user feedback
//!
//! The controllers never print. They tell a `ResultsRenderer` what the view
//! should look like and a `UserFeedback` what the user should be told; the
//! terminal implementations live in `terminal`.

mod chart;
mod terminal;

pub use chart::{ChartSlot, ProbabilityChart};
pub use terminal::{plain_report, TerminalFeedback, TerminalRenderer};

use crate::client::PredictionResult;
use crate::form::ValidationErrors;
use crate::wizard::StepLayout;

/// Applies step layouts and shows prediction results.
pub trait ResultsRenderer {
    /// Show exactly the panels and progress marks of `layout`.
    fn sync_steps(&mut self, layout: &StepLayout);

    /// Show `result` with its probability chart, replacing any previous one.
    fn render(&mut self, result: &PredictionResult);

    /// Hide the results and release the chart.
    fn deactivate(&mut self);
}

/// Messages to the user that are not part of a panel.
pub trait UserFeedback {
    fn show_loading(&mut self, message: &str);

    fn hide_loading(&mut self);

    /// Constraint violations that blocked a transition
    fn report_invalid(&mut self, errors: &ValidationErrors);

    fn alert(&mut self, message: &str);
}
