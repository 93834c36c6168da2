//! Wizard controller
//!
//! Owns the `WizardState` and performs the four transitions:
//!
//! ```text
//!   Profile ──advance──▶ LoanDetails ──finalize──▶ Results
//!      ▲                     │                        │
//!      └──────retreat────────┘                        │
//!      └──────────────────────reset───────────────────┘
//! ```
//!
//! Every transition that changes the step re-syncs the renderer with the
//! layout of the new step. Failed transitions leave the step untouched.

use tracing::{debug, info, warn};

use super::layout::StepLayout;
use super::state::{WizardState, WizardStep};
use crate::client::{PredictionRequest, PredictionResult, PredictionService};
use crate::error::WizardError;
use crate::form::{LoanForm, ProfileForm};
use crate::render::{ResultsRenderer, UserFeedback};

/// Shown while the prediction request is in flight
pub const LOADING_MESSAGE: &str = "Analyzing your application...";

/// Shown when the prediction request fails for any reason
pub const PREDICTION_FAILED_MESSAGE: &str =
    "Could not get a prediction. Make sure the loan service is running, then submit again.";

pub struct WizardController<S, R, F> {
    state: WizardState,
    service: S,
    renderer: R,
    feedback: F,
}

impl<S, R, F> WizardController<S, R, F>
where
    S: PredictionService,
    R: ResultsRenderer,
    F: UserFeedback,
{
    /// Starts on the profile step and shows its layout.
    pub fn new(service: S, renderer: R, feedback: F) -> Self {
        let mut controller = Self {
            state: WizardState::new(),
            service,
            renderer,
            feedback,
        };
        controller.sync_view();
        controller
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn step(&self) -> WizardStep {
        self.state.step
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn feedback(&self) -> &F {
        &self.feedback
    }

    /// Profile → LoanDetails.
    ///
    /// On invalid input the violations are reported to the user and neither
    /// the step nor the captured data change.
    pub fn advance(&mut self, form: &ProfileForm) -> Result<WizardStep, WizardError> {
        self.expect_step(WizardStep::Profile, "advance")?;

        let profile = match form.validate() {
            Ok(profile) => profile,
            Err(errors) => {
                debug!(violations = errors.len(), "profile rejected");
                self.feedback.report_invalid(&errors);
                return Err(errors.into());
            }
        };

        info!(age = profile.age, "profile captured");
        self.state.capture_profile(profile);
        self.sync_view();
        Ok(self.state.step)
    }

    /// LoanDetails → Profile. Captured data is kept.
    pub fn retreat(&mut self) -> Result<WizardStep, WizardError> {
        let Some(previous) = self.state.step.prev() else {
            return Err(WizardError::InvalidTransition {
                from: self.state.step,
                action: "go back",
            });
        };

        self.state.go_to(previous);
        debug!(step = %previous, "went back");
        self.sync_view();
        Ok(self.state.step)
    }

    /// LoanDetails → Results, through the prediction service.
    ///
    /// Valid loan details are captured before the request goes out, so they
    /// survive a failed request and the user can submit again.
    pub async fn finalize(&mut self, form: &LoanForm) -> Result<PredictionResult, WizardError> {
        self.expect_step(WizardStep::LoanDetails, "submit the application")?;

        let loan = match form.validate() {
            Ok(loan) => loan,
            Err(errors) => {
                debug!(violations = errors.len(), "loan details rejected");
                self.feedback.report_invalid(&errors);
                return Err(errors.into());
            }
        };

        let Some(profile) = self.state.profile.clone() else {
            // Unreachable through advance; treat it as having skipped the profile step.
            return Err(WizardError::InvalidTransition {
                from: WizardStep::Profile,
                action: "submit the application",
            });
        };

        self.state.capture_loan(loan.clone());
        let request = PredictionRequest {
            profile,
            loan_details: loan,
        };

        self.feedback.show_loading(LOADING_MESSAGE);
        let outcome = self.service.predict(&request).await;
        self.feedback.hide_loading();

        match outcome {
            Ok(result) => {
                info!(
                    prediction = result.prediction.code(),
                    approved = result.probability_approved,
                    "prediction received"
                );
                self.state.go_to(WizardStep::Results);
                self.sync_view();
                self.renderer.render(&result);
                Ok(result)
            }
            Err(e) => {
                warn!("prediction request failed: {e}");
                self.feedback.alert(PREDICTION_FAILED_MESSAGE);
                Err(e.into())
            }
        }
    }

    /// Back to an empty profile step from anywhere.
    pub fn reset(&mut self) {
        self.state.reset();
        self.renderer.deactivate();
        debug!("wizard reset");
        self.sync_view();
    }

    fn expect_step(&self, step: WizardStep, action: &'static str) -> Result<(), WizardError> {
        if self.state.step == step {
            Ok(())
        } else {
            Err(WizardError::InvalidTransition {
                from: self.state.step,
                action,
            })
        }
    }

    fn sync_view(&mut self) {
        self.renderer.sync_steps(&StepLayout::for_step(self.state.step));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::Decision;
    use crate::error::ApiError;
    use crate::form::ValidationErrors;
    use crate::wizard::Panel;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Replies with queued outcomes, in order.
    #[derive(Default)]
    struct ScriptedService {
        replies: Mutex<VecDeque<Result<PredictionResult, ApiError>>>,
        requests: Mutex<Vec<PredictionRequest>>,
    }

    impl ScriptedService {
        fn replying(replies: Vec<Result<PredictionResult, ApiError>>) -> Self {
            Self {
                replies: Mutex::new(replies.into()),
                requests: Mutex::default(),
            }
        }

        fn request_count(&self) -> usize {
            self.requests.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl PredictionService for ScriptedService {
        async fn predict(
            &self,
            request: &PredictionRequest,
        ) -> Result<PredictionResult, ApiError> {
            self.requests.lock().unwrap().push(request.clone());
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(ApiError::Decode("no reply scripted".to_string())))
        }
    }

    #[derive(Default)]
    struct RecordingRenderer {
        layouts: Vec<StepLayout>,
        rendered: Vec<PredictionResult>,
        deactivated: usize,
        calls: Vec<&'static str>,
    }

    impl ResultsRenderer for RecordingRenderer {
        fn sync_steps(&mut self, layout: &StepLayout) {
            self.calls.push("sync");
            self.layouts.push(layout.clone());
        }

        fn render(&mut self, result: &PredictionResult) {
            self.calls.push("render");
            self.rendered.push(result.clone());
        }

        fn deactivate(&mut self) {
            self.deactivated += 1;
        }
    }

    #[derive(Default)]
    struct RecordingFeedback {
        loading: bool,
        loading_shown: usize,
        invalid: Vec<ValidationErrors>,
        alerts: Vec<String>,
    }

    impl UserFeedback for RecordingFeedback {
        fn show_loading(&mut self, _message: &str) {
            self.loading = true;
            self.loading_shown += 1;
        }

        fn hide_loading(&mut self) {
            self.loading = false;
        }

        fn report_invalid(&mut self, errors: &ValidationErrors) {
            self.invalid.push(errors.clone());
        }

        fn alert(&mut self, message: &str) {
            self.alerts.push(message.to_string());
        }
    }

    type TestController = WizardController<ScriptedService, RecordingRenderer, RecordingFeedback>;

    fn controller(replies: Vec<Result<PredictionResult, ApiError>>) -> TestController {
        WizardController::new(
            ScriptedService::replying(replies),
            RecordingRenderer::default(),
            RecordingFeedback::default(),
        )
    }

    fn alice() -> ProfileForm {
        ProfileForm {
            name: "Alice".to_string(),
            age: "30".to_string(),
            gender: "F".to_string(),
            employment_type: "Salaried".to_string(),
        }
    }

    fn loan() -> LoanForm {
        LoanForm {
            applicant_income: "5000".to_string(),
            coapplicant_income: "0".to_string(),
            loan_amount: "100".to_string(),
            loan_term: "360".to_string(),
            credit_history: "1".to_string(),
            dependents: "0".to_string(),
            property_area: "Urban".to_string(),
            married: "Yes".to_string(),
            education: "Graduate".to_string(),
        }
    }

    fn approved() -> PredictionResult {
        PredictionResult {
            prediction: Decision::Approved,
            prediction_label: "Approved".to_string(),
            applicant_name: "Alice".to_string(),
            probability_approved: 82.5,
            probability_rejected: 17.5,
            confidence: Some(82.5),
        }
    }

    fn current_layout(controller: &TestController) -> &StepLayout {
        controller.renderer().layouts.last().unwrap()
    }

    #[test]
    fn test_starts_on_profile() {
        let controller = controller(vec![]);
        assert_eq!(controller.state(), &WizardState::default());
        assert!(current_layout(&controller).is_visible(Panel::ProfileForm));
    }

    #[test]
    fn test_advance_captures_profile() {
        let mut controller = controller(vec![]);

        let step = controller.advance(&alice()).unwrap();
        assert_eq!(step, WizardStep::LoanDetails);
        assert_eq!(controller.state().profile.as_ref().unwrap().name, "Alice");
        assert!(controller.state().loan.is_none());
        assert!(current_layout(&controller).is_visible(Panel::LoanForm));
    }

    #[test]
    fn test_invalid_advance_changes_nothing() {
        let mut controller = controller(vec![]);
        let before = controller.state().clone();
        let layouts_before = controller.renderer().layouts.len();

        let form = ProfileForm {
            age: "12".to_string(),
            ..alice()
        };
        let err = controller.advance(&form).unwrap_err();

        assert!(err.is_validation());
        assert_eq!(controller.state(), &before);
        assert_eq!(controller.renderer().layouts.len(), layouts_before);
        assert_eq!(controller.feedback().invalid.len(), 1);
        assert!(controller.feedback().invalid[0].has_field("age"));
    }

    #[test]
    fn test_invalid_advance_keeps_previous_profile() {
        let mut controller = controller(vec![]);
        controller.advance(&alice()).unwrap();
        controller.retreat().unwrap();

        let err = controller.advance(&ProfileForm::default()).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(controller.step(), WizardStep::Profile);
        assert_eq!(controller.state().profile.as_ref().unwrap().name, "Alice");
    }

    #[test]
    fn test_retreat_keeps_data() {
        let mut controller = controller(vec![]);
        controller.advance(&alice()).unwrap();

        assert_eq!(controller.retreat().unwrap(), WizardStep::Profile);
        assert!(controller.state().profile.is_some());
        assert!(current_layout(&controller).is_visible(Panel::ProfileForm));
    }

    #[test]
    fn test_transitions_outside_their_step() {
        let mut controller = controller(vec![]);

        let err = controller.retreat().unwrap_err();
        assert!(matches!(
            err,
            WizardError::InvalidTransition {
                from: WizardStep::Profile,
                ..
            }
        ));

        controller.advance(&alice()).unwrap();
        let err = controller.advance(&alice()).unwrap_err();
        assert!(matches!(err, WizardError::InvalidTransition { .. }));
        assert_eq!(controller.step(), WizardStep::LoanDetails);
    }

    #[test]
    fn test_advance_retreat_sequences_track_net_forward_moves() {
        // Walk every sequence of up to 8 moves; bit set = advance, clear = retreat.
        for len in 0..=8u32 {
            for pattern in 0..(1u32 << len) {
                let mut controller = controller(vec![]);
                let mut net: i32 = 0;
                for i in 0..len {
                    if pattern & (1 << i) != 0 {
                        if controller.advance(&alice()).is_ok() {
                            net += 1;
                        }
                    } else if controller.retreat().is_ok() {
                        net -= 1;
                    }
                }
                let expected = if net.clamp(0, 1) == 0 {
                    WizardStep::Profile
                } else {
                    WizardStep::LoanDetails
                };
                assert_eq!(controller.step(), expected, "pattern {pattern:b}");
            }
        }
    }

    #[tokio::test]
    async fn test_finalize_success_renders_result() {
        let mut controller = controller(vec![Ok(approved())]);
        controller.advance(&alice()).unwrap();

        let result = controller.finalize(&loan()).await.unwrap();

        assert_eq!(result.prediction, Decision::Approved);
        assert_eq!(controller.step(), WizardStep::Results);
        assert!(controller.state().loan.is_some());

        let rendered = &controller.renderer().rendered;
        assert_eq!(rendered.len(), 1);
        assert_eq!(rendered[0].prediction, Decision::Approved);
        assert_eq!(
            [
                rendered[0].probability_approved,
                rendered[0].probability_rejected
            ],
            [82.5, 17.5]
        );
        assert!(current_layout(&controller).is_visible(Panel::Results));

        let feedback = controller.feedback();
        assert_eq!(feedback.loading_shown, 1);
        assert!(!feedback.loading);
        assert!(feedback.alerts.is_empty());
    }

    #[tokio::test]
    async fn test_results_layout_shown_before_result() {
        let mut controller = controller(vec![Ok(approved())]);
        controller.advance(&alice()).unwrap();
        controller.finalize(&loan()).await.unwrap();

        let calls = &controller.renderer().calls;
        assert_eq!(calls[calls.len() - 2..].to_vec(), vec!["sync", "render"]);
        assert_eq!(current_layout(&controller).step, WizardStep::Results);
    }

    #[tokio::test]
    async fn test_finalize_merges_profile_and_loan() {
        let mut controller = controller(vec![Ok(approved())]);
        controller.advance(&alice()).unwrap();
        controller.finalize(&loan()).await.unwrap();

        let requests = controller.service.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].profile.name, "Alice");
        assert_eq!(requests[0].loan_details.credit_history, 1);
        assert_eq!(requests[0].loan_details.loan_amount, 100.0);
    }

    #[tokio::test]
    async fn test_finalize_network_failure_stays_on_loan_details() {
        let mut controller = controller(vec![
            Err(ApiError::Status {
                status: 503,
                body: "unavailable".to_string(),
            }),
            Ok(approved()),
        ]);
        controller.advance(&alice()).unwrap();

        let err = controller.finalize(&loan()).await.unwrap_err();
        assert!(err.is_network());
        assert_eq!(controller.step(), WizardStep::LoanDetails);
        assert_eq!(
            controller.state().loan.as_ref().unwrap(),
            &loan().validate().unwrap()
        );
        assert!(controller.renderer().rendered.is_empty());
        assert_eq!(
            controller.feedback().alerts,
            vec![PREDICTION_FAILED_MESSAGE.to_string()]
        );
        assert!(!controller.feedback().loading);

        // The user submits again.
        controller.finalize(&loan()).await.unwrap();
        assert_eq!(controller.step(), WizardStep::Results);
        assert_eq!(controller.service.request_count(), 2);
    }

    #[tokio::test]
    async fn test_finalize_invalid_loan_skips_service() {
        let mut controller = controller(vec![Ok(approved())]);
        controller.advance(&alice()).unwrap();

        let form = LoanForm {
            credit_history: String::new(),
            ..loan()
        };
        let err = controller.finalize(&form).await.unwrap_err();

        assert!(err.is_validation());
        assert_eq!(controller.step(), WizardStep::LoanDetails);
        assert!(controller.state().loan.is_none());
        assert_eq!(controller.service.request_count(), 0);
        assert_eq!(controller.feedback().loading_shown, 0);
    }

    #[tokio::test]
    async fn test_finalize_requires_loan_step() {
        let mut controller = controller(vec![Ok(approved())]);

        let err = controller.finalize(&loan()).await.unwrap_err();
        assert!(matches!(err, WizardError::InvalidTransition { .. }));
        assert_eq!(controller.service.request_count(), 0);
    }

    #[tokio::test]
    async fn test_reset_after_results_restores_initial_state() {
        let mut controller = controller(vec![Ok(approved())]);
        controller.advance(&alice()).unwrap();
        controller.finalize(&loan()).await.unwrap();

        controller.reset();

        assert_eq!(controller.state(), &WizardState::default());
        assert_eq!(controller.renderer().deactivated, 1);
        assert!(current_layout(&controller).is_visible(Panel::ProfileForm));
    }

    #[tokio::test]
    async fn test_full_cycle_twice() {
        let rejected = PredictionResult {
            prediction: Decision::Rejected,
            prediction_label: "Rejected".to_string(),
            probability_approved: 20.0,
            probability_rejected: 80.0,
            ..approved()
        };
        let mut controller = controller(vec![Ok(approved()), Ok(rejected)]);

        for expected in [Decision::Approved, Decision::Rejected] {
            controller.advance(&alice()).unwrap();
            let result = controller.finalize(&loan()).await.unwrap();
            assert_eq!(result.prediction, expected);
            assert_eq!(
                controller.renderer().rendered.last().unwrap().prediction,
                expected
            );
            controller.reset();
        }
        assert_eq!(controller.renderer().deactivated, 2);
    }
}
