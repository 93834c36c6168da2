//! Contact form controller

use tracing::{debug, info, warn};

use crate::client::{ContactReply, ContactService};
use crate::error::WizardError;
use crate::form::ContactForm;
use crate::render::UserFeedback;

pub const SENDING_MESSAGE: &str = "Sending message...";
pub const SEND_FAILED_MESSAGE: &str = "Failed to send message.";

pub struct ContactController<C, F> {
    service: C,
    feedback: F,
}

impl<C, F> ContactController<C, F>
where
    C: ContactService,
    F: UserFeedback,
{
    pub fn new(service: C, feedback: F) -> Self {
        Self { service, feedback }
    }

    pub fn feedback(&self) -> &F {
        &self.feedback
    }

    /// Validate and send `form`.
    ///
    /// The form is cleared only once the service accepted the message.
    pub async fn submit(&mut self, form: &mut ContactForm) -> Result<ContactReply, WizardError> {
        let message = match form.validate() {
            Ok(message) => message,
            Err(errors) => {
                debug!(violations = errors.len(), "contact form rejected");
                self.feedback.report_invalid(&errors);
                return Err(errors.into());
            }
        };

        self.feedback.show_loading(SENDING_MESSAGE);
        let outcome = self.service.send_contact(&message).await;
        self.feedback.hide_loading();

        match outcome {
            Ok(reply) => {
                info!(success = reply.success, "contact message sent");
                self.feedback.alert(&reply.message);
                form.reset();
                Ok(reply)
            }
            Err(e) => {
                warn!("contact request failed: {e}");
                self.feedback.alert(SEND_FAILED_MESSAGE);
                Err(e.into())
            }
        }
    }
}
