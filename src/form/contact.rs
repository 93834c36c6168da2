//! Contact form

use std::sync::OnceLock;

use regex::Regex;

use super::{FieldChecker, ValidationErrors};
use crate::client::ContactMessage;

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
    })
}

/// Raw contact fields as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<ContactMessage, ValidationErrors> {
        let mut checker = FieldChecker::new();

        let name = checker.text("name", "Name", &self.name, 2..=100);
        let email = {
            let email = self.email.trim();
            if email.is_empty() {
                checker.reject("email", "Email is required");
                None
            } else if !email_pattern().is_match(email) {
                checker.reject("email", "Email must be a valid address");
                None
            } else {
                Some(email.to_string())
            }
        };
        let subject = checker.text("subject", "Subject", &self.subject, 5..=200);
        let message = checker.text("message", "Message", &self.message, 10..=1000);

        match (name, email, subject, message) {
            (Some(name), Some(email), Some(subject), Some(message)) => Ok(ContactMessage {
                name,
                email,
                subject,
                message,
            }),
            _ => Err(checker.into_errors()),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
