//! Contact command - send a message to the loan team

use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};
use tracing::debug;

use crate::style::*;
use crate::wizard::prompts::fill_contact;
use loan_wizard::{ContactController, ContactForm, LoanApiClient, TerminalFeedback, WizardError};

#[derive(Args, Default)]
pub struct ContactArgs {
    /// Your name
    #[arg(long)]
    name: Option<String>,

    /// Reply address
    #[arg(long)]
    email: Option<String>,

    #[arg(long)]
    subject: Option<String>,

    #[arg(long)]
    message: Option<String>,
}

impl From<ContactArgs> for ContactForm {
    fn from(args: ContactArgs) -> Self {
        Self {
            name: args.name.unwrap_or_default(),
            email: args.email.unwrap_or_default(),
            subject: args.subject.unwrap_or_default(),
            message: args.message.unwrap_or_default(),
        }
    }
}

pub async fn run(client: LoanApiClient, args: ContactArgs) -> Result<()> {
    print_header("Contact Us");

    let mut form = ContactForm::from(args);
    fill_contact(&mut form, true)?;

    let mut controller = ContactController::new(client, TerminalFeedback::new());
    loop {
        match controller.submit(&mut form).await {
            Ok(_) => {
                println!();
                return Ok(());
            }
            Err(WizardError::Validation(_)) => fill_contact(&mut form, false)?,
            Err(e) => {
                debug!("contact submit failed: {e}");
                let retry = Confirm::with_theme(&ColorfulTheme::default())
                    .with_prompt("  Try again?")
                    .default(true)
                    .interact()?;
                if !retry {
                    print_info("Message not sent.");
                    return Ok(());
                }
            }
        }
    }
}
