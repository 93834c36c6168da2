//! Apply Wizard - Interactive CLI

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use console::{style, Term};
use dialoguer::{theme::ColorfulTheme, Input, Select};
use tracing::debug;

use loan_wizard::render::plain_report;
use loan_wizard::{
    LoanApiClient, LoanForm, PredictionResult, ProfileForm, TerminalFeedback, TerminalRenderer,
    WizardController, WizardStep,
};

use super::prompts::{fill_loan, fill_profile};
use crate::print_banner;
use crate::style::{print_error, print_info, print_success};

const LOAN_ACTIONS: [&str; 3] = ["Submit application", "Back to profile", "Quit"];
const RESULT_ACTIONS: [&str; 3] = ["Start a new application", "Save report to file", "Quit"];

pub async fn run_apply_wizard(client: LoanApiClient) -> Result<()> {
    let term = Term::stdout();
    term.clear_screen()?;

    print_banner();
    println!("{}", style("  Loan Application").cyan().bold());
    println!(
        "  {}",
        style("Answer a few questions to get an instant approval prediction").dim()
    );
    println!("  {}", style(format!("Service: {}", client.base_url())).dim());

    let mut wizard =
        WizardController::new(client, TerminalRenderer::stdout(), TerminalFeedback::new());
    let mut profile = ProfileForm::default();
    let mut loan = LoanForm::default();
    let mut last_result: Option<PredictionResult> = None;

    loop {
        match wizard.step() {
            WizardStep::Profile => {
                fill_profile(&mut profile)?;
                // Violations were already shown; the draft is offered again.
                if let Err(e) = wizard.advance(&profile) {
                    debug!("advance rejected: {e}");
                }
            }
            WizardStep::LoanDetails => {
                fill_loan(&mut loan)?;
                match select("What next?", &LOAN_ACTIONS)? {
                    0 => match wizard.finalize(&loan).await {
                        Ok(result) => last_result = Some(result),
                        Err(e) => debug!("finalize failed: {e}"),
                    },
                    1 => {
                        wizard.retreat()?;
                    }
                    _ => return quit(),
                }
            }
            WizardStep::Results => match select("What next?", &RESULT_ACTIONS)? {
                0 => {
                    wizard.reset();
                    profile.reset();
                    loan.reset();
                    last_result = None;
                }
                1 => {
                    if let Some(result) = &last_result {
                        save_report(result)?;
                    }
                }
                _ => return quit(),
            },
        }
    }
}

fn select(prompt: &str, items: &[&str]) -> Result<usize> {
    println!();
    Ok(Select::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("  {prompt}"))
        .items(items)
        .default(0)
        .interact()?)
}

fn save_report(result: &PredictionResult) -> Result<()> {
    let now = Local::now();
    let default_name = format!("loan-result-{}.txt", now.format("%Y%m%d-%H%M%S"));

    let path: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("  Save report as")
        .default(default_name)
        .interact_text()?;
    let path = PathBuf::from(path);

    match std::fs::write(&path, plain_report(result, now))
        .with_context(|| format!("Failed to write {}", path.display()))
    {
        Ok(()) => print_success(&format!("Report saved to {}", path.display())),
        Err(e) => print_error(&format!("{e:#}")),
    }
    Ok(())
}

fn quit() -> Result<()> {
    println!();
    print_info("Goodbye.");
    Ok(())
}
