//! Dialoguer prompts that fill the raw form drafts
//!
//! Prompts only collect text. Constraint checks happen when the controller
//! validates the draft, so a rejected draft comes back here pre-filled.

use std::fmt::Display;
use std::str::FromStr;

use anyhow::Result;
use console::style;
use dialoguer::{theme::ColorfulTheme, Input, Select};

use loan_wizard::form::{
    Dependents, Education, EmploymentType, Gender, Married, PropertyArea, CREDIT_HISTORY_VALUES,
    LOAN_TERMS,
};
use loan_wizard::{ContactForm, LoanForm, ProfileForm};

pub fn fill_profile(form: &mut ProfileForm) -> Result<()> {
    println!();
    println!("  {}", style("Step 1: Your Profile").bold());
    println!();

    form.name = text("Full name", &form.name)?;
    form.age = text("Age", &form.age)?;
    form.gender = choice("Gender", Gender::ALL, &form.gender)?;
    form.employment_type = choice(
        "Employment type",
        EmploymentType::ALL,
        &form.employment_type,
    )?;
    Ok(())
}

pub fn fill_loan(form: &mut LoanForm) -> Result<()> {
    println!();
    println!("  {}", style("Step 2: Loan Details").bold());
    println!(
        "  {}",
        style("Leave co-applicant income empty if there is none").dim()
    );
    println!();

    form.applicant_income = text("Applicant monthly income", &form.applicant_income)?;
    form.coapplicant_income =
        optional_text("Co-applicant monthly income", &form.coapplicant_income)?;
    form.loan_amount = text("Loan amount", &form.loan_amount)?;
    form.loan_term = choice("Loan term (months)", &LOAN_TERMS, &form.loan_term)?;
    form.credit_history = choice(
        "Credit history meets guidelines (1 = yes, 0 = no)",
        &CREDIT_HISTORY_VALUES,
        &form.credit_history,
    )?;
    form.dependents = choice("Dependents", Dependents::ALL, &form.dependents)?;
    form.property_area = choice("Property area", PropertyArea::ALL, &form.property_area)?;
    form.married = choice("Married", Married::ALL, &form.married)?;
    form.education = choice("Education", Education::ALL, &form.education)?;
    Ok(())
}

/// With `only_missing`, fields that already hold text are left alone.
pub fn fill_contact(form: &mut ContactForm, only_missing: bool) -> Result<()> {
    let fields: [(&str, &mut String); 4] = [
        ("Your name", &mut form.name),
        ("Email", &mut form.email),
        ("Subject", &mut form.subject),
        ("Message", &mut form.message),
    ];
    for (prompt, value) in fields {
        if only_missing && !value.trim().is_empty() {
            continue;
        }
        *value = text(prompt, value)?;
    }
    Ok(())
}

fn text(prompt: &str, draft: &str) -> Result<String> {
    Ok(Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("  {prompt}"))
        .with_initial_text(draft)
        .interact_text()?)
}

fn optional_text(prompt: &str, draft: &str) -> Result<String> {
    Ok(Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("  {prompt}"))
        .with_initial_text(draft)
        .allow_empty(true)
        .interact_text()?)
}

/// Select one of `options`, starting on the option the draft names.
fn choice<T>(prompt: &str, options: &[T], draft: &str) -> Result<String>
where
    T: Display + FromStr + PartialEq,
{
    let current = draft
        .parse::<T>()
        .ok()
        .and_then(|parsed| options.iter().position(|o| *o == parsed))
        .unwrap_or(0);

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("  {prompt}"))
        .items(options)
        .default(current)
        .interact()?;

    Ok(options[selection].to_string())
}
