//! Form fields and constraint checking
//!
//! Each form keeps the raw text the user typed. `validate` applies the same
//! constraints a browser would enforce on the input elements and either
//! yields the typed input or every violated constraint at once.

pub mod choices;
pub mod contact;
pub mod loan;
pub mod profile;

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use thiserror::Error;

pub use choices::{Dependents, Education, EmploymentType, Gender, Married, PropertyArea};
pub use contact::ContactForm;
pub use loan::{LoanForm, LoanInput, CREDIT_HISTORY_VALUES, LOAN_TERMS};
pub use profile::{ProfileForm, ProfileInput};

/// A single violated constraint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FieldError {
    /// Field identifier (matches the JSON key)
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}


/// All constraint violations of one form submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", join_messages(.errors))]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Whether `field` is among the violations.
    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }
}

impl From<Vec<FieldError>> for ValidationErrors {
    fn from(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }
}

fn join_messages(errors: &[FieldError]) -> String {
    let messages: Vec<&str> = errors.iter().map(|e| e.message.as_str()).collect();
    messages.join("; ")
}

/// Collects violations while fields are parsed one by one.
#[derive(Debug, Default)]
pub(crate) struct FieldChecker {
    errors: Vec<FieldError>,
}

impl FieldChecker {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn fail(&mut self, field: &'static str, message: String) {
        self.errors.push(FieldError::new(field, message));
    }

    /// Required text, length counted in characters after trimming.
    pub(crate) fn text(
        &mut self,
        field: &'static str,
        label: &str,
        value: &str,
        length: RangeInclusive<usize>,
    ) -> Option<String> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            self.fail(field, format!("{label} is required"));
            return None;
        }
        let count = trimmed.chars().count();
        if !length.contains(&count) {
            self.fail(
                field,
                format!(
                    "{label} must be between {} and {} characters",
                    length.start(),
                    length.end()
                ),
            );
            return None;
        }
        Some(trimmed.to_string())
    }

    /// Required whole number within `range`.
    ///
    /// Any well-formed integer outside `range` is reported as out of bounds,
    /// including ones that do not fit `T`.
    pub(crate) fn integer<T>(
        &mut self,
        field: &'static str,
        label: &str,
        value: &str,
        range: RangeInclusive<T>,
    ) -> Option<T>
    where
        T: TryFrom<i64> + PartialOrd + fmt::Display,
    {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            self.fail(field, format!("{label} is required"));
            return None;
        }
        let digits = trimmed
            .strip_prefix(|c| c == '+' || c == '-')
            .unwrap_or(trimmed);
        let well_formed = !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit());
        let parsed = trimmed
            .parse::<i64>()
            .ok()
            .and_then(|v| T::try_from(v).ok());
        match parsed {
            Some(v) if range.contains(&v) => Some(v),
            _ if well_formed => {
                self.fail(
                    field,
                    format!(
                        "{label} must be between {} and {}",
                        range.start(),
                        range.end()
                    ),
                );
                None
            }
            _ => {
                self.fail(field, format!("{label} must be a whole number"));
                None
            }
        }
    }

    /// Required number greater than zero and at most `max`.
    pub(crate) fn positive_number(
        &mut self,
        field: &'static str,
        label: &str,
        value: &str,
        max: f64,
    ) -> Option<f64> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            self.fail(field, format!("{label} is required"));
            return None;
        }
        match parse_finite(trimmed) {
            Some(v) if v > 0.0 && v <= max => Some(v),
            Some(_) => {
                self.fail(
                    field,
                    format!("{label} must be greater than 0 and at most {max}"),
                );
                None
            }
            None => {
                self.fail(field, format!("{label} must be a valid number"));
                None
            }
        }
    }

    /// Required value out of a fixed set of numbers.
    pub(crate) fn one_of<T>(
        &mut self,
        field: &'static str,
        label: &str,
        value: &str,
        allowed: &[T],
    ) -> Option<T>
    where
        T: FromStr + PartialEq + Copy + fmt::Display,
    {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            self.fail(field, format!("{label} is required"));
            return None;
        }
        match trimmed.parse::<T>() {
            Ok(v) if allowed.contains(&v) => Some(v),
            _ => {
                let options: Vec<String> = allowed.iter().map(|v| v.to_string()).collect();
                self.fail(
                    field,
                    format!("{label} must be one of {}", options.join(", ")),
                );
                None
            }
        }
    }

    /// Required option of a choice list.
    pub(crate) fn choice<T: FromStr>(
        &mut self,
        field: &'static str,
        label: &str,
        value: &str,
    ) -> Option<T> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            self.fail(field, format!("{label} is required"));
            return None;
        }
        match trimmed.parse::<T>() {
            Ok(v) => Some(v),
            Err(_) => {
                self.fail(field, format!("{label}: '{trimmed}' is not a valid option"));
                None
            }
        }
    }

    /// Records a violation found by a caller-side check.
    pub(crate) fn reject(&mut self, field: &'static str, message: impl Into<String>) {
        self.fail(field, message.into());
    }

    pub(crate) fn into_errors(self) -> ValidationErrors {
        ValidationErrors::from(self.errors)
    }
}

/// Parses a decimal number, rejecting `inf` and `NaN` which a number input never yields.
pub(crate) fn parse_finite(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
