//! Loan details step

use serde::{Deserialize, Serialize};

use super::choices::{Dependents, Education, Married, PropertyArea};
use super::{parse_finite, FieldChecker, ValidationErrors};

/// Loan terms offered, in months.
pub const LOAN_TERMS: [u16; 5] = [120, 180, 240, 360, 480];
pub const CREDIT_HISTORY_VALUES: [u8; 2] = [0, 1];

pub const MAX_INCOME: f64 = 100_000.0;
/// Loan amounts are expressed in thousands.
pub const MAX_LOAN_AMOUNT: f64 = 10_000.0;

/// Raw loan fields as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoanForm {
    pub applicant_income: String,
    pub coapplicant_income: String,
    pub loan_amount: String,
    pub loan_term: String,
    pub credit_history: String,
    pub dependents: String,
    pub property_area: String,
    pub married: String,
    pub education: String,
}

/// Loan details captured when the application is submitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanInput {
    pub applicant_income: f64,
    pub coapplicant_income: f64,
    pub loan_amount: f64,
    pub loan_term: u16,
    pub credit_history: u8,
    pub dependents: Dependents,
    pub property_area: PropertyArea,
    pub married: Married,
    pub education: Education,
}

impl LoanForm {
    pub fn validate(&self) -> Result<LoanInput, ValidationErrors> {
        let mut checker = FieldChecker::new();

        let applicant_income = checker.positive_number(
            "applicant_income",
            "Applicant income",
            &self.applicant_income,
            MAX_INCOME,
        );
        let coapplicant_income = coapplicant_income(&mut checker, &self.coapplicant_income);
        let loan_amount =
            checker.positive_number("loan_amount", "Loan amount", &self.loan_amount, MAX_LOAN_AMOUNT);
        let loan_term = checker.one_of("loan_term", "Loan term", &self.loan_term, &LOAN_TERMS);
        let credit_history = checker.one_of(
            "credit_history",
            "Credit history",
            &self.credit_history,
            &CREDIT_HISTORY_VALUES,
        );
        let dependents = checker.choice("dependents", "Dependents", &self.dependents);
        let property_area = checker.choice("property_area", "Property area", &self.property_area);
        let married = checker.choice("married", "Married", &self.married);
        let education = checker.choice("education", "Education", &self.education);

        match (
            applicant_income,
            coapplicant_income,
            loan_amount,
            loan_term,
            credit_history,
            dependents,
            property_area,
            married,
            education,
        ) {
            (
                Some(applicant_income),
                Some(coapplicant_income),
                Some(loan_amount),
                Some(loan_term),
                Some(credit_history),
                Some(dependents),
                Some(property_area),
                Some(married),
                Some(education),
            ) => Ok(LoanInput {
                applicant_income,
                coapplicant_income,
                loan_amount,
                loan_term,
                credit_history,
                dependents,
                property_area,
                married,
                education,
            }),
            _ => Err(checker.into_errors()),
        }
    }

    /// Clears every field.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Optional field: blank or unparsable text counts as 0, a parsed number
/// still has to be within range.
fn coapplicant_income(checker: &mut FieldChecker, value: &str) -> Option<f64> {
    match parse_finite(value) {
        None => Some(0.0),
        Some(v) if (0.0..=MAX_INCOME).contains(&v) => Some(v),
        Some(_) => {
            checker.reject(
                "coapplicant_income",
                format!("Coapplicant income must be between 0 and {MAX_INCOME}"),
            );
            None
        }
    }
}
