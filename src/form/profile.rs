//! Applicant profile step

use serde::{Deserialize, Serialize};

use super::choices::{EmploymentType, Gender};
use super::{FieldChecker, ValidationErrors};

pub const NAME_LENGTH: std::ops::RangeInclusive<usize> = 2..=100;
pub const MIN_AGE: u8 = 18;
pub const MAX_AGE: u8 = 100;

/// Raw profile fields as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub name: String,
    pub age: String,
    pub gender: String,
    pub employment_type: String,
}

/// Profile captured when the applicant leaves the first step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileInput {
    pub name: String,
    pub age: u8,
    pub gender: Gender,
    pub employment_type: EmploymentType,
}

impl ProfileForm {
    pub fn validate(&self) -> Result<ProfileInput, ValidationErrors> {
        let mut checker = FieldChecker::new();

        let name = checker.text("name", "Name", &self.name, NAME_LENGTH);
        let age = checker.integer("age", "Age", &self.age, MIN_AGE..=MAX_AGE);
        let gender = checker.choice("gender", "Gender", &self.gender);
        let employment_type =
            checker.choice("employment_type", "Employment type", &self.employment_type);

        match (name, age, gender, employment_type) {
            (Some(name), Some(age), Some(gender), Some(employment_type)) => Ok(ProfileInput {
                name,
                age,
                gender,
                employment_type,
            }),
            _ => Err(checker.into_errors()),
        }
    }

    /// Clears every field.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
