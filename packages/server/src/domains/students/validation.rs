//! Field-level rules a student must satisfy before it is written.
//!
//! The rule set is data, not code: a [`Validator`] is an ordered list of
//! [`ValidationRule`]s. [`ValidationProfile`] provides the two stock rule
//! sets and callers can assemble their own with [`Validator::with_rule`].

use std::str::FromStr;

use anyhow::Result;

use super::errors::{FieldViolation, StudentField, ValidationError};
use super::models::{NewStudent, Student};

/// Borrowed view of the fields being validated
#[derive(Debug, Clone, Copy)]
pub struct StudentFields<'a> {
    pub name: &'a str,
    pub national_id: &'a str,
    pub registry_id: &'a str,
}

impl<'a> StudentFields<'a> {
    pub fn get(&self, field: StudentField) -> &'a str {
        match field {
            StudentField::Name => self.name,
            StudentField::NationalId => self.national_id,
            StudentField::RegistryId => self.registry_id,
        }
    }
}

impl<'a> From<&'a NewStudent> for StudentFields<'a> {
    fn from(input: &'a NewStudent) -> Self {
        Self {
            name: &input.name,
            national_id: &input.national_id,
            registry_id: &input.registry_id,
        }
    }
}

impl<'a> From<&'a Student> for StudentFields<'a> {
    fn from(student: &'a Student) -> Self {
        Self {
            name: &student.name,
            national_id: &student.national_id,
            registry_id: &student.registry_id,
        }
    }
}

pub trait ValidationRule: Send + Sync {
    /// The field this rule inspects.
    fn field(&self) -> StudentField;

    /// Returns the violation, if any. Must not have side effects.
    fn check(&self, candidate: &StudentFields<'_>) -> Option<FieldViolation>;
}

/// Rejects empty and whitespace-only values.
pub struct Required(pub StudentField);

impl ValidationRule for Required {
    fn field(&self) -> StudentField {
        self.0
    }

    fn check(&self, candidate: &StudentFields<'_>) -> Option<FieldViolation> {
        if candidate.get(self.0).trim().is_empty() {
            Some(FieldViolation::new(self.0, "must not be empty"))
        } else {
            None
        }
    }
}

/// Rejects values longer than the given number of characters.
pub struct MaxLength(pub StudentField, pub usize);

impl ValidationRule for MaxLength {
    fn field(&self) -> StudentField {
        self.0
    }

    fn check(&self, candidate: &StudentFields<'_>) -> Option<FieldViolation> {
        let MaxLength(field, max) = *self;
        if candidate.get(field).chars().count() > max {
            Some(FieldViolation::new(
                field,
                format!("must be at most {} characters", max),
            ))
        } else {
            None
        }
    }
}

/// Requires exactly `n` ASCII digits.
pub struct DigitsOfLength(pub StudentField, pub usize);

impl ValidationRule for DigitsOfLength {
    fn field(&self) -> StudentField {
        self.0
    }

    fn check(&self, candidate: &StudentFields<'_>) -> Option<FieldViolation> {
        let DigitsOfLength(field, len) = *self;
        let value = candidate.get(field);
        if value.len() == len && value.bytes().all(|b| b.is_ascii_digit()) {
            None
        } else {
            Some(FieldViolation::new(
                field,
                format!("must be exactly {} digits", len),
            ))
        }
    }
}

/// Upper bound shared by every text column
pub const MAX_FIELD_LENGTH: usize = 255;

/// Stock rule sets selectable from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationProfile {
    /// Name and national ID required, bounded lengths.
    #[default]
    Default,
    /// Default plus CPF (11 digits) and RG (9 digits) shapes.
    Strict,
}

impl FromStr for ValidationProfile {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "default" => Ok(ValidationProfile::Default),
            "strict" => Ok(ValidationProfile::Strict),
            _ => Err(anyhow::anyhow!("Invalid validation profile: {}", s)),
        }
    }
}

pub struct Validator {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl Validator {
    /// A validator that accepts everything.
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn for_profile(profile: ValidationProfile) -> Self {
        let mut validator = Self::empty()
            .with_rule(Required(StudentField::Name))
            .with_rule(Required(StudentField::NationalId));

        if profile == ValidationProfile::Strict {
            validator = validator
                .with_rule(DigitsOfLength(StudentField::NationalId, 11))
                .with_rule(DigitsOfLength(StudentField::RegistryId, 9));
        }

        validator
            .with_rule(MaxLength(StudentField::Name, MAX_FIELD_LENGTH))
            .with_rule(MaxLength(StudentField::NationalId, MAX_FIELD_LENGTH))
            .with_rule(MaxLength(StudentField::RegistryId, MAX_FIELD_LENGTH))
    }

    pub fn with_rule(mut self, rule: impl ValidationRule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Run every rule in order. Once a field has failed, later rules for the
    /// same field are skipped so each field reports its first problem only.
    pub fn validate(&self, candidate: StudentFields<'_>) -> Result<(), ValidationError> {
        let mut violations: Vec<FieldViolation> = Vec::new();

        for rule in &self.rules {
            if violations.iter().any(|v| v.field == rule.field()) {
                continue;
            }
            if let Some(violation) = rule.check(&candidate) {
                violations.push(violation);
            }
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { violations })
        }
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::for_profile(ValidationProfile::Default)
    }
}
