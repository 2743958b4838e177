use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::common::StudentId;

/// Fields of a student that validation rules can target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StudentField {
    Name,
    NationalId,
    RegistryId,
}

impl StudentField {
    pub fn as_str(&self) -> &'static str {
        match self {
            StudentField::Name => "name",
            StudentField::NationalId => "national_id",
            StudentField::RegistryId => "registry_id",
        }
    }
}

impl fmt::Display for StudentField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single failed rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: StudentField,
    pub reason: String,
}

impl FieldViolation {
    pub fn new(field: StudentField, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

/// A candidate student was rejected before reaching the store
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid student: {}", describe(.violations))]
pub struct ValidationError {
    pub violations: Vec<FieldViolation>,
}

impl ValidationError {
    pub fn fields(&self) -> impl Iterator<Item = StudentField> + '_ {
        self.violations.iter().map(|v| v.field)
    }

    pub fn has_field(&self, field: StudentField) -> bool {
        self.fields().any(|f| f == field)
    }
}

fn describe(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| format!("{} {}", v.field, v.reason))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Persistence failures
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("national id {0} is already registered")]
    DuplicateNationalId(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Key a lookup was performed with
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StudentKey {
    Id(StudentId),
    NationalId(String),
}

impl fmt::Display for StudentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StudentKey::Id(id) => write!(f, "id {}", id),
            StudentKey::NationalId(national_id) => write!(f, "national id {:?}", national_id),
        }
    }
}

/// Errors returned by `StudentService`
#[derive(Error, Debug)]
pub enum StudentError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("student not found: {key}")]
    NotFound { key: StudentKey },

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl StudentError {
    pub fn not_found(key: StudentKey) -> Self {
        StudentError::NotFound { key }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, StudentError::NotFound { .. })
    }
}
