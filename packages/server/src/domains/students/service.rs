//! Student record orchestration: validation, lookup and mutation rules.
//!
//! Every operation makes exactly one store call (two for a partial update)
//! and returns failures to the caller without retrying.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::common::StudentId;
use crate::kernel::BaseStudentStore;

use super::errors::{StudentError, StudentKey};
use super::models::{NewStudent, Student, StudentFilter, StudentPatch};
use super::validation::{StudentFields, Validator};

#[derive(Clone)]
pub struct StudentService {
    store: Arc<dyn BaseStudentStore>,
    validator: Arc<Validator>,
}

/// A row only counts as found if the store returned one with a real key.
fn found(row: Option<Student>, key: StudentKey) -> Result<Student, StudentError> {
    match row {
        Some(student) if student.id.is_persisted() => Ok(student),
        Some(_) => {
            warn!(key = %key, "Store returned a row without a persisted id");
            Err(StudentError::not_found(key))
        }
        None => Err(StudentError::not_found(key)),
    }
}

impl StudentService {
    pub fn new(store: Arc<dyn BaseStudentStore>, validator: Validator) -> Self {
        Self {
            store,
            validator: Arc::new(validator),
        }
    }

    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    pub async fn list_all(&self) -> Result<Vec<Student>, StudentError> {
        let students = self.store.find_all().await?;
        debug!(count = students.len(), "Listed students");
        Ok(students)
    }

    pub async fn get_by_id(&self, id: StudentId) -> Result<Student, StudentError> {
        let row = self.store.find_by_id(id).await?;
        found(row, StudentKey::Id(id))
    }

    pub async fn get_by_national_id(&self, national_id: &str) -> Result<Student, StudentError> {
        let row = self
            .store
            .find_where(&StudentFilter::NationalId(national_id.to_string()))
            .await?;
        found(row, StudentKey::NationalId(national_id.to_string()))
    }

    pub async fn create(&self, candidate: NewStudent) -> Result<Student, StudentError> {
        self.validator.validate(StudentFields::from(&candidate))?;

        let student = self.store.insert(&candidate).await?;
        info!(student_id = %student.id, "Student created");
        Ok(student)
    }

    /// Overlay `patch` onto the stored record, validate the result and write
    /// back only the patched columns.
    ///
    /// An empty patch writes nothing and returns the current record.
    pub async fn partial_update(
        &self,
        id: StudentId,
        patch: StudentPatch,
    ) -> Result<Student, StudentError> {
        let existing = self.get_by_id(id).await?;

        let merged = patch.apply_to(&existing);
        self.validator.validate(StudentFields::from(&merged))?;

        if patch.is_empty() {
            debug!(student_id = %id, "Empty patch, nothing to write");
            return Ok(existing);
        }

        let row = self.store.update_columns(id, &patch).await?;
        let student = found(row, StudentKey::Id(id))?;
        info!(student_id = %id, "Student updated");
        Ok(student)
    }

    /// Remove a student. A missing row is not an error.
    pub async fn delete(&self, id: StudentId) -> Result<Option<Student>, StudentError> {
        let removed = self.store.delete(id).await?;
        match &removed {
            Some(_) => info!(student_id = %id, "Student deleted"),
            None => debug!(student_id = %id, "Delete matched no student"),
        }
        Ok(removed)
    }
}
