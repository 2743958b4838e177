//! PostgreSQL-backed student store.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::common::StudentId;
use crate::domains::students::errors::StoreError;
use crate::domains::students::models::{NewStudent, Student, StudentFilter, StudentPatch};
use crate::kernel::BaseStudentStore;

/// Wrapper around a `PgPool` that implements `BaseStudentStore`
#[derive(Clone)]
pub struct PgStudentStore {
    pool: PgPool,
}

impl PgStudentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Map a unique-index violation on `national_id` to its own error kind.
fn classify(err: sqlx::Error, national_id: Option<&str>) -> StoreError {
    if let (sqlx::Error::Database(db), Some(national_id)) = (&err, national_id) {
        if db.is_unique_violation() {
            return StoreError::DuplicateNationalId(national_id.to_string());
        }
    }
    StoreError::Database(err)
}

#[async_trait]
impl BaseStudentStore for PgStudentStore {
    async fn find_all(&self) -> Result<Vec<Student>, StoreError> {
        Ok(Student::find_all(&self.pool).await?)
    }

    async fn find_by_id(&self, id: StudentId) -> Result<Option<Student>, StoreError> {
        Ok(Student::find_by_id(id, &self.pool).await?)
    }

    async fn find_where(&self, filter: &StudentFilter) -> Result<Option<Student>, StoreError> {
        match filter {
            StudentFilter::NationalId(national_id) => {
                Ok(Student::find_by_national_id(national_id, &self.pool).await?)
            }
        }
    }

    async fn insert(&self, input: &NewStudent) -> Result<Student, StoreError> {
        Student::create(input, &self.pool)
            .await
            .map_err(|e| classify(e, Some(&input.national_id)))
    }

    async fn update_columns(
        &self,
        id: StudentId,
        patch: &StudentPatch,
    ) -> Result<Option<Student>, StoreError> {
        Student::update_columns(id, patch, &self.pool)
            .await
            .map_err(|e| classify(e, patch.national_id.as_deref()))
    }

    async fn delete(&self, id: StudentId) -> Result<Option<Student>, StoreError> {
        Ok(Student::delete(id, &self.pool).await?)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
