// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Validation and lookup semantics live in domains/students/service.rs.
//
// Naming convention: Base* for trait names (e.g., BaseStudentStore)

use async_trait::async_trait;

use crate::common::StudentId;
use crate::domains::students::errors::StoreError;
use crate::domains::students::models::{NewStudent, Student, StudentFilter, StudentPatch};

// =============================================================================
// Student Store Trait (Infrastructure - persistence)
// =============================================================================

/// Persistence for student records.
///
/// "No row" is always `Ok(None)`; `Err` is reserved for failures of the
/// store itself so callers can tell the two apart.
#[async_trait]
pub trait BaseStudentStore: Send + Sync {
    /// All rows, in no guaranteed order
    async fn find_all(&self) -> Result<Vec<Student>, StoreError>;

    async fn find_by_id(&self, id: StudentId) -> Result<Option<Student>, StoreError>;

    /// First row matching the equality filter
    async fn find_where(&self, filter: &StudentFilter) -> Result<Option<Student>, StoreError>;

    /// Insert and return the row with its store-assigned ID
    async fn insert(&self, input: &NewStudent) -> Result<Student, StoreError>;

    /// Overwrite the columns present in `patch`; `None` if the row is gone
    async fn update_columns(
        &self,
        id: StudentId,
        patch: &StudentPatch,
    ) -> Result<Option<Student>, StoreError>;

    /// Remove the row, returning it if it existed
    async fn delete(&self, id: StudentId) -> Result<Option<Student>, StoreError>;

    /// Cheap liveness probe for health checks
    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
