// TestDependencies - in-process implementations for testing
//
// Provides stores that can be injected into StudentService for tests and
// local runs without PostgreSQL.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use super::BaseStudentStore;
use crate::common::StudentId;
use crate::domains::students::errors::StoreError;
use crate::domains::students::models::{NewStudent, Student, StudentFilter, StudentPatch};

// =============================================================================
// In-memory Student Store
// =============================================================================

#[derive(Default)]
struct StoreState {
    last_id: i64,
    rows: BTreeMap<StudentId, Student>,
}

impl StoreState {
    fn national_id_taken(&self, national_id: &str, except: Option<StudentId>) -> bool {
        self.rows
            .values()
            .any(|s| s.national_id == national_id && Some(s.id) != except)
    }
}

/// Student store backed by a `BTreeMap`, with the same unique national ID
/// rule as the PostgreSQL schema. IDs start at 1 and are never reused.
#[derive(Clone, Default)]
pub struct InMemoryStudentStore {
    state: Arc<Mutex<StoreState>>,
    insert_calls: Arc<Mutex<usize>>,
    update_calls: Arc<Mutex<usize>>,
    delete_calls: Arc<Mutex<Vec<StudentId>>>,
}

impl InMemoryStudentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a row in the store verbatim, bypassing ID assignment.
    pub fn with_row(self, student: Student) -> Self {
        {
            let mut state = self.state.lock().unwrap();
            state.last_id = state.last_id.max(student.id.as_i64());
            state.rows.insert(student.id, student);
        }
        self
    }

    pub fn len(&self) -> usize {
        self.state.lock().unwrap().rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of `insert` calls, including rejected ones
    pub fn insert_calls(&self) -> usize {
        *self.insert_calls.lock().unwrap()
    }

    /// Number of `update_columns` calls, including rejected ones
    pub fn update_calls(&self) -> usize {
        *self.update_calls.lock().unwrap()
    }

    /// IDs passed to `delete`, in call order
    pub fn delete_calls(&self) -> Vec<StudentId> {
        self.delete_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl BaseStudentStore for InMemoryStudentStore {
    async fn find_all(&self) -> Result<Vec<Student>, StoreError> {
        Ok(self.state.lock().unwrap().rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: StudentId) -> Result<Option<Student>, StoreError> {
        Ok(self.state.lock().unwrap().rows.get(&id).cloned())
    }

    async fn find_where(&self, filter: &StudentFilter) -> Result<Option<Student>, StoreError> {
        let state = self.state.lock().unwrap();
        Ok(state.rows.values().find(|s| filter.matches(s)).cloned())
    }

    async fn insert(&self, input: &NewStudent) -> Result<Student, StoreError> {
        *self.insert_calls.lock().unwrap() += 1;

        let mut state = self.state.lock().unwrap();
        if state.national_id_taken(&input.national_id, None) {
            return Err(StoreError::DuplicateNationalId(input.national_id.clone()));
        }

        state.last_id += 1;
        let now = Utc::now();
        let student = Student {
            id: StudentId::new(state.last_id),
            name: input.name.clone(),
            national_id: input.national_id.clone(),
            registry_id: input.registry_id.clone(),
            created_at: now,
            updated_at: now,
        };
        state.rows.insert(student.id, student.clone());
        Ok(student)
    }

    async fn update_columns(
        &self,
        id: StudentId,
        patch: &StudentPatch,
    ) -> Result<Option<Student>, StoreError> {
        *self.update_calls.lock().unwrap() += 1;

        let mut state = self.state.lock().unwrap();
        if let Some(national_id) = &patch.national_id {
            if state.national_id_taken(national_id, Some(id)) {
                return Err(StoreError::DuplicateNationalId(national_id.clone()));
            }
        }

        let Some(existing) = state.rows.get_mut(&id) else {
            return Ok(None);
        };
        let mut updated = patch.apply_to(existing);
        updated.updated_at = Utc::now();
        *existing = updated.clone();
        Ok(Some(updated))
    }

    async fn delete(&self, id: StudentId) -> Result<Option<Student>, StoreError> {
        self.delete_calls.lock().unwrap().push(id);
        Ok(self.state.lock().unwrap().rows.remove(&id))
    }
}

// =============================================================================
// Unavailable Student Store
// =============================================================================

/// Store whose every call fails, standing in for a lost database connection.
#[derive(Clone, Default)]
pub struct UnavailableStudentStore;

impl UnavailableStudentStore {
    fn failure() -> StoreError {
        StoreError::Database(sqlx::Error::PoolTimedOut)
    }
}

#[async_trait]
impl BaseStudentStore for UnavailableStudentStore {
    async fn find_all(&self) -> Result<Vec<Student>, StoreError> {
        Err(Self::failure())
    }

    async fn find_by_id(&self, _id: StudentId) -> Result<Option<Student>, StoreError> {
        Err(Self::failure())
    }

    async fn find_where(&self, _filter: &StudentFilter) -> Result<Option<Student>, StoreError> {
        Err(Self::failure())
    }

    async fn insert(&self, _input: &NewStudent) -> Result<Student, StoreError> {
        Err(Self::failure())
    }

    async fn update_columns(
        &self,
        _id: StudentId,
        _patch: &StudentPatch,
    ) -> Result<Option<Student>, StoreError> {
        Err(Self::failure())
    }

    async fn delete(&self, _id: StudentId) -> Result<Option<Student>, StoreError> {
        Err(Self::failure())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(Self::failure())
    }
}
