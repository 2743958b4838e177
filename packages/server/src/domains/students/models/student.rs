use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::StudentId;

/// A persisted student record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub national_id: String, // CPF
    pub registry_id: String, // RG
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a new student
///
/// Missing JSON fields deserialize to empty strings so that they reach the
/// validator instead of failing body extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewStudent {
    pub name: String,
    pub national_id: String,
    pub registry_id: String,
}

impl NewStudent {
    pub fn new(
        name: impl Into<String>,
        national_id: impl Into<String>,
        registry_id: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            national_id: national_id.into(),
            registry_id: registry_id.into(),
        }
    }
}

/// Sparse update: `None` keeps the stored value, `Some` overwrites it.
///
/// `Some(String::new())` is a real value and goes through validation like
/// any other; it does not mean "leave unchanged".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudentPatch {
    pub name: Option<String>,
    pub national_id: Option<String>,
    pub registry_id: Option<String>,
}

impl StudentPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.national_id.is_none() && self.registry_id.is_none()
    }

    /// Overlay the present fields onto `student`, returning the merged record.
    pub fn apply_to(&self, student: &Student) -> Student {
        let mut merged = student.clone();
        if let Some(name) = &self.name {
            merged.name = name.clone();
        }
        if let Some(national_id) = &self.national_id {
            merged.national_id = national_id.clone();
        }
        if let Some(registry_id) = &self.registry_id {
            merged.registry_id = registry_id.clone();
        }
        merged
    }
}

/// Equality predicates supported by `find_where`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StudentFilter {
    NationalId(String),
}

impl StudentFilter {
    pub fn matches(&self, student: &Student) -> bool {
        match self {
            StudentFilter::NationalId(national_id) => student.national_id == *national_id,
        }
    }
}

impl Student {
    /// Find all students
    pub async fn find_all(pool: &PgPool) -> sqlx::Result<Vec<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM students ORDER BY id ASC")
            .fetch_all(pool)
            .await
    }

    /// Find student by ID
    pub async fn find_by_id(id: StudentId, pool: &PgPool) -> sqlx::Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM students WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find student by national ID (CPF)
    pub async fn find_by_national_id(
        national_id: &str,
        pool: &PgPool,
    ) -> sqlx::Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            r#"
            SELECT *
            FROM students
            WHERE national_id = $1
            ORDER BY id ASC
            LIMIT 1
            "#,
        )
        .bind(national_id)
        .fetch_optional(pool)
        .await
    }

    /// Insert a new student, returning the row with its assigned ID
    pub async fn create(input: &NewStudent, pool: &PgPool) -> sqlx::Result<Self> {
        sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO students (name, national_id, registry_id)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(&input.name)
        .bind(&input.national_id)
        .bind(&input.registry_id)
        .fetch_one(pool)
        .await
    }

    /// Overwrite only the columns present in `patch`
    ///
    /// Returns `None` when no row has this ID.
    pub async fn update_columns(
        id: StudentId,
        patch: &StudentPatch,
        pool: &PgPool,
    ) -> sqlx::Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            r#"
            UPDATE students
            SET name = COALESCE($2, name),
                national_id = COALESCE($3, national_id),
                registry_id = COALESCE($4, registry_id),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(patch.name.as_deref())
        .bind(patch.national_id.as_deref())
        .bind(patch.registry_id.as_deref())
        .fetch_optional(pool)
        .await
    }

    /// Delete a student, returning the removed row if there was one
    pub async fn delete(id: StudentId, pool: &PgPool) -> sqlx::Result<Option<Self>> {
        sqlx::query_as::<_, Self>("DELETE FROM students WHERE id = $1 RETURNING *")
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
