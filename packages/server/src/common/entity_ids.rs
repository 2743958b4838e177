//! Typed ID definitions for domain entities.
//!
//! Students are keyed by a store-assigned integer. Wrapping it keeps a raw
//! `i64` (a count, a page size, a national id parsed as a number) from being
//! passed where a student key is expected.
//!
//! # Example
//!
//! ```rust
//! use student_core::common::StudentId;
//!
//! let id = StudentId::new(42);
//! assert!(id.is_persisted());
//! assert!(!StudentId::UNSAVED.is_persisted());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Surrogate key of a student row.
///
/// `0` is reserved for "not yet persisted"; the store never hands it out.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, sqlx::Type,
)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct StudentId(i64);

impl StudentId {
    /// Key of a record that has not been written to the store.
    pub const UNSAVED: Self = Self(0);

    #[inline]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn as_i64(self) -> i64 {
        self.0
    }

    /// Whether this key could belong to a stored row.
    #[inline]
    pub const fn is_persisted(self) -> bool {
        self.0 != 0
    }
}

impl From<i64> for StudentId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<StudentId> for i64 {
    fn from(id: StudentId) -> Self {
        id.0
    }
}

impl Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
