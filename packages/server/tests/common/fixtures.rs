//! Test fixtures for creating test data.
//!
//! Tests share one database, so every fixture uses a fresh national ID.

use anyhow::Result;
use chrono::Utc;
use sqlx::PgPool;
use std::sync::atomic::{AtomicU64, Ordering};
use student_core::domains::students::{NewStudent, Student};

static NEXT_NATIONAL_ID: AtomicU64 = AtomicU64::new(0);

/// An 11-digit national ID not used by any other fixture in this run
pub fn unique_national_id() -> String {
    let base = Utc::now().timestamp_micros().unsigned_abs() % 100_000_000;
    let seq = NEXT_NATIONAL_ID.fetch_add(1, Ordering::SeqCst) % 1_000;
    format!("{:08}{:03}", base, seq)
}

/// Create a student directly through the model, bypassing validation
pub async fn create_test_student(pool: &PgPool, name: &str) -> Result<Student> {
    let input = NewStudent::new(name, unique_national_id(), "111111111");
    Ok(Student::create(&input, pool).await?)
}
