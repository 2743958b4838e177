//! Kernel module - server infrastructure and dependencies.

pub mod student_store;
pub mod test_dependencies;
pub mod traits;

pub use student_store::PgStudentStore;
pub use test_dependencies::{InMemoryStudentStore, UnavailableStudentStore};
pub use traits::*;
