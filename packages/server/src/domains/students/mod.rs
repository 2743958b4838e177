pub mod data;
pub mod errors;
pub mod models;
pub mod service;
pub mod validation;

pub use data::{DeleteStudentData, StudentData};
pub use errors::{FieldViolation, StoreError, StudentError, StudentField, StudentKey, ValidationError};
pub use models::{NewStudent, Student, StudentFilter, StudentPatch};
pub use service::StudentService;
pub use validation::{ValidationProfile, ValidationRule, Validator};
