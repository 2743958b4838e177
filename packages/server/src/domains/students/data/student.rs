use serde::{Deserialize, Serialize};

use crate::domains::students::models::Student;

/// JSON representation of a student returned by the HTTP API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentData {
    pub id: i64,
    pub name: String,
    pub national_id: String,
    pub registry_id: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Student> for StudentData {
    fn from(student: Student) -> Self {
        Self {
            id: student.id.as_i64(),
            name: student.name,
            national_id: student.national_id,
            registry_id: student.registry_id,
            created_at: student.created_at.to_rfc3339(),
            updated_at: student.updated_at.to_rfc3339(),
        }
    }
}

/// Response body for `DELETE /students/:id`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteStudentData {
    pub deleted: bool,
    pub student: Option<StudentData>,
}

impl From<Option<Student>> for DeleteStudentData {
    fn from(removed: Option<Student>) -> Self {
        Self {
            deleted: removed.is_some(),
            student: removed.map(StudentData::from),
        }
    }
}
