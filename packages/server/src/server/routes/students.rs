//! JSON endpoints for student records.

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    Json,
};

use crate::common::StudentId;
use crate::domains::students::{
    DeleteStudentData, NewStudent, StudentData, StudentError, StudentPatch,
};
use crate::server::app::AppState;

/// `GET /students`
pub async fn list_students(
    Extension(state): Extension<AppState>,
) -> Result<Json<Vec<StudentData>>, StudentError> {
    let students = state.students.list_all().await?;
    Ok(Json(students.into_iter().map(StudentData::from).collect()))
}

/// `GET /students/:id`
pub async fn get_student(
    Extension(state): Extension<AppState>,
    Path(id): Path<StudentId>,
) -> Result<Json<StudentData>, StudentError> {
    let student = state.students.get_by_id(id).await?;
    Ok(Json(student.into()))
}

/// `GET /students/cpf/:cpf`
pub async fn get_student_by_national_id(
    Extension(state): Extension<AppState>,
    Path(national_id): Path<String>,
) -> Result<Json<StudentData>, StudentError> {
    let student = state.students.get_by_national_id(&national_id).await?;
    Ok(Json(student.into()))
}

/// `POST /students`
pub async fn create_student(
    Extension(state): Extension<AppState>,
    Json(input): Json<NewStudent>,
) -> Result<(StatusCode, Json<StudentData>), StudentError> {
    let student = state.students.create(input).await?;
    Ok((StatusCode::CREATED, Json(student.into())))
}

/// `PATCH /students/:id`
pub async fn update_student(
    Extension(state): Extension<AppState>,
    Path(id): Path<StudentId>,
    Json(patch): Json<StudentPatch>,
) -> Result<Json<StudentData>, StudentError> {
    let student = state.students.partial_update(id, patch).await?;
    Ok(Json(student.into()))
}

/// `DELETE /students/:id`
pub async fn delete_student(
    Extension(state): Extension<AppState>,
    Path(id): Path<StudentId>,
) -> Result<Json<DeleteStudentData>, StudentError> {
    let removed = state.students.delete(id).await?;
    Ok(Json(removed.into()))
}
