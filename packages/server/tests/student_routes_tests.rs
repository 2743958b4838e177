//! HTTP contract tests against an in-memory store.

mod common;

use axum::http::{Method, StatusCode};
use common::{in_memory_app, send};
use serde_json::json;
use std::sync::Arc;
use student_core::domains::students::{StudentData, Validator};
use student_core::kernel::UnavailableStudentStore;
use student_core::server::{build_router, AppState};

fn ana() -> serde_json::Value {
    json!({"name": "Ana", "national_id": "123", "registry_id": "999"})
}

#[tokio::test]
async fn list_is_an_empty_array_when_store_is_empty() {
    let (app, _) = in_memory_app();

    let response = send(&app, Method::GET, "/students", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.value(), json!([]));
}

#[tokio::test]
async fn create_returns_created_record() {
    let (app, store) = in_memory_app();

    let response = send(&app, Method::POST, "/students", Some(ana())).await;

    assert_eq!(response.status, StatusCode::CREATED);
    let student: StudentData = response.json();
    assert_eq!(student.id, 1);
    assert_eq!(student.name, "Ana");
    assert_eq!(student.national_id, "123");
    assert_eq!(student.registry_id, "999");
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn invalid_create_is_bad_request_with_violations() {
    let (app, store) = in_memory_app();

    let response = send(
        &app,
        Method::POST,
        "/students",
        Some(json!({"name": "", "national_id": "1", "registry_id": "2"})),
    )
    .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let body = response.value();
    assert_eq!(body["violations"][0]["field"], "name");
    assert_eq!(body["violations"][0]["reason"], "must not be empty");
    assert_eq!(store.insert_calls(), 0);

    let listed = send(&app, Method::GET, "/students", None).await;
    assert_eq!(listed.value(), json!([]));
}

#[tokio::test]
async fn missing_fields_are_validation_errors() {
    let (app, _) = in_memory_app();

    let response = send(&app, Method::POST, "/students", Some(json!({"registry_id": "2"}))).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let fields: Vec<String> = response.value()["violations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["field"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(fields, vec!["name", "national_id"]);
}

#[tokio::test]
async fn unknown_id_and_cpf_are_not_found() {
    let (app, _) = in_memory_app();
    send(&app, Method::POST, "/students", Some(ana())).await;

    for uri in ["/students/0", "/students/2", "/students/cpf/999"] {
        let response = send(&app, Method::GET, uri, None).await;
        assert_eq!(response.status, StatusCode::NOT_FOUND, "{}", uri);
        assert!(response.value()["error"]
            .as_str()
            .unwrap()
            .starts_with("student not found"));
    }
}

#[tokio::test]
async fn non_numeric_id_is_rejected_before_the_core() {
    let (app, store) = in_memory_app();

    let response = send(&app, Method::DELETE, "/students/abc", None).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(store.delete_calls().is_empty());
}

#[tokio::test]
async fn patch_keeps_omitted_fields() {
    let (app, _) = in_memory_app();
    send(&app, Method::POST, "/students", Some(ana())).await;

    let response = send(
        &app,
        Method::PATCH,
        "/students/1",
        Some(json!({"name": "Ana Maria"})),
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    let student: StudentData = response.json();
    assert_eq!(student.name, "Ana Maria");
    assert_eq!(student.national_id, "123");
    assert_eq!(student.registry_id, "999");
}

#[tokio::test]
async fn patch_of_missing_student_is_not_found() {
    let (app, store) = in_memory_app();

    let response = send(&app, Method::PATCH, "/students/5", Some(json!({"name": "X"}))).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(store.update_calls(), 0);
}

#[tokio::test]
async fn duplicate_cpf_is_conflict() {
    let (app, _) = in_memory_app();
    send(&app, Method::POST, "/students", Some(ana())).await;

    let response = send(
        &app,
        Method::POST,
        "/students",
        Some(json!({"name": "Bia", "national_id": "123", "registry_id": "1"})),
    )
    .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn delete_reports_whether_a_row_was_removed() {
    let (app, _) = in_memory_app();
    send(&app, Method::POST, "/students", Some(ana())).await;

    let first = send(&app, Method::DELETE, "/students/1", None).await;
    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.value()["deleted"], true);
    assert_eq!(first.value()["student"]["name"], "Ana");

    let second = send(&app, Method::DELETE, "/students/1", None).await;
    assert_eq!(second.status, StatusCode::OK);
    assert_eq!(second.value(), json!({"deleted": false, "student": null}));

    let lookup = send(&app, Method::GET, "/students/1", None).await;
    assert_eq!(lookup.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn store_failure_is_internal_error_without_details() {
    let state = AppState::new(Arc::new(UnavailableStudentStore), Validator::default());
    let app = build_router(state, &[]);

    let response = send(&app, Method::GET, "/students/1", None).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.value(), json!({"error": "internal storage error"}));

    let health = send(&app, Method::GET, "/health", None).await;
    assert_eq!(health.status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(health.value()["status"], "unhealthy");
}

#[tokio::test]
async fn index_page_lists_students() {
    let (app, _) = in_memory_app();
    send(&app, Method::POST, "/students", Some(ana())).await;
    send(
        &app,
        Method::POST,
        "/students",
        Some(json!({"name": "<Bia>", "national_id": "456", "registry_id": "1"})),
    )
    .await;

    let response = send(&app, Method::GET, "/index", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response
        .content_type
        .as_deref()
        .unwrap()
        .starts_with("text/html"));
    let html = response.text();
    assert!(html.contains("<td>Ana</td>"));
    assert!(html.contains("<td>&lt;Bia&gt;</td>"));
    assert!(html.contains("(2)"));
}

#[tokio::test]
async fn unknown_route_renders_not_found_page() {
    let (app, _) = in_memory_app();

    let response = send(&app, Method::GET, "/alunos", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(response.text().contains("404"));
}

#[tokio::test]
async fn assets_are_served_with_mime_type() {
    let (app, _) = in_memory_app();

    let css = send(&app, Method::GET, "/assets/style.css", None).await;
    assert_eq!(css.status, StatusCode::OK);
    assert!(css.content_type.as_deref().unwrap().starts_with("text/css"));

    let missing = send(&app, Method::GET, "/assets/missing.js", None).await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}
