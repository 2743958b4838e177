//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    routing::get,
    Router,
};
use sqlx::PgPool;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::domains::students::{StudentService, Validator};
use crate::kernel::{BaseStudentStore, PgStudentStore};
use crate::server::routes::{
    create_student, delete_student, get_student, get_student_by_national_id, health_handler,
    index_page, list_students, not_found_page, update_student,
};
use crate::server::static_files::serve_asset;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn BaseStudentStore>,
    pub students: Arc<StudentService>,
}

impl AppState {
    pub fn new(store: Arc<dyn BaseStudentStore>, validator: Validator) -> Self {
        let students = Arc::new(StudentService::new(store.clone(), validator));
        Self { store, students }
    }
}

/// CORS for the JSON API. No configured origins means any origin.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(origin = %origin, error = %e, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([CONTENT_TYPE])
}

/// Build the router around an already constructed state.
pub fn build_router(state: AppState, allowed_origins: &[String]) -> Router {
    Router::new()
        .route("/students", get(list_students).post(create_student))
        .route(
            "/students/:id",
            get(get_student).patch(update_student).delete(delete_student),
        )
        .route("/students/cpf/:cpf", get(get_student_by_national_id))
        .route("/index", get(index_page))
        .route("/assets/*path", get(serve_asset))
        .route("/health", get(health_handler))
        .fallback(not_found_page)
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(Extension(state))
        .layer(cors_layer(allowed_origins))
        .layer(TraceLayer::new_for_http())
}

/// Build the Axum application router backed by PostgreSQL
pub fn build_app(pool: PgPool, validator: Validator, allowed_origins: &[String]) -> Router {
    let store: Arc<dyn BaseStudentStore> = Arc::new(PgStudentStore::new(pool));
    build_router(AppState::new(store, validator), allowed_origins)
}
