//! Server-rendered HTML pages.

use axum::{
    extract::Extension,
    http::StatusCode,
    response::{Html, IntoResponse},
};

use crate::common::html::escape_html;
use crate::domains::students::{Student, StudentError};
use crate::server::app::AppState;
use crate::server::static_files::template;

const NOT_FOUND_FALLBACK: &str = "<h1>404 Not Found</h1>";

fn render_rows(students: &[Student]) -> String {
    students
        .iter()
        .map(|s| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                s.id,
                escape_html(&s.name),
                escape_html(&s.national_id),
                escape_html(&s.registry_id),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// `GET /index` - table of every student
pub async fn index_page(
    Extension(state): Extension<AppState>,
) -> Result<Html<String>, StudentError> {
    let students = state.students.list_all().await?;

    let page = template("index.html")
        .unwrap_or_else(|| "<table>{{students}}</table>".to_string())
        .replace("{{count}}", &students.len().to_string())
        .replace("{{students}}", &render_rows(&students));

    Ok(Html(page))
}

/// Fallback for unmatched routes
pub async fn not_found_page() -> impl IntoResponse {
    let page = template("404.html").unwrap_or_else(|| NOT_FOUND_FALLBACK.to_string());
    (StatusCode::NOT_FOUND, Html(page))
}
