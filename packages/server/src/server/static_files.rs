use axum::{
    extract::Path,
    http::header,
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;

use crate::server::routes::not_found_page;

// Stylesheets and images served under /assets
#[derive(RustEmbed)]
#[folder = "assets"]
pub struct StaticAssets;

// HTML page templates
#[derive(RustEmbed)]
#[folder = "templates"]
pub struct PageTemplates;

/// Load a template as UTF-8 text
pub fn template(name: &str) -> Option<String> {
    PageTemplates::get(name).map(|file| String::from_utf8_lossy(&file.data).into_owned())
}

/// Serve an embedded asset, or the 404 page when there is none
pub async fn serve_asset(Path(path): Path<String>) -> Response {
    let path = path.trim_start_matches('/');

    match StaticAssets::get(path) {
        Some(content) => {
            let mime = mime_guess::from_path(path).first_or_octet_stream();
            ([(header::CONTENT_TYPE, mime.as_ref())], content.data).into_response()
        }
        None => not_found_page().await.into_response(),
    }
}
