use axum::{
    body::Body,
    http::{header, StatusCode},
    response::Response,
};
use mime_guess::from_path;
use rust_embed::RustEmbed;
use std::path::PathBuf;

#[derive(RustEmbed)]
#[folder = "assets/"]
pub struct Assets;

const PAGE: &str = "index.html";

/// Serve the shortening form page from embedded assets or filesystem
pub async fn serve_form_page(static_dir: Option<String>) -> Response {
    // Prefer the filesystem if a static_dir override is provided
    if let Some(ref dir) = static_dir {
        let file_path = PathBuf::from(dir).join(PAGE);
        if let Ok(content) = tokio::fs::read(&file_path).await {
            let mime_type = from_path(&file_path).first_or_octet_stream();
            return Response::builder()
                .status(StatusCode::OK)
                .header(header::CONTENT_TYPE, mime_type.as_ref())
                .body(Body::from(content))
                .unwrap();
        }
    }

    // Fall back to embedded assets
    match Assets::get(PAGE) {
        Some(content) => {
            let mime = from_path(PAGE).first_or_octet_stream();
            Response::builder()
                .status(StatusCode::OK)
                .header(header::CONTENT_TYPE, mime.as_ref())
                .body(Body::from(content.data))
                .unwrap()
        }
        None => Response::builder()
            .status(StatusCode::NOT_FOUND)
            .body(Body::from("404 Not Found"))
            .unwrap(),
    }
}
