use axum::Json;
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use log::debug;
use serde_json::json;

pub async fn default_handler(uri: Uri) -> Response {
    debug!("no route for {}", uri.path());

    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": format!("{} not found", uri.path()),
        })),
    )
        .into_response()
}
