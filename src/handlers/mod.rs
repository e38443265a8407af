pub mod orders;
pub mod products;
pub mod users;

use axum::{
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::debug;

use crate::{SERVICE_NAME, SERVICE_VERSION};

pub async fn root() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "message": format!("{} is running", SERVICE_NAME),
            "version": SERVICE_VERSION,
        })),
    )
}

pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Router fallback for paths no route matches.
pub async fn route_not_found(uri: Uri) -> (StatusCode, Json<serde_json::Value>) {
    debug!(%uri, "No route");
    (StatusCode::NOT_FOUND, Json(json!({ "detail": "Not Found" })))
}

/// Gives axum's bodiless 405 the same `{detail}` shape as every other error,
/// keeping its `Allow` header.
pub async fn method_not_allowed_detail(response: Response) -> Response {
    if response.status() != StatusCode::METHOD_NOT_ALLOWED {
        return response;
    }

    let allow = response.headers().get(header::ALLOW).cloned();
    let mut rebuilt = (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "detail": "Method Not Allowed" })),
    )
        .into_response();
    if let Some(allow) = allow {
        rebuilt.headers_mut().insert(header::ALLOW, allow);
    }
    rebuilt
}
