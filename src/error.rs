use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;
use tracing::warn;

pub type AppResult<T> = Result<T, AppError>;

/// Per-request failures. Neither kind affects other requests or the process.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("request validation failed ({} error(s))", .0.len())]
    Validation(Vec<FieldError>),
}

/// One entry of a validation error's `detail` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Where the bad input sits, e.g. `["body", "item"]` or `["path", "user_id"]`.
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl FieldError {
    pub fn new<L, S>(loc: L, msg: impl Into<String>, kind: impl Into<String>) -> Self
    where
        L: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            loc: loc.into_iter().map(Into::into).collect(),
            msg: msg.into(),
            kind: kind.into(),
        }
    }

    /// The body is not a JSON object, or was sent under a non-JSON content type.
    pub fn body_not_object() -> Self {
        Self::new(
            ["body"],
            "Input should be a valid dictionary or object",
            "model_attributes_type",
        )
    }

    /// No body was sent at all.
    pub fn body_missing() -> Self {
        Self::new(["body"], "Field required", "missing")
    }

    /// The body is not parseable JSON.
    pub fn json_invalid(err: &serde_json::Error) -> Self {
        Self::new(["body"], format!("JSON decode error: {}", err), "json_invalid")
    }

    /// Fallback for a serde failure the per-field checks did not anticipate.
    pub fn from_serde(err: &serde_json::Error) -> Self {
        Self::new(["body"], err.to_string(), "type_error")
    }
}

impl AppError {
    pub fn validation(error: FieldError) -> Self {
        Self::Validation(vec![error])
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match self {
            AppError::NotFound(detail) => {
                warn!(%detail, "Lookup missed");
                json!({ "detail": detail })
            }
            AppError::Validation(errors) => {
                warn!(errors = errors.len(), "Rejected request input");
                json!({ "detail": errors })
            }
        };

        (status, Json(body)).into_response()
    }
}
