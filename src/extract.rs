use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header, HeaderMap},
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{AppError, AppResult, FieldError};

/// Per-field checks run on the raw JSON object before it is deserialized, so
/// every bad field is reported in one response.
pub trait BodyFields {
    fn field_errors(body: &Map<String, Value>) -> Vec<FieldError>;
}

/// JSON body extractor whose every rejection is a 422 validation error.
///
/// A body without a `Content-Type` is still parsed as JSON. A content type that
/// is present but not JSON, or a body that is not an object, is rejected before
/// any field is looked at.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + BodyFields,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if json_content_type(req.headers()) == Some(false) {
            return Err(AppError::validation(FieldError::body_not_object()));
        }

        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            AppError::validation(FieldError::new(["body"], e.body_text(), "body_invalid"))
        })?;
        if bytes.is_empty() {
            return Err(AppError::validation(FieldError::body_missing()));
        }

        let value: Value = serde_json::from_slice(&bytes)
            .map_err(|e| AppError::validation(FieldError::json_invalid(&e)))?;
        let Value::Object(body) = value else {
            return Err(AppError::validation(FieldError::body_not_object()));
        };

        let errors = T::field_errors(&body);
        if !errors.is_empty() {
            return Err(AppError::Validation(errors));
        }

        let payload = serde_json::from_value(Value::Object(body))
            .map_err(|e| AppError::validation(FieldError::from_serde(&e)))?;
        Ok(Self(payload))
    }
}

/// `None` when no content type was sent, otherwise whether it names JSON
/// (`application/json` or an `application/*+json` subtype).
fn json_content_type(headers: &HeaderMap) -> Option<bool> {
    let value = headers.get(header::CONTENT_TYPE)?;
    let essence = value
        .to_str()
        .ok()
        .and_then(|v| v.split(';').next())
        .map(|v| v.trim().to_ascii_lowercase());

    Some(match essence.as_deref().and_then(|e| e.strip_prefix("application/")) {
        Some(subtype) => subtype == "json" || subtype.ends_with("+json"),
        None => false,
    })
}

/// Parse a raw path segment as an integer id. `param` names the segment in the
/// error location.
pub fn parse_path_id(raw: &str, param: &str) -> AppResult<i64> {
    raw.parse::<i64>().map_err(|_| {
        AppError::validation(FieldError::new(
            ["path", param],
            "Input should be a valid integer, unable to parse string as an integer",
            "int_parsing",
        ))
    })
}
