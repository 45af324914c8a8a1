use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use fincatalog_core::{ApiError, DomainError, FieldViolation};

pub const DUPLICATE_ID: &str = "Duplicate identifier found in the database";
pub const NOT_FOUND: &str = "Not product found with that identifier";
pub const INVALID_BODY: &str = "Invalid body, check 'errors' property for more info.";

pub fn api_error(status: StatusCode, body: ApiError) -> axum::response::Response {
    (status, Json(body)).into_response()
}

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Conflict(_) => {
            api_error(StatusCode::BAD_REQUEST, ApiError::bad_request(DUPLICATE_ID))
        }
        DomainError::NotFound => api_error(StatusCode::NOT_FOUND, ApiError::not_found(NOT_FOUND)),
        DomainError::Validation(msg) | DomainError::InvalidDate(msg) => {
            api_error(StatusCode::BAD_REQUEST, ApiError::bad_request(msg))
        }
    }
}

/// 400 listing each failed rule as `{property, constraint, message}`.
pub fn violations_to_response(violations: &[FieldViolation]) -> axum::response::Response {
    let errors: Vec<_> = violations
        .iter()
        .map(|v| {
            json!({
                "property": v.field.as_str(),
                "constraint": v.error.key(),
                "message": v.error.to_string(),
            })
        })
        .collect();

    api_error(
        StatusCode::BAD_REQUEST,
        ApiError::bad_request(INVALID_BODY).with_errors(serde_json::Value::Array(errors)),
    )
}
