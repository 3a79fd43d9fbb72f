use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use apmed_core::DomainError;
use apmed_leads::FormError;

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        DomainError::InvalidCategoryKind(key) => json_error(
            StatusCode::BAD_REQUEST,
            "invalid_category_kind",
            format!("unknown category kind: {key}"),
        ),
        DomainError::UnknownCountry(code) => json_error(
            StatusCode::BAD_REQUEST,
            "unknown_country",
            format!("unknown country code: {code}"),
        ),
        DomainError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", "not found"),
    }
}

/// Form failures carry the offending field so the UI can render the
/// message inline next to it.
pub fn form_error_to_response(err: FormError) -> axum::response::Response {
    (
        StatusCode::BAD_REQUEST,
        axum::Json(json!({
            "error": "validation_error",
            "field": err.field(),
            "message": err.to_string(),
        })),
    )
        .into_response()
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
