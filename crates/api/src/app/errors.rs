use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use gildedrose_infra::{ImportError, ServiceError};

pub fn service_error_to_response(err: ServiceError) -> axum::response::Response {
    match &err {
        ServiceError::Domain(e) if e.is_validation() => {
            json_error(StatusCode::BAD_REQUEST, "validation_error", e.to_string())
        }
        ServiceError::Domain(e) => {
            tracing::error!(error = %e, "domain invariant violated");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "invariant_violation", e.to_string())
        }
        ServiceError::Import(ImportError::OutsideImportRoot { .. }) => {
            tracing::warn!(error = %err, "file load outside import directory refused");
            json_error(StatusCode::FORBIDDEN, "path_not_allowed", err.to_string())
        }
        ServiceError::Import(ImportError::Io { .. }) => {
            json_error(StatusCode::BAD_REQUEST, "file_unreadable", err.to_string())
        }
        ServiceError::Import(_) => {
            json_error(StatusCode::BAD_REQUEST, "import_error", err.to_string())
        }
    }
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

pub fn not_found(what: impl core::fmt::Display) -> axum::response::Response {
    json_error(StatusCode::NOT_FOUND, "not_found", format!("{what} not found"))
}
