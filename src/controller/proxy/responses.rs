use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use serde_json::json;

use crate::error::AppError;

pub const GENERIC_ERROR: &str = "Internal server error";

/// Upstream statuses outside the valid range come back as 502.
#[must_use]
pub fn status_code(status: u16) -> StatusCode {
    StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY)
}

#[must_use]
pub fn internal_error() -> HttpResponse {
    HttpResponse::InternalServerError().json(json!({"error": GENERIC_ERROR}))
}

#[must_use]
pub fn bad_request(message: &str) -> HttpResponse {
    log::debug!("rejected request: {message}");
    HttpResponse::BadRequest().json(json!({"error": message}))
}

/// Forwards an upstream status with a descriptive message; anything else is a generic 500.
#[must_use]
pub fn upstream_failure(err: &AppError, what: &str) -> HttpResponse {
    match err.upstream_status() {
        Some(status) => {
            log::warn!("upstream {what} request returned status {status}");
            HttpResponse::build(status_code(status)).json(json!({
                "error": format!("Failed to fetch {what}: upstream returned status {status}")
            }))
        }
        None => {
            log::error!("{what} request failed: {err}");
            internal_error()
        }
    }
}

/// Error body that still carries an empty `leagues` list for fixture renderers.
#[must_use]
pub fn leagues_fallback(status: StatusCode, message: &str) -> HttpResponse {
    HttpResponse::build(status).json(json!({"error": message, "leagues": []}))
}

/// Upstream status when there is one, 502 when the upstream couldn't be reached or read.
#[must_use]
pub fn leagues_failure(err: &AppError, what: &str) -> HttpResponse {
    match err.upstream_status() {
        Some(status) => {
            log::warn!("upstream {what} request returned status {status}");
            leagues_fallback(
                status_code(status),
                &format!("Failed to fetch {what}: upstream returned status {status}"),
            )
        }
        None => {
            log::error!("{what} request failed: {err}");
            leagues_fallback(StatusCode::BAD_GATEWAY, &format!("Failed to fetch {what}"))
        }
    }
}
