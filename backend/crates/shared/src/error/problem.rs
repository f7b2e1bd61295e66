//! RFC 7807 Problem Details
//!
//! Wire shape of every error response, and (behind the `axum` feature) the
//! `IntoResponse` impl for [`AppError`].

use serde::Serialize;

#[cfg(feature = "axum")]
use super::app_error::AppError;

/// Detail rendered for every 5xx response instead of the real message
pub const GENERIC_SERVER_ERROR_DETAIL: &str = "An unexpected error occurred";

pub const PROBLEM_CONTENT_TYPE: &str = "application/problem+json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProblemDetails<'a> {
    #[serde(rename = "type")]
    pub problem_type: String,
    pub title: &'a str,
    pub status: u16,
    pub detail: &'a str,
    pub action: Option<&'a str>,
}

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::{HeaderValue, StatusCode, header};

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let mut response = (status, Json(self.problem())).into_response();
        response.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(PROBLEM_CONTENT_TYPE),
        );
        response
    }
}
