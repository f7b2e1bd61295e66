//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Malformed or missing input
    #[error("{0}")]
    Validation(String),

    /// Email or mobile already registered
    #[error("An account with this email or mobile number already exists")]
    DuplicateAccount,

    /// Unknown email or wrong password. One message for both.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Non-student account not yet approved by an admin
    #[error("Your account is pending approval")]
    AccountPendingApproval,

    /// Correct credentials, but the account has another role than declared
    #[error("Account does not have the requested role")]
    RoleMismatch,

    /// Missing, malformed, tampered or expired token
    #[error("Authentication required")]
    Unauthenticated,

    /// Authenticated, but the role is not allowed here
    #[error("You do not have permission to access this resource")]
    Forbidden,

    /// Self-registration with a privileged role
    #[error("This role cannot be self-registered")]
    PrivilegedRoleRegistration,

    #[error("Account not found")]
    AccountNotFound,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::Validation(_) => ErrorKind::BadRequest,
            AuthError::DuplicateAccount => ErrorKind::Conflict,
            AuthError::InvalidCredentials
            | AuthError::RoleMismatch
            | AuthError::Unauthenticated => ErrorKind::Unauthorized,
            AuthError::AccountPendingApproval
            | AuthError::Forbidden
            | AuthError::PrivilegedRoleRegistration => ErrorKind::Forbidden,
            AuthError::AccountNotFound => ErrorKind::NotFound,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        let err = AppError::new(self.kind(), self.to_string());
        match self {
            AuthError::AccountPendingApproval => {
                err.with_action("An administrator must approve your account before you can log in")
            }
            AuthError::DuplicateAccount => err.with_action("Log in instead, or use another email"),
            AuthError::Unauthenticated => err.with_action("Please log in again"),
            _ => err,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials | AuthError::RoleMismatch => {
                tracing::warn!(error = %self, "Rejected login attempt");
            }
            AuthError::Forbidden | AuthError::PrivilegedRoleRegistration => {
                tracing::warn!(error = %self, "Access denied");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        match err.kind() {
            ErrorKind::BadRequest => AuthError::Validation(err.message().to_string()),
            ErrorKind::NotFound => AuthError::AccountNotFound,
            ErrorKind::Conflict => AuthError::DuplicateAccount,
            _ => AuthError::Internal(err.to_string()),
        }
    }
}
