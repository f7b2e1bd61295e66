//! Error Kind
//!
//! The closed set of failure classes a portal request can end in.

/// Failure class of an [`AppError`](super::app_error::AppError)
///
/// The kind alone decides the HTTP status and the problem `title`.
///
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// assert_eq!(ErrorKind::Conflict.status_code(), 409);
/// assert_eq!(ErrorKind::Conflict.title(), "Conflict");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Input failed validation
    BadRequest,
    /// No valid credentials or token
    Unauthorized,
    /// Identified, but not allowed (wrong role, pending approval)
    Forbidden,
    NotFound,
    /// Unique email / mobile already taken
    Conflict,
    /// Anything the caller cannot fix
    InternalServerError,
}

impl ErrorKind {
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::BadRequest => 400,
            Self::Unauthorized => 401,
            Self::Forbidden => 403,
            Self::NotFound => 404,
            Self::Conflict => 409,
            Self::InternalServerError => 500,
        }
    }

    /// Reason phrase, used as the problem `title`
    pub const fn title(&self) -> &'static str {
        match self {
            Self::BadRequest => "Bad Request",
            Self::Unauthorized => "Unauthorized",
            Self::Forbidden => "Forbidden",
            Self::NotFound => "Not Found",
            Self::Conflict => "Conflict",
            Self::InternalServerError => "Internal Server Error",
        }
    }

    /// Server-side failures are logged and never echo their message
    pub const fn is_server_error(&self) -> bool {
        matches!(self, Self::InternalServerError)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}
