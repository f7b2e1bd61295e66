//! Auth (Identity & Access) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Accounts, value objects, repository traits
//! - `application/` - Use cases, token service and the two request gates
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - HTTP handlers, DTOs, middleware, router
//!
//! ## Features
//! - Registration for students, employers and (opt-in) admins
//! - Email + password login returning a signed bearer token
//! - Admin approval of employer accounts before they can log in
//! - Role-based access to admin routes
//! - Password change and transparent rehash on login
//!
//! ## Security Model
//! - Passwords hashed with Argon2id (NIST SP 800-63B compliant)
//! - Tokens are HMAC-SHA256 signed and carry only account id, role and times
//! - Every protected request re-reads the account, so deleted accounts lose
//!   access immediately

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::{AuthContext, TokenService};
pub use error::{AuthError, AuthResult};
pub use infra::{InMemoryAccountRepository, PgAccountRepository};
pub use presentation::router::{admin_router, auth_router, portal_router};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}
