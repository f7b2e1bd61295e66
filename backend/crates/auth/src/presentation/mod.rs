//! Presentation Layer
//!
//! HTTP handlers, DTOs, router, and middleware.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use handlers::AuthAppState;
pub use middleware::{ADMIN_ONLY, require_authentication, require_roles};
pub use router::{admin_router, auth_router, portal_router};
