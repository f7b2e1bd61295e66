//! Shared Kernel
//!
//! Vocabulary shared by every portal crate:
//! - the unified [`error::app_error::AppError`], its [`error::kind::ErrorKind`]
//!   and the RFC 7807 body it renders as
//! - typed identifiers ([`id::Id`])
//!
//! Only things whose meaning is identical across domains belong here.

pub mod error {
    pub mod app_error;
    pub mod kind;
    pub mod problem;
}
pub mod id;
