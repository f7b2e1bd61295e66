//! Value Object Module

pub mod account_password;
pub mod account_role;
pub mod approval_state;
pub mod display_name;
pub mod email;
pub mod mobile;

pub use kernel::id::AccountId;
