//! Application Layer
//!
//! Use cases and application services.

pub mod account_admin;
pub mod approve;
pub mod authenticate;
pub mod authorize;
pub mod bootstrap_admin;
pub mod change_password;
pub mod config;
pub mod current_account;
pub mod login;
pub mod register;
pub mod token;

// Re-exports
pub use account_admin::{DeleteAccountUseCase, ListAccountsUseCase};
pub use approve::ApproveAccountUseCase;
pub use authenticate::{AuthContext, AuthenticateUseCase};
pub use authorize::authorize;
pub use bootstrap_admin::{BootstrapAdminInput, BootstrapAdminUseCase, BootstrapOutcome};
pub use change_password::{ChangePasswordInput, ChangePasswordUseCase};
pub use config::AuthConfig;
pub use current_account::CurrentAccountUseCase;
pub use login::{LoginInput, LoginOutput, LoginUseCase};
pub use register::{RegisterInput, RegisterUseCase};
pub use token::{TokenClaims, TokenError, TokenService};
