//! Register Use Case
//!
//! Creates a new account. Never issues a token: a pending employer must not
//! hold one before approval.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::account::Account;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::{
    account_password::{AccountPassword, RawPassword},
    account_role::AccountRole,
    display_name::DisplayName,
    email::Email,
    mobile::Mobile,
};
use crate::error::{AuthError, AuthResult};

/// Register input
pub struct RegisterInput {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub password: String,
    /// Role code; `student` when absent
    pub role: Option<String>,
}

/// Register use case
pub struct RegisterUseCase<R>
where
    R: AccountRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> RegisterUseCase<R>
where
    R: AccountRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<Account> {
        let role = match input.role.as_deref().map(str::trim) {
            None | Some("") => AccountRole::default(),
            Some(code) => code.parse::<AccountRole>()?,
        };

        if role.is_privileged() && !self.config.allow_admin_registration {
            return Err(AuthError::PrivilegedRoleRegistration);
        }

        let name = DisplayName::new(&input.name)?;
        let email = Email::new(input.email)?;
        let mobile = Mobile::new(&input.mobile)?;
        let raw_password = RawPassword::new(input.password)?;

        let password = AccountPassword::from_raw(
            &raw_password,
            self.config.password_cost,
            self.config.pepper(),
        )?;

        let account = Account::new(name, email, mobile, password, role);

        // Uniqueness is enforced by the store, atomically
        self.repo.create(&account).await?;

        tracing::info!(
            account_id = %account.account_id,
            role = %account.role,
            approval = %account.approval,
            "Account registered"
        );

        Ok(account)
    }
}
