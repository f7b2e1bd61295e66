//! Bootstrap Admin Use Case
//!
//! Creates the first, pre-approved admin account at startup. Admin accounts
//! cannot be self-registered by default, so this is how a fresh deployment
//! gets one.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::account::Account;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::{
    account_password::{AccountPassword, RawPassword},
    display_name::DisplayName,
    email::Email,
    mobile::Mobile,
};
use crate::error::AuthResult;

pub const DEFAULT_ADMIN_NAME: &str = "Administrator";

/// Bootstrap admin input
#[derive(Clone)]
pub struct BootstrapAdminInput {
    pub name: Option<String>,
    pub email: String,
    pub mobile: String,
    pub password: String,
}

#[derive(Debug)]
pub enum BootstrapOutcome {
    Created(Account),
    /// An account with this email exists already; nothing was changed
    AlreadyExists,
}

/// Bootstrap admin use case
pub struct BootstrapAdminUseCase<R>
where
    R: AccountRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> BootstrapAdminUseCase<R>
where
    R: AccountRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: BootstrapAdminInput) -> AuthResult<BootstrapOutcome> {
        let email = Email::new(input.email)?;

        if let Some(existing) = self.repo.find_by_email(&email).await? {
            tracing::info!(
                account_id = %existing.account_id,
                role = %existing.role,
                "Bootstrap admin skipped: email already registered"
            );
            return Ok(BootstrapOutcome::AlreadyExists);
        }

        let name = DisplayName::new(input.name.as_deref().unwrap_or(DEFAULT_ADMIN_NAME))?;
        let mobile = Mobile::new(&input.mobile)?;
        let raw_password = RawPassword::new(input.password)?;
        let password = AccountPassword::from_raw(
            &raw_password,
            self.config.password_cost,
            self.config.pepper(),
        )?;

        let account = Account::bootstrap_admin(name, email, mobile, password);
        self.repo.create(&account).await?;

        tracing::info!(account_id = %account.account_id, "Bootstrap admin created");

        Ok(BootstrapOutcome::Created(account))
    }
}
