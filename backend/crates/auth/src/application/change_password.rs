//! Change Password Use Case
//!
//! The only path that replaces a stored credential (besides the transparent
//! rehash at login).

use std::sync::Arc;

use crate::application::authenticate::AuthContext;
use crate::application::config::AuthConfig;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::account_password::{AccountPassword, RawPassword};
use crate::error::{AuthError, AuthResult};

/// Change password input
pub struct ChangePasswordInput {
    pub current_password: String,
    pub new_password: String,
}

/// Change password use case
pub struct ChangePasswordUseCase<R>
where
    R: AccountRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> ChangePasswordUseCase<R>
where
    R: AccountRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, context: &AuthContext, input: ChangePasswordInput) -> AuthResult<()> {
        if input.current_password.is_empty() {
            return Err(AuthError::Validation(
                "Current password is required".to_string(),
            ));
        }

        let mut account = self
            .repo
            .find_by_id(&context.account_id)
            .await?
            .ok_or(AuthError::Unauthenticated)?;

        let current = RawPassword::for_login(input.current_password);
        if !account.password.verify(&current, self.config.pepper()) {
            return Err(AuthError::InvalidCredentials);
        }

        let new_password = RawPassword::new(input.new_password)?;
        if account.password.verify(&new_password, self.config.pepper()) {
            return Err(AuthError::Validation(
                "New password must differ from the current password".to_string(),
            ));
        }

        let hashed = AccountPassword::from_raw(
            &new_password,
            self.config.password_cost,
            self.config.pepper(),
        )?;
        account.change_password(hashed);

        self.repo.update_password(&account).await?;

        tracing::info!(
            account_id = %account.account_id,
            role = %account.role,
            "Password changed"
        );

        Ok(())
    }
}
