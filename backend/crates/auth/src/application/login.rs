//! Login Use Case
//!
//! Checks, in order: credentials, declared role, approval. Only then is the
//! credential re-hashed (when its cost is outdated) and a token issued.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::TokenService;
use crate::domain::entity::account::Account;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::{
    account_password::{AccountPassword, RawPassword},
    account_role::AccountRole,
    email::Email,
};
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub email: String,
    pub password: String,
    /// Role the client claims to log in as
    pub role: Option<String>,
}

/// Login output
#[derive(Debug)]
pub struct LoginOutput {
    pub token: String,
    pub account: Account,
}

/// Login use case
pub struct LoginUseCase<R>
where
    R: AccountRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
    tokens: Arc<TokenService>,
    /// Verified when no account matches the email
    decoy: Arc<AccountPassword>,
}

impl<R> LoginUseCase<R>
where
    R: AccountRepository,
{
    pub fn new(
        repo: Arc<R>,
        config: Arc<AuthConfig>,
        tokens: Arc<TokenService>,
        decoy: Arc<AccountPassword>,
    ) -> Self {
        Self {
            repo,
            config,
            tokens,
            decoy,
        }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        if input.email.trim().is_empty() || input.password.is_empty() {
            return Err(AuthError::Validation(
                "Email and password are required".to_string(),
            ));
        }

        let declared_role = match input.role.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(code) => Some(code.parse::<AccountRole>()?),
        };

        let raw_password = RawPassword::for_login(input.password);

        // Unknown and unparsable emails look exactly like a wrong password,
        // including the time spent hashing
        let account = match Email::new(input.email) {
            Ok(email) => self.repo.find_by_email(&email).await?,
            Err(_) => None,
        };
        let Some(mut account) = account else {
            self.decoy.verify(&raw_password, self.config.pepper());
            return Err(AuthError::InvalidCredentials);
        };

        if !account.password.verify(&raw_password, self.config.pepper()) {
            return Err(AuthError::InvalidCredentials);
        }

        if declared_role.is_some_and(|role| role != account.role) {
            return Err(AuthError::RoleMismatch);
        }

        if !account.can_log_in() {
            tracing::info!(
                account_id = %account.account_id,
                role = %account.role,
                "Login refused: account pending approval"
            );
            return Err(AuthError::AccountPendingApproval);
        }

        if account.password.needs_rehash(self.config.password_cost) {
            self.rehash(&mut account, &raw_password).await;
        }

        let token = self
            .tokens
            .issue(account.account_id, account.role)
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        tracing::info!(
            account_id = %account.account_id,
            role = %account.role,
            "Account logged in"
        );

        Ok(LoginOutput { token, account })
    }

    /// Upgrade an outdated hash. Failure is logged and does not block login.
    ///
    /// The write only lands if the stored hash is still the one verified
    /// above, so a concurrent password change is never overwritten.
    async fn rehash(&self, account: &mut Account, raw_password: &RawPassword) {
        let password = match AccountPassword::from_raw(
            raw_password,
            self.config.password_cost,
            self.config.pepper(),
        ) {
            Ok(password) => password,
            Err(e) => {
                tracing::warn!(account_id = %account.account_id, error = %e, "Password rehash failed");
                return;
            }
        };

        let verified = account.password.clone();
        account.change_password(password);

        match self.repo.upgrade_password(account, &verified).await {
            Ok(true) => {
                tracing::info!(account_id = %account.account_id, "Password hash upgraded");
            }
            Ok(false) => {
                tracing::debug!(
                    account_id = %account.account_id,
                    "Password changed since login began, hash upgrade skipped"
                );
            }
            Err(e) => {
                tracing::warn!(account_id = %account.account_id, error = %e, "Failed to persist upgraded password hash");
            }
        }
    }
}
