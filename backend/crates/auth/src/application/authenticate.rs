//! Authenticate Use Case
//!
//! Turns a bearer token into an [`AuthContext`] with a single read-only
//! account lookup.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::TokenService;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::{AccountId, account_role::AccountRole};
use crate::error::{AuthError, AuthResult};

/// Identity of the caller, attached to the request once authenticated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthContext {
    pub account_id: AccountId,
    pub role: AccountRole,
}

/// Authenticate use case
pub struct AuthenticateUseCase<R>
where
    R: AccountRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
    tokens: Arc<TokenService>,
}

impl<R> AuthenticateUseCase<R>
where
    R: AccountRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>, tokens: Arc<TokenService>) -> Self {
        Self {
            repo,
            config,
            tokens,
        }
    }

    pub async fn execute(&self, token: Option<&str>) -> AuthResult<AuthContext> {
        let token = token.ok_or(AuthError::Unauthenticated)?;

        let claims = self.tokens.verify(token).map_err(|reason| {
            tracing::debug!(%reason, "Bearer token rejected");
            AuthError::Unauthenticated
        })?;

        let Some(account) = self.repo.find_by_id(&claims.sub).await? else {
            tracing::debug!(account_id = %claims.sub, "Token for a deleted account");
            return Err(AuthError::Unauthenticated);
        };

        if account.role != claims.role {
            tracing::debug!(account_id = %claims.sub, "Token role no longer matches account");
            return Err(AuthError::Unauthenticated);
        }

        if self.config.enforce_approval_per_request && !account.can_log_in() {
            return Err(AuthError::AccountPendingApproval);
        }

        Ok(AuthContext {
            account_id: account.account_id,
            role: account.role,
        })
    }
}
