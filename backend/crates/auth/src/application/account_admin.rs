//! Account Administration Use Cases
//!
//! Listing and deleting accounts. Callers must already be authorized as admin.

use std::sync::Arc;

use crate::domain::entity::account::Account;
use crate::domain::repository::{AccountFilter, AccountRepository};
use crate::domain::value_object::AccountId;
use crate::error::{AuthError, AuthResult};

/// List accounts use case
pub struct ListAccountsUseCase<R>
where
    R: AccountRepository,
{
    repo: Arc<R>,
}

impl<R> ListAccountsUseCase<R>
where
    R: AccountRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, filter: AccountFilter) -> AuthResult<Vec<Account>> {
        self.repo.list(filter).await
    }
}

/// Delete account use case
pub struct DeleteAccountUseCase<R>
where
    R: AccountRepository,
{
    repo: Arc<R>,
}

impl<R> DeleteAccountUseCase<R>
where
    R: AccountRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, actor: AccountId, account_id: AccountId) -> AuthResult<()> {
        if !self.repo.delete(&account_id).await? {
            return Err(AuthError::AccountNotFound);
        }

        tracing::info!(%actor, %account_id, "Account deleted");
        Ok(())
    }
}
