//! Approve Account Use Case
//!
//! Admin-only transition of the approval state machine.

use std::sync::Arc;

use crate::domain::entity::account::Account;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::AccountId;
use crate::error::{AuthError, AuthResult};

/// Approve account use case
pub struct ApproveAccountUseCase<R>
where
    R: AccountRepository,
{
    repo: Arc<R>,
}

impl<R> ApproveAccountUseCase<R>
where
    R: AccountRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// `approved = true` approves (idempotent); `false` is an override back
    /// to pending.
    pub async fn execute(
        &self,
        actor: AccountId,
        account_id: AccountId,
        approved: bool,
    ) -> AuthResult<Account> {
        let mut account = self
            .repo
            .find_by_id(&account_id)
            .await?
            .ok_or(AuthError::AccountNotFound)?;

        let changed = if approved {
            account.approve()
        } else {
            account.revoke_approval()
        };

        if changed {
            self.repo.update_approval(&account).await?;
        }

        if approved {
            tracing::info!(
                %actor,
                account_id = %account.account_id,
                role = %account.role,
                changed,
                "Account approved"
            );
        } else {
            tracing::warn!(
                %actor,
                account_id = %account.account_id,
                role = %account.role,
                changed,
                "Account approval revoked by admin override"
            );
        }

        Ok(account)
    }
}
