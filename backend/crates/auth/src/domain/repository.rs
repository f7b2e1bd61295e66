//! Repository Traits
//!
//! Interfaces for data persistence. Implementations are in the infrastructure layer.

use crate::domain::entity::account::Account;
use crate::domain::value_object::{
    AccountId, account_password::AccountPassword, account_role::AccountRole, approval_state::ApprovalState, email::Email,
};
use crate::error::AuthResult;

/// Optional filters for listing accounts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccountFilter {
    pub role: Option<AccountRole>,
    pub approval: Option<ApprovalState>,
}

impl AccountFilter {
    pub fn matches(&self, account: &Account) -> bool {
        self.role.is_none_or(|role| role == account.role)
            && self.approval.is_none_or(|approval| approval == account.approval)
    }
}

/// Account repository trait
#[trait_variant::make(AccountRepository: Send)]
pub trait LocalAccountRepository {
    /// Insert a new account
    ///
    /// Must enforce email and mobile uniqueness atomically and fail with
    /// `AuthError::DuplicateAccount` when either is taken.
    async fn create(&self, account: &Account) -> AuthResult<()>;

    async fn find_by_id(&self, account_id: &AccountId) -> AuthResult<Option<Account>>;

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<Account>>;

    /// Accounts matching the filter, newest first
    async fn list(&self, filter: AccountFilter) -> AuthResult<Vec<Account>>;

    /// Persist the approval state and `updated_at`
    async fn update_approval(&self, account: &Account) -> AuthResult<()>;

    /// Persist the credential and `updated_at`
    async fn update_password(&self, account: &Account) -> AuthResult<()>;

    /// Replace the credential only while the stored hash is still `expected`
    ///
    /// Returns `false` without writing when the credential changed in the
    /// meantime or the account is gone.
    async fn upgrade_password(
        &self,
        account: &Account,
        expected: &AccountPassword,
    ) -> AuthResult<bool>;

    /// Returns whether an account was deleted
    async fn delete(&self, account_id: &AccountId) -> AuthResult<bool>;
}
