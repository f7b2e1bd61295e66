//! In-Memory Repository Implementation
//!
//! Used when no database is configured and by the test suite. Uniqueness
//! checks and inserts happen under one write lock.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::entity::account::Account;
use crate::domain::repository::{AccountFilter, AccountRepository};
use crate::domain::value_object::{AccountId, account_password::AccountPassword, email::Email};
use crate::error::{AuthError, AuthResult};

#[derive(Clone, Default)]
pub struct InMemoryAccountRepository {
    accounts: Arc<RwLock<HashMap<AccountId, Account>>>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.accounts.read().await.is_empty()
    }
}

impl AccountRepository for InMemoryAccountRepository {
    async fn create(&self, account: &Account) -> AuthResult<()> {
        let mut accounts = self.accounts.write().await;

        let taken = accounts.values().any(|existing| {
            existing.email == account.email || existing.mobile == account.mobile
        });
        if taken || accounts.contains_key(&account.account_id) {
            return Err(AuthError::DuplicateAccount);
        }

        accounts.insert(account.account_id, account.clone());
        Ok(())
    }

    async fn find_by_id(&self, account_id: &AccountId) -> AuthResult<Option<Account>> {
        Ok(self.accounts.read().await.get(account_id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<Account>> {
        Ok(self
            .accounts
            .read()
            .await
            .values()
            .find(|account| &account.email == email)
            .cloned())
    }

    async fn list(&self, filter: AccountFilter) -> AuthResult<Vec<Account>> {
        let mut accounts: Vec<Account> = self
            .accounts
            .read()
            .await
            .values()
            .filter(|account| filter.matches(account))
            .cloned()
            .collect();

        accounts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(accounts)
    }

    async fn update_approval(&self, account: &Account) -> AuthResult<()> {
        let mut accounts = self.accounts.write().await;
        let stored = accounts
            .get_mut(&account.account_id)
            .ok_or(AuthError::AccountNotFound)?;

        stored.approval = account.approval;
        stored.updated_at = account.updated_at;
        Ok(())
    }

    async fn update_password(&self, account: &Account) -> AuthResult<()> {
        let mut accounts = self.accounts.write().await;
        let stored = accounts
            .get_mut(&account.account_id)
            .ok_or(AuthError::AccountNotFound)?;

        stored.password = account.password.clone();
        stored.updated_at = account.updated_at;
        Ok(())
    }

    async fn upgrade_password(
        &self,
        account: &Account,
        expected: &AccountPassword,
    ) -> AuthResult<bool> {
        let mut accounts = self.accounts.write().await;
        let Some(stored) = accounts.get_mut(&account.account_id) else {
            return Ok(false);
        };
        if stored.password != *expected {
            return Ok(false);
        }

        stored.password = account.password.clone();
        stored.updated_at = account.updated_at;
        Ok(true)
    }

    async fn delete(&self, account_id: &AccountId) -> AuthResult<bool> {
        Ok(self.accounts.write().await.remove(account_id).is_some())
    }
}
