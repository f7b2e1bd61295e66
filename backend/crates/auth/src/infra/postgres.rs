//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::account::Account;
use crate::domain::repository::{AccountFilter, AccountRepository};
use crate::domain::value_object::{
    AccountId, account_password::AccountPassword, account_role::AccountRole,
    approval_state::ApprovalState, display_name::DisplayName, email::Email, mobile::Mobile,
};
use crate::error::{AuthError, AuthResult};

const ACCOUNT_COLUMNS: &str = r#"
    account_id,
    name,
    email,
    mobile,
    password_hash,
    role,
    approval,
    created_at,
    updated_at
"#;

/// PostgreSQL-backed account repository
#[derive(Clone)]
pub struct PgAccountRepository {
    pool: PgPool,
}

impl PgAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl AccountRepository for PgAccountRepository {
    async fn create(&self, account: &Account) -> AuthResult<()> {
        let result = sqlx::query(
            r#"
            INSERT INTO accounts (
                account_id,
                name,
                email,
                mobile,
                password_hash,
                role,
                approval,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(account.account_id.as_uuid())
        .bind(account.name.as_str())
        .bind(account.email.as_str())
        .bind(account.mobile.as_str())
        .bind(account.password.as_phc_string())
        .bind(account.role.id())
        .bind(account.approval.id())
        .bind(account.created_at)
        .bind(account.updated_at)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            // accounts_email_key / accounts_mobile_key
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(AuthError::DuplicateAccount)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn find_by_id(&self, account_id: &AccountId) -> AuthResult<Option<Account>> {
        let row = sqlx::query_as::<_, AccountRow>(&format!(
            "SELECT {ACCOUNT_COLUMNS} FROM accounts WHERE account_id = $1"
        ))
        .bind(account_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(AccountRow::into_account).transpose()
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<Account>> {
        let row = sqlx::query_as::<_, AccountRow>(&format!(
            "SELECT {ACCOUNT_COLUMNS} FROM accounts WHERE email = $1"
        ))
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(AccountRow::into_account).transpose()
    }

    async fn list(&self, filter: AccountFilter) -> AuthResult<Vec<Account>> {
        let rows = sqlx::query_as::<_, AccountRow>(&format!(
            r#"
            SELECT {ACCOUNT_COLUMNS}
            FROM accounts
            WHERE ($1::smallint IS NULL OR role = $1)
              AND ($2::smallint IS NULL OR approval = $2)
            ORDER BY created_at DESC
            "#
        ))
        .bind(filter.role.map(|r| r.id()))
        .bind(filter.approval.map(|a| a.id()))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(AccountRow::into_account).collect()
    }

    async fn update_approval(&self, account: &Account) -> AuthResult<()> {
        let updated = sqlx::query(
            r#"
            UPDATE accounts SET
                approval = $2,
                updated_at = $3
            WHERE account_id = $1
            "#,
        )
        .bind(account.account_id.as_uuid())
        .bind(account.approval.id())
        .bind(account.updated_at)
        .execute(&self.pool)
        .await?
        .rows_affected();

        if updated == 0 {
            return Err(AuthError::AccountNotFound);
        }
        Ok(())
    }

    async fn update_password(&self, account: &Account) -> AuthResult<()> {
        let updated = sqlx::query(
            r#"
            UPDATE accounts SET
                password_hash = $2,
                updated_at = $3
            WHERE account_id = $1
            "#,
        )
        .bind(account.account_id.as_uuid())
        .bind(account.password.as_phc_string())
        .bind(account.updated_at)
        .execute(&self.pool)
        .await?
        .rows_affected();

        if updated == 0 {
            return Err(AuthError::AccountNotFound);
        }
        Ok(())
    }

    async fn upgrade_password(
        &self,
        account: &Account,
        expected: &AccountPassword,
    ) -> AuthResult<bool> {
        let updated = sqlx::query(
            r#"
            UPDATE accounts SET
                password_hash = $2,
                updated_at = $3
            WHERE account_id = $1
              AND password_hash = $4
            "#,
        )
        .bind(account.account_id.as_uuid())
        .bind(account.password.as_phc_string())
        .bind(account.updated_at)
        .bind(expected.as_phc_string())
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(updated > 0)
    }

    async fn delete(&self, account_id: &AccountId) -> AuthResult<bool> {
        let deleted = sqlx::query("DELETE FROM accounts WHERE account_id = $1")
            .bind(account_id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct AccountRow {
    account_id: Uuid,
    name: String,
    email: String,
    mobile: String,
    password_hash: String,
    role: i16,
    approval: i16,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl AccountRow {
    fn into_account(self) -> AuthResult<Account> {
        let role = AccountRole::from_id(self.role)
            .ok_or_else(|| AuthError::Internal(format!("Invalid role id: {}", self.role)))?;
        let approval = ApprovalState::from_id(self.approval).ok_or_else(|| {
            AuthError::Internal(format!("Invalid approval id: {}", self.approval))
        })?;
        let password = AccountPassword::from_phc_string(self.password_hash)
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        Ok(Account {
            account_id: AccountId::from_uuid(self.account_id),
            name: DisplayName::from_db(self.name),
            email: Email::from_db(self.email),
            mobile: Mobile::from_db(self.mobile),
            password,
            role,
            approval,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
