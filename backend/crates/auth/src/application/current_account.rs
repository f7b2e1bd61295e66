//! Current Account Use Case

use std::sync::Arc;

use crate::application::authenticate::AuthContext;
use crate::domain::entity::account::Account;
use crate::domain::repository::AccountRepository;
use crate::error::{AuthError, AuthResult};

pub struct CurrentAccountUseCase<R>
where
    R: AccountRepository,
{
    repo: Arc<R>,
}

impl<R> CurrentAccountUseCase<R>
where
    R: AccountRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, context: &AuthContext) -> AuthResult<Account> {
        // Deleted between authentication and now
        self.repo
            .find_by_id(&context.account_id)
            .await?
            .ok_or(AuthError::Unauthenticated)
    }
}
