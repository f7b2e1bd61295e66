//! Authorization Gate
//!
//! Role membership check. Runs after authentication; a missing context
//! means the routes were wired wrong and is always denied.

use crate::application::authenticate::AuthContext;
use crate::domain::value_object::account_role::AccountRole;
use crate::error::{AuthError, AuthResult};

pub fn authorize(context: Option<&AuthContext>, required: &[AccountRole]) -> AuthResult<()> {
    let Some(context) = context else {
        tracing::error!("Authorization gate reached without an authentication context");
        return Err(AuthError::Forbidden);
    };

    if required.contains(&context.role) {
        Ok(())
    } else {
        tracing::debug!(
            account_id = %context.account_id,
            role = %context.role,
            ?required,
            "Role not permitted"
        );
        Err(AuthError::Forbidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::AccountId;

    fn context(role: AccountRole) -> AuthContext {
        AuthContext {
            account_id: AccountId::new(),
            role,
        }
    }

    #[test]
    fn test_allows_listed_role() {
        let admin = context(AccountRole::Admin);
        assert!(authorize(Some(&admin), &[AccountRole::Admin]).is_ok());

        let employer = context(AccountRole::Employer);
        assert!(authorize(Some(&employer), &[AccountRole::Employer, AccountRole::Admin]).is_ok());
    }

    #[test]
    fn test_denies_other_roles() {
        let student = context(AccountRole::Student);
        assert!(matches!(
            authorize(Some(&student), &[AccountRole::Admin]),
            Err(AuthError::Forbidden)
        ));
        assert!(matches!(
            authorize(Some(&student), &[]),
            Err(AuthError::Forbidden)
        ));
    }

    #[test]
    fn test_missing_context_is_denied() {
        assert!(matches!(
            authorize(None, &AccountRole::ALL),
            Err(AuthError::Forbidden)
        ));
    }
}
