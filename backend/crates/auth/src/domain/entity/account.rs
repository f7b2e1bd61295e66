//! Account Entity
//!
//! One portal identity: profile, credential, role and approval state.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    AccountId,
    account_password::AccountPassword,
    account_role::AccountRole,
    approval_state::{ApprovalState, default_approval_state},
    display_name::DisplayName,
    email::Email,
    mobile::Mobile,
};

/// Account entity
///
/// The credential's `Debug` output is redacted, so the entity can be logged.
#[derive(Debug, Clone)]
pub struct Account {
    pub account_id: AccountId,
    pub name: DisplayName,
    /// Unique, case-insensitive
    pub email: Email,
    /// Unique
    pub mobile: Mobile,
    pub password: AccountPassword,
    pub role: AccountRole,
    pub approval: ApprovalState,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Create a self-registered account in its role's initial approval state
    pub fn new(
        name: DisplayName,
        email: Email,
        mobile: Mobile,
        password: AccountPassword,
        role: AccountRole,
    ) -> Self {
        let now = Utc::now();

        Self {
            account_id: AccountId::new(),
            name,
            email,
            mobile,
            password,
            role,
            approval: default_approval_state(role),
            created_at: now,
            updated_at: now,
        }
    }

    /// Create the out-of-band admin account, already approved
    pub fn bootstrap_admin(
        name: DisplayName,
        email: Email,
        mobile: Mobile,
        password: AccountPassword,
    ) -> Self {
        Self {
            approval: ApprovalState::Approved,
            ..Self::new(name, email, mobile, password, AccountRole::Admin)
        }
    }

    /// `Pending -> Approved`. Returns whether the state changed.
    pub fn approve(&mut self) -> bool {
        self.set_approval(ApprovalState::Approved)
    }

    /// `Approved -> Pending` (admin override). Returns whether the state changed.
    pub fn revoke_approval(&mut self) -> bool {
        self.set_approval(ApprovalState::Pending)
    }

    fn set_approval(&mut self, approval: ApprovalState) -> bool {
        if self.approval == approval {
            return false;
        }
        self.approval = approval;
        self.updated_at = Utc::now();
        true
    }

    pub fn change_password(&mut self, password: AccountPassword) {
        self.password = password;
        self.updated_at = Utc::now();
    }

    /// Students always may log in; other roles only once approved
    pub fn can_log_in(&self) -> bool {
        !self.role.requires_approval() || self.approval.is_approved()
    }

    pub fn is_approved(&self) -> bool {
        self.approval.is_approved()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::account_password::RawPassword;
    use platform::password::PasswordCost;

    fn account(role: AccountRole) -> Account {
        let raw = RawPassword::new("Intern#Pass2024".to_string()).unwrap();
        Account::new(
            DisplayName::new("Asha Rao").unwrap(),
            Email::new("asha@example.com").unwrap(),
            Mobile::new("9876543210").unwrap(),
            AccountPassword::from_raw(&raw, PasswordCost::minimal(), None).unwrap(),
            role,
        )
    }

    #[test]
    fn test_student_is_approved_on_creation() {
        let student = account(AccountRole::Student);
        assert!(student.is_approved());
        assert!(student.can_log_in());
    }

    #[test]
    fn test_employer_starts_pending() {
        let employer = account(AccountRole::Employer);
        assert_eq!(employer.approval, ApprovalState::Pending);
        assert!(!employer.can_log_in());
    }

    #[test]
    fn test_approve_is_idempotent() {
        let mut employer = account(AccountRole::Employer);
        assert!(employer.approve());
        assert!(employer.can_log_in());
        assert!(!employer.approve());
        assert!(employer.is_approved());
    }

    #[test]
    fn test_revoke_approval() {
        let mut employer = account(AccountRole::Employer);
        employer.approve();
        assert!(employer.revoke_approval());
        assert!(!employer.can_log_in());
        assert!(!employer.revoke_approval());
    }

    #[test]
    fn test_bootstrap_admin_is_approved() {
        let template = account(AccountRole::Student);
        let admin = Account::bootstrap_admin(
            template.name,
            template.email,
            template.mobile,
            template.password,
        );
        assert_eq!(admin.role, AccountRole::Admin);
        assert!(admin.can_log_in());
    }

    #[test]
    fn test_debug_does_not_leak_hash() {
        let student = account(AccountRole::Student);
        let debug = format!("{:?}", student);
        assert!(!debug.contains("$argon2id$"));
    }
}
