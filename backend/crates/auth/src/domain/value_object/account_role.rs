use kernel::error::app_error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Portal role. Every account has exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(i16)]
pub enum AccountRole {
    #[default]
    Student = 0,
    Employer = 1,
    Admin = 2,
}

impl AccountRole {
    pub const ALL: [AccountRole; 3] = [
        AccountRole::Student,
        AccountRole::Employer,
        AccountRole::Admin,
    ];

    #[inline]
    pub const fn id(&self) -> i16 {
        *self as i16
    }

    #[inline]
    pub const fn code(&self) -> &'static str {
        use AccountRole::*;
        match self {
            Student => "student",
            Employer => "employer",
            Admin => "admin",
        }
    }

    /// Roles that cannot be self-registered by default
    #[inline]
    pub const fn is_privileged(&self) -> bool {
        matches!(self, AccountRole::Admin)
    }

    /// Whether accounts with this role go through admin approval
    #[inline]
    pub const fn requires_approval(&self) -> bool {
        !matches!(self, AccountRole::Student)
    }

    #[inline]
    pub fn from_id(id: i16) -> Option<Self> {
        use AccountRole::*;
        match id {
            0 => Some(Student),
            1 => Some(Employer),
            2 => Some(Admin),
            _ => None,
        }
    }

    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|role| role.code().eq_ignore_ascii_case(code.trim()))
    }
}

impl FromStr for AccountRole {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| {
            AppError::bad_request(format!("Unknown role: {}", s.trim()))
                .with_action("Use one of: student, employer, admin")
        })
    }
}

impl fmt::Display for AccountRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_role_from_id() {
        assert_eq!(AccountRole::from_id(0), Some(AccountRole::Student));
        assert_eq!(AccountRole::from_id(1), Some(AccountRole::Employer));
        assert_eq!(AccountRole::from_id(2), Some(AccountRole::Admin));
        assert_eq!(AccountRole::from_id(3), None);
    }

    #[test]
    fn test_account_role_from_code() {
        assert_eq!(AccountRole::from_code("student"), Some(AccountRole::Student));
        assert_eq!(AccountRole::from_code("Employer"), Some(AccountRole::Employer));
        assert_eq!(AccountRole::from_code(" admin "), Some(AccountRole::Admin));
        assert_eq!(AccountRole::from_code("super_admin"), None);
        assert!("mentor".parse::<AccountRole>().is_err());
    }

    #[test]
    fn test_account_role_display_and_serde() {
        assert_eq!(AccountRole::Employer.to_string(), "employer");
        assert_eq!(
            serde_json::to_string(&AccountRole::Student).unwrap(),
            "\"student\""
        );
        let role: AccountRole = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(role, AccountRole::Admin);
    }

    #[test]
    fn test_account_role_checks() {
        assert_eq!(AccountRole::default(), AccountRole::Student);
        assert!(!AccountRole::Student.requires_approval());
        assert!(AccountRole::Employer.requires_approval());
        assert!(AccountRole::Admin.requires_approval());
        assert!(AccountRole::Admin.is_privileged());
        assert!(!AccountRole::Employer.is_privileged());
    }
}
