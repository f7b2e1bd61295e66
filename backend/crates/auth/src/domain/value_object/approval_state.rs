//! Account Approval State
//!
//! `Pending -> Approved` through admin approval, `Approved -> Pending` only
//! through an explicit admin override. Students start approved.

use derive_more::Display;

use super::account_role::AccountRole;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[repr(i16)]
pub enum ApprovalState {
    #[display("pending")]
    Pending = 0,
    #[display("approved")]
    Approved = 1,
}

impl ApprovalState {
    #[inline]
    pub const fn id(&self) -> i16 {
        *self as i16
    }

    #[inline]
    pub fn from_id(id: i16) -> Option<Self> {
        match id {
            0 => Some(ApprovalState::Pending),
            1 => Some(ApprovalState::Approved),
            _ => None,
        }
    }

    #[inline]
    pub const fn from_approved(approved: bool) -> Self {
        if approved {
            ApprovalState::Approved
        } else {
            ApprovalState::Pending
        }
    }

    #[inline]
    pub const fn is_approved(&self) -> bool {
        matches!(self, ApprovalState::Approved)
    }
}

/// Initial approval state for a freshly registered account
pub const fn default_approval_state(role: AccountRole) -> ApprovalState {
    if role.requires_approval() {
        ApprovalState::Pending
    } else {
        ApprovalState::Approved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_approval_state() {
        assert_eq!(
            default_approval_state(AccountRole::Student),
            ApprovalState::Approved
        );
        assert_eq!(
            default_approval_state(AccountRole::Employer),
            ApprovalState::Pending
        );
        assert_eq!(
            default_approval_state(AccountRole::Admin),
            ApprovalState::Pending
        );
    }

    #[test]
    fn test_approval_state_ids() {
        assert_eq!(ApprovalState::from_id(ApprovalState::Pending.id()), Some(ApprovalState::Pending));
        assert_eq!(ApprovalState::from_id(ApprovalState::Approved.id()), Some(ApprovalState::Approved));
        assert_eq!(ApprovalState::from_id(7), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(ApprovalState::Pending.to_string(), "pending");
        assert_eq!(ApprovalState::Approved.to_string(), "approved");
    }

    #[test]
    fn test_from_approved() {
        assert!(ApprovalState::from_approved(true).is_approved());
        assert!(!ApprovalState::from_approved(false).is_approved());
    }
}
