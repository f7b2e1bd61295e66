//! Account Password Value Object
//!
//! Domain wrapper over `platform::password`. A plaintext [`RawPassword`] can
//! only become an [`AccountPassword`] by hashing it, and a stored hash can
//! only be loaded from its PHC string, so a hash is never hashed again.
//!
//! ## Usage
//! ```rust
//! use auth::domain::value_object::account_password::{AccountPassword, RawPassword};
//! use platform::password::PasswordCost;
//!
//! let raw = RawPassword::new("MySecurePass123!".to_string()).unwrap();
//! let hashed = AccountPassword::from_raw(&raw, PasswordCost::minimal(), None).unwrap();
//! assert!(hashed.verify(&raw, None));
//! ```

use kernel::error::app_error::{AppError, AppResult};
use platform::crypto::{random_key, to_base64_url};
use platform::password::{ClearTextPassword, HashedPassword, PasswordCost};
use std::fmt;

// ============================================================================
// Raw Password (User Input)
// ============================================================================

/// Raw password from user input
///
/// Memory is zeroized when dropped.
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    /// Create a new raw password, enforcing the password policy
    ///
    /// Used wherever a credential is about to be set (registration,
    /// password change, admin bootstrap).
    pub fn new(raw: String) -> AppResult<Self> {
        let clear_text = ClearTextPassword::new(raw)
            .map_err(|e| AppError::bad_request(e.to_string()).with_action(e.hint()))?;

        Ok(Self(clear_text))
    }

    /// Wrap a password submitted for login. No policy is applied.
    pub fn for_login(raw: String) -> Self {
        Self(ClearTextPassword::for_verification(raw))
    }

    pub(crate) fn inner(&self) -> &ClearTextPassword {
        &self.0
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// Account Password (Hashed, for storage)
// ============================================================================

/// Stored credential in Argon2id PHC string format
#[derive(Clone, PartialEq, Eq)]
pub struct AccountPassword(HashedPassword);

impl AccountPassword {
    /// Hash a raw password with a fresh salt
    pub fn from_raw(raw: &RawPassword, cost: PasswordCost, pepper: Option<&[u8]>) -> AppResult<Self> {
        let hashed = raw
            .inner()
            .hash(cost, pepper)
            .map_err(|e| AppError::internal("Password hashing failed").with_source(e))?;

        Ok(Self(hashed))
    }

    /// Hash of a random secret that no submitted password matches
    ///
    /// Verified in place of a real credential when no account is found, so
    /// a miss costs the same Argon2 work as a wrong password.
    pub fn decoy(cost: PasswordCost, pepper: Option<&[u8]>) -> AppResult<Self> {
        let secret = RawPassword::for_login(to_base64_url(&random_key()));
        Self::from_raw(&secret, cost, pepper)
    }

    /// Load from PHC string (from database)
    pub fn from_phc_string(phc_string: impl Into<String>) -> AppResult<Self> {
        let hashed = HashedPassword::from_phc_string(phc_string)
            .map_err(|e| AppError::internal("Invalid password hash in database").with_source(e))?;

        Ok(Self(hashed))
    }

    pub fn as_phc_string(&self) -> &str {
        self.0.as_phc_string()
    }

    /// Verify a raw password against this hash in constant time
    ///
    /// `pepper` must match the pepper used during hashing.
    pub fn verify(&self, raw: &RawPassword, pepper: Option<&[u8]>) -> bool {
        self.0.verify(raw.inner(), pepper)
    }

    /// True when the hash was made with another algorithm or cost
    pub fn needs_rehash(&self, cost: PasswordCost) -> bool {
        self.0.needs_rehash(cost)
    }
}

impl fmt::Debug for AccountPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccountPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

impl fmt::Display for AccountPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[HASHED_PASSWORD]")
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn cost() -> PasswordCost {
        PasswordCost::minimal()
    }

    #[test]
    fn test_raw_password_validation() {
        assert!(RawPassword::new("Employer#Hire2024".to_string()).is_ok());

        use platform::password::{MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};
        let short_pass = "ab".repeat(MIN_PASSWORD_LENGTH / 2 - 1);
        assert!(RawPassword::new(short_pass).is_err());
        let long_pass = "ab".repeat(MAX_PASSWORD_LENGTH);
        assert!(RawPassword::new(long_pass).is_err());

        assert!(RawPassword::new("password123".to_string()).is_err());
        assert!(RawPassword::new("".to_string()).is_err());
    }

    #[test]
    fn test_policy_violation_is_bad_request() {
        let err = RawPassword::new("short".to_string()).unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert!(err.action().is_some());
    }

    #[test]
    fn test_hash_and_verify() {
        let raw = RawPassword::new("Intern#Pass2024".to_string()).unwrap();
        let hashed = AccountPassword::from_raw(&raw, cost(), None).unwrap();

        assert!(hashed.verify(&raw, None));

        let wrong = RawPassword::for_login("Intern#Pass2025".to_string());
        assert!(!hashed.verify(&wrong, None));
    }

    #[test]
    fn test_login_password_skips_policy() {
        // Too short for the policy, but a login attempt must still be checked
        let attempt = RawPassword::for_login("abc".to_string());
        let raw = RawPassword::new("Intern#Pass2024".to_string()).unwrap();
        let hashed = AccountPassword::from_raw(&raw, cost(), None).unwrap();
        assert!(!hashed.verify(&attempt, None));
    }

    #[test]
    fn test_hash_with_pepper() {
        let raw = RawPassword::new("Intern#Pass2024".to_string()).unwrap();
        let pepper = b"portal-pepper";
        let hashed = AccountPassword::from_raw(&raw, cost(), Some(pepper)).unwrap();

        assert!(hashed.verify(&raw, Some(pepper)));
        assert!(!hashed.verify(&raw, None));
        assert!(!hashed.verify(&raw, Some(b"wrong")));
    }

    #[test]
    fn test_phc_string_roundtrip() {
        let raw = RawPassword::new("Intern#Pass2024".to_string()).unwrap();
        let hashed = AccountPassword::from_raw(&raw, cost(), None).unwrap();

        let restored = AccountPassword::from_phc_string(hashed.as_phc_string()).unwrap();
        assert!(restored.verify(&raw, None));
        assert!(!restored.needs_rehash(cost()));
        assert!(restored.needs_rehash(PasswordCost::default()));
    }

    #[test]
    fn test_decoy_matches_nothing_at_configured_cost() {
        let decoy = AccountPassword::decoy(cost(), None).unwrap();
        assert!(!decoy.needs_rehash(cost()));

        for attempt in ["", "Intern#Pass2024", "password"] {
            assert!(!decoy.verify(&RawPassword::for_login(attempt.to_string()), None));
        }
        assert_ne!(
            decoy.as_phc_string(),
            AccountPassword::decoy(cost(), None).unwrap().as_phc_string()
        );
    }

    #[test]
    fn test_corrupt_hash_is_internal_error() {
        let err = AccountPassword::from_phc_string("plaintext-in-db").unwrap_err();
        assert_eq!(err.status_code(), 500);
    }

    #[test]
    fn test_redaction() {
        let raw = RawPassword::new("Secret#Intern2024".to_string()).unwrap();
        let debug = format!("{:?}", raw);
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains("Secret"));

        let hashed = AccountPassword::from_raw(&raw, cost(), None).unwrap();
        assert!(format!("{:?}", hashed).contains("HASH"));
        assert_eq!(hashed.to_string(), "[HASHED_PASSWORD]");
    }
}
