//! Password Credentials
//!
//! Argon2id hashing behind two types:
//! - [`ClearTextPassword`]: NFKC-normalized input, wiped from memory on drop
//! - [`HashedPassword`]: a PHC string, the only form that is ever stored
//!
//! Strength rules live in [`PasswordPolicy`] (NIST SP 800-63B: length limits,
//! no composition rules, reject known-weak values). Verification takes the
//! Argon2 parameters from the stored hash, so raising [`PasswordCost`] never
//! locks anyone out; [`HashedPassword::needs_rehash`] reports stale hashes.

use std::fmt;

use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version,
    password_hash::SaltString,
};
use rand::rngs::OsRng;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Shortest accepted password, in code points
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Longest accepted password, in code points
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// Reasons a new password is refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    #[error("Password needs at least {min} characters, this one has {actual}")]
    TooShort { min: usize, actual: usize },

    #[error("Password may have at most {max} characters, this one has {actual}")]
    TooLong { max: usize, actual: usize },

    #[error("Password is blank")]
    EmptyOrWhitespace,

    #[error("Password contains control characters")]
    InvalidCharacter,

    /// Repeated character, digit run, keyboard walk or a denylisted value
    #[error("Password is too easy to guess")]
    CommonPattern,
}

impl PasswordPolicyError {
    /// What the user can do about it
    pub fn hint(&self) -> &'static str {
        match self {
            Self::TooShort { .. } => "Choose a longer password",
            Self::TooLong { .. } => "Choose a shorter password",
            Self::EmptyOrWhitespace => "Enter a password",
            Self::InvalidCharacter => "Remove tabs, line breaks and other control characters",
            Self::CommonPattern => "Avoid common words, keyboard rows and number sequences",
        }
    }
}

#[derive(Debug, Error)]
pub enum PasswordHashError {
    #[error("Argon2 hashing failed: {0}")]
    HashingFailed(String),

    #[error("Stored password hash is not a valid PHC string")]
    InvalidHashFormat,

    #[error("Argon2 cost rejected: {0}")]
    InvalidCost(String),
}

// ============================================================================
// Policy
// ============================================================================

/// Rules a password must pass before it is hashed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordPolicy {
    pub min_length: usize,
    pub max_length: usize,
}

impl PasswordPolicy {
    pub const STANDARD: Self = Self {
        min_length: MIN_PASSWORD_LENGTH,
        max_length: MAX_PASSWORD_LENGTH,
    };

    /// Check an already normalized password
    pub fn check(&self, password: &str) -> Result<(), PasswordPolicyError> {
        if password.trim().is_empty() {
            return Err(PasswordPolicyError::EmptyOrWhitespace);
        }

        // Length is counted in code points, not bytes
        let actual = password.chars().count();
        if actual < self.min_length {
            return Err(PasswordPolicyError::TooShort {
                min: self.min_length,
                actual,
            });
        }
        if actual > self.max_length {
            return Err(PasswordPolicyError::TooLong {
                max: self.max_length,
                actual,
            });
        }

        if password.chars().any(char::is_control) {
            return Err(PasswordPolicyError::InvalidCharacter);
        }

        if is_guessable(password) {
            return Err(PasswordPolicyError::CommonPattern);
        }

        Ok(())
    }
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self::STANDARD
    }
}

// ============================================================================
// Cost
// ============================================================================

/// Argon2id cost parameters for new hashes
///
/// The default is the OWASP baseline: 19 MiB, 2 passes, 1 lane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordCost {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl PasswordCost {
    pub const fn new(memory_kib: u32, iterations: u32, parallelism: u32) -> Self {
        Self {
            memory_kib,
            iterations,
            parallelism,
        }
    }

    /// The cheapest parameters Argon2 allows. Tests and local development only.
    pub const fn minimal() -> Self {
        Self::new(Params::MIN_M_COST, Params::MIN_T_COST, Params::MIN_P_COST)
    }

    fn argon2(&self) -> Result<Argon2<'static>, PasswordHashError> {
        let params = Params::new(self.memory_kib, self.iterations, self.parallelism, None)
            .map_err(|e| PasswordHashError::InvalidCost(e.to_string()))?;
        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }

    fn matches(&self, params: &Params) -> bool {
        params.m_cost() == self.memory_kib
            && params.t_cost() == self.iterations
            && params.p_cost() == self.parallelism
    }
}

impl Default for PasswordCost {
    fn default() -> Self {
        Self::new(19_456, 2, 1)
    }
}

// ============================================================================
// Clear text
// ============================================================================

/// Password as typed by the user
///
/// Not `Clone`; `Debug` is redacted and the buffer is zeroized on drop.
///
/// ```rust
/// use platform::password::{ClearTextPassword, PasswordCost};
///
/// let password = ClearTextPassword::new("correct horse battery".to_string()).unwrap();
/// let hashed = password.hash(PasswordCost::minimal(), None).unwrap();
/// assert!(hashed.verify(&password, None));
/// ```
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    /// Normalize and check against [`PasswordPolicy::STANDARD`]
    pub fn new(raw: String) -> Result<Self, PasswordPolicyError> {
        Self::with_policy(raw, &PasswordPolicy::STANDARD)
    }

    pub fn with_policy(raw: String, policy: &PasswordPolicy) -> Result<Self, PasswordPolicyError> {
        // Wrapping first means a rejected password is still zeroized
        let password = Self(nfkc(raw));
        policy.check(&password.0)?;
        Ok(password)
    }

    /// Normalize only. For checking against an existing hash, so
    /// credentials set under an older policy keep working.
    pub fn for_verification(raw: String) -> Self {
        Self(nfkc(raw))
    }

    /// Hash with Argon2id and a fresh random salt. The pepper, if any, is
    /// appended to the password before hashing.
    pub fn hash(
        &self,
        cost: PasswordCost,
        pepper: Option<&[u8]>,
    ) -> Result<HashedPassword, PasswordHashError> {
        let salt = SaltString::generate(&mut OsRng);

        let phc = cost
            .argon2()?
            .hash_password(&self.with_pepper(pepper), &salt)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?
            .to_string();

        Ok(HashedPassword { phc })
    }

    fn with_pepper(&self, pepper: Option<&[u8]>) -> Zeroizing<Vec<u8>> {
        let mut input = Zeroizing::new(Vec::with_capacity(
            self.0.len() + pepper.map_or(0, <[u8]>::len),
        ));
        input.extend_from_slice(self.0.as_bytes());
        input.extend_from_slice(pepper.unwrap_or_default());
        input
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ClearTextPassword(<redacted>)")
    }
}

// ============================================================================
// Hash
// ============================================================================

/// Stored credential: a PHC string (`$argon2id$v=19$m=..,t=..,p=..$salt$hash`)
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword {
    phc: String,
}

impl HashedPassword {
    /// Load a stored hash. Only the PHC syntax is checked here.
    pub fn from_phc_string(phc: impl Into<String>) -> Result<Self, PasswordHashError> {
        let phc = phc.into();
        if PasswordHash::new(&phc).is_err() {
            return Err(PasswordHashError::InvalidHashFormat);
        }
        Ok(Self { phc })
    }

    pub fn as_phc_string(&self) -> &str {
        &self.phc
    }

    /// Constant-time check of `password` against this hash
    ///
    /// Returns `false` instead of an error for a hash that cannot be parsed.
    pub fn verify(&self, password: &ClearTextPassword, pepper: Option<&[u8]>) -> bool {
        PasswordHash::new(&self.phc).is_ok_and(|stored| {
            Argon2::default()
                .verify_password(&password.with_pepper(pepper), &stored)
                .is_ok()
        })
    }

    /// Whether this hash should be replaced by one made with `cost`
    ///
    /// True for anything other than Argon2id v19 with exactly these parameters.
    pub fn needs_rehash(&self, cost: PasswordCost) -> bool {
        let Ok(stored) = PasswordHash::new(&self.phc) else {
            return true;
        };

        let current_scheme = stored.algorithm == Algorithm::Argon2id.ident()
            && stored.version == Some(Version::V0x13.into());

        !current_scheme || Params::try_from(&stored).map_or(true, |params| !cost.matches(&params))
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("HashedPassword(<phc>)")
    }
}

// ============================================================================
// Weak password detection
// ============================================================================

const KEYBOARD_WALKS: &[&str] = &["qwerty", "asdfgh", "zxcvbn", "qazwsx", "1qaz2wsx"];

const DENYLIST: &[&str] = &[
    "password",
    "password1",
    "password123",
    "passw0rd",
    "abcdefgh",
    "letmein",
    "welcome",
    "welcome1",
    "admin123",
    "iloveyou",
    "sunshine",
    "princess",
    "football",
    "baseball",
    "trustno1",
    "internship",
    "internship1",
    "student123",
    "employer123",
];

fn nfkc(mut raw: String) -> String {
    let normalized = raw.nfkc().collect();
    raw.zeroize();
    normalized
}

fn is_guessable(password: &str) -> bool {
    let lower = password.to_lowercase();

    is_single_repeated_char(&lower)
        || is_digit_run(&lower)
        || KEYBOARD_WALKS.iter().any(|walk| lower.contains(walk))
        || DENYLIST.contains(&lower.as_str())
}

fn is_single_repeated_char(s: &str) -> bool {
    let mut chars = s.chars();
    chars
        .next()
        .is_some_and(|first| chars.all(|c| c == first))
}

/// Whole password is an ascending or descending digit run, wrapping at 9/0
/// ("12345678", "78901234", "98765432")
fn is_digit_run(s: &str) -> bool {
    let Some(digits) = s
        .chars()
        .map(|c| c.to_digit(10))
        .collect::<Option<Vec<u32>>>()
    else {
        return false;
    };

    if digits.len() < 4 {
        return false;
    }

    let step = |a: u32, b: u32| (b + 10 - a) % 10;
    let steps: Vec<u32> = digits.windows(2).map(|w| step(w[0], w[1])).collect();

    steps.iter().all(|&s| s == 1) || steps.iter().all(|&s| s == 9)
}
