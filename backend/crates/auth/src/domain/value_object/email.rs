//! Email Value Object
//!
//! Login identifier of an account. Stored trimmed and lower-cased so that
//! uniqueness is case-insensitive.

use derive_more::Display;
use kernel::error::app_error::{AppError, AppResult};

/// RFC 5321 path limit
pub const EMAIL_MAX_LENGTH: usize = 254;

const LOCAL_PART_MAX_LENGTH: usize = 64;
const DOMAIN_LABEL_MAX_LENGTH: usize = 63;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
#[display("{_0}")]
pub struct Email(String);

impl Email {
    pub fn new(email: impl AsRef<str>) -> AppResult<Self> {
        let email = email.as_ref().trim().to_lowercase();

        if email.is_empty() {
            return Err(AppError::bad_request("Email is required")
                .with_action("Enter the email address you registered with"));
        }

        if email.len() > EMAIL_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "Email may have at most {} characters",
                EMAIL_MAX_LENGTH
            )));
        }

        let well_formed = email
            .split_once('@')
            .is_some_and(|(local, domain)| is_local_part(local) && is_domain(domain));

        if !well_formed {
            return Err(AppError::bad_request("Email address is not valid")
                .with_action("Use the form name@example.com"));
        }

        Ok(Self(email))
    }

    /// Rehydrate a value that was validated before it was stored
    pub fn from_db(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for Email {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        Self::new(s)
    }
}

/// Anything printable up to 64 bytes, except a second `@`
fn is_local_part(local: &str) -> bool {
    (1..=LOCAL_PART_MAX_LENGTH).contains(&local.len())
        && !local
            .chars()
            .any(|c| c == '@' || c.is_whitespace() || c.is_control())
}

/// At least two dot-separated LDH labels, none starting or ending with `-`
fn is_domain(domain: &str) -> bool {
    let labels: Vec<&str> = domain.split('.').collect();

    labels.len() >= 2
        && labels.iter().all(|label| {
            (1..=DOMAIN_LABEL_MAX_LENGTH).contains(&label.len())
                && !label.starts_with('-')
                && !label.ends_with('-')
                && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        })
}
