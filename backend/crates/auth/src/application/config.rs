//! Application Configuration
//!
//! Configuration for the Auth application layer. Built once at startup and
//! shared read-only.

use std::time::Duration;

pub use platform::password::PasswordCost;

/// Default token lifetime (7 days)
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(7 * 24 * 3600);

/// Auth application configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// Token signing key for HMAC-SHA256 (32 bytes). Rotating it invalidates
    /// every outstanding token.
    pub token_secret: [u8; 32],
    /// Token lifetime
    pub token_ttl: Duration,
    /// Argon2id cost for new hashes
    pub password_cost: PasswordCost,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
    /// Allow `admin` in self-registration
    pub allow_admin_registration: bool,
    /// Re-check approval on every authenticated request, not just at login
    pub enforce_approval_per_request: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_secret: [0u8; 32],
            token_ttl: DEFAULT_TOKEN_TTL,
            password_cost: PasswordCost::default(),
            password_pepper: None,
            allow_admin_registration: false,
            enforce_approval_per_request: false,
        }
    }
}

impl AuthConfig {
    /// Create config with a random token secret
    pub fn with_random_secret() -> Self {
        Self {
            token_secret: platform::crypto::random_key(),
            ..Default::default()
        }
    }

    /// Create config for development (random secret, cheap hashing)
    pub fn development() -> Self {
        Self {
            password_cost: PasswordCost::minimal(),
            ..Self::with_random_secret()
        }
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("token_secret", &"[REDACTED]")
            .field("token_ttl", &self.token_ttl)
            .field("password_cost", &self.password_cost)
            .field("password_pepper", &self.password_pepper.as_ref().map(|_| "[REDACTED]"))
            .field("allow_admin_registration", &self.allow_admin_registration)
            .field("enforce_approval_per_request", &self.enforce_approval_per_request)
            .finish()
    }
}
