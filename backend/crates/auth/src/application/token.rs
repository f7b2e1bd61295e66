//! Token Service
//!
//! Stateless bearer tokens: `base64url(claims JSON) "." base64url(HMAC-SHA256)`.
//! The signature is checked before the payload is decoded.

use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Utc};
use platform::crypto::{from_base64_url, hmac_sha256, to_base64_url, verify_hmac_sha256};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::application::config::AuthConfig;
use crate::domain::value_object::{AccountId, account_role::AccountRole};

/// Signed token claims. Carries no PII and no credential material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Account id
    pub sub: AccountId,
    pub role: AccountRole,
    /// Issued at (Unix seconds)
    pub iat: i64,
    /// Expires at (Unix seconds)
    pub exp: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("malformed token")]
    Malformed,

    #[error("invalid token signature")]
    InvalidSignature,

    #[error("token expired")]
    Expired,

    #[error("token could not be signed")]
    Signing,
}

/// Issues and verifies tokens with one process-wide key
#[derive(Clone)]
pub struct TokenService {
    secret: [u8; 32],
    ttl_secs: i64,
}

impl TokenService {
    pub fn new(secret: [u8; 32], ttl: Duration) -> Self {
        Self {
            secret,
            ttl_secs: i64::try_from(ttl.as_secs()).unwrap_or(i64::MAX),
        }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(config.token_secret, config.token_ttl)
    }

    /// Lifetime of issued tokens, as reported to clients
    pub fn ttl_secs(&self) -> i64 {
        self.ttl_secs
    }

    pub fn issue(&self, account_id: AccountId, role: AccountRole) -> Result<String, TokenError> {
        self.issue_at(account_id, role, Utc::now())
    }

    pub fn issue_at(
        &self,
        account_id: AccountId,
        role: AccountRole,
        now: DateTime<Utc>,
    ) -> Result<String, TokenError> {
        let iat = now.timestamp();
        let claims = TokenClaims {
            sub: account_id,
            role,
            iat,
            exp: iat.saturating_add(self.ttl_secs),
        };

        let payload = serde_json::to_vec(&claims).map_err(|_| TokenError::Signing)?;
        let payload = to_base64_url(&payload);
        let signature =
            hmac_sha256(&self.secret, payload.as_bytes()).map_err(|_| TokenError::Signing)?;

        Ok(format!("{}.{}", payload, to_base64_url(&signature)))
    }

    pub fn verify(&self, token: &str) -> Result<TokenClaims, TokenError> {
        self.verify_at(token, Utc::now())
    }

    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<TokenClaims, TokenError> {
        let mut segments = token.split('.');
        let (Some(payload), Some(signature), None) =
            (segments.next(), segments.next(), segments.next())
        else {
            return Err(TokenError::Malformed);
        };

        let signature = from_base64_url(signature).map_err(|_| TokenError::Malformed)?;
        if !verify_hmac_sha256(&self.secret, payload.as_bytes(), &signature) {
            return Err(TokenError::InvalidSignature);
        }

        let payload = from_base64_url(payload).map_err(|_| TokenError::Malformed)?;
        let claims: TokenClaims =
            serde_json::from_slice(&payload).map_err(|_| TokenError::Malformed)?;

        if now.timestamp() >= claims.exp {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }
}

impl fmt::Debug for TokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenService")
            .field("secret", &"[REDACTED]")
            .field("ttl_secs", &self.ttl_secs)
            .finish()
    }
}
