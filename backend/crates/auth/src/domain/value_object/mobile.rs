//! Mobile Number Value Object
//!
//! Exactly ten ASCII digits. Globally unique across accounts.

use derive_more::Display;
use kernel::error::app_error::{AppError, AppResult};

pub const MOBILE_LENGTH: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
#[display("{_0}")]
pub struct Mobile(String);

impl Mobile {
    pub fn new(mobile: impl AsRef<str>) -> AppResult<Self> {
        let mobile = mobile.as_ref().trim();

        if mobile.len() != MOBILE_LENGTH || !mobile.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AppError::bad_request(format!(
                "Mobile number must be exactly {} digits",
                MOBILE_LENGTH
            ))
            .with_action("Please enter a 10-digit mobile number without spaces or country code"));
        }

        Ok(Self(mobile.to_string()))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(mobile: impl Into<String>) -> Self {
        Self(mobile.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
