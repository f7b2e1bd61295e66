//! Display Name Value Object

use derive_more::Display;
use kernel::error::app_error::{AppError, AppResult};

pub const DISPLAY_NAME_MAX_LENGTH: usize = 100;

/// Human-readable account name. Not unique.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("{_0}")]
pub struct DisplayName(String);

impl DisplayName {
    pub fn new(name: impl AsRef<str>) -> AppResult<Self> {
        let name = name.as_ref().trim();

        if name.is_empty() {
            return Err(
                AppError::bad_request("Name cannot be empty").with_action("Please enter your name")
            );
        }

        if name.chars().count() > DISPLAY_NAME_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "Name must be at most {} characters",
                DISPLAY_NAME_MAX_LENGTH
            )));
        }

        if name.chars().any(char::is_control) {
            return Err(AppError::bad_request("Name contains invalid characters"));
        }

        Ok(Self(name.to_string()))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_trimmed() {
        assert_eq!(DisplayName::new("  Asha Rao ").unwrap().as_str(), "Asha Rao");
    }

    #[test]
    fn test_display_name_invalid() {
        assert!(DisplayName::new("").is_err());
        assert!(DisplayName::new("   ").is_err());
        assert!(DisplayName::new("line\nbreak").is_err());
        assert!(DisplayName::new("x".repeat(DISPLAY_NAME_MAX_LENGTH + 1)).is_err());
    }

    #[test]
    fn test_display_name_counts_characters_not_bytes() {
        assert!(DisplayName::new("名".repeat(DISPLAY_NAME_MAX_LENGTH)).is_ok());
    }
}
