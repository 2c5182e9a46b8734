//! Username validation

/// Maximum length for usernames in characters
pub const MAX_USERNAME_LENGTH: usize = 32;

/// Validation error for usernames
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsernameError {
    /// Username is empty
    Empty,
    /// Username exceeds maximum length
    TooLong,
    /// Username contains control characters
    InvalidCharacters,
}

/// Validate a username
///
/// Checks:
/// - Not empty
/// - Does not exceed maximum length (32 characters)
/// - No control characters (including newlines and tabs)
///
/// Usernames are matched case-sensitively by the credential store, so no
/// case normalization happens here.
///
/// # Errors
///
/// Returns a `UsernameError` variant describing the validation failure.
pub fn validate_username(username: &str) -> Result<(), UsernameError> {
    if username.is_empty() {
        return Err(UsernameError::Empty);
    }
    if username.chars().count() > MAX_USERNAME_LENGTH {
        return Err(UsernameError::TooLong);
    }
    if username.chars().any(|ch| ch.is_control()) {
        return Err(UsernameError::InvalidCharacters);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_usernames() {
        assert!(validate_username("alice").is_ok());
        assert!(validate_username("Alice123").is_ok());
        assert!(validate_username("user_name").is_ok());
        assert!(validate_username("user-name").is_ok());
        assert!(validate_username(&"a".repeat(MAX_USERNAME_LENGTH)).is_ok());
        // Unicode letters
        assert!(validate_username("用户").is_ok());
        assert!(validate_username("Пользователь").is_ok());
        // Spaces are allowed; the table format quotes them safely
        assert!(validate_username("alice b").is_ok());
    }

    #[test]
    fn test_empty() {
        assert_eq!(validate_username(""), Err(UsernameError::Empty));
    }

    #[test]
    fn test_too_long() {
        assert_eq!(
            validate_username(&"a".repeat(MAX_USERNAME_LENGTH + 1)),
            Err(UsernameError::TooLong)
        );
    }

    #[test]
    fn test_control_characters() {
        assert_eq!(
            validate_username("user\0name"),
            Err(UsernameError::InvalidCharacters)
        );
        assert_eq!(
            validate_username("user\tname"),
            Err(UsernameError::InvalidCharacters)
        );
        assert_eq!(
            validate_username("user\nname"),
            Err(UsernameError::InvalidCharacters)
        );
        assert_eq!(
            validate_username("user\rname"),
            Err(UsernameError::InvalidCharacters)
        );
    }
}
