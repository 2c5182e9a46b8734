//! Message text validation

/// Maximum length for message text in characters
pub const MAX_MESSAGE_LENGTH: usize = 4096;

/// Validation error for message text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageError {
    /// Message is empty
    Empty,
    /// Message exceeds maximum length
    TooLong,
}

/// Validate message text before sending
///
/// Checks:
/// - Not empty
/// - Does not exceed maximum length (4096 characters)
///
/// The message log itself accepts any text; this is the caller-side check
/// applied before `append`. Newlines and other whitespace are allowed, the
/// table format quotes them.
///
/// # Errors
///
/// Returns a `MessageError` variant describing the validation failure.
pub fn validate_message(text: &str) -> Result<(), MessageError> {
    if text.is_empty() {
        return Err(MessageError::Empty);
    }
    if text.chars().count() > MAX_MESSAGE_LENGTH {
        return Err(MessageError::TooLong);
    }
    Ok(())
}
