//! Input validation functions
//!
//! Reusable validators for the chat core's inputs. The stores themselves do
//! not validate content; callers (the presentation layer) enforce these
//! before invoking store operations.

mod message;
mod password;
mod username;

pub use message::{MAX_MESSAGE_LENGTH, MessageError, validate_message};
pub use password::{MAX_PASSWORD_LENGTH, PasswordError, validate_password};
pub use username::{MAX_USERNAME_LENGTH, UsernameError, validate_username};
