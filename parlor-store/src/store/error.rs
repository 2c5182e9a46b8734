//! Store error types

use std::fmt;
use std::io;

use crate::password::PasswordError;

/// Error returned by store operations
///
/// `Unavailable` is the retryable case: the backing table could not be
/// created, opened, read, or appended to. Malformed rows are not an error;
/// reads skip and report them. Absent or mismatched credentials are not an
/// error either; `verify` returns `Ok(false)`.
#[derive(Debug)]
pub enum StoreError {
    /// Backing table is unavailable (permission or disk failure)
    Unavailable(io::Error),
    /// Password hashing failed during registration
    Password(PasswordError),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Unavailable(e) => write!(f, "storage unavailable: {}", e),
            StoreError::Password(e) => write!(f, "password hashing failed: {}", e),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Unavailable(e) => Some(e),
            StoreError::Password(e) => Some(e),
        }
    }
}

impl From<io::Error> for StoreError {
    fn from(err: io::Error) -> Self {
        StoreError::Unavailable(err)
    }
}

impl From<PasswordError> for StoreError {
    fn from(err: PasswordError) -> Self {
        StoreError::Password(err)
    }
}
