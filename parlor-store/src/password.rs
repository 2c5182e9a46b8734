//! Password hashing
//!
//! Two schemes, auto-detected on verification:
//!
//! - [`HashScheme::Sha256`] - unsalted lower-case hex SHA-256 digest. This
//!   matches the on-disk format of the users table's `password` column, so
//!   existing tables keep verifying.
//! - [`HashScheme::Argon2`] - Argon2id in PHC string format with a
//!   per-record salt and tunable work factor.
//!
//! `verify_password` recognizes each stored record's scheme by its shape
//! (`$argon2...` PHC string vs hex digest), so a table can hold a mix of
//! both and every record verifies under the scheme it was written with.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use sha2::{Digest, Sha256};
use std::fmt;

/// Hashing scheme used for newly registered credentials
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashScheme {
    /// Unsalted SHA-256 hex digest (the users table's on-disk format)
    Sha256,
    /// Salted Argon2id PHC string
    Argon2,
}

/// Error type for password hashing operations
#[derive(Debug)]
pub enum PasswordError {
    /// Hashing operation failed
    Hash(argon2::password_hash::Error),
}

impl fmt::Display for PasswordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PasswordError::Hash(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for PasswordError {}

impl From<argon2::password_hash::Error> for PasswordError {
    fn from(err: argon2::password_hash::Error) -> Self {
        PasswordError::Hash(err)
    }
}

/// Hash a password under the given scheme
///
/// # Returns
///
/// * `Ok(String)` - The password hash
///   - `Sha256`: 64 lower-case hex characters
///   - `Argon2`: Argon2id hash in PHC string format
/// * `Err` - If Argon2 hashing fails
pub fn hash_password(password: &str, scheme: HashScheme) -> Result<String, PasswordError> {
    match scheme {
        HashScheme::Sha256 => Ok(sha256_hex(password)),
        HashScheme::Argon2 => {
            let salt = SaltString::generate(&mut OsRng);
            let argon2 = Argon2::default();
            let password_hash = argon2.hash_password(password.as_bytes(), &salt)?;
            Ok(password_hash.to_string())
        }
    }
}

/// Verify a password against a stored hash
///
/// Automatically detects the hash scheme:
/// - Hashes starting with `$argon2` use Argon2 verification
/// - All other hashes are compared against the SHA-256 hex digest
///
/// A stored hash that parses under neither scheme never matches; malformed
/// records produce a non-match, not an error, so a credential scan can keep
/// going past them.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    if stored_hash.starts_with("$argon2") {
        let Ok(parsed_hash) = PasswordHash::new(stored_hash) else {
            return false;
        };
        return Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok();
    }

    // SHA-256 hex digest - exact case-sensitive comparison
    stored_hash == sha256_hex(password)
}

/// Lower-case hex SHA-256 digest of a password
fn sha256_hex(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}
