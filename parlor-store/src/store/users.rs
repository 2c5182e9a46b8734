//! Credential store
//!
//! Durable mapping from username to password hash over the users table;
//! the authentication oracle for login attempts.
//!
//! Registration appends unconditionally - there is no uniqueness check, so
//! registering a username twice stores two records (see `exists` for the
//! caller-side escape hatch).
//! Verification scans records in storage order and succeeds on the first
//! record whose username and hash both match.

use std::path::Path;
use std::sync::Arc;

use tokio::sync::Mutex;

use super::error::StoreError;
use super::run_blocking;
use super::table::Table;
use crate::password::{self, HashScheme};

/// Users table file name
const USERS_TABLE_FILE: &str = "users.csv";

/// Users table columns; `password` holds the hash, never plaintext
const USERS_HEADER: &[&str] = &["username", "password"];

/// Durable credential store over the users table
#[derive(Clone)]
pub struct UserStore {
    table: Arc<Mutex<Table>>,
    scheme: HashScheme,
}

impl UserStore {
    /// Open the users table under `data_dir`, creating it with just the
    /// header row if absent
    pub async fn open(data_dir: &Path, scheme: HashScheme) -> Result<Self, StoreError> {
        let table = Arc::new(Mutex::new(Table::new(
            data_dir.join(USERS_TABLE_FILE),
            USERS_HEADER,
        )));
        let guard = Arc::clone(&table).lock_owned().await;
        run_blocking(move || guard.create_if_missing()).await?;
        Ok(Self { table, scheme })
    }

    /// Register a user
    ///
    /// Hashes `password` under the store's scheme and appends the record.
    /// Callers enforce non-empty fields before calling; the store accepts
    /// whatever it is given and always succeeds on writable storage, even
    /// when the username is already registered.
    pub async fn register(&self, username: &str, password: &str) -> Result<(), StoreError> {
        let hash = password::hash_password(password, self.scheme)?;
        let username = username.to_string();
        let guard = Arc::clone(&self.table).lock_owned().await;
        run_blocking(move || guard.append(&[username.as_str(), hash.as_str()])).await
    }

    /// Check a login attempt
    ///
    /// Scans all records in storage order and returns true on the first one
    /// where the username matches exactly (case-sensitive) and the stored
    /// hash verifies against `password`. Returns false when the table is
    /// empty, the username is absent, or no matching record verifies.
    /// Malformed rows are skipped by the scan.
    pub async fn verify(&self, username: &str, password: &str) -> Result<bool, StoreError> {
        let username = username.to_string();
        let password = password.to_string();
        let guard = Arc::clone(&self.table).lock_owned().await;
        run_blocking(move || {
            let rows = guard.read_rows()?;
            Ok(rows
                .iter()
                .any(|row| &row[0] == username && password::verify_password(&password, &row[1])))
        })
        .await
    }

    /// Check whether a username has at least one record
    ///
    /// Registration never enforces uniqueness; callers that want to warn
    /// about duplicate registration check here first.
    pub async fn exists(&self, username: &str) -> Result<bool, StoreError> {
        let username = username.to_string();
        let guard = Arc::clone(&self.table).lock_owned().await;
        run_blocking(move || {
            let rows = guard.read_rows()?;
            Ok(rows.iter().any(|row| &row[0] == username))
        })
        .await
    }
}
