//! Durable stores for the chat core
//!
//! Two independent tables under one data directory:
//!
//! - `users.csv` (`username,password`) behind [`UserStore`]
//! - `messages.csv` (`sender,message,timestamp`) behind [`MessageStore`]
//!
//! Each store serializes access through its own mutex, so concurrent
//! callers cannot interleave a read-then-append against the same table.
//! The stores share nothing else; no operation needs atomicity across both.

mod error;
mod messages;
mod table;
mod users;

pub use error::StoreError;
pub use messages::MessageStore;
pub use users::UserStore;

use std::io;
use std::path::Path;

use parlor_common::emoji::EmojiMap;

use crate::password::HashScheme;

/// Bundle of the two chat tables under one data directory
///
/// The presentation layer holds one of these and calls straight into the
/// fields; the stores keep no state between calls beyond the tables.
pub struct ChatStore {
    pub users: UserStore,
    pub messages: MessageStore,
}

impl ChatStore {
    /// Open both tables under `data_dir`, creating each with just its
    /// header row if absent
    ///
    /// New credentials hash with [`HashScheme::Sha256`] (the scheme the
    /// table format was written with) and messages expand the default
    /// emoji aliases. Use [`ChatStore::open_with`] to change either.
    pub async fn open(data_dir: &Path) -> Result<Self, StoreError> {
        Self::open_with(data_dir, HashScheme::Sha256, EmojiMap::default()).await
    }

    /// Open both tables with an explicit hash scheme and alias table
    pub async fn open_with(
        data_dir: &Path,
        scheme: HashScheme,
        emoji: EmojiMap,
    ) -> Result<Self, StoreError> {
        let users = UserStore::open(data_dir, scheme).await?;
        let messages = MessageStore::open(data_dir, emoji).await?;
        Ok(Self { users, messages })
    }
}

/// Run blocking table I/O on the blocking thread pool
///
/// Store methods hold their table lock across the call, so everything
/// submitted here for one table runs in submission order.
pub(crate) async fn run_blocking<T, F>(f: F) -> Result<T, StoreError>
where
    F: FnOnce() -> io::Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| StoreError::Unavailable(io::Error::other(format!("store task failed: {e}"))))?
        .map_err(StoreError::Unavailable)
}
