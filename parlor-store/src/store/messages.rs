//! Message log
//!
//! Append-only, time-ordered record of every message sent to the room.
//! Append order is the single source of truth for chronology; there is one
//! log, no replication, and no sequence numbers.

use std::path::Path;
use std::sync::Arc;

use chrono::Utc;
use parlor_common::emoji::EmojiMap;
use parlor_common::records::Message;
use tokio::sync::Mutex;

use super::error::StoreError;
use super::run_blocking;
use super::table::Table;

/// Messages table file name
const MESSAGES_TABLE_FILE: &str = "messages.csv";

/// Messages table columns
const MESSAGES_HEADER: &[&str] = &["sender", "message", "timestamp"];

/// Durable append-only log over the messages table
#[derive(Clone)]
pub struct MessageStore {
    table: Arc<Mutex<Table>>,
    emoji: EmojiMap,
}

impl MessageStore {
    /// Open the messages table under `data_dir`, creating it with just the
    /// header row if absent
    pub async fn open(data_dir: &Path, emoji: EmojiMap) -> Result<Self, StoreError> {
        let table = Arc::new(Mutex::new(Table::new(
            data_dir.join(MESSAGES_TABLE_FILE),
            MESSAGES_HEADER,
        )));
        let guard = Arc::clone(&table).lock_owned().await;
        run_blocking(move || guard.create_if_missing()).await?;
        Ok(Self { table, emoji })
    }

    /// Append a message to the log
    ///
    /// Expands emoji aliases in `text` exactly once, stamps the current
    /// wall-clock time as ISO-8601, and appends the record. Content is
    /// stored as-is beyond alias expansion - no length limit, no filtering.
    /// Returns the record as stored.
    pub async fn append(&self, sender: &str, text: &str) -> Result<Message, StoreError> {
        let message = Message {
            sender: sender.to_string(),
            text: self.emoji.expand(text),
            timestamp: Utc::now().to_rfc3339(),
        };

        let record = message.clone();
        let guard = Arc::clone(&self.table).lock_owned().await;
        run_blocking(move || {
            guard.append(&[
                record.sender.as_str(),
                record.text.as_str(),
                record.timestamp.as_str(),
            ])
        })
        .await?;
        Ok(message)
    }

    /// Read the full log in append order, oldest first
    ///
    /// Returns an empty vec when nothing was ever appended. Malformed rows
    /// are skipped by the underlying table read, never fatal.
    pub async fn read_all(&self) -> Result<Vec<Message>, StoreError> {
        let guard = Arc::clone(&self.table).lock_owned().await;
        run_blocking(move || {
            let rows = guard.read_rows()?;
            Ok(rows
                .iter()
                .map(|row| Message {
                    sender: row[0].to_string(),
                    text: row[1].to_string(),
                    timestamp: row[2].to_string(),
                })
                .collect())
        })
        .await
    }
}
