//! Platform data directory resolution

use std::path::PathBuf;

/// Directory name under the platform data directory
const DATA_DIR_NAME: &str = "parlor";

/// Resolve the default directory for the chat tables
///
/// - Linux: `~/.local/share/parlor`
/// - macOS: `~/Library/Application Support/parlor`
/// - Windows: `%APPDATA%\parlor`
///
/// Falls back to the current directory when the platform reports no data
/// directory. Callers that need a different location pass an explicit path
/// to [`crate::store::ChatStore::open`] instead.
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join(DATA_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from("."))
}
