//! Shared record types
//!
//! Records are immutable once created: the stores only ever append them and
//! read them back in append order.

use serde::{Deserialize, Serialize};

/// A single chat message as stored in the message log
///
/// `timestamp` is an ISO-8601 string stamped at append time. Ordering of
/// messages is append order, which coincides with timestamp order since the
/// clock is read at each append.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Username of the posting user (referenced by value; no foreign-key
    /// enforcement against the credential store)
    pub sender: String,
    /// Message body, with emoji aliases already expanded
    #[serde(rename = "message")]
    pub text: String,
    /// ISO-8601 timestamp assigned at append time
    pub timestamp: String,
}
