//! Chat entities: per-club rooms and their append-only message history.

use serde::{Deserialize, Serialize};

/// Sender name substituted when a message is posted anonymously.
pub const ANONYMOUS_SENDER: &str = "Anonymous";

/// Sender name for the current user's own (non-anonymous) messages.
pub const SELF_SENDER: &str = "You";

/// A per-club message channel.
///
/// Rooms exist in the registry permanently; visibility is derived from the
/// owning club's membership flag at read time, never stored here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatRoom {
    /// Registry key.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Owning club's registry key.
    pub club_id: String,
    /// Preview of the most recent message.
    pub last_message: String,
    /// Relative display time of the most recent message (e.g. "2 min ago").
    pub last_message_time: String,
    /// Unread badge count.
    pub unread_count: u32,
    /// Room avatar URL.
    pub avatar: String,
}

/// A single chat message. Append-only; never edited or reordered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Room-scoped id, `"{room}-{seq}"`.
    pub id: String,
    /// Message body.
    pub content: String,
    /// Display name, or [`ANONYMOUS_SENDER`].
    pub sender: String,
    /// Display time captured when the message was posted (e.g. "10:30 AM").
    pub timestamp: String,
    /// Sender avatar URL; empty when posted anonymously.
    pub avatar: String,
}

impl Message {
    /// Build the room-scoped id for the `seq`-th message of a room
    /// (1-based).
    pub fn id_for(room_id: &str, seq: usize) -> String {
        format!("{room_id}-{seq}")
    }

    /// Whether this message was posted anonymously.
    pub fn is_anonymous(&self) -> bool {
        self.sender == ANONYMOUS_SENDER
    }
}
