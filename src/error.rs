//! Rejection taxonomy for intents against the application state.

use serde::Serialize;

/// Reasons an intent can be rejected.
///
/// Every rejection is local and non-fatal: `handle` is pure, so a rejected
/// intent implies no state change at all. The `kind`/`detail` serialization
/// lets a host UI branch on the category without string matching.
#[derive(Debug, thiserror::Error, Serialize)]
#[serde(tag = "kind", content = "detail")]
pub enum IntentError {
    /// The referenced club is not in the registry.
    #[error("no club with id {0}")]
    ClubNotFound(String),

    /// The referenced event is not in the registry.
    #[error("no event with id {0}")]
    EventNotFound(String),

    /// The referenced chat room is not in the registry.
    #[error("no chat room with id {0}")]
    RoomNotFound(String),

    /// The chat room belongs to a club the user has not joined.
    #[error("chat room {0} belongs to a club you have not joined")]
    RoomNotVisible(String),

    /// Check-in attempted without attending the event.
    #[error("cannot check in to an event you are not attending")]
    NotAttending,

    /// The event was already credited to the points ledger.
    ///
    /// Guards idempotency: a second check-in, even with the correct code,
    /// must not award points again.
    #[error("event {0} is already checked in")]
    AlreadyCheckedIn(String),

    /// The provided check-in code does not match the event's code.
    #[error("invalid check-in code")]
    InvalidCode,

    /// Message content was empty or whitespace-only after trimming.
    #[error("message content is empty")]
    EmptyMessage,
}
