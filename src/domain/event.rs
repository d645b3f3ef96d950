//! Event entity: a scheduled club activity with optional check-in reward.

use serde::{Deserialize, Serialize};

/// A scheduled activity belonging to a club.
///
/// `attendee_count` mirrors attendance toggles (+1/-1). `is_checked_in` is
/// one-way: once true it never reverts, even if the user later un-attends.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Registry key.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Longer blurb shown on the event card.
    pub description: String,
    /// Calendar date as `YYYY-MM-DD`. Compared by exact string equality.
    pub date: String,
    /// Start time as `HH:MM` display text.
    pub time: String,
    /// Venue display text.
    pub location: String,
    /// Owning club's registry key.
    pub club_id: String,
    /// Owning club's name, denormalized for display.
    pub club_name: String,
    /// Number of attendees, including the current user when attending.
    pub attendee_count: u32,
    /// Whether the current user has RSVP'd.
    pub is_attending: bool,
    /// Cover image URL.
    pub image: String,
    /// Code redeemed at the venue to verify attendance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_in_code: Option<String>,
    /// Whether attendance has been verified. One-way.
    #[serde(default)]
    pub is_checked_in: bool,
    /// Points awarded on check-in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<u32>,
}

impl Event {
    /// Whether `provided` matches the event's check-in code.
    ///
    /// Comparison is case-insensitive; an event without a code matches
    /// nothing.
    pub fn code_matches(&self, provided: &str) -> bool {
        self.check_in_code
            .as_deref()
            .is_some_and(|code| code.eq_ignore_ascii_case(provided))
    }

    /// Points awarded on check-in, defaulting to 0 when the event carries
    /// no reward.
    pub fn reward(&self) -> u32 {
        self.points.unwrap_or(0)
    }
}
