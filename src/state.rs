//! The root aggregate: application state and its intent transitions.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::aggregate::Aggregate;
use crate::command::CommandContext;
use crate::domain::{
    ANONYMOUS_SENDER, ChatRoom, Club, Event, Message, PointsLedger, SELF_SENDER, UserProfile,
};
use crate::error::IntentError;

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

/// The whole application session state: five registries under one owner.
///
/// Registries preserve insertion order; it is the display order, the source
/// of first-seen category order, and the append order of messages. Derived
/// views (joined clubs, visible rooms, joined-club events) are never stored
/// here -- they are recomputed from these registries by [`crate::views`] on
/// every read, so they cannot drift.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    /// Club registry.
    pub clubs: Vec<Club>,
    /// Event registry.
    pub events: Vec<Event>,
    /// Chat room registry.
    pub chat_rooms: Vec<ChatRoom>,
    /// Message history per room id. Append-only per room.
    pub messages: BTreeMap<String, Vec<Message>>,
    /// Points total and credited events.
    pub ledger: PointsLedger,
    /// The single user profile.
    pub profile: UserProfile,
}

impl AppState {
    /// Look up a club by id.
    pub fn club(&self, id: &str) -> Option<&Club> {
        self.clubs.iter().find(|c| c.id == id)
    }

    /// Look up an event by id.
    pub fn event(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Look up a chat room by id.
    pub fn chat_room(&self, id: &str) -> Option<&ChatRoom> {
        self.chat_rooms.iter().find(|r| r.id == id)
    }

    /// Message history for a room, oldest first. Empty for unknown rooms.
    pub fn room_messages(&self, room_id: &str) -> &[Message] {
        self.messages.get(room_id).map_or(&[], Vec::as_slice)
    }

    fn club_mut(&mut self, id: &str) -> Option<&mut Club> {
        self.clubs.iter_mut().find(|c| c.id == id)
    }

    fn event_mut(&mut self, id: &str) -> Option<&mut Event> {
        self.events.iter_mut().find(|e| e.id == id)
    }

    /// Whether the room's owning club is currently joined.
    fn room_visible(&self, room: &ChatRoom) -> bool {
        self.club(&room.club_id).is_some_and(|c| c.is_joined)
    }
}

// ---------------------------------------------------------------------------
// Intents
// ---------------------------------------------------------------------------

/// How a check-in is confirmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum CheckInMethod {
    /// The user typed the event's code; compared case-insensitively.
    Code(String),
    /// Simulated QR scan. Always valid; the scanner UI is the confirmation.
    QrScan,
}

/// Intents the presentation layer can issue against [`AppState`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Intent {
    /// Join the club if not a member, leave it otherwise. A strict toggle:
    /// two invocations restore the original state.
    ToggleMembership { club_id: String },
    /// RSVP to the event if not attending, withdraw otherwise.
    ToggleAttendance { event_id: String },
    /// Verify attendance at an event and collect its points.
    CheckIn {
        event_id: String,
        method: CheckInMethod,
    },
    /// Append a message to a joined club's room.
    PostMessage {
        room_id: String,
        content: String,
        anonymous: bool,
    },
    /// Replace the user profile wholesale.
    UpdateProfile { profile: UserProfile },
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

/// Domain events produced by [`AppState`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum StateEvent {
    /// The user joined a club.
    MembershipJoined { club_id: String },
    /// The user left a club.
    MembershipLeft { club_id: String },
    /// The user RSVP'd to an event.
    AttendanceMarked { event_id: String },
    /// The user withdrew an RSVP. Does not revoke a prior check-in.
    AttendanceCleared { event_id: String },
    /// Attendance was verified and the reward credited.
    CheckedIn { event_id: String, points: u32 },
    /// A message was appended to a room.
    MessagePosted { room_id: String, message: Message },
    /// The profile was replaced.
    ProfileUpdated { profile: UserProfile },
}

// ---------------------------------------------------------------------------
// Aggregate impl
// ---------------------------------------------------------------------------

impl Aggregate for AppState {
    const AGGREGATE_TYPE: &'static str = "club-social";
    type Command = Intent;
    type DomainEvent = StateEvent;
    type Error = IntentError;

    fn handle(&self, cmd: Intent, ctx: &CommandContext) -> Result<Vec<StateEvent>, IntentError> {
        match cmd {
            Intent::ToggleMembership { club_id } => {
                let club = self
                    .club(&club_id)
                    .ok_or_else(|| IntentError::ClubNotFound(club_id.clone()))?;
                let event = if club.is_joined {
                    StateEvent::MembershipLeft { club_id }
                } else {
                    StateEvent::MembershipJoined { club_id }
                };
                Ok(vec![event])
            }

            Intent::ToggleAttendance { event_id } => {
                let event = self
                    .event(&event_id)
                    .ok_or_else(|| IntentError::EventNotFound(event_id.clone()))?;
                let event = if event.is_attending {
                    StateEvent::AttendanceCleared { event_id }
                } else {
                    StateEvent::AttendanceMarked { event_id }
                };
                Ok(vec![event])
            }

            Intent::CheckIn { event_id, method } => {
                let event = self
                    .event(&event_id)
                    .ok_or_else(|| IntentError::EventNotFound(event_id.clone()))?;
                if !event.is_attending {
                    return Err(IntentError::NotAttending);
                }
                if event.is_checked_in || self.ledger.is_credited(&event_id) {
                    return Err(IntentError::AlreadyCheckedIn(event_id));
                }
                if let CheckInMethod::Code(provided) = &method {
                    if !event.code_matches(provided) {
                        return Err(IntentError::InvalidCode);
                    }
                }
                Ok(vec![StateEvent::CheckedIn {
                    points: event.reward(),
                    event_id,
                }])
            }

            Intent::PostMessage {
                room_id,
                content,
                anonymous,
            } => {
                let room = self
                    .chat_room(&room_id)
                    .ok_or_else(|| IntentError::RoomNotFound(room_id.clone()))?;
                if !self.room_visible(room) {
                    return Err(IntentError::RoomNotVisible(room_id));
                }
                let content = content.trim();
                if content.is_empty() {
                    return Err(IntentError::EmptyMessage);
                }

                let seq = self.room_messages(&room_id).len() + 1;
                let message = Message {
                    id: Message::id_for(&room_id, seq),
                    content: content.to_owned(),
                    sender: if anonymous { ANONYMOUS_SENDER } else { SELF_SENDER }.to_owned(),
                    timestamp: ctx.clock_label(),
                    avatar: if anonymous {
                        String::new()
                    } else {
                        self.profile.avatar.clone()
                    },
                };
                Ok(vec![StateEvent::MessagePosted { room_id, message }])
            }

            Intent::UpdateProfile { profile } => Ok(vec![StateEvent::ProfileUpdated { profile }]),
        }
    }

    fn apply(mut self, event: &StateEvent) -> Self {
        match event {
            StateEvent::MembershipJoined { club_id } => {
                if let Some(club) = self.club_mut(club_id) {
                    club.is_joined = true;
                    club.member_count += 1;
                }
            }
            StateEvent::MembershipLeft { club_id } => {
                if let Some(club) = self.club_mut(club_id) {
                    club.is_joined = false;
                    club.member_count = club.member_count.saturating_sub(1);
                }
            }
            StateEvent::AttendanceMarked { event_id } => {
                if let Some(ev) = self.event_mut(event_id) {
                    ev.is_attending = true;
                    ev.attendee_count += 1;
                }
            }
            StateEvent::AttendanceCleared { event_id } => {
                // is_checked_in stays as-is: earned points are never revoked.
                if let Some(ev) = self.event_mut(event_id) {
                    ev.is_attending = false;
                    ev.attendee_count = ev.attendee_count.saturating_sub(1);
                }
            }
            StateEvent::CheckedIn { event_id, points } => {
                if let Some(ev) = self.event_mut(event_id) {
                    ev.is_checked_in = true;
                }
                self.ledger.credit(event_id, *points);
            }
            StateEvent::MessagePosted { room_id, message } => {
                self.messages
                    .entry(room_id.clone())
                    .or_default()
                    .push(message.clone());
            }
            StateEvent::ProfileUpdated { profile } => {
                self.profile = profile.clone();
            }
        }
        self
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
