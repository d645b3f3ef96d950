//! Derived views: pure recomputations over the registries.
//!
//! Nothing in this module holds state. Every function reads the current
//! [`AppState`] and derives the answer on the spot, so a view can never be
//! stale with respect to the registries it is computed from.

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::domain::{ChatRoom, Club, Event, Level, next_threshold, progress_percent};
use crate::state::AppState;

/// The category filter value that matches every club.
pub const ALL_CATEGORY: &str = "All";

/// Clubs the user is a member of, in registry order.
pub fn joined_clubs(state: &AppState) -> Vec<&Club> {
    state.clubs.iter().filter(|c| c.is_joined).collect()
}

/// Clubs the user has not joined, in registry order.
pub fn available_clubs(state: &AppState) -> Vec<&Club> {
    state.clubs.iter().filter(|c| !c.is_joined).collect()
}

/// Search/category filter applied to the available-clubs list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClubFilter {
    /// Case-insensitive substring matched against name and description.
    pub query: String,
    /// Category that must match exactly; [`ALL_CATEGORY`] matches everything.
    pub category: String,
}

impl Default for ClubFilter {
    fn default() -> Self {
        Self {
            query: String::new(),
            category: ALL_CATEGORY.to_owned(),
        }
    }
}

impl ClubFilter {
    /// Whether a club passes both the query and the category filter.
    pub fn matches(&self, club: &Club) -> bool {
        let matches_category = self.category == ALL_CATEGORY || club.category == self.category;
        matches_category && club.matches_query(&self.query)
    }
}

/// Available clubs narrowed by a search query and category.
pub fn filtered_available_clubs<'a>(state: &'a AppState, filter: &ClubFilter) -> Vec<&'a Club> {
    state
        .clubs
        .iter()
        .filter(|c| !c.is_joined && filter.matches(c))
        .collect()
}

/// Filter choices: [`ALL_CATEGORY`] first, then each distinct club category
/// in first-seen registry order.
pub fn categories(state: &AppState) -> Vec<String> {
    std::iter::once(ALL_CATEGORY.to_owned())
        .chain(
            state
                .clubs
                .iter()
                .map(|c| c.category.clone())
                .unique(),
        )
        .collect()
}

/// Events belonging to joined clubs, in registry order.
pub fn joined_club_events(state: &AppState) -> Vec<&Event> {
    state
        .events
        .iter()
        .filter(|e| state.club(&e.club_id).is_some_and(|c| c.is_joined))
        .collect()
}

/// Chat rooms whose owning club is joined, in registry order.
pub fn visible_chat_rooms(state: &AppState) -> Vec<&ChatRoom> {
    state
        .chat_rooms
        .iter()
        .filter(|r| state.club(&r.club_id).is_some_and(|c| c.is_joined))
        .collect()
}

/// Joined-club events whose attendance has been verified.
pub fn checked_in_events(state: &AppState) -> Vec<&Event> {
    joined_club_events(state)
        .into_iter()
        .filter(|e| e.is_checked_in)
        .collect()
}

/// Joined-club events the user is attending but has not yet checked in to.
pub fn upcoming_attending_events(state: &AppState) -> Vec<&Event> {
    joined_club_events(state)
        .into_iter()
        .filter(|e| e.is_attending && !e.is_checked_in)
        .collect()
}

/// Sum of the rewards of every joined-club event the user is attending.
pub fn total_possible_points(state: &AppState) -> u32 {
    joined_club_events(state)
        .into_iter()
        .filter(|e| e.is_attending)
        .map(Event::reward)
        .sum()
}

/// Points still collectable from events the user is attending.
pub fn points_available(state: &AppState) -> u32 {
    total_possible_points(state).saturating_sub(state.ledger.total_points)
}

/// Snapshot of the points ledger with its derived level and progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointsSummary {
    pub total_points: u32,
    pub level: Level,
    pub next_threshold: u32,
    /// Percentage toward `next_threshold`, capped at 100.
    pub progress_percent: f32,
    /// Number of events credited so far.
    pub events_attended: usize,
}

/// Ledger snapshot plus leveling arithmetic, for the points dashboard.
pub fn points_summary(state: &AppState) -> PointsSummary {
    let points = state.ledger.total_points;
    PointsSummary {
        total_points: points,
        level: Level::for_points(points),
        next_threshold: next_threshold(points),
        progress_percent: progress_percent(points),
        events_attended: state.ledger.checked_in_events.len(),
    }
}

/// Engagement counters shown on the profile page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileStats {
    pub clubs_joined: usize,
    pub events_attended: usize,
    pub upcoming_events: usize,
}

/// Profile-page counters, computed over the full event registry.
pub fn profile_stats(state: &AppState) -> ProfileStats {
    ProfileStats {
        clubs_joined: state.clubs.iter().filter(|c| c.is_joined).count(),
        events_attended: state.events.iter().filter(|e| e.is_checked_in).count(),
        upcoming_events: state
            .events
            .iter()
            .filter(|e| e.is_attending && !e.is_checked_in)
            .count(),
    }
}
