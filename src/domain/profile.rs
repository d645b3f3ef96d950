//! User profile: identity, interests, achievements, and preferences.

use serde::{Deserialize, Serialize};

/// The single user profile record.
///
/// Replaced wholesale by the `UpdateProfile` intent; the helpers here keep
/// the interest and achievement invariants when callers build the
/// replacement incrementally.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: String,
    pub bio: String,
    pub major: String,
    pub graduation_year: u16,
    /// ISO date the account was created.
    pub joined_date: String,
    /// Interest tags; no duplicates.
    pub interests: Vec<String>,
    /// Unlocked achievements, in unlock order. Append-only.
    pub achievements: Vec<Achievement>,
    pub preferences: UserPreferences,
}

impl UserProfile {
    /// Add an interest tag; duplicates are ignored.
    pub fn add_interest(&mut self, interest: impl Into<String>) {
        let interest = interest.into();
        if !self.interests.contains(&interest) {
            self.interests.push(interest);
        }
    }

    /// Remove an interest tag if present.
    pub fn remove_interest(&mut self, interest: &str) {
        self.interests.retain(|i| i != interest);
    }

    /// Append an achievement. A second unlock with the same id is ignored.
    pub fn unlock_achievement(&mut self, achievement: Achievement) {
        if !self.achievements.iter().any(|a| a.id == achievement.id) {
            self.achievements.push(achievement);
        }
    }
}

/// A badge unlocked by engagement milestones.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Emoji or icon token shown next to the title.
    pub icon: String,
    /// ISO date the badge was unlocked.
    pub unlocked_date: String,
    pub category: AchievementCategory,
}

/// What kind of engagement an achievement rewards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AchievementCategory {
    #[default]
    Events,
    Social,
    Clubs,
    Points,
}

/// Notification and privacy toggles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPreferences {
    pub email_notifications: bool,
    pub push_notifications: bool,
    pub event_reminders: bool,
    pub chat_notifications: bool,
    /// When set, the chat composer defaults to anonymous posting.
    pub anonymous_mode: bool,
    pub profile_visibility: ProfileVisibility,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            email_notifications: true,
            push_notifications: true,
            event_reminders: true,
            chat_notifications: true,
            anonymous_mode: false,
            profile_visibility: ProfileVisibility::Clubs,
        }
    }
}

/// Who can see the profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileVisibility {
    Public,
    #[default]
    Clubs,
    Private,
}
