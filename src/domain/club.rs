//! Club entity: a joinable community with a membership count.

use serde::{Deserialize, Serialize};

/// A student club the user can join or leave.
///
/// `member_count` mirrors membership toggles exactly (+1 on join, -1 on
/// leave) and never goes negative.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Club {
    /// Registry key.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Short blurb shown on the club card.
    pub description: String,
    /// Category label used for filtering (e.g. "Arts", "Technology").
    pub category: String,
    /// Number of members, including the current user when joined.
    pub member_count: u32,
    /// Cover image URL.
    pub image: String,
    /// Whether the current user is a member.
    pub is_joined: bool,
}

impl Club {
    /// Case-insensitive substring match against name and description.
    ///
    /// An empty query matches everything.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photography_club() -> Club {
        Club {
            id: "1".into(),
            name: "Photography Club".into(),
            description: "Capture moments, create memories.".into(),
            category: "Arts".into(),
            member_count: 156,
            image: String::new(),
            is_joined: false,
        }
    }

    #[test]
    fn query_matches_name_case_insensitively() {
        let club = photography_club();
        assert!(club.matches_query("photo"));
        assert!(club.matches_query("PHOTO"));
    }

    #[test]
    fn query_matches_description() {
        let club = photography_club();
        assert!(club.matches_query("memories"));
    }

    #[test]
    fn empty_query_matches_everything() {
        assert!(photography_club().matches_query(""));
    }

    #[test]
    fn unrelated_query_does_not_match() {
        assert!(!photography_club().matches_query("debate"));
    }
}
