//! Demo data the application session boots from.
//!
//! State is ephemeral per process lifetime; every session starts from this
//! snapshot. Events are kept sorted by date, earliest first.

use std::collections::BTreeMap;

use crate::domain::{
    Achievement, AchievementCategory, ChatRoom, Club, Event, Message, UserPreferences, UserProfile,
};
use crate::state::AppState;

fn club(
    id: &str,
    name: &str,
    description: &str,
    category: &str,
    member_count: u32,
    image: &str,
    is_joined: bool,
) -> Club {
    Club {
        id: id.into(),
        name: name.into(),
        description: description.into(),
        category: category.into(),
        member_count,
        image: image.into(),
        is_joined,
    }
}

#[allow(clippy::too_many_arguments)]
fn event(
    id: &str,
    title: &str,
    description: &str,
    date: &str,
    time: &str,
    location: &str,
    club_id: &str,
    club_name: &str,
    attendee_count: u32,
    is_attending: bool,
    check_in_code: &str,
    points: u32,
) -> Event {
    Event {
        id: id.into(),
        title: title.into(),
        description: description.into(),
        date: date.into(),
        time: time.into(),
        location: location.into(),
        club_id: club_id.into(),
        club_name: club_name.into(),
        attendee_count,
        is_attending,
        image: String::new(),
        check_in_code: Some(check_in_code.into()),
        is_checked_in: false,
        points: Some(points),
    }
}

fn room(id: &str, name: &str, club_id: &str, last_message: &str, last_message_time: &str) -> ChatRoom {
    ChatRoom {
        id: id.into(),
        name: name.into(),
        club_id: club_id.into(),
        last_message: last_message.into(),
        last_message_time: last_message_time.into(),
        unread_count: 0,
        avatar: String::new(),
    }
}

fn message(id: &str, content: &str, sender: &str, timestamp: &str) -> Message {
    Message {
        id: id.into(),
        content: content.into(),
        sender: sender.into(),
        timestamp: timestamp.into(),
        avatar: String::new(),
    }
}

/// Build the demo session state: five clubs (three joined), one upcoming
/// event per club, one chat room per club, and a few messages in the rooms
/// of joined clubs.
pub fn demo_state() -> AppState {
    let clubs = vec![
        club(
            "1",
            "Photography Club",
            "Capture moments, create memories. Join us for photo walks, workshops, and exhibitions.",
            "Arts",
            156,
            "https://images.unsplash.com/photo-1606983340126-99ab4feaa64a?w=400",
            true,
        ),
        club(
            "2",
            "Debate Society",
            "Sharpen your argumentative skills and engage in intellectual discourse.",
            "Academic",
            89,
            "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400",
            true,
        ),
        club(
            "3",
            "Environmental Action",
            "Making our campus and community more sustainable, one project at a time.",
            "Service",
            234,
            "https://images.unsplash.com/photo-1542601906990-b4d3fb778b09?w=400",
            false,
        ),
        club(
            "4",
            "Tech Innovation Lab",
            "Building the future through code, hardware, and creative problem-solving.",
            "Technology",
            312,
            "https://images.unsplash.com/photo-1581091226825-a6a2a5aee158?w=400",
            true,
        ),
        club(
            "5",
            "Cultural Exchange",
            "Celebrating diversity through food, music, and traditions from around the world.",
            "Cultural",
            198,
            "https://images.unsplash.com/photo-1529156069898-49953e39b3ac?w=400",
            false,
        ),
    ];

    let events = vec![
        event(
            "1",
            "Golden Hour Photography Workshop",
            "Learn the secrets of capturing stunning golden hour photos at the campus lake.",
            "2025-08-28",
            "17:30",
            "Campus Lake",
            "1",
            "Photography Club",
            24,
            true,
            "PHOTO2025",
            50,
        ),
        event(
            "2",
            "Climate Change Debate",
            "A structured debate on climate policy solutions. Open to all skill levels.",
            "2025-09-05",
            "19:00",
            "Student Union Hall",
            "2",
            "Debate Society",
            45,
            false,
            "DEBATE2025",
            75,
        ),
        event(
            "3",
            "Campus Cleanup Drive",
            "Monthly campus beautification project. Gloves and supplies provided.",
            "2025-09-12",
            "09:00",
            "Main Quad",
            "3",
            "Environmental Action",
            67,
            true,
            "CLEAN2025",
            100,
        ),
        event(
            "4",
            "AI Workshop: Building Chatbots",
            "Hands-on workshop on creating intelligent chatbots with modern frameworks.",
            "2025-09-18",
            "14:00",
            "Computer Lab 3",
            "4",
            "Tech Innovation Lab",
            38,
            true,
            "AITECH2025",
            125,
        ),
        event(
            "5",
            "International Food Festival",
            "Taste authentic dishes from around the world prepared by our students.",
            "2025-09-25",
            "18:00",
            "Student Center Plaza",
            "5",
            "Cultural Exchange",
            156,
            false,
            "CULTURE2025",
            80,
        ),
    ];

    let chat_rooms = vec![
        room(
            "1",
            "Photography Club General",
            "1",
            "Great shots from yesterday's workshop!",
            "2 min ago",
        ),
        room(
            "2",
            "Debate Society",
            "2",
            "Next topic: Universal Basic Income",
            "15 min ago",
        ),
        room(
            "3",
            "Tech Innovation Lab",
            "4",
            "Check out this new framework!",
            "1 hour ago",
        ),
        room(
            "4",
            "Environmental Action Chat",
            "3",
            "Planning next cleanup location",
            "3 hours ago",
        ),
        room(
            "5",
            "Cultural Exchange Hub",
            "5",
            "Food festival prep meeting tomorrow",
            "1 day ago",
        ),
    ];

    let mut messages = BTreeMap::new();
    messages.insert(
        "1".to_owned(),
        vec![
            message(
                "1-1",
                "Just uploaded the photos from the golden hour session. Check them out!",
                "Alex Chen",
                "10:30 AM",
            ),
            message(
                "1-2",
                "Amazing work! The lighting in photo #3 is incredible",
                "Sarah Johnson",
                "10:32 AM",
            ),
            message(
                "1-3",
                "Great shots from yesterday's workshop!",
                "Mike Rodriguez",
                "10:35 AM",
            ),
        ],
    );
    messages.insert(
        "2".to_owned(),
        vec![
            message(
                "2-1",
                "Welcome everyone to our weekly debate prep session!",
                "Dr. Martinez",
                "2:00 PM",
            ),
            message(
                "2-2",
                "This week's topic is Universal Basic Income. Who wants the proposition?",
                "Jessica Park",
                "2:03 PM",
            ),
        ],
    );
    messages.insert(
        "3".to_owned(),
        vec![
            message(
                "3-1",
                "Just discovered an amazing new library for animations!",
                "Alex Thompson",
                "11:15 AM",
            ),
            message(
                "3-2",
                "Which one? I've been looking for something better.",
                "Maya Patel",
                "11:17 AM",
            ),
        ],
    );

    let profile = UserProfile {
        id: "1".into(),
        name: "Alex Johnson".into(),
        email: "alex.johnson@university.edu".into(),
        avatar: "https://images.unsplash.com/photo-1535713875002-d1d0cf377fde?w=100".into(),
        bio: "Computer Science major passionate about technology and community building.".into(),
        major: "Computer Science".into(),
        graduation_year: 2026,
        joined_date: "2024-09-01".into(),
        interests: vec![
            "Technology".into(),
            "Photography".into(),
            "Debate".into(),
            "Environmental Action".into(),
        ],
        achievements: vec![
            Achievement {
                id: "1".into(),
                title: "First Check-in".into(),
                description: "Checked in to your first event".into(),
                icon: "🎯".into(),
                unlocked_date: "2024-09-15".into(),
                category: AchievementCategory::Events,
            },
            Achievement {
                id: "2".into(),
                title: "Social Butterfly".into(),
                description: "Joined 3 different clubs".into(),
                icon: "🦋".into(),
                unlocked_date: "2024-10-01".into(),
                category: AchievementCategory::Clubs,
            },
        ],
        preferences: UserPreferences::default(),
    };

    AppState {
        clubs,
        events,
        chat_rooms,
        messages,
        ledger: Default::default(),
        profile,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_registries_are_consistent() {
        let state = demo_state();
        assert_eq!(state.clubs.len(), 5);
        assert_eq!(state.events.len(), 5);
        assert_eq!(state.chat_rooms.len(), 5);

        // Every event and room references a registered club.
        for event in &state.events {
            assert!(state.club(&event.club_id).is_some(), "event {}", event.id);
        }
        for room in &state.chat_rooms {
            assert!(state.club(&room.club_id).is_some(), "room {}", room.id);
        }
        // Every message history belongs to a registered room.
        for room_id in state.messages.keys() {
            assert!(state.chat_room(room_id).is_some(), "room {room_id}");
        }
    }

    #[test]
    fn seed_events_are_sorted_by_date() {
        let state = demo_state();
        let dates: Vec<_> = state.events.iter().map(|e| e.date.as_str()).collect();
        let mut sorted = dates.clone();
        sorted.sort_unstable();
        assert_eq!(dates, sorted);
    }

    #[test]
    fn seed_starts_with_empty_ledger_and_no_check_ins() {
        let state = demo_state();
        assert_eq!(state.ledger.total_points, 0);
        assert!(state.ledger.checked_in_events.is_empty());
        assert!(state.events.iter().all(|e| !e.is_checked_in));
    }

    #[test]
    fn seeded_messages_only_in_joined_club_rooms() {
        let state = demo_state();
        for room_id in state.messages.keys() {
            let room = state.chat_room(room_id).unwrap();
            let club = state.club(&room.club_id).unwrap();
            assert!(club.is_joined, "room {room_id} seeded for unjoined club");
        }
    }
}
