//! Domain entities: the records the five registries hold.

mod chat;
mod club;
mod event;
mod ledger;
mod profile;

pub use chat::{ANONYMOUS_SENDER, ChatRoom, Message, SELF_SENDER};
pub use club::Club;
pub use event::Event;
pub use ledger::{Level, PointsLedger, next_threshold, progress_percent};
pub use profile::{
    Achievement, AchievementCategory, ProfileVisibility, UserPreferences, UserProfile,
};
