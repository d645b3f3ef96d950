//! In-memory state core for the ClubHub campus club social app.
//!
//! Owns the five registries (clubs, events, chat rooms, points ledger,
//! profile) behind a single [`AppState`] aggregate. The presentation layer
//! issues [`Intent`]s through [`Aggregate::execute`] and reads derived views
//! from [`views`]; all transitions are pure, synchronous, and single-threaded.

mod aggregate;
pub use aggregate::Aggregate;
pub mod calendar;
mod command;
pub use command::CommandContext;
pub mod domain;
mod error;
pub use error::IntentError;
pub mod seed;
mod state;
pub use state::{AppState, CheckInMethod, Intent, StateEvent};
pub mod views;
