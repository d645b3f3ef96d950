//! Command context: call-time data passed alongside an intent.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Cross-cutting data captured when an intent is issued.
///
/// Carries the acting user's display handle and the wall-clock instant of the
/// call, without polluting the `Command` or `DomainEvent` types. The instant
/// is the one place the core touches the host clock: `handle` implementations
/// read it instead of calling `Local::now()` themselves, which keeps every
/// transition deterministic under test.
///
/// # Examples
///
/// ```
/// use clubhub_core::CommandContext;
///
/// let ctx = CommandContext::default().with_actor("alex");
/// assert_eq!(ctx.actor.as_deref(), Some("alex"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandContext {
    /// Identity of the actor issuing the command (e.g. a user handle).
    pub actor: Option<String>,
    /// Wall-clock instant the command was issued.
    pub issued_at: DateTime<Local>,
}

impl Default for CommandContext {
    fn default() -> Self {
        Self {
            actor: None,
            issued_at: Local::now(),
        }
    }
}

impl CommandContext {
    /// Set the actor identity.
    pub fn with_actor(mut self, actor: impl Into<String>) -> Self {
        self.actor = Some(actor.into());
        self
    }

    /// Pin the issue instant, overriding the captured wall clock.
    ///
    /// Tests use this to make timestamp-carrying events reproducible.
    pub fn with_issued_at(mut self, instant: DateTime<Local>) -> Self {
        self.issued_at = instant;
        self
    }

    /// The issue instant rendered as a chat display time, e.g. `"10:30 AM"`.
    pub fn clock_label(&self) -> String {
        self.issued_at.format("%-l:%M %p").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_instant(hour: u32, minute: u32) -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2025, 8, 28, hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn default_context_has_no_actor() {
        let ctx = CommandContext::default();
        assert_eq!(ctx.actor, None);
    }

    #[test]
    fn builder_sets_actor() {
        let ctx = CommandContext::default().with_actor("alex");
        assert_eq!(ctx.actor.as_deref(), Some("alex"));
    }

    #[test]
    fn builder_accepts_string_owned() {
        // Verify `impl Into<String>` works with owned `String` values,
        // not just `&str` literals.
        let ctx = CommandContext::default().with_actor(String::from("jordan"));
        assert_eq!(ctx.actor.as_deref(), Some("jordan"));
    }

    #[test]
    fn clock_label_is_twelve_hour() {
        let ctx = CommandContext::default().with_issued_at(fixed_instant(17, 5));
        assert_eq!(ctx.clock_label(), "5:05 PM");
    }

    #[test]
    fn clock_label_morning() {
        let ctx = CommandContext::default().with_issued_at(fixed_instant(10, 30));
        assert_eq!(ctx.clock_label(), "10:30 AM");
    }

    #[test]
    fn context_serde_roundtrip() {
        let ctx = CommandContext::default()
            .with_actor("alex")
            .with_issued_at(fixed_instant(9, 0));

        let json = serde_json::to_string(&ctx).expect("serialization should succeed");
        let deserialized: CommandContext =
            serde_json::from_str(&json).expect("deserialization should succeed");

        assert_eq!(deserialized.actor, ctx.actor);
        assert_eq!(deserialized.issued_at, ctx.issued_at);
    }
}
