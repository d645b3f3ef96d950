//! Aggregate trait: the pure decision/fold seam every state machine in this
//! crate is built on.

use crate::command::CommandContext;
use serde::{Serialize, de::DeserializeOwned};

/// A state machine whose transitions are pure functions.
///
/// The implementing type itself serves as the machine's state.
/// State advances by folding domain events through the
/// [`apply`](Aggregate::apply) method.
///
/// # Associated Types
///
/// - `Command`: the set of intents this aggregate can handle.
/// - `DomainEvent`: the set of events this aggregate can produce and apply.
/// - `Error`: command rejection / validation error.
///
/// # Contract
///
/// - [`handle`](Aggregate::handle) must be a pure decision function: no I/O,
///   no side effects. It validates a command against the current state and
///   returns zero or more events, or a rejection. A rejection implies no
///   state change, because nothing was applied.
/// - [`apply`](Aggregate::apply) must be a pure, total function. It takes
///   ownership of the current state and a reference to a domain event,
///   returning the next state. Events referencing unknown entities should be
///   ignored (state returned unchanged) for forward compatibility.
pub trait Aggregate: Default + Clone + Serialize + DeserializeOwned {
    /// Identifies this aggregate type (e.g. "club-social"). Used in log fields.
    const AGGREGATE_TYPE: &'static str;

    /// The set of intents this aggregate can handle.
    type Command;

    /// The set of events this aggregate can produce and apply.
    type DomainEvent: Serialize + DeserializeOwned + Clone;

    /// Command rejection / validation error type.
    type Error: std::error::Error;

    /// Validate a command against the current state and produce events.
    ///
    /// The [`CommandContext`] carries call-time data (actor, wall clock) that
    /// some events capture, such as message timestamps.
    ///
    /// Returns `Ok(vec![])` if the command is a no-op.
    /// Returns `Err` to reject the command.
    fn handle(
        &self,
        cmd: Self::Command,
        ctx: &CommandContext,
    ) -> Result<Vec<Self::DomainEvent>, Self::Error>;

    /// Apply a single event to produce the next state.
    fn apply(self, event: &Self::DomainEvent) -> Self;

    /// Handle a command and fold the produced events into `self`.
    ///
    /// The in-place convenience used at the presentation boundary: one call
    /// per UI intent, run to completion before the next is accepted. Returns
    /// the produced events so the caller can inspect what changed.
    ///
    /// # Errors
    ///
    /// Propagates the rejection from [`handle`](Aggregate::handle); on `Err`
    /// the state is untouched.
    fn execute(
        &mut self,
        cmd: Self::Command,
        ctx: &CommandContext,
    ) -> Result<Vec<Self::DomainEvent>, Self::Error> {
        match self.handle(cmd, ctx) {
            Ok(events) => {
                let state = std::mem::take(self);
                *self = events.iter().fold(state, |s, e| s.apply(e));
                tracing::debug!(
                    aggregate = Self::AGGREGATE_TYPE,
                    events = events.len(),
                    "events applied"
                );
                Ok(events)
            }
            Err(e) => {
                tracing::debug!(
                    aggregate = Self::AGGREGATE_TYPE,
                    error = %e,
                    "command rejected"
                );
                Err(e)
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::Aggregate;
    use super::test_fixtures::{GuestCommand, GuestError, GuestEvent, GuestList};
    use crate::command::CommandContext;

    #[test]
    fn handle_admit() {
        let list = GuestList::default();
        let events = list
            .handle(GuestCommand::Admit, &CommandContext::default())
            .unwrap();
        assert_eq!(events, vec![GuestEvent::Admitted]);
    }

    #[test]
    fn handle_remove_at_zero() {
        let list = GuestList::default();
        let err = list
            .handle(GuestCommand::Remove, &CommandContext::default())
            .unwrap_err();
        assert!(
            matches!(err, GuestError::Empty),
            "expected Empty, got: {err}"
        );
    }

    #[test]
    fn handle_then_apply_roundtrip() {
        let list = GuestList::default();
        let events = list
            .handle(GuestCommand::Admit, &CommandContext::default())
            .unwrap();
        // Fold all produced events through `apply` to derive the final state.
        let final_state = events
            .iter()
            .fold(GuestList::default(), |state, event| state.apply(event));
        assert_eq!(final_state.count, 1);
    }

    #[test]
    fn execute_folds_in_place() {
        let mut list = GuestList::default();
        list.execute(GuestCommand::Admit, &CommandContext::default())
            .unwrap();
        list.execute(GuestCommand::Admit, &CommandContext::default())
            .unwrap();
        assert_eq!(list.count, 2);
    }

    #[test]
    fn execute_rejection_leaves_state_untouched() {
        let mut list = GuestList::default();
        list.execute(GuestCommand::Admit, &CommandContext::default())
            .unwrap();
        list.execute(GuestCommand::Close, &CommandContext::default())
            .unwrap();

        let before = list.clone();
        let err = list
            .execute(GuestCommand::Admit, &CommandContext::default())
            .unwrap_err();
        assert!(matches!(err, GuestError::Closed));
        assert_eq!(list, before);
    }

    #[test]
    fn domain_event_is_adjacently_tagged() {
        let json = serde_json::to_value(GuestEvent::Admitted).unwrap();
        assert_eq!(json["type"], "Admitted");
    }
}
