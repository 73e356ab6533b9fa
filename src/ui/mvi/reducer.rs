//! Reducer trait for the gallery and modal state machines.

use super::intent::Intent;
use super::state::UiState;

/// Computes the next state from the current one and an intent.
///
/// Controllers never mutate state directly; every transition goes through
/// `reduce`, which must not touch the view or the network.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Consumes `state` and returns its successor. Intents that do not apply
    /// to the current state return it unchanged.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
