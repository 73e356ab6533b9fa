//! Model-View-Intent (MVI) architecture primitives.
//!
//! The gallery and the detail overlay each keep their visible state in a
//! [`UiState`] and change it only through a [`Reducer`].
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ ViewPort
//!    ↑                                │
//!    └────────────────────────────────┘
//! ```
//!
//! - **State**: Immutable representation of UI state
//! - **Intent**: User actions or fetch completions
//! - **Reducer**: Pure function that transforms state based on intents

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
