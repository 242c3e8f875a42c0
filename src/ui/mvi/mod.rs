//! Model-View-Intent (MVI) architecture primitives.
//!
//! This module provides base traits for implementing unidirectional
//! data flow in the UI layer, plus the [`Store`] that drives them.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Mutator ──→ Mutation ──→ Reducer ──→ State ──→ View
//!    ↑                                                        │
//!    └────────────────────────────────────────────────────────┘
//! ```
//!
//! - **State**: Immutable representation of UI state
//! - **Intent**: User actions or system events
//! - **Mutator**: Turns an intent into a mutation (may consult randomness)
//! - **Mutation**: Concrete instruction for the reducer
//! - **Reducer**: Pure function that transforms state based on mutations
//! - **Store**: Owns the state, queues intents, notifies subscribers

mod intent;
mod mutation;
mod reducer;
mod state;
mod store;

pub use intent::Intent;
pub use mutation::{Mutation, Mutator};
pub use reducer::Reducer;
pub use state::UiState;
pub use store::{Store, SubscriptionId};
