//! Mutations and the mutator that derives them from intents.

use std::fmt::Debug;

use super::intent::Intent;
use super::state::UiState;

/// Marker trait for mutation objects.
///
/// A mutation is the intent-derived instruction consumed by a
/// [`Reducer`](super::Reducer). Everything non-deterministic has already
/// happened by the time a mutation exists.
pub trait Mutation: Debug + Send + 'static {}

/// Translates intents into mutations.
///
/// Unlike the reducer, a mutator may hold resources (a random source, for
/// example) and therefore takes `&mut self`.
pub trait Mutator {
    type State: UiState;
    type Intent: Intent;
    type Mutation: Mutation;

    /// Derive the mutation for `intent` given the current state.
    ///
    /// `None` means the intent does not change anything and is dropped.
    fn mutate(&mut self, state: &Self::State, intent: Self::Intent) -> Option<Self::Mutation>;
}
