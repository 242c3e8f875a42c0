//! Base trait for intents (user/system actions) in MVI architecture.

use std::fmt::Debug;

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (clicks, key presses)
/// - System events (screen activation)
///
/// Intents are turned into mutations by a [`Mutator`](super::Mutator).
pub trait Intent: Debug + Send + 'static {}
