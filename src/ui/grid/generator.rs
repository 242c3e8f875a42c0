//! Random chip content.

use rand::Rng;

use crate::ui::grid::state::Item;

/// Items produced per `Load` / `ToggleAt`.
pub const BATCH_SIZE: usize = 11;

/// Longest run of `x` in a generated label. The shortest is one.
pub const MAX_RUN: usize = 10;

/// Produces batches of items labelled `"<n> <x-run>"`.
///
/// Numbering starts at the caller-supplied count; the run length is drawn
/// independently for every item.
pub struct ItemGenerator<R> {
    rng: R,
}

impl<R: Rng> ItemGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn generate(&mut self, current: usize) -> Vec<Item> {
        (0..BATCH_SIZE)
            .map(|offset| {
                let run = self.rng.random_range(1..=MAX_RUN);
                Item::new(format!("{} {}", current + offset, "x".repeat(run)))
            })
            .collect()
    }
}
