mod generator;
mod intent;
mod mutator;
mod reducer;
mod state;

pub use generator::{ItemGenerator, BATCH_SIZE, MAX_RUN};
pub use intent::{GridIntent, GridMutation};
pub use mutator::GridMutator;
pub use reducer::GridReducer;
pub use state::{GridState, Item, Section};
