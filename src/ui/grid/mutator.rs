use rand::Rng;

use crate::ui::grid::generator::ItemGenerator;
use crate::ui::grid::intent::{GridIntent, GridMutation};
use crate::ui::grid::state::GridState;
use crate::ui::mvi::Mutator;

/// Turns grid intents into `SetItems` mutations.
///
/// `Load` replaces the list; `ToggleAt` splices a batch in after the tapped
/// chip. A `ToggleAt` past the end of the list produces no mutation.
pub struct GridMutator<R> {
    generator: ItemGenerator<R>,
}

impl<R: Rng> GridMutator<R> {
    pub fn new(rng: R) -> Self {
        Self {
            generator: ItemGenerator::new(rng),
        }
    }
}

impl<R: Rng> Mutator for GridMutator<R> {
    type State = GridState;
    type Intent = GridIntent;
    type Mutation = GridMutation;

    fn mutate(&mut self, state: &GridState, intent: GridIntent) -> Option<GridMutation> {
        let current = state.items.len();
        match intent {
            GridIntent::Load => Some(GridMutation::SetItems {
                items: self.generator.generate(current),
            }),
            GridIntent::ToggleAt { index } => {
                if index >= current {
                    tracing::debug!(index, len = current, "toggle index out of range, ignoring");
                    return None;
                }
                let mut items = state.items.clone();
                let at = index + 1;
                items.splice(at..at, self.generator.generate(current));
                Some(GridMutation::SetItems { items })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::grid::state::Item;
    use crate::ui::grid::BATCH_SIZE;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn mutator() -> GridMutator<Pcg32> {
        GridMutator::new(Pcg32::seed_from_u64(3))
    }

    fn items_of(mutation: Option<GridMutation>) -> Vec<Item> {
        match mutation {
            Some(GridMutation::SetItems { items }) => items,
            None => panic!("expected a mutation"),
        }
    }

    #[test]
    fn load_on_empty_numbers_from_zero() {
        let items = items_of(mutator().mutate(&GridState::default(), GridIntent::Load));
        assert_eq!(items.len(), BATCH_SIZE);
        assert!(items[0].identity().starts_with("0 "));
        assert!(items[10].identity().starts_with("10 "));
    }

    #[test]
    fn load_replaces_instead_of_appending() {
        let state = GridState {
            items: vec![Item::new("a"), Item::new("b"), Item::new("c")],
        };
        let items = items_of(mutator().mutate(&state, GridIntent::Load));
        assert_eq!(items.len(), BATCH_SIZE);
        assert!(items[0].identity().starts_with("3 "));
        assert!(!items.contains(&Item::new("a")));
    }

    #[test]
    fn toggle_inserts_after_index() {
        let state = GridState {
            items: vec![Item::new("A"), Item::new("B"), Item::new("C")],
        };
        let items = items_of(mutator().mutate(&state, GridIntent::ToggleAt { index: 1 }));
        assert_eq!(items.len(), 14);
        assert_eq!(items[0], Item::new("A"));
        assert_eq!(items[1], Item::new("B"));
        assert!(items[2].identity().starts_with("3 "));
        assert!(items[12].identity().starts_with("13 "));
        assert_eq!(items[13], Item::new("C"));
    }

    #[test]
    fn toggle_at_last_index_appends() {
        let state = GridState {
            items: vec![Item::new("A"), Item::new("B")],
        };
        let items = items_of(mutator().mutate(&state, GridIntent::ToggleAt { index: 1 }));
        assert_eq!(&items[..2], &[Item::new("A"), Item::new("B")]);
        assert!(items[2].identity().starts_with("2 "));
    }

    #[test]
    fn toggle_out_of_range_is_dropped() {
        let state = GridState {
            items: vec![Item::new("A")],
        };
        assert!(mutator()
            .mutate(&state, GridIntent::ToggleAt { index: 1 })
            .is_none());
        assert!(mutator()
            .mutate(&GridState::default(), GridIntent::ToggleAt { index: 0 })
            .is_none());
    }
}
