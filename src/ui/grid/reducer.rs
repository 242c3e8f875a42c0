use crate::ui::grid::intent::GridMutation;
use crate::ui::grid::state::GridState;
use crate::ui::mvi::Reducer;

pub struct GridReducer;

impl Reducer for GridReducer {
    type State = GridState;
    type Mutation = GridMutation;

    fn reduce(_state: Self::State, mutation: Self::Mutation) -> Self::State {
        // Every mutation replaces the list wholesale.
        match mutation {
            GridMutation::SetItems { items } => GridState { items },
        }
    }
}
