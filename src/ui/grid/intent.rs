use crate::ui::grid::state::Item;
use crate::ui::mvi::{Intent, Mutation};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridIntent {
    /// Screen became active. Replaces the whole list with a fresh batch.
    Load,
    /// Chip at `index` was tapped. Inserts a fresh batch right after it.
    ToggleAt { index: usize },
}

impl Intent for GridIntent {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridMutation {
    SetItems { items: Vec<Item> },
}

impl Mutation for GridMutation {}
