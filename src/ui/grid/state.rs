use crate::ui::mvi::UiState;

/// One chip's worth of content. The identity doubles as the label and the
/// diff key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Item {
    identity: String,
}

impl Item {
    pub fn new(identity: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
        }
    }

    pub fn identity(&self) -> &str {
        &self.identity
    }
}

/// Render-side grouping of items. The grid only ever has one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Section {
    pub items: Vec<Item>,
}

impl Section {
    pub const IDENTITY: &'static str = "Section";

    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn identity(&self) -> &'static str {
        Self::IDENTITY
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GridState {
    pub items: Vec<Item>,
}

impl UiState for GridState {}

impl GridState {
    /// Read-only snapshot handed to the renderer.
    pub fn section(&self) -> Section {
        Section::new(self.items.clone())
    }
}
