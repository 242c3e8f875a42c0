use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::grid::Item;
use crate::ui::pool::{CellKind, ReusableCell};
use crate::ui::theme::{
    CHIP_BACKGROUND, CHIP_BORDER, CHIP_INSERTED, CHIP_MOVED, CHIP_TEXT, FOCUS_BORDER,
};

pub const CHIP_CELL: CellKind = CellKind::new("chip");

/// Rows a chip occupies: top border, label, bottom border.
pub const CHIP_HEIGHT: u16 = 3;

/// How a chip should be drawn this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChipAppearance {
    pub focused: bool,
    pub highlight: Option<Highlight>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    Inserted,
    Moved,
}

/// Bordered label showing one item's identity.
#[derive(Debug, Clone)]
pub struct ChipCell {
    label: String,
    padding_x: u16,
}

impl ChipCell {
    pub fn new(padding_x: u16) -> Self {
        Self {
            label: String::new(),
            padding_x,
        }
    }

    /// Show `item`. Whatever the cell displayed before is overwritten.
    pub fn bind(&mut self, item: &Item) {
        self.label.clear();
        self.label.push_str(item.identity());
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Content size including padding and borders.
    pub fn preferred_size(&self) -> (u16, u16) {
        let text = u16::try_from(self.label.chars().count()).unwrap_or(u16::MAX);
        let width = text
            .saturating_add(self.padding_x.saturating_mul(2))
            .saturating_add(2);
        (width, CHIP_HEIGHT)
    }

    pub fn widget(&self, appearance: ChipAppearance) -> Paragraph<'_> {
        let background = match appearance.highlight {
            Some(Highlight::Inserted) => CHIP_INSERTED,
            Some(Highlight::Moved) => CHIP_MOVED,
            None => CHIP_BACKGROUND,
        };
        let body = Style::default().fg(CHIP_TEXT).bg(background);
        let border = if appearance.focused {
            Style::default()
                .fg(FOCUS_BORDER)
                .bg(background)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(CHIP_BORDER).bg(background)
        };

        Paragraph::new(self.label.as_str())
            .style(body)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border),
            )
    }
}

impl ReusableCell for ChipCell {
    fn prepare_for_reuse(&mut self) {
        self.label.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_overwrites_previous_label() {
        let mut cell = ChipCell::new(1);
        cell.bind(&Item::new("12 xxxxxxxxxx"));
        cell.bind(&Item::new("3 x"));
        assert_eq!(cell.label(), "3 x");
    }

    #[test]
    fn reuse_clears_label() {
        let mut cell = ChipCell::new(1);
        cell.bind(&Item::new("0 xx"));
        cell.prepare_for_reuse();
        assert!(cell.label().is_empty());
    }

    #[test]
    fn size_follows_label() {
        let mut cell = ChipCell::new(2);
        cell.bind(&Item::new("10 xxx"));
        // 6 chars + 2 * 2 padding + 2 borders
        assert_eq!(cell.preferred_size(), (12, CHIP_HEIGHT));
    }
}
