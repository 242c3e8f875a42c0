//! Recycling chip grid: diffs snapshots, reuses cells, lays them out.

use std::collections::HashMap;

use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::widgets::Widget;

use crate::config::LayoutConfig;
use crate::ui::cell::{ChipAppearance, ChipCell, Highlight, CHIP_CELL};
use crate::ui::diff::{diff, SectionDiff};
use crate::ui::flow::{CellFrame, CenteredFlowLayout};
use crate::ui::grid::Section;
use crate::ui::pool::{CellPool, PoolError, PoolStats};

/// What [`GridView::apply`] did with a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// Cells were carried over and the changes animated.
    Animated(SectionDiff),
    /// The diff failed; every cell was rebuilt without animation.
    Reloaded,
}

pub struct GridView {
    section: Section,
    /// One bound cell per item of `section`, same order.
    cells: Vec<ChipCell>,
    pool: CellPool<ChipCell>,
    layout: CenteredFlowLayout,
    frames: Vec<CellFrame>,
    content_height: u32,
    viewport: Rect,
    scroll: u32,
    focus: Option<usize>,
    /// Highlight and remaining ticks, keyed by item identity.
    highlights: HashMap<String, (Highlight, u8)>,
    highlight_ticks: u8,
    snapshots: u64,
}

impl GridView {
    pub fn new(layout: &LayoutConfig, highlight_ticks: u8) -> Self {
        let padding_x = layout.padding_x;
        let mut pool = CellPool::new();
        pool.register(CHIP_CELL, move || ChipCell::new(padding_x));
        Self {
            section: Section::default(),
            cells: Vec::new(),
            pool,
            layout: CenteredFlowLayout::new(layout.column_gap, layout.row_gap),
            frames: Vec::new(),
            content_height: 0,
            viewport: Rect::default(),
            scroll: 0,
            focus: None,
            highlights: HashMap::new(),
            highlight_ticks,
            snapshots: 0,
        }
    }

    /// Show a new snapshot.
    pub fn apply(&mut self, section: Section) -> Result<ApplyOutcome, PoolError> {
        tracing::debug!(
            section = section.identity(),
            items = section.len(),
            "applying snapshot"
        );
        let outcome = match diff(&self.section, &section) {
            Ok(changes) => {
                self.carry_over(&section, &changes)?;
                ApplyOutcome::Animated(changes)
            }
            Err(err) => {
                tracing::warn!(%err, "diff failed, reloading grid");
                self.reload(&section)?;
                ApplyOutcome::Reloaded
            }
        };
        self.section = section;
        self.snapshots += 1;
        if let Some(index) = self.focus {
            self.focus = self.cells.len().checked_sub(1).map(|last| index.min(last));
        }
        self.relayout();
        Ok(outcome)
    }

    fn carry_over(&mut self, section: &Section, changes: &SectionDiff) -> Result<(), PoolError> {
        let old_positions: HashMap<&str, usize> = self
            .section
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| (item.identity(), index))
            .collect();
        let mut previous: Vec<Option<ChipCell>> =
            std::mem::take(&mut self.cells).into_iter().map(Some).collect();

        let mut fresh = vec![false; section.len()];
        for &index in &changes.inserted {
            fresh[index] = true;
        }

        let mut cells = Vec::with_capacity(section.len());
        for (index, item) in section.items.iter().enumerate() {
            let carried = if fresh[index] {
                None
            } else {
                old_positions
                    .get(item.identity())
                    .and_then(|&from| previous.get_mut(from).and_then(Option::take))
            };
            let cell = match carried {
                Some(cell) => cell,
                None => {
                    let mut cell = self.pool.dequeue(CHIP_CELL)?;
                    cell.bind(item);
                    cell
                }
            };
            cells.push(cell);
        }
        // Cells nobody claimed belong to removed items.
        for cell in previous.into_iter().flatten() {
            self.pool.recycle(CHIP_CELL, cell)?;
        }
        self.cells = cells;

        for &index in &changes.removed {
            self.highlights.remove(self.section.items[index].identity());
        }
        if self.highlight_ticks > 0 {
            let ticks = self.highlight_ticks;
            for &index in &changes.inserted {
                self.highlights.insert(
                    section.items[index].identity().to_string(),
                    (Highlight::Inserted, ticks),
                );
            }
            for step in &changes.moved {
                self.highlights.insert(
                    section.items[step.to].identity().to_string(),
                    (Highlight::Moved, ticks),
                );
            }
        }
        Ok(())
    }

    fn reload(&mut self, section: &Section) -> Result<(), PoolError> {
        for cell in std::mem::take(&mut self.cells) {
            self.pool.recycle(CHIP_CELL, cell)?;
        }
        self.highlights.clear();
        for item in &section.items {
            let mut cell = self.pool.dequeue(CHIP_CELL)?;
            cell.bind(item);
            self.cells.push(cell);
        }
        Ok(())
    }

    fn relayout(&mut self) {
        let sizes: Vec<(u16, u16)> = self.cells.iter().map(ChipCell::preferred_size).collect();
        let layout = self.layout.arrange(&sizes, self.viewport.width);
        self.frames = layout.frames;
        self.content_height = layout.content_height;
        self.scroll = self.scroll.min(self.max_scroll());
    }

    /// Screen area the grid is drawn into.
    pub fn set_viewport(&mut self, viewport: Rect) {
        if self.viewport == viewport {
            return;
        }
        self.viewport = viewport;
        self.relayout();
        if let Some(index) = self.focus {
            self.ensure_visible(index);
        }
    }

    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    /// Advance highlight animations by one tick. Returns `true` if any
    /// highlight expired.
    pub fn on_tick(&mut self) -> bool {
        let before = self.highlights.len();
        self.highlights.retain(|_, (_, ticks)| {
            *ticks = ticks.saturating_sub(1);
            *ticks > 0
        });
        self.highlights.len() != before
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of snapshots applied so far.
    pub fn snapshots(&self) -> u64 {
        self.snapshots
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(ChipCell::label)
    }

    pub fn highlight(&self, index: usize) -> Option<Highlight> {
        let item = self.section.items.get(index)?;
        self.highlights.get(item.identity()).map(|(kind, _)| *kind)
    }

    pub fn pool_stats(&self) -> Option<PoolStats> {
        self.pool.stats(CHIP_CELL)
    }

    pub fn focus(&self) -> Option<usize> {
        self.focus
    }

    /// Move keyboard focus by `delta` chips, wrapping around.
    pub fn move_focus(&mut self, delta: isize) {
        if self.cells.is_empty() {
            self.focus = None;
            return;
        }
        let len = self.cells.len() as isize;
        let next = match self.focus {
            None if delta < 0 => len - 1,
            None => 0,
            Some(index) => (index as isize + delta).rem_euclid(len),
        };
        self.focus = Some(next as usize);
        self.ensure_visible(next as usize);
    }

    pub fn scroll(&self) -> u32 {
        self.scroll
    }

    pub fn content_height(&self) -> u32 {
        self.content_height
    }

    fn max_scroll(&self) -> u32 {
        self.content_height
            .saturating_sub(u32::from(self.viewport.height))
    }

    pub fn scroll_by(&mut self, delta: i32) {
        let target = i64::from(self.scroll) + i64::from(delta);
        self.scroll = target.clamp(0, i64::from(self.max_scroll())) as u32;
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll = self.max_scroll();
    }

    fn ensure_visible(&mut self, index: usize) {
        let Some(frame) = self.frames.get(index) else {
            return;
        };
        let height = u32::from(self.viewport.height);
        if frame.y < self.scroll {
            self.scroll = frame.y;
        } else if frame.bottom() > self.scroll + height {
            self.scroll = frame.bottom().saturating_sub(height);
        }
    }

    /// Where chip `index` is drawn, if it is entirely inside the viewport.
    pub fn screen_rect(&self, index: usize) -> Option<Rect> {
        let frame = self.frames.get(index)?;
        let visible_bottom = self.scroll + u32::from(self.viewport.height);
        if frame.y < self.scroll || frame.bottom() > visible_bottom {
            return None;
        }
        let y = u16::try_from(frame.y - self.scroll).ok()?;
        Some(Rect::new(
            self.viewport.x.saturating_add(frame.x),
            self.viewport.y.saturating_add(y),
            frame.width,
            frame.height,
        ))
    }

    /// Index of the chip drawn at screen position `(column, row)`.
    ///
    /// Chips cut off by the viewport edge are not hit.
    pub fn index_at(&self, column: u16, row: u16) -> Option<usize> {
        if !self.viewport.contains(Position::new(column, row)) {
            return None;
        }
        let x = column - self.viewport.x;
        let y = self.scroll + u32::from(row - self.viewport.y);
        let index = self.frames.iter().position(|frame| frame.contains(x, y))?;
        self.screen_rect(index).map(|_| index)
    }

    fn appearance(&self, index: usize) -> ChipAppearance {
        ChipAppearance {
            focused: self.focus == Some(index),
            highlight: self.highlight(index),
        }
    }
}

impl Widget for &GridView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (index, cell) in self.cells.iter().enumerate() {
            let Some(rect) = self.screen_rect(index) else {
                continue;
            };
            if area.intersection(rect) != rect {
                continue;
            }
            cell.widget(self.appearance(index)).render(rect, buf);
        }
    }
}
