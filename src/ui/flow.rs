//! Wrapping flow layout with horizontally centered rows.

/// Position of one laid-out cell in content coordinates.
///
/// `y` is wider than a terminal coordinate because content can be taller than
/// the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellFrame {
    pub x: u16,
    pub y: u32,
    pub width: u16,
    pub height: u16,
}

impl CellFrame {
    pub fn bottom(&self) -> u32 {
        self.y + u32::from(self.height)
    }

    pub fn contains(&self, x: u16, y: u32) -> bool {
        x >= self.x
            && u32::from(x) < u32::from(self.x) + u32::from(self.width)
            && y >= self.y
            && y < self.bottom()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlowLayout {
    pub frames: Vec<CellFrame>,
    pub content_height: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CenteredFlowLayout {
    pub column_gap: u16,
    pub row_gap: u16,
}

impl CenteredFlowLayout {
    pub fn new(column_gap: u16, row_gap: u16) -> Self {
        Self {
            column_gap,
            row_gap,
        }
    }

    /// Place cells of the given `(width, height)` sizes into rows no wider
    /// than `width`, left to right, wrapping as needed. Each row is centered.
    pub fn arrange(&self, sizes: &[(u16, u16)], width: u16) -> FlowLayout {
        let mut frames = Vec::with_capacity(sizes.len());
        let mut row: Vec<(u16, u16)> = Vec::new();
        let mut row_width: u16 = 0;
        let mut y: u32 = 0;
        let mut content_height: u32 = 0;

        for &(cell_width, cell_height) in sizes {
            let cell_width = cell_width.min(width);
            let needed = if row.is_empty() {
                cell_width
            } else {
                row_width
                    .saturating_add(self.column_gap)
                    .saturating_add(cell_width)
            };
            if !row.is_empty() && needed > width {
                content_height = self.place_row(&row, row_width, width, y, &mut frames);
                y = content_height + u32::from(self.row_gap);
                row.clear();
                row_width = cell_width;
            } else {
                row_width = needed;
            }
            row.push((cell_width, cell_height));
        }
        if !row.is_empty() {
            content_height = self.place_row(&row, row_width, width, y, &mut frames);
        }

        FlowLayout {
            frames,
            content_height,
        }
    }

    /// Returns the bottom edge of the placed row.
    fn place_row(
        &self,
        row: &[(u16, u16)],
        row_width: u16,
        width: u16,
        y: u32,
        frames: &mut Vec<CellFrame>,
    ) -> u32 {
        let mut x = width.saturating_sub(row_width) / 2;
        let mut height = 0;
        for &(cell_width, cell_height) in row {
            frames.push(CellFrame {
                x,
                y,
                width: cell_width,
                height: cell_height,
            });
            x = x
                .saturating_add(cell_width)
                .saturating_add(self.column_gap);
            height = height.max(cell_height);
        }
        y + u32::from(height)
    }
}
