// SPDX-License-Identifier: MPL-2.0
//! Grid placement for the gallery.
//!
//! The layout is a pure function of `(item_count, cell_size, spacing,
//! container_width)`: cells fill left-to-right and wrap into rows, and the
//! result carries everything the view needs: per-cell positions, the row
//! capacity, and the total content height. No widget types appear here so
//! the placement rules stay unit-testable.

/// Fixed size shared by every cell in the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellSize {
    pub width: f32,
    pub height: f32,
}

impl CellSize {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// A square cell, the common case for thumbnails.
    pub const fn square(edge: f32) -> Self {
        Self::new(edge, edge)
    }
}

/// One positioned slot in the grid. Derived data; its only identity is the
/// index of the item it holds.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutCell {
    pub index: usize,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// The computed placement of every cell plus the grid's overall metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryLayout {
    cells: Vec<LayoutCell>,
    items_per_row: usize,
    content_height: f32,
}

impl GalleryLayout {
    /// Places `item_count` cells of `cell` size into rows within
    /// `container_width`, separated (and edged) by `spacing`.
    ///
    /// The row capacity is computed once as
    /// `floor(container_width / (cell_width + spacing))`, clamped to at
    /// least one item. The content height covers exactly the occupied rows
    /// plus the leading gap: an item count that divides evenly by the row
    /// capacity adds no trailing empty row.
    pub fn compute(item_count: usize, cell: CellSize, spacing: f32, container_width: f32) -> Self {
        let pitch_x = cell.width + spacing;
        let pitch_y = cell.height + spacing;

        let items_per_row = ((container_width / pitch_x).floor() as usize).max(1);

        let cells = (0..item_count)
            .map(|index| {
                let col = index % items_per_row;
                let row = index / items_per_row;
                LayoutCell {
                    index,
                    x: spacing + col as f32 * pitch_x,
                    y: spacing + row as f32 * pitch_y,
                    width: cell.width,
                    height: cell.height,
                }
            })
            .collect();

        let rows = item_count.div_ceil(items_per_row);
        let content_height = rows as f32 * pitch_y + spacing;

        Self {
            cells,
            items_per_row,
            content_height,
        }
    }

    /// Number of cells that fit in one row.
    pub fn items_per_row(&self) -> usize {
        self.items_per_row
    }

    /// Total height needed to show every row, including the edge gaps.
    pub fn content_height(&self) -> f32 {
        self.content_height
    }

    /// All placed cells, in item order.
    pub fn cells(&self) -> &[LayoutCell] {
        &self.cells
    }

    /// Iterates over the placed cells row by row.
    pub fn rows(&self) -> std::slice::Chunks<'_, LayoutCell> {
        self.cells.chunks(self.items_per_row)
    }
}
