//! Grid layout: children in equal cells, row-major.

use crate::geometry::{Rect, Size};

use super::Layout;

/// Arranges children into a fixed number of columns, row-major.
///
/// Contract:
/// - measure: `columns * max preferred width` by `rows * max preferred
///   height`, where `rows = ceil(children / columns)`;
/// - arrange: the container is divided into equal cells; indivisible
///   remainders go one cell at a time to the leftmost columns and topmost
///   rows, so the cells always tile the container exactly.
#[derive(Debug, Clone)]
pub struct GridLayout {
    columns: usize,
}

impl GridLayout {
    /// A grid with the given number of columns. Clamped to at least one.
    pub fn new(columns: usize) -> Self {
        Self { columns: columns.max(1) }
    }

    fn rows(&self, children: usize) -> usize {
        children.div_ceil(self.columns)
    }

    /// Split `extent` into `parts` runs, earlier runs taking the remainder.
    fn split(extent: i32, parts: usize) -> Vec<i32> {
        if parts == 0 {
            return Vec::new();
        }
        let parts_i = parts as i32;
        let share = extent / parts_i;
        let remainder = (extent % parts_i) as usize;
        (0..parts)
            .map(|i| share + i32::from(i < remainder))
            .collect()
    }
}

impl Layout for GridLayout {
    fn measure(&self, child_preferences: &[Size]) -> Size {
        if child_preferences.is_empty() {
            return Size::ZERO;
        }
        let cell = child_preferences
            .iter()
            .fold(Size::ZERO, |acc, &pref| acc.max(pref));
        let rows = self.rows(child_preferences.len());
        Size::new(
            cell.width * self.columns as i32,
            cell.height * rows as i32,
        )
    }

    fn arrange(&self, child_preferences: &[Size], size: Size) -> Vec<Rect> {
        let count = child_preferences.len();
        if count == 0 {
            return Vec::new();
        }

        let rows = self.rows(count);
        let col_widths = Self::split(size.width, self.columns);
        let row_heights = Self::split(size.height, rows);

        // Prefix sums give each cell's origin.
        let mut col_x = Vec::with_capacity(self.columns);
        let mut x = 0;
        for &w in &col_widths {
            col_x.push(x);
            x += w;
        }
        let mut row_y = Vec::with_capacity(rows);
        let mut y = 0;
        for &h in &row_heights {
            row_y.push(y);
            y += h;
        }

        (0..count)
            .map(|i| {
                let col = i % self.columns;
                let row = i / self.columns;
                Rect::new(col_x[col], row_y[row], col_widths[col], row_heights[row])
            })
            .collect()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
