//! Grid placement of problems
//!
//! Problem `i` goes to row `i / columns` and column `i % columns`, filling rows
//! left to right from the top-left cell. Cell geometry is a direct pass-through
//! of the grid spec: no auto-sizing and no reflow. Problems beyond
//! `columns * rows` keep flowing into rows past the nominal last row; how that
//! overflow looks is a rendering concern.

use crate::{LayoutError, Rect, Result, Size};
use worksheet_model::{GridSpec, Problem};

/// Where a single problem lands on the page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellPlacement {
    /// Index of the problem in the page sequence
    pub index: usize,
    /// Zero-based row
    pub row: usize,
    /// Zero-based column
    pub column: usize,
    /// Cell bounds relative to the grid origin
    pub bounds: Rect,
    /// The placed problem
    pub problem: Problem,
}

/// Validated grid used for placement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    spec: GridSpec,
}

impl GridLayout {
    /// Validate the grid spec and wrap it for placement
    pub fn new(spec: GridSpec) -> Result<Self> {
        spec.validate()
            .map_err(|e| LayoutError::InvalidGrid(e.to_string()))?;
        Ok(Self { spec })
    }

    pub fn spec(&self) -> &GridSpec {
        &self.spec
    }

    /// Cells in the nominal grid
    pub fn capacity(&self) -> usize {
        self.spec.capacity()
    }

    /// Number of problems that fall past the nominal last row
    pub fn overflow_count(&self, problem_count: usize) -> usize {
        problem_count.saturating_sub(self.capacity())
    }

    /// Row and column of the problem at `index`
    pub fn cell_position(&self, index: usize) -> (usize, usize) {
        let columns = self.spec.columns as usize;
        (index / columns, index % columns)
    }

    /// Bounds of the cell at `index`
    pub fn cell_bounds(&self, index: usize) -> Rect {
        let (row, column) = self.cell_position(index);
        Rect::new(
            column as f64 * (self.spec.item_width + self.spec.column_spacing),
            row as f64 * (self.spec.item_height + self.spec.row_spacing),
            self.spec.item_width,
            self.spec.item_height,
        )
    }

    /// Place every problem in row-major order
    pub fn place(&self, problems: &[Problem]) -> Vec<CellPlacement> {
        let overflow = self.overflow_count(problems.len());
        if overflow > 0 {
            tracing::debug!(
                "{} problems exceed the {}x{} grid by {}",
                problems.len(),
                self.spec.columns,
                self.spec.rows,
                overflow
            );
        }

        problems
            .iter()
            .enumerate()
            .map(|(index, problem)| {
                let (row, column) = self.cell_position(index);
                CellPlacement {
                    index,
                    row,
                    column,
                    bounds: self.cell_bounds(index),
                    problem: *problem,
                }
            })
            .collect()
    }

    /// Bounding size of `count` placed cells
    pub fn content_size(&self, count: usize) -> Size {
        if count == 0 {
            return Size::default();
        }
        let columns = self.spec.columns as usize;
        let used_columns = count.min(columns);
        let used_rows = count.div_ceil(columns);

        Size::new(
            used_columns as f64 * self.spec.item_width
                + (used_columns - 1) as f64 * self.spec.column_spacing,
            used_rows as f64 * self.spec.item_height
                + (used_rows - 1) as f64 * self.spec.row_spacing,
        )
    }
}

/// Place problems on a grid in one call
pub fn place(grid: &GridSpec, problems: &[Problem]) -> Result<Vec<CellPlacement>> {
    Ok(GridLayout::new(*grid)?.place(problems))
}

#[cfg(test)]
mod tests {
    use super::*;
    use worksheet_model::Operator;

    fn problems(n: usize) -> Vec<Problem> {
        (0..n)
            .map(|i| Problem::new(i as i64, 1, Operator::Add))
            .collect()
    }

    fn grid(columns: u32, rows: u32) -> GridSpec {
        GridSpec {
            columns,
            rows,
            item_width: 120.0,
            item_height: 100.0,
            row_spacing: 16.0,
            column_spacing: 8.0,
        }
    }

    #[test]
    fn test_row_major_order() {
        let placed = place(&grid(3, 2), &problems(5)).unwrap();
        let positions: Vec<(usize, usize)> = placed.iter().map(|p| (p.row, p.column)).collect();
        assert_eq!(positions, vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1)]);
        assert_eq!(placed[4].problem.first_operand, 4);
    }

    #[test]
    fn test_cell_geometry_pass_through() {
        let layout = GridLayout::new(grid(3, 2)).unwrap();
        assert_eq!(layout.cell_bounds(0), Rect::new(0.0, 0.0, 120.0, 100.0));
        assert_eq!(layout.cell_bounds(4), Rect::new(128.0, 116.0, 120.0, 100.0));
    }

    #[test]
    fn test_overflow_continues_past_last_row() {
        let layout = GridLayout::new(grid(2, 2)).unwrap();
        let placed = layout.place(&problems(7));
        assert_eq!(placed.len(), 7);
        assert_eq!((placed[6].row, placed[6].column), (3, 0));
        assert_eq!(layout.overflow_count(7), 3);
        assert_eq!(layout.overflow_count(3), 0);
    }

    #[test]
    fn test_invalid_grid_rejected() {
        assert!(matches!(
            place(&grid(0, 2), &problems(1)),
            Err(LayoutError::InvalidGrid(_))
        ));
    }

    #[test]
    fn test_content_size() {
        let layout = GridLayout::new(grid(3, 2)).unwrap();
        assert_eq!(layout.content_size(0), Size::default());
        assert_eq!(layout.content_size(2), Size::new(248.0, 100.0));
        assert_eq!(layout.content_size(4), Size::new(376.0, 216.0));
    }

    #[test]
    fn test_placement_is_idempotent() {
        let spec = grid(4, 3);
        let input = problems(11);
        assert_eq!(place(&spec, &input).unwrap(), place(&spec, &input).unwrap());
    }
}
