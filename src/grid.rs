//! Owned, bounds-checked bit grid.

use crate::error::{FigError, Result};
use crate::types::Coords;

/// A fixed-size two-dimensional grid of single-bit cells stored row-major.
///
/// The buffer always holds exactly `height * width` cells and the grid is
/// never resized after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<bool>,
    height: usize,
    width: usize,
}

impl Grid {
    /// Allocates an all-clear grid.
    ///
    /// Fails with [`FigError::InvalidDimensions`] if either side is zero and
    /// with [`FigError::Allocation`] if the buffer cannot be reserved.
    pub fn new(height: usize, width: usize) -> Result<Self> {
        if height == 0 || width == 0 {
            return Err(FigError::InvalidDimensions { height, width });
        }

        let cells = height
            .checked_mul(width)
            .ok_or(FigError::Allocation { cells: usize::MAX })?;

        let mut buffer = Vec::new();
        buffer
            .try_reserve_exact(cells)
            .map_err(|_| FigError::Allocation { cells })?;
        buffer.resize(cells, false);

        Ok(Self {
            cells: buffer,
            height,
            width,
        })
    }

    /// Builds a grid from row-major cells.
    pub fn from_cells(height: usize, width: usize, cells: Vec<bool>) -> Result<Self> {
        if height == 0 || width == 0 || height.checked_mul(width) != Some(cells.len()) {
            return Err(FigError::InvalidDimensions { height, width });
        }
        Ok(Self {
            cells,
            height,
            width,
        })
    }

    /// Builds a grid from rows of `0`/`1` values. Any non-zero value is set.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().len());

        let mut grid = Self::new(height, width)?;
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != width {
                return Err(FigError::InvalidDimensions {
                    height,
                    width: values.len(),
                });
            }
            for (col, &v) in values.iter().enumerate() {
                grid.set(row, col, v != 0)?;
            }
        }
        Ok(grid)
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.height && col < self.width {
            Some(row * self.width + col)
        } else {
            None
        }
    }

    /// Returns the cell at `(row, col)`, or `None` outside the grid.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        self.offset(row, col).map(|i| self.cells[i])
    }

    /// Like [`Grid::get`] but reports out-of-range access as an error.
    pub fn try_get(&self, row: usize, col: usize) -> Result<bool> {
        self.get(row, col).ok_or_else(|| self.out_of_bounds(row, col))
    }

    #[inline]
    pub fn get_at(&self, at: Coords) -> Option<bool> {
        self.get(at.row, at.col)
    }

    /// True only for an in-range cell that is set.
    #[inline]
    pub fn is_set(&self, row: usize, col: usize) -> bool {
        self.get(row, col) == Some(true)
    }

    pub fn set(&mut self, row: usize, col: usize, value: bool) -> Result<()> {
        let i = self
            .offset(row, col)
            .ok_or_else(|| self.out_of_bounds(row, col))?;
        self.cells[i] = value;
        Ok(())
    }

    pub fn count_set(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    pub fn row(&self, row: usize) -> Option<&[bool]> {
        if row >= self.height {
            return None;
        }
        let start = row * self.width;
        Some(&self.cells[start..start + self.width])
    }

    fn out_of_bounds(&self, row: usize, col: usize) -> FigError {
        FigError::OutOfBounds {
            row,
            col,
            height: self.height,
            width: self.width,
        }
    }
}
