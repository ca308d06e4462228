//! Shape searches over a [`Grid`].
//!
//! Every search reports, among candidates of equal maximal size, the one with
//! the smallest `(row, col)` coordinate.

use tracing::{debug, trace};

use crate::grid::Grid;
use crate::types::{Coords, LocatedShape, ShapeKind};

/// Best candidate seen so far during a scan.
#[derive(Debug, Default, Clone, Copy)]
struct Best {
    size: usize,
    at: Coords,
}

impl Best {
    /// Records `at` if `size` beats the current best, or ties it at a smaller
    /// coordinate.
    ///
    /// Row-major scans never produce the tie case. Column-major scans do, and
    /// the comparison keeps the smaller row there.
    #[inline]
    fn offer(&mut self, size: usize, at: Coords) {
        if size > self.size || (size == self.size && at < self.at) {
            self.size = size;
            self.at = at;
        }
    }
}

/// Longest run of set cells along `lanes` independent lanes.
///
/// `cell(lane, step)` maps a lane and a position inside it to grid
/// coordinates. The returned coordinate is the last cell of the run.
fn longest_run<F>(grid: &Grid, lanes: usize, lane_len: usize, cell: F) -> Best
where
    F: Fn(usize, usize) -> Coords,
{
    let mut best = Best::default();

    for lane in 0..lanes {
        let mut run = 0usize;
        for step in 0..lane_len {
            let at = cell(lane, step);
            if grid.get_at(at) == Some(true) {
                run += 1;
                best.offer(run, at);
            } else {
                run = 0;
            }
        }
    }

    best
}

pub fn find_horizontal_line(grid: &Grid) -> Option<LocatedShape> {
    let best = longest_run(grid, grid.height(), grid.width(), |row, col| {
        Coords::new(row, col)
    });
    if best.size == 0 {
        return None;
    }

    let end = best.at;
    let start = Coords::new(end.row, end.col + 1 - best.size);
    Some(LocatedShape::new(start, end, best.size))
}

pub fn find_vertical_line(grid: &Grid) -> Option<LocatedShape> {
    let best = longest_run(grid, grid.width(), grid.height(), |col, row| {
        Coords::new(row, col)
    });
    if best.size == 0 {
        return None;
    }

    let end = best.at;
    let start = Coords::new(end.row + 1 - best.size, end.col);
    Some(LocatedShape::new(start, end, best.size))
}

/// True if the square with top-left `(row, col)` and side `dist + 1` has all
/// four edges set. Outlines that leave the grid are never set.
pub fn outline_is_set(grid: &Grid, row: usize, col: usize, dist: usize) -> bool {
    let (Some(bottom), Some(right)) = (row.checked_add(dist), col.checked_add(dist)) else {
        return false;
    };

    if !(grid.is_set(row, col)
        && grid.is_set(row, right)
        && grid.is_set(bottom, col)
        && grid.is_set(bottom, right))
    {
        return false;
    }

    (0..=dist).all(|i| {
        grid.is_set(row, col + i)
            && grid.is_set(bottom, col + i)
            && grid.is_set(row + i, col)
            && grid.is_set(row + i, right)
    })
}

/// Largest square outline, falling back to a single set pixel.
///
/// Sizes are tried from largest to smallest and anchors in row-major order,
/// so the first accepted anchor is both the largest square and the smallest
/// coordinate among squares of that size.
pub fn find_square(grid: &Grid) -> Option<LocatedShape> {
    let (height, width) = (grid.height(), grid.width());

    for dist in (0..=height.min(width)).rev() {
        trace!("Probing square outlines with side {}", dist + 1);

        for row in 0..height - dist {
            for col in 0..width - dist {
                if !grid.is_set(row, col) {
                    continue;
                }
                if dist == 0 || outline_is_set(grid, row, col, dist) {
                    return Some(LocatedShape::new(
                        Coords::new(row, col),
                        Coords::new(row + dist, col + dist),
                        dist + 1,
                    ));
                }
            }
        }
    }

    None
}

impl ShapeKind {
    /// Runs the search for this shape.
    pub fn find(self, grid: &Grid) -> Option<LocatedShape> {
        let found = match self {
            Self::Horizontal => find_horizontal_line(grid),
            Self::Vertical => find_vertical_line(grid),
            Self::Square => find_square(grid),
        };

        match &found {
            Some(shape) => debug!("Found {} of size {} at {}", self, shape.size, shape),
            None => debug!("No {} in {}x{} grid", self, grid.height(), grid.width()),
        }

        found
    }
}
