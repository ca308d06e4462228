use serde::Serialize;

/// A `(row, col)` cell position. Ordering is row first, then column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct Coords {
    pub row: usize,
    pub col: usize,
}

impl Coords {
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Coords {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.row, self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Horizontal,
    Vertical,
    Square,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 3] = [Self::Horizontal, Self::Vertical, Self::Square];

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal line",
            Self::Vertical => "vertical line",
            Self::Square => "square",
        }
    }
}

impl std::fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A shape located by one of the searches.
///
/// `size` is the run length for lines and the side length in pixels for
/// squares, so a single pixel has size 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LocatedShape {
    pub start: Coords,
    pub end: Coords,
    pub size: usize,
}

impl LocatedShape {
    pub fn new(start: Coords, end: Coords, size: usize) -> Self {
        Self { start, end, size }
    }
}

impl std::fmt::Display for LocatedShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coords_ordering() {
        assert!(Coords::new(0, 5) < Coords::new(1, 0));
        assert!(Coords::new(2, 1) < Coords::new(2, 3));
        assert_eq!(Coords::new(4, 4), Coords::new(4, 4));
    }

    #[test]
    fn test_display() {
        let shape = LocatedShape::new(Coords::new(0, 1), Coords::new(2, 3), 3);
        assert_eq!(format!("{}", shape), "0 1 2 3");
        assert_eq!(format!("{}", ShapeKind::Vertical), "vertical line");
    }
}
