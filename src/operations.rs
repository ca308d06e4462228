//! File-level operations behind the `test`, `hline`, `vline` and `square`
//! commands.
//!
//! Every operation validates the whole file before anything else happens;
//! a search never runs on a file that failed validation.

use std::path::Path;

use tracing::{debug, info};

use crate::error::Result;
use crate::formats::bitmap::{self, BitmapHeader};
use crate::io::{parse_grid, read_bitmap};
use crate::report::Outcome;
use crate::types::{LocatedShape, ShapeKind};

/// Checks that `path` holds a well-formed bitmap.
///
/// Format problems come back as [`crate::FigError::InvalidHeader`] or
/// [`crate::FigError::InvalidBitmap`]; a missing file is
/// [`crate::FigError::Io`].
pub fn validate(path: impl AsRef<Path>) -> Result<BitmapHeader> {
    let data = read_bitmap(path)?;
    bitmap::validate(&data)
}

/// Validates, loads and searches `path` for one shape.
///
/// `Ok(None)` means the file is valid and holds no such shape.
pub fn find_shape(path: impl AsRef<Path>, kind: ShapeKind) -> Result<Option<LocatedShape>> {
    let path = path.as_ref();
    let data = read_bitmap(path)?;

    let header = bitmap::validate(&data)?;
    info!(
        "Searching {} ({}x{}) for the largest {}",
        path.display(),
        header.height,
        header.width,
        kind
    );

    let grid = parse_grid(&data)?;
    Ok(kind.find(&grid))
}

pub fn find_horizontal(path: impl AsRef<Path>) -> Result<Option<LocatedShape>> {
    find_shape(path, ShapeKind::Horizontal)
}

pub fn find_vertical(path: impl AsRef<Path>) -> Result<Option<LocatedShape>> {
    find_shape(path, ShapeKind::Vertical)
}

pub fn find_square(path: impl AsRef<Path>) -> Result<Option<LocatedShape>> {
    find_shape(path, ShapeKind::Square)
}

/// Runs [`validate`] and folds format failures into [`Outcome::Invalid`].
pub fn check(path: impl AsRef<Path>) -> Result<Outcome> {
    match validate(path) {
        Ok(header) => Ok(Outcome::Valid(header)),
        Err(err) if err.is_format_error() => {
            debug!("Validation failed: {}", err);
            Ok(Outcome::Invalid(err))
        }
        Err(err) => Err(err),
    }
}

/// Runs [`find_shape`] and folds format failures into [`Outcome::Invalid`].
pub fn search(path: impl AsRef<Path>, kind: ShapeKind) -> Result<Outcome> {
    match find_shape(path, kind) {
        Ok(Some(shape)) => Ok(Outcome::Found { kind, shape }),
        Ok(None) => Ok(Outcome::NotFound(kind)),
        Err(err) if err.is_format_error() => {
            debug!("Validation failed: {}", err);
            Ok(Outcome::Invalid(err))
        }
        Err(err) => Err(err),
    }
}
