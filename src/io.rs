use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{FigError, Result};
use crate::formats::bitmap::{self, BitmapHeader};
use crate::grid::Grid;

/// Reads the raw bytes of a bitmap file.
///
/// The handle is closed before this returns, on success and on error.
pub fn read_bitmap(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let data = fs::read(path).map_err(|source| FigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Read {} bytes from {}", data.len(), path.display());
    Ok(data)
}

/// Materializes a grid from bitmap text that already passed validation.
///
/// Only the header is parsed again. Body bytes other than `0` and `1` are
/// skipped and pixels are written in row-major file order; no separator or
/// count checks are repeated here.
pub fn parse_grid(data: &[u8]) -> Result<Grid> {
    let (header, body_start) = bitmap::parse_header(data)?;
    let BitmapHeader { height, width } = header;

    let mut grid = Grid::new(height, width)?;
    debug!("Allocated {}x{} grid", height, width);

    let pixels = data[body_start..]
        .iter()
        .filter(|&&b| bitmap::is_pixel(b))
        .take(header.pixel_count());

    for (i, &b) in pixels.enumerate() {
        grid.set(i / width, i % width, b == b'1')?;
    }

    Ok(grid)
}

/// Reads and materializes a bitmap file. The caller validates first.
pub fn load_grid(path: impl AsRef<Path>) -> Result<Grid> {
    let data = read_bitmap(path)?;
    parse_grid(&data)
}
