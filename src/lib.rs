pub mod cli;
pub mod error;
pub mod formats;
pub mod grid;
pub mod io;
pub mod operations;
pub mod report;
pub mod search;
pub mod types;

pub use error::{BodyDefect, FigError, HeaderDefect, Result};
pub use formats::bitmap::BitmapHeader;
pub use grid::Grid;
pub use report::{OutputFormat, Outcome};
pub use types::{Coords, LocatedShape, ShapeKind};
