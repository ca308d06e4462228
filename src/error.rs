use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Why a bitmap header was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderDefect {
    MissingHeight,
    MissingWidth,
    NotNumeric { offset: usize },
    ZeroDimension,
    Overflow,
    BadSeparator { offset: usize },
    MissingTerminator,
}

impl std::fmt::Display for HeaderDefect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingHeight => write!(f, "missing height"),
            Self::MissingWidth => write!(f, "missing width"),
            Self::NotNumeric { offset } => write!(f, "non-numeric character at byte {}", offset),
            Self::ZeroDimension => write!(f, "dimensions must be positive"),
            Self::Overflow => write!(f, "dimensions are too large"),
            Self::BadSeparator { offset } => write!(f, "expected one whitespace at byte {}", offset),
            Self::MissingTerminator => write!(f, "header is not terminated by a line break"),
        }
    }
}

/// Why the pixel body of a bitmap was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyDefect {
    UnexpectedChar { offset: usize, found: u8 },
    MissingSeparator { offset: usize },
    DoubledSeparator { offset: usize },
    PixelCount { expected: usize, actual: usize },
}

impl std::fmt::Display for BodyDefect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedChar { offset, found } => {
                write!(f, "unexpected byte 0x{:02x} at offset {}", found, offset)
            }
            Self::MissingSeparator { offset } => {
                write!(f, "expected one whitespace separator at offset {}", offset)
            }
            Self::DoubledSeparator { offset } => {
                write!(f, "more than one whitespace separator at offset {}", offset)
            }
            Self::PixelCount { expected, actual } => {
                write!(f, "expected {} pixels, found {}", expected, actual)
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum FigError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid header: {0}")]
    InvalidHeader(HeaderDefect),

    #[error("Invalid bitmap: {0}")]
    InvalidBitmap(BodyDefect),

    #[error("Failed to allocate a grid of {cells} cells")]
    Allocation { cells: usize },

    #[error("Cell ({row}, {col}) is out of bounds for a {height}x{width} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        height: usize,
        width: usize,
    },

    #[error("Invalid grid dimensions: {height}x{width}")]
    InvalidDimensions { height: usize, width: usize },
}

impl FigError {
    /// Header and body failures are reported to users as a single "Invalid".
    pub fn is_format_error(&self) -> bool {
        matches!(self, Self::InvalidHeader(_) | Self::InvalidBitmap(_))
    }
}

pub type Result<T> = std::result::Result<T, FigError>;
