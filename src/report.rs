use clap::ValueEnum;
use serde::Serialize;

use crate::error::FigError;
use crate::formats::bitmap::BitmapHeader;
use crate::types::{Coords, LocatedShape, ShapeKind};

pub const VALID_TEXT: &str = "Valid";
pub const INVALID_TEXT: &str = "Invalid";
pub const NOT_FOUND_TEXT: &str = "Not found";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// What a single command produced.
///
/// I/O and allocation failures are not outcomes; they are returned as
/// errors by the operations.
#[derive(Debug)]
pub enum Outcome {
    Valid(BitmapHeader),
    Invalid(FigError),
    Found { kind: ShapeKind, shape: LocatedShape },
    NotFound(ShapeKind),
}

#[derive(Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum JsonReport {
    Valid {
        height: usize,
        width: usize,
    },
    Invalid {
        reason: String,
    },
    Found {
        shape: ShapeKind,
        start: Coords,
        end: Coords,
        size: usize,
    },
    NotFound {
        shape: ShapeKind,
    },
}

impl Outcome {
    /// `Invalid` is the only outcome that fails the process.
    pub fn is_success(&self) -> bool {
        !matches!(self, Self::Invalid(_))
    }

    /// Text reports print `Invalid` on stderr; everything else goes to stdout.
    pub fn writes_to_stderr(&self, format: OutputFormat) -> bool {
        format == OutputFormat::Text && !self.is_success()
    }

    pub fn render(&self, format: OutputFormat) -> serde_json::Result<String> {
        match format {
            OutputFormat::Text => Ok(self.render_text()),
            OutputFormat::Json => serde_json::to_string(&self.json()),
        }
    }

    fn render_text(&self) -> String {
        match self {
            Self::Valid(_) => VALID_TEXT.to_string(),
            Self::Invalid(_) => INVALID_TEXT.to_string(),
            Self::Found { shape, .. } => shape.to_string(),
            Self::NotFound(_) => NOT_FOUND_TEXT.to_string(),
        }
    }

    fn json(&self) -> JsonReport {
        match self {
            Self::Valid(header) => JsonReport::Valid {
                height: header.height,
                width: header.width,
            },
            Self::Invalid(err) => JsonReport::Invalid {
                reason: err.to_string(),
            },
            Self::Found { kind, shape } => JsonReport::Found {
                shape: *kind,
                start: shape.start,
                end: shape.end,
                size: shape.size,
            },
            Self::NotFound(kind) => JsonReport::NotFound { shape: *kind },
        }
    }
}
