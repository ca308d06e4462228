use serde::Serialize;
use tracing::debug;

use crate::error::{BodyDefect, FigError, HeaderDefect, Result};

const PIXEL_CLEAR: u8 = b'0';
const PIXEL_SET: u8 = b'1';
const HEADER_TERMINATOR: u8 = b'\n';

/// Dimensions declared by the first line of a bitmap file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BitmapHeader {
    pub height: usize,
    pub width: usize,
}

impl BitmapHeader {
    /// Number of pixels the body must hold. Never overflows for a header
    /// returned by [`parse_header`].
    #[inline]
    pub const fn pixel_count(&self) -> usize {
        self.height * self.width
    }
}

#[inline]
pub(crate) const fn is_pixel(b: u8) -> bool {
    b == PIXEL_CLEAR || b == PIXEL_SET
}

#[inline]
pub(crate) const fn is_separator(b: u8) -> bool {
    b.is_ascii_whitespace()
}

/// Reads a run of decimal digits starting at `pos`.
///
/// Returns the value and the offset just past the last digit, or `None` if
/// `pos` does not start a digit.
fn read_number(
    data: &[u8],
    pos: usize,
) -> Option<(std::result::Result<usize, HeaderDefect>, usize)> {
    let digits = data[pos.min(data.len())..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();

    if digits == 0 {
        return None;
    }

    let value = data[pos..pos + digits].iter().try_fold(0usize, |acc, &d| {
        acc.checked_mul(10)
            .and_then(|v| v.checked_add((d - b'0') as usize))
            .ok_or(HeaderDefect::Overflow)
    });

    Some((value, pos + digits))
}

fn missing_number(data: &[u8], pos: usize, missing: HeaderDefect) -> FigError {
    match data.get(pos) {
        None => FigError::InvalidHeader(missing),
        Some(&b) if is_separator(b) => {
            FigError::InvalidHeader(HeaderDefect::BadSeparator { offset: pos })
        }
        Some(_) => FigError::InvalidHeader(HeaderDefect::NotNumeric { offset: pos }),
    }
}

/// Parses `<height> <width>\n` at the start of `data`.
///
/// Returns the header and the offset of the first body byte.
pub fn parse_header(data: &[u8]) -> Result<(BitmapHeader, usize)> {
    let (height, pos) = read_number(data, 0)
        .ok_or_else(|| missing_number(data, 0, HeaderDefect::MissingHeight))?;
    let height = height.map_err(FigError::InvalidHeader)?;

    match data.get(pos) {
        Some(&b) if is_separator(b) => {}
        Some(_) => {
            return Err(FigError::InvalidHeader(HeaderDefect::NotNumeric {
                offset: pos,
            }));
        }
        None => return Err(FigError::InvalidHeader(HeaderDefect::MissingWidth)),
    }

    let (width, pos) = read_number(data, pos + 1)
        .ok_or_else(|| missing_number(data, pos + 1, HeaderDefect::MissingWidth))?;
    let width = width.map_err(FigError::InvalidHeader)?;

    match data.get(pos) {
        Some(&HEADER_TERMINATOR) => {}
        Some(&b) if is_separator(b) => {
            return Err(FigError::InvalidHeader(HeaderDefect::MissingTerminator));
        }
        Some(_) => {
            return Err(FigError::InvalidHeader(HeaderDefect::NotNumeric {
                offset: pos,
            }));
        }
        None => return Err(FigError::InvalidHeader(HeaderDefect::MissingTerminator)),
    }

    if height == 0 || width == 0 {
        return Err(FigError::InvalidHeader(HeaderDefect::ZeroDimension));
    }

    if height.checked_mul(width).is_none() {
        return Err(FigError::InvalidHeader(HeaderDefect::Overflow));
    }

    Ok((BitmapHeader { height, width }, pos + 1))
}

/// Checks the pixel body that follows the header.
///
/// Pixels and single whitespace separators must alternate starting with a
/// pixel. Line breaks count as separators, so row boundaries are not
/// checked beyond the total pixel count. The last pixel may be followed by
/// one trailing whitespace. `base` is the file offset of `body[0]` and is
/// only used for error reporting.
pub fn validate_body(body: &[u8], header: BitmapHeader, base: usize) -> Result<()> {
    let expected = header.pixel_count();
    let mut actual = 0usize;

    for (i, &b) in body.iter().enumerate() {
        let offset = base + i;
        let defect = if i % 2 == 0 {
            if is_pixel(b) {
                actual += 1;
                continue;
            }
            if is_separator(b) {
                BodyDefect::DoubledSeparator { offset }
            } else {
                BodyDefect::UnexpectedChar { offset, found: b }
            }
        } else {
            if is_separator(b) {
                continue;
            }
            if is_pixel(b) {
                BodyDefect::MissingSeparator { offset }
            } else {
                BodyDefect::UnexpectedChar { offset, found: b }
            }
        };
        return Err(FigError::InvalidBitmap(defect));
    }

    if actual != expected {
        return Err(FigError::InvalidBitmap(BodyDefect::PixelCount { expected, actual }));
    }

    Ok(())
}

/// Validates a whole bitmap file without building the grid.
pub fn validate(data: &[u8]) -> Result<BitmapHeader> {
    let (header, body_start) = parse_header(data)?;
    debug!(
        "Bitmap header: {} rows x {} columns",
        header.height, header.width
    );

    validate_body(&data[body_start..], header, body_start)?;
    debug!("Bitmap body holds {} pixels", header.pixel_count());

    Ok(header)
}
