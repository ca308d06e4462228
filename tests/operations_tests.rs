use std::io::Write;
use tempfile::NamedTempFile;

use figsearch::operations::{
    check, find_horizontal, find_shape, find_square, find_vertical, search, validate,
};
use figsearch::{BitmapHeader, Coords, FigError, LocatedShape, Outcome, ShapeKind};

fn bitmap_file(contents: &str) -> NamedTempFile {
    let mut temp = NamedTempFile::new().unwrap();
    temp.write_all(contents.as_bytes()).unwrap();
    temp.flush().unwrap();
    temp
}

fn shape(start: (usize, usize), end: (usize, usize), size: usize) -> LocatedShape {
    LocatedShape::new(
        Coords::new(start.0, start.1),
        Coords::new(end.0, end.1),
        size,
    )
}

#[test]
fn test_scenario_a_horizontal() {
    let file = bitmap_file("3 3\n1 1 1\n0 0 0\n0 0 0\n");
    let found = find_horizontal(file.path()).unwrap();
    assert_eq!(found, Some(shape((0, 0), (0, 2), 3)));
}

#[test]
fn test_scenario_b_vertical() {
    let file = bitmap_file("3 1\n1\n1\n0\n");
    let found = find_vertical(file.path()).unwrap();
    assert_eq!(found, Some(shape((0, 0), (1, 0), 2)));
}

#[test]
fn test_scenario_c_square_outline() {
    let file = bitmap_file("4 4\n1 1 1 0\n1 0 1 0\n1 1 1 0\n0 0 0 0\n");
    let found = find_square(file.path()).unwrap();
    assert_eq!(found, Some(shape((0, 0), (2, 2), 3)));
}

#[test]
fn test_scenario_d_all_clear() {
    let file = bitmap_file("2 2\n0 0\n0 0\n");
    for kind in ShapeKind::ALL {
        assert_eq!(find_shape(file.path(), kind).unwrap(), None);
        assert!(matches!(
            search(file.path(), kind).unwrap(),
            Outcome::NotFound(k) if k == kind
        ));
    }
}

#[test]
fn test_scenario_e_zero_header() {
    let file = bitmap_file("0 5\n");
    let err = validate(file.path()).unwrap_err();
    assert!(matches!(err, FigError::InvalidHeader(_)));
    assert!(matches!(check(file.path()).unwrap(), Outcome::Invalid(_)));

    for kind in ShapeKind::ALL {
        assert!(matches!(
            search(file.path(), kind).unwrap(),
            Outcome::Invalid(_)
        ));
    }
}

#[test]
fn test_validate_returns_dimensions() {
    let file = bitmap_file("2 3\n1 0 1\n0 1 0\n");
    assert_eq!(
        validate(file.path()).unwrap(),
        BitmapHeader {
            height: 2,
            width: 3
        }
    );
    assert!(matches!(check(file.path()).unwrap(), Outcome::Valid(_)));
}

#[test]
fn test_invalid_body_blocks_search() {
    let file = bitmap_file("2 2\n1 1\n1 x\n");
    let err = find_horizontal(file.path()).unwrap_err();
    assert!(matches!(err, FigError::InvalidBitmap(_)));
    assert!(err.is_format_error());
}

#[test]
fn test_pixel_count_mismatch_blocks_search() {
    let short = bitmap_file("2 2\n1 1\n1\n");
    assert!(matches!(
        find_square(short.path()),
        Err(FigError::InvalidBitmap(_))
    ));

    let long = bitmap_file("2 2\n1 1\n1 1\n1 1\n");
    assert!(matches!(
        find_square(long.path()),
        Err(FigError::InvalidBitmap(_))
    ));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.txt");

    let err = validate(&path).unwrap_err();
    assert!(matches!(err, FigError::Io { .. }));
    assert!(!err.is_format_error());

    assert!(matches!(check(&path), Err(FigError::Io { .. })));
    assert!(matches!(
        search(&path, ShapeKind::Square),
        Err(FigError::Io { .. })
    ));
}

#[test]
fn test_search_is_idempotent() {
    let file = bitmap_file("4 5\n1 1 0 1 1\n1 1 1 1 1\n0 1 0 0 1\n1 1 1 1 1\n");
    for kind in ShapeKind::ALL {
        let first = find_shape(file.path(), kind).unwrap();
        let second = find_shape(file.path(), kind).unwrap();
        assert!(first.is_some());
        assert_eq!(first, second);
    }
}

#[test]
fn test_larger_bitmap() {
    let file = bitmap_file(
        "5 6\n\
         0 0 0 0 0 0\n\
         0 1 1 1 1 0\n\
         0 1 0 0 1 0\n\
         0 1 0 0 1 1\n\
         0 1 1 1 1 1\n",
    );

    assert_eq!(
        find_horizontal(file.path()).unwrap(),
        Some(shape((4, 1), (4, 5), 5))
    );
    assert_eq!(
        find_vertical(file.path()).unwrap(),
        Some(shape((1, 1), (4, 1), 4))
    );
    assert_eq!(
        find_square(file.path()).unwrap(),
        Some(shape((1, 1), (4, 4), 4))
    );
}
