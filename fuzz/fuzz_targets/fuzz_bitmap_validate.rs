#![no_main]

use figsearch::formats::bitmap;
use figsearch::io::parse_grid;
use figsearch::ShapeKind;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(header) = bitmap::validate(data) else {
        return;
    };
    // Keep allocations bounded; the validator accepts any dimensions.
    if header.pixel_count() > 1 << 16 {
        return;
    }

    let grid = parse_grid(data).expect("validated bitmap must load");
    for kind in ShapeKind::ALL {
        if let Some(shape) = kind.find(&grid) {
            assert!(shape.end.row < grid.height() && shape.end.col < grid.width());
        }
    }
});
