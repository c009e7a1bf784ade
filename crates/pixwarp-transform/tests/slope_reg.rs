//! Slope shift regression test
//!
//! Checks the column offsets and the resulting pixel placement on small
//! synthetic grids, including the full 4x4 lookup table.

use pixwarp_test::RegParams;
use pixwarp_test::synthetic::{coordinate_color, coordinate_image, row_gray_image};
use pixwarp_transform::{CoordinateMapper, SlopeShift, slope_shift};

/// Source row for each destination row of a 4x4 image, per column.
const SQUARE_TABLE: [[u32; 4]; 4] = [
    [2, 3, 0, 1], // column 0, offset 2
    [1, 2, 3, 0], // column 1, offset 3
    [0, 1, 2, 3], // column 2, offset 4
    [3, 0, 1, 2], // column 3, offset 5
];

#[test]
fn slope_reg() {
    let mut rp = RegParams::new("slope");

    // --- Test 1: 4x4 source table ---
    let mapper = SlopeShift::new(4, 4).expect("mapper");
    for (x, column) in SQUARE_TABLE.iter().enumerate() {
        for (y, &src_row) in column.iter().enumerate() {
            let (sx, sy) = mapper.source(x as u32, y as u32);
            rp.compare_values(x as f64, sx as f64, 0.0);
            rp.compare_values(src_row as f64, sy as f64, 0.0);
        }
    }

    // --- Test 2: pixels land where the table says ---
    let pix = coordinate_image(4, 4);
    let out = slope_shift(&pix).expect("slope_shift");
    for (x, column) in SQUARE_TABLE.iter().enumerate() {
        for (y, &src_row) in column.iter().enumerate() {
            let got = out.get_pixel(x as u32, y as u32).unwrap_or(0);
            rp.compare_values(coordinate_color(x as u32, src_row) as f64, got as f64, 0.0);
        }
    }

    // --- Test 3: each column is a rotation of the input column ---
    let pix = row_gray_image(13, 29);
    let out = slope_shift(&pix).expect("slope_shift");
    let mapper = SlopeShift::new(13, 29).expect("mapper");
    for x in 0..13 {
        let offset = mapper.column_offset(x);
        for y in 0..29 {
            let expected_row = (y as i64 - offset).rem_euclid(29) as u32;
            let expected = pix.get_pixel(x, expected_row).unwrap_or(0);
            rp.compare_values(expected as f64, out.get_pixel(x, y).unwrap_or(1) as f64, 0.0);
        }
    }

    // --- Test 4: dimensions preserved ---
    rp.compare_values(13.0, out.width() as f64, 0.0);
    rp.compare_values(29.0, out.height() as f64, 0.0);

    assert!(rp.cleanup(), "slope regression test failed");
}

#[test]
fn slope_reg_single_row_and_column() {
    let mut rp = RegParams::new("slope_thin");

    // One row: every offset wraps to zero.
    let pix = coordinate_image(9, 1);
    let out = slope_shift(&pix).expect("slope_shift row");
    rp.compare_pix(&pix, &out);

    // One column: offset ceil(height/2) rolls the column down.
    let pix = coordinate_image(1, 6);
    let out = slope_shift(&pix).expect("slope_shift column");
    for y in 0..6u32 {
        let src = (y + 6 - 3) % 6;
        rp.compare_values(
            coordinate_color(0, src) as f64,
            out.get_pixel(0, y).unwrap_or(0) as f64,
            0.0,
        );
    }

    assert!(rp.cleanup(), "slope_thin regression test failed");
}
