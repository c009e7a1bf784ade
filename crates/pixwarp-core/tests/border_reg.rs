//! Border regression test
//!
//! Adds and removes borders on synthetic images and checks that the
//! interior survives unchanged.

use pixwarp_core::{Pix, color};
use pixwarp_test::RegParams;
use pixwarp_test::synthetic::coordinate_image;

#[test]
fn border_reg() {
    let mut rp = RegParams::new("border");
    let pix = coordinate_image(23, 17);
    let blue = color::compose_rgb(0, 0, 255);

    // --- Test 1: uniform border round trip ---
    for size in [0, 1, 5, 12] {
        let bordered = pix.add_border(size, blue).expect("add_border");
        rp.compare_values((23 + 2 * size) as f64, bordered.width() as f64, 0.0);
        rp.compare_values((17 + 2 * size) as f64, bordered.height() as f64, 0.0);
        let restored = bordered.remove_border(size).expect("remove_border");
        rp.compare_pix(&pix, &restored);
    }

    // --- Test 2: general border round trip ---
    let bordered = pix.add_border_general(1, 2, 3, 4, blue).expect("add_border_general");
    rp.compare_values(26.0, bordered.width() as f64, 0.0);
    rp.compare_values(24.0, bordered.height() as f64, 0.0);
    rp.compare_values(blue as f64, bordered.get_pixel(25, 23).unwrap_or(0) as f64, 0.0);
    let restored = bordered
        .remove_border_general(1, 2, 3, 4)
        .expect("remove_border_general");
    rp.compare_pix(&pix, &restored);

    // --- Test 3: removing everything is rejected ---
    rp.compare_values(1.0, pix.remove_border(9).is_err() as u8 as f64, 0.0);
    rp.compare_values(1.0, pix.remove_border(8).is_ok() as u8 as f64, 0.0);

    assert!(rp.cleanup(), "border regression test failed");
}

#[test]
fn border_reg_clip() {
    let mut rp = RegParams::new("clip");
    let pix = coordinate_image(10, 8);

    let clipped = pix.clip_rectangle(2, 3, 5, 4).expect("clip_rectangle");
    rp.compare_values(5.0, clipped.width() as f64, 0.0);
    rp.compare_values(4.0, clipped.height() as f64, 0.0);
    for y in 0..4 {
        for x in 0..5 {
            rp.compare_values(
                pix.get_pixel(x + 2, y + 3).unwrap_or(0) as f64,
                clipped.get_pixel(x, y).unwrap_or(1) as f64,
                0.0,
            );
        }
    }

    let single = Pix::new_filled(1, 1, color::WHITE).expect("pix");
    let bordered = single.add_border(3, color::BLACK).expect("add_border");
    rp.compare_values(color::WHITE as f64, bordered.get_pixel(3, 3).unwrap_or(0) as f64, 0.0);

    assert!(rp.cleanup(), "clip regression test failed");
}
