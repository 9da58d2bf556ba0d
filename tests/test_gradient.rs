//! Tests for the vertical gradient canvas.

use image::Rgb;
use timeline_placeholders::render::gradient::{gradient_canvas, lerp_channel, row_color};

const START: Rgb<u8> = Rgb([15, 23, 42]);
const END: Rgb<u8> = Rgb([30, 58, 138]);

#[test]
fn test_top_row_is_start_color() {
    let canvas = gradient_canvas(400, 300, START, END);
    assert_eq!(*canvas.get_pixel(0, 0), START);
    assert_eq!(*canvas.get_pixel(399, 0), START);
}

#[test]
fn test_rows_match_linear_blend() {
    let (width, height) = (400, 300);
    let canvas = gradient_canvas(width, height, START, END);

    for y in 0..height {
        let t = y as f64 / height as f64;
        let expected = Rgb([
            (START[0] as f64 * (1.0 - t) + END[0] as f64 * t) as u8,
            (START[1] as f64 * (1.0 - t) + END[1] as f64 * t) as u8,
            (START[2] as f64 * (1.0 - t) + END[2] as f64 * t) as u8,
        ]);
        assert_eq!(*canvas.get_pixel(0, y), expected, "row {}", y);
    }
}

#[test]
fn test_rows_are_uniform_bands() {
    let canvas = gradient_canvas(64, 48, START, END);
    for y in 0..48 {
        let first = *canvas.get_pixel(0, y);
        assert!(
            (0..64).all(|x| *canvas.get_pixel(x, y) == first),
            "row {} is not a single color",
            y
        );
    }
}

#[test]
fn test_channels_move_monotonically() {
    let height = 300;
    let canvas = gradient_canvas(1, height, START, END);

    for y in 1..height {
        let prev = canvas.get_pixel(0, y - 1);
        let cur = canvas.get_pixel(0, y);
        for c in 0..3 {
            assert!(cur[c] >= prev[c], "channel {} decreased at row {}", c, y);
        }
    }

    // Descending gradients move the other way
    let reversed = gradient_canvas(1, height, END, START);
    for y in 1..height {
        for c in 0..3 {
            assert!(reversed.get_pixel(0, y)[c] <= reversed.get_pixel(0, y - 1)[c]);
        }
    }

    // Last row approaches but does not necessarily reach the end color
    let last = canvas.get_pixel(0, height - 1);
    for c in 0..3 {
        assert!(last[c] <= END[c]);
        assert!(last[c] >= START[c]);
    }
}

#[test]
fn test_lerp_truncates() {
    assert_eq!(lerp_channel(0, 255, 0.0), 0);
    assert_eq!(lerp_channel(0, 255, 0.5), 127);
    assert_eq!(lerp_channel(0, 10, 0.99), 9);
    assert_eq!(lerp_channel(200, 100, 0.25), 175);
}

#[test]
fn test_degenerate_sizes() {
    assert_eq!(gradient_canvas(0, 10, START, END).len(), 0);
    assert_eq!(gradient_canvas(10, 0, START, END).len(), 0);
    assert_eq!(row_color(START, END, 0, 0), START);
}
