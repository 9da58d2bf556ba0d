use image::{Rgb, RgbImage};

/// Blend one channel: `start*(1-t) + end*t`, truncated
pub fn lerp_channel(start: u8, end: u8, t: f64) -> u8 {
    (start as f64 * (1.0 - t) + end as f64 * t) as u8
}

/// Color of row `y` on a canvas `height` rows tall
pub fn row_color(start: Rgb<u8>, end: Rgb<u8>, y: u32, height: u32) -> Rgb<u8> {
    if height == 0 {
        return start;
    }
    let t = y as f64 / height as f64;
    Rgb([
        lerp_channel(start[0], end[0], t),
        lerp_channel(start[1], end[1], t),
        lerp_channel(start[2], end[2], t),
    ])
}

/// Paint horizontal bands from `start` (top) toward `end` (bottom)
pub fn fill_gradient(canvas: &mut RgbImage, start: Rgb<u8>, end: Rgb<u8>) {
    let height = canvas.height();
    for (y, row) in canvas.enumerate_rows_mut() {
        let color = row_color(start, end, y, height);
        for (_, _, pixel) in row {
            *pixel = color;
        }
    }
}

/// New W×H canvas filled with the vertical gradient
pub fn gradient_canvas(width: u32, height: u32, start: Rgb<u8>, end: Rgb<u8>) -> RgbImage {
    let mut canvas = RgbImage::new(width, height);
    fill_gradient(&mut canvas, start, end);
    canvas
}
