use image::{Rgb, RgbImage};

use super::font::Face;

/// Draw one line centered on `(cx, cy)`
pub fn draw_centered(
    canvas: &mut RgbImage,
    face: &Face,
    color: Rgb<u8>,
    (cx, cy): (i32, i32),
    size: f32,
    text: &str,
) {
    let width = face.line_width(size, text) as i32;
    let height = face.line_height(size) as i32;
    face.draw_line(canvas, color, cx - width / 2, cy - height / 2, size, text);
}

/// Draw `text` twice: a muted copy shifted by `offset`, then the real one on top
#[allow(clippy::too_many_arguments)]
pub fn draw_shadowed(
    canvas: &mut RgbImage,
    face: &Face,
    color: Rgb<u8>,
    shadow: Rgb<u8>,
    offset: (i32, i32),
    anchor: (i32, i32),
    size: f32,
    text: &str,
) {
    let shadow_anchor = (anchor.0 + offset.0, anchor.1 + offset.1);
    draw_centered(canvas, face, shadow, shadow_anchor, size, text);
    draw_centered(canvas, face, color, anchor, size, text);
}

/// Top edge of each line of a block of `count` lines centered on `center_y`
pub fn line_tops(center_y: i32, count: usize, line_height: i32, spacing: i32) -> Vec<i32> {
    if count == 0 {
        return Vec::new();
    }
    let n = count as i32;
    let block = n * line_height + (n - 1) * spacing;
    let top = center_y - block / 2;
    (0..n).map(|i| top + i * (line_height + spacing)).collect()
}

/// Draw a multi-line block, each line horizontally centered on `anchor.0`,
/// the block as a whole vertically centered on `anchor.1`
pub fn draw_multiline_centered(
    canvas: &mut RgbImage,
    face: &Face,
    color: Rgb<u8>,
    anchor: (i32, i32),
    size: f32,
    spacing: i32,
    text: &str,
) {
    let lines: Vec<&str> = text.lines().collect();
    let line_height = face.line_height(size) as i32;
    let tops = line_tops(anchor.1, lines.len(), line_height, spacing);

    for (line, top) in lines.iter().zip(tops) {
        let width = face.line_width(size, line) as i32;
        face.draw_line(canvas, color, anchor.0 - width / 2, top, size, line);
    }
}
