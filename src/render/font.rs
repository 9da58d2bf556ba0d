use ab_glyph::{Font, FontVec, PxScale, ScaleFont};
use anyhow::Result;
use font8x8::{BASIC_FONTS, UnicodeFonts};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_text_mut, text_size};
use imageproc::rect::Rect;
use std::path::{Path, PathBuf};

/// Well-known locations of a platform's default sans face, most preferred first
const SYSTEM_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Bold.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSansBold.ttf",
    "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
    "/Library/Fonts/Arial Bold.ttf",
    "C:\\Windows\\Fonts\\arialbd.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Glyph cell of the built-in face
const BITMAP_CELL: u32 = 8;

/// A font face the compositor can measure and draw with
pub enum Face {
    /// Scalable TrueType/OpenType face loaded from disk
    Outline { font: FontVec, source: PathBuf },
    /// Built-in 8x8 bitmap face, scaled by whole pixels
    Bitmap,
}

impl Face {
    /// Load a TTF/OTF file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .map_err(|e| anyhow::anyhow!("Failed to read font {}: {}", path.display(), e))?;
        let font = FontVec::try_from_vec(bytes)
            .map_err(|e| anyhow::anyhow!("Failed to parse font {}: {}", path.display(), e))?;
        Ok(Face::Outline {
            font,
            source: path.to_path_buf(),
        })
    }

    /// First readable system face, if any
    pub fn system() -> Option<Self> {
        SYSTEM_FONT_CANDIDATES
            .iter()
            .map(Path::new)
            .filter(|p| p.is_file())
            .find_map(|p| Face::from_path(p).ok())
    }

    pub fn builtin() -> Self {
        Face::Bitmap
    }

    /// Explicit override wins; otherwise the system face, then the built-in one.
    /// A bad override is an error rather than a silent fallback.
    pub fn locate(override_path: Option<&Path>) -> Result<Self> {
        match override_path {
            Some(path) => Face::from_path(path),
            None => Ok(Face::system().unwrap_or_else(Face::builtin)),
        }
    }

    /// Human-readable description for verbose output
    pub fn describe(&self) -> String {
        match self {
            Face::Outline { source, .. } => source.display().to_string(),
            Face::Bitmap => "built-in 8x8 bitmap".to_string(),
        }
    }

    /// Whole-pixel magnification of the bitmap face for a given size
    fn bitmap_factor(size: f32) -> u32 {
        ((size / BITMAP_CELL as f32).round() as u32).max(1)
    }

    /// Vertical advance of one line of text
    pub fn line_height(&self, size: f32) -> u32 {
        match self {
            Face::Outline { font, .. } => font.as_scaled(PxScale::from(size)).height().ceil() as u32,
            Face::Bitmap => BITMAP_CELL * Self::bitmap_factor(size),
        }
    }

    /// Rendered width of a single line
    pub fn line_width(&self, size: f32, text: &str) -> u32 {
        match self {
            Face::Outline { font, .. } => text_size(size, font, text).0,
            Face::Bitmap => {
                text.chars().count() as u32 * BITMAP_CELL * Self::bitmap_factor(size)
            }
        }
    }

    /// Draw a single line with its top-left corner at (x, y)
    pub fn draw_line(
        &self,
        canvas: &mut RgbImage,
        color: Rgb<u8>,
        x: i32,
        y: i32,
        size: f32,
        text: &str,
    ) {
        match self {
            Face::Outline { font, .. } => draw_text_mut(canvas, color, x, y, size, font, text),
            Face::Bitmap => draw_bitmap_line(canvas, color, x, y, Self::bitmap_factor(size), text),
        }
    }
}

fn draw_bitmap_line(canvas: &mut RgbImage, color: Rgb<u8>, x: i32, y: i32, factor: u32, text: &str) {
    let advance = (BITMAP_CELL * factor) as i32;
    let px = factor as i32;

    for (i, ch) in text.chars().enumerate() {
        // Anything outside basic Latin renders as '?'
        let glyph = BASIC_FONTS
            .get(ch)
            .or_else(|| BASIC_FONTS.get('?'))
            .unwrap_or([0; 8]);
        let origin_x = x + i as i32 * advance;

        for (row, bits) in glyph.iter().enumerate() {
            for col in 0..BITMAP_CELL {
                // Bit 0 is the leftmost pixel
                if bits & (1 << col) != 0 {
                    let rect = Rect::at(origin_x + col as i32 * px, y + row as i32 * px)
                        .of_size(factor, factor);
                    draw_filled_rect_mut(canvas, rect, color);
                }
            }
        }
    }
}
