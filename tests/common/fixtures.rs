// Not every test binary uses every helper
#![allow(dead_code)]

use image::{Rgb, RgbImage};
use std::ops::Range;
use std::path::Path;
use timeline_placeholders::{Face, Generator, GeneratorConfig};

/// Default configuration rooted in a scratch directory
pub fn test_config(root: &Path) -> GeneratorConfig {
    GeneratorConfig::new(root)
}

/// Generator using the built-in face so pixel checks are deterministic
pub fn test_generator(config: GeneratorConfig) -> Generator {
    Generator::new(config, Face::builtin())
}

/// Number of separate runs of rows (within `rows`) that contain `color`
pub fn count_bands(img: &RgbImage, color: Rgb<u8>, rows: Range<u32>) -> usize {
    let mut bands = 0;
    let mut inside = false;
    for y in rows {
        let hit = (0..img.width()).any(|x| *img.get_pixel(x, y) == color);
        if hit && !inside {
            bands += 1;
        }
        inside = hit;
    }
    bands
}

/// Number of pixels exactly matching `color`
pub fn count_pixels(img: &RgbImage, color: Rgb<u8>) -> usize {
    img.pixels().filter(|p| **p == color).count()
}

/// True if the JPEG stream declares a progressive (SOF2) frame
pub fn is_progressive_jpeg(bytes: &[u8]) -> bool {
    bytes.windows(2).any(|w| w == [0xFF, 0xC2])
}

/// Sorted names of regular files in a directory
pub fn list_files(dir: &Path) -> std::io::Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    names.sort();
    Ok(names)
}
