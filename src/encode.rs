use anyhow::Result;
use image::RgbImage;
use jpeg_encoder::{ColorType, Encoder};
use std::io::Write;
use std::path::Path;

/// Encode an RGB canvas as an optimized, progressive JPEG
pub fn encode_progressive_jpeg(canvas: &RgbImage, quality: u8) -> Result<Vec<u8>> {
    let width = u16::try_from(canvas.width())
        .map_err(|_| anyhow::anyhow!("Canvas width {} exceeds JPEG limits", canvas.width()))?;
    let height = u16::try_from(canvas.height())
        .map_err(|_| anyhow::anyhow!("Canvas height {} exceeds JPEG limits", canvas.height()))?;

    let mut buffer = Vec::new();
    let mut encoder = Encoder::new(&mut buffer, quality);
    encoder.set_progressive(true);
    encoder.set_optimized_huffman_tables(true);
    encoder
        .encode(canvas.as_raw(), width, height, ColorType::Rgb)
        .map_err(|e| anyhow::anyhow!("Failed to encode JPEG: {}", e))?;

    Ok(buffer)
}

/// Write `bytes` to `path` through a temp file in the same directory,
/// so a failed write never leaves a truncated file behind
pub fn write_atomically(path: &Path, bytes: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut builder = tempfile::Builder::new();
    builder.prefix(".placeholder-").suffix(".tmp");
    // Same mode as a plain file create; the umask still applies
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }

    let mut tmp = builder
        .tempfile_in(dir)
        .map_err(|e| anyhow::anyhow!("Failed to create temp file in {}: {}", dir.display(), e))?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path)
        .map_err(|e| anyhow::anyhow!("Failed to write {}: {}", path.display(), e.error))?;

    Ok(())
}
