use std::path::Path;

use anyhow::{bail, Context, Result};
use image::{ImageFormat, RgbaImage};

const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];
const JPEG_MAGIC: &[u8] = &[0xff, 0xd8, 0xff];
const BMP_MAGIC: &[u8] = b"BM";
const GIF87_MAGIC: &[u8] = b"GIF87a";
const GIF89_MAGIC: &[u8] = b"GIF89a";

/// Identify an image by its leading magic bytes.
pub fn sniff_format(bytes: &[u8]) -> Option<ImageFormat> {
    if bytes.starts_with(PNG_MAGIC) {
        Some(ImageFormat::Png)
    } else if bytes.starts_with(JPEG_MAGIC) {
        Some(ImageFormat::Jpeg)
    } else if bytes.starts_with(GIF87_MAGIC) || bytes.starts_with(GIF89_MAGIC) {
        Some(ImageFormat::Gif)
    } else if bytes.starts_with(BMP_MAGIC) {
        Some(ImageFormat::Bmp)
    } else {
        None
    }
}

/// Read an image file and decode it to RGBA8.
pub fn load_image(path: &Path) -> Result<RgbaImage> {
    let bytes = std::fs::read(path).with_context(|| {
        if !path.exists() {
            format!("file not found: {}", path.display())
        } else {
            format!("failed to read {}", path.display())
        }
    })?;

    let Some(format) = sniff_format(&bytes) else {
        bail!(
            "unsupported image format: {}. Supported formats: PNG, JPEG, BMP, GIF",
            path.display()
        );
    };

    let img = image::load_from_memory_with_format(&bytes, format)
        .with_context(|| format!("failed to decode {:?} image {}", format, path.display()))?;
    Ok(img.to_rgba8())
}
