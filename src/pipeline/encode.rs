//! Image encoding: pdfium bitmap → RGB PNG file.
//!
//! pdfium hands back RGBA bitmaps; the output contract is RGB with no alpha
//! channel, so the conversion happens here before encoding. PNG is the only
//! supported format — lossless encoding keeps rendered text crisp, which is
//! the whole point of rasterising at a chosen DPI.

use crate::error::Pdf2PngError;
use image::DynamicImage;
use std::path::Path;
use tracing::debug;

/// Write a rendered page as an RGB PNG at `path`, overwriting any existing
/// file. Returns `(width, height, file_bytes)` of the written image.
pub fn write_png(image: &DynamicImage, path: &Path) -> Result<(u32, u32, u64), Pdf2PngError> {
    // Drop the alpha channel pdfium renders with.
    let rgb = image.to_rgb8();
    let (width, height) = (rgb.width(), rgb.height());

    rgb.save_with_format(path, image::ImageFormat::Png)
        .map_err(|e| Pdf2PngError::ImageWriteFailed {
            path: path.to_path_buf(),
            detail: e.to_string(),
        })?;

    let bytes = std::fs::metadata(path)
        .map(|m| m.len())
        .map_err(|e| Pdf2PngError::ImageWriteFailed {
            path: path.to_path_buf(),
            detail: e.to_string(),
        })?;

    debug!("Wrote {} ({}x{}, {} bytes)", path.display(), width, height, bytes);
    Ok((width, height, bytes))
}
