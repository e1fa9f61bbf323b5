use std::path::{Path, PathBuf};

use crate::error::ExportError;
use crate::surface::Surface;
use crate::util::time;

/// Default export filename: epoch milliseconds, JPEG.
pub fn default_filename() -> String {
    format!("{}.jpg", time::timestamp_millis())
}

/// Encode the surface as JPEG at `path`. JPEG carries no alpha, so the
/// opaque background guarantees a fully opaque export.
pub fn save_jpeg(surface: &dyn Surface, path: &Path) -> Result<(), ExportError> {
    let (width, height) = (surface.width() as u32, surface.height() as u32);
    let mut rgba = Vec::with_capacity(surface.pixels().len() * 4);
    for pixel in surface.pixels() {
        rgba.extend_from_slice(&pixel.to_array());
    }
    let buffer =
        image::RgbaImage::from_raw(width, height, rgba).ok_or(ExportError::BufferMismatch)?;
    let rgb = image::DynamicImage::ImageRgba8(buffer).to_rgb8();
    rgb.save_with_format(path, image::ImageFormat::Jpeg)?;
    Ok(())
}

/// Export into `dir` under the default timestamp filename; returns the path
/// written.
pub fn export_to_dir(surface: &dyn Surface, dir: &Path) -> Result<PathBuf, ExportError> {
    let path = dir.join(default_filename());
    save_jpeg(surface, &path)?;
    Ok(path)
}
