use thiserror::Error;

/// Failures while exporting the canvas to an image file.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The pixel buffer did not match the surface dimensions.
    #[error("pixel buffer does not match surface dimensions")]
    BufferMismatch,
    #[error("image encode failed: {0}")]
    Encode(#[from] image::ImageError),
}
