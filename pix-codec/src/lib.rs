//! pix Codec Library
//!
//! Decodes arbitrary image bytes and re-encodes them as JPEG, providing the
//! [`JpegRecoder`] used to build compressed [`pix_core::ImageAsset`]s.

pub mod image_decoder;
pub mod jpeg_encoder;
pub mod recoder;

pub use image_decoder::{decode_image, probe, ImageInfo};
pub use jpeg_encoder::{encode_jpeg, jpeg_quality};
pub use recoder::{compress, JpegRecoder};

/// Result type for pix-codec operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for pix-codec operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("pix core error: {0}")]
    Core(#[from] pix_core::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Codec configuration
#[derive(Debug, Clone)]
pub struct CodecConfig {
    /// JPEG compression quality (0.0 = smallest, 1.0 = best)
    pub quality: f64,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self { quality: 0.8 }
    }
}
