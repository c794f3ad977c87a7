//! pix Core Library
//!
//! This library provides the [`ImageAsset`] value type: a named byte buffer
//! holding encoded image data, with a base64 view and filesystem persistence.

pub mod asset;
pub mod recoder;

pub use asset::ImageAsset;
pub use recoder::Recoder;

/// Result type for pix-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for pix-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),
}
