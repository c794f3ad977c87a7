//! Image decoding functionality

use crate::Result;
use image::{DynamicImage, ImageFormat, ImageReader};
use std::io::Cursor;

/// Format and dimensions of decodable image bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageInfo {
    pub format: ImageFormat,
    pub width: u32,
    pub height: u32,
}

/// Decodes image bytes of any supported format, sniffing the format from the data
pub fn decode_image(data: &[u8]) -> Result<DynamicImage> {
    let img = image::load_from_memory(data)?;
    Ok(img)
}

/// Reads the format and dimensions without decoding pixel data.
///
/// Returns `None` for unrecognized or malformed bytes.
pub fn probe(data: &[u8]) -> Option<ImageInfo> {
    let reader = ImageReader::new(Cursor::new(data))
        .with_guessed_format()
        .ok()?;
    let format = reader.format()?;
    let (width, height) = reader.into_dimensions().ok()?;

    Some(ImageInfo {
        format,
        width,
        height,
    })
}
