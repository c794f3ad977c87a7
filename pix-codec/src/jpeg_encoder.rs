//! JPEG encoding functionality

use crate::Result;
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ExtendedColorType};
use std::io::Cursor;

/// Maps a `0.0..=1.0` compression quality onto the encoder's `1..=100` scale.
///
/// Out-of-range values clamp; NaN is treated as the lowest quality.
pub fn jpeg_quality(quality: f64) -> u8 {
    if quality.is_nan() {
        return 1;
    }
    (quality * 100.0).round().clamp(1.0, 100.0) as u8
}

/// Encodes an image as baseline JPEG at the given quality.
///
/// The image is flattened to 8-bit RGB first; any alpha channel is dropped.
pub fn encode_jpeg(image: &DynamicImage, quality: f64) -> Result<Vec<u8>> {
    let rgb = image.to_rgb8();

    let mut out = Cursor::new(Vec::new());
    let mut encoder = JpegEncoder::new_with_quality(&mut out, jpeg_quality(quality));
    encoder.encode(rgb.as_raw(), rgb.width(), rgb.height(), ExtendedColorType::Rgb8)?;

    Ok(out.into_inner())
}
