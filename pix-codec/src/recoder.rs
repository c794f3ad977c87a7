//! JPEG re-encoding of arbitrary image bytes

use crate::{decode_image, encode_jpeg};
use pix_core::{ImageAsset, Recoder};
use tracing::debug;

/// Decodes any supported image format and re-encodes it as JPEG
#[derive(Debug, Clone, Copy, Default)]
pub struct JpegRecoder;

impl Recoder for JpegRecoder {
    fn recode(&self, content: &[u8], quality: f64) -> Option<Vec<u8>> {
        let image = match decode_image(content) {
            Ok(image) => image,
            Err(e) => {
                debug!(bytes = content.len(), error = %e, "source is not a decodable image");
                return None;
            }
        };

        match encode_jpeg(&image, quality) {
            Ok(jpeg) => Some(jpeg),
            Err(e) => {
                debug!(error = %e, "JPEG re-encode failed");
                None
            }
        }
    }
}

/// Builds a JPEG-compressed asset from image bytes of any supported format.
///
/// Returns `None` if `content` is not a decodable image or encoding fails.
pub fn compress(name: impl Into<String>, content: &[u8], quality: f64) -> Option<ImageAsset> {
    ImageAsset::compressed(name, content, quality, &JpegRecoder)
}
