//! Seam for the external image decoder / re-encoder

/// Decodes image bytes and re-encodes them at a compression quality.
///
/// Returns `None` when either stage fails. Callers cannot tell a decode
/// failure from an encode failure.
pub trait Recoder {
    fn recode(&self, content: &[u8], quality: f64) -> Option<Vec<u8>>;
}

impl<F> Recoder for F
where
    F: Fn(&[u8], f64) -> Option<Vec<u8>>,
{
    fn recode(&self, content: &[u8], quality: f64) -> Option<Vec<u8>> {
        self(content, quality)
    }
}
