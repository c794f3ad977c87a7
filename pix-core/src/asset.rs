//! Image asset value type

use crate::{Recoder, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::path::Path;
use tracing::debug;

/// A named, immutable buffer of encoded image bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAsset {
    name: String,
    content: Vec<u8>,
}

impl ImageAsset {
    /// Creates a new asset holding exactly `content`
    pub fn new(name: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content,
        }
    }

    /// Reads the full contents of `path` into a new asset
    pub fn from_path(name: impl Into<String>, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read(path)?;
        debug!(path = %path.display(), bytes = content.len(), "loaded asset");
        Ok(Self::new(name, content))
    }

    /// Re-encodes `content` through `recoder` at `quality`.
    ///
    /// Returns `None` if the bytes do not decode as an image or the
    /// re-encode fails.
    pub fn compressed<R>(
        name: impl Into<String>,
        content: &[u8],
        quality: f64,
        recoder: &R,
    ) -> Option<Self>
    where
        R: Recoder + ?Sized,
    {
        let encoded = recoder.recode(content, quality)?;
        Some(Self::new(name, encoded))
    }

    /// Decodes standard base64 text into a new asset
    pub fn from_base64(name: impl Into<String>, text: &str) -> Result<Self> {
        let content = STANDARD.decode(text)?;
        Ok(Self::new(name, content))
    }

    /// Writes the content verbatim to `path`, creating or truncating it
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, &self.content)?;
        debug!(
            name = %self.name,
            path = %path.display(),
            bytes = self.content.len(),
            "saved asset"
        );
        Ok(())
    }

    /// Standard base64 encoding of the content
    pub fn base64(&self) -> String {
        STANDARD.encode(&self.content)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Returns the size of the content in bytes
    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Consumes the asset, returning its content
    pub fn into_content(self) -> Vec<u8> {
        self.content
    }
}
