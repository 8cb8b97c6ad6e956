// SPDX-License-Identifier: MPL-2.0
//! Poster decoding.

use crate::error::TmdbError;

/// A decoded poster in RGBA8.
#[derive(Clone, PartialEq, Eq)]
pub struct Poster {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl std::fmt::Debug for Poster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Poster")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.pixels.len())
            .finish()
    }
}

impl Poster {
    /// Decodes JPEG/PNG/WebP bytes fully, so the load-complete signal fires
    /// only once the image is ready to draw.
    pub fn decode(bytes: &[u8]) -> Result<Self, TmdbError> {
        let image = image_rs::load_from_memory(bytes)?.to_rgba8();
        let (width, height) = image.dimensions();
        Ok(Self {
            width,
            height,
            pixels: image.into_raw(),
        })
    }
}
