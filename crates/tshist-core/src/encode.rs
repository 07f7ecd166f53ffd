// File: crates/tshist-core/src/encode.rs
// Summary: PNG encoding of a finished canvas.

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use tracing::debug;

use crate::canvas::Canvas;
use crate::error::{ChartError, Result};

/// Encoded image bytes plus the pixel size they decode to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageBuffer {
    bytes: Vec<u8>,
    width: u32,
    height: u32,
}

impl ImageBuffer {
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Serialize `canvas` as PNG. The canvas is consumed and released here
/// whether or not encoding succeeds.
pub fn encode_png(mut canvas: Canvas) -> Result<ImageBuffer> {
    let (width, height) = (canvas.width() as u32, canvas.height() as u32);
    let rgba = canvas.to_rgba8()?;
    drop(canvas);

    let mut bytes = Vec::with_capacity(rgba.len() / 8);
    PngEncoder::new(&mut bytes)
        .write_image(&rgba, width, height, ExtendedColorType::Rgba8)
        .map_err(|e| ChartError::Encoding(e.to_string()))?;

    debug!(width, height, bytes = bytes.len(), "encoded png");
    Ok(ImageBuffer { bytes, width, height })
}
