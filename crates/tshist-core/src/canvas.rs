// File: crates/tshist-core/src/canvas.rs
// Summary: Raster canvas owned by one render call, backed by a Skia CPU surface.

use skia_safe as skia;

use crate::error::{ChartError, Result};

/// Mutable pixel surface. Dropping it frees the backing memory, so handing
/// it to the encoder by value releases it on both success and failure.
pub struct Canvas {
    surface: skia::Surface,
    width: i32,
    height: i32,
}

impl Canvas {
    /// Allocate a `width` x `height` surface cleared to `background`.
    pub fn new(width: i32, height: i32, background: skia::Color) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::config(format!("canvas must be at least 1x1, got {width}x{height}")));
        }
        let mut surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or_else(|| ChartError::config(format!("failed to create {width}x{height} raster surface")))?;
        surface.canvas().clear(background);
        Ok(Self { surface, width, height })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Skia drawing handle.
    pub fn sk(&mut self) -> &skia::Canvas {
        self.surface.canvas()
    }

    /// Unpremultiplied RGBA8 pixels, row-major, `width * 4` bytes per row.
    pub fn to_rgba8(&mut self) -> Result<Vec<u8>> {
        let info = skia::ImageInfo::new(
            (self.width, self.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let row_bytes = self.width as usize * 4;
        let mut pixels = vec![0u8; row_bytes * self.height as usize];
        if !self.surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
            return Err(ChartError::Encoding("failed to read back canvas pixels".into()));
        }
        Ok(pixels)
    }
}
