// File: crates/tshist-core/src/types.rs
// Summary: Shared constants and the figure size model (inches x DPI -> pixels).

use crate::error::{ChartError, Result};

/// Samples synthesized per image request.
pub const DEFAULT_SAMPLES: usize = 1000;
/// Histogram bins in the side panel.
pub const DEFAULT_BINS: usize = 30;
/// Opacity shared by the line and the histogram bars.
pub const DEFAULT_ALPHA: f32 = 0.6;

/// Default figure width in inches.
pub const FIGURE_WIDTH_IN: f32 = 12.0;
/// Default figure height in inches.
pub const FIGURE_HEIGHT_IN: f32 = 6.0;
/// Default raster resolution.
pub const DPI: f32 = 100.0;

/// Default surface width in pixels.
pub const WIDTH: i32 = 1200;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 600;

/// Largest canvas side in pixels; bigger figures are refused up front.
pub const MAX_DIMENSION: i32 = 16_384;

/// Physical figure size; the canvas gets `inches * dpi` pixels per side.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FigureSize {
    pub width_in: f32,
    pub height_in: f32,
    pub dpi: f32,
}

impl FigureSize {
    pub const fn new(width_in: f32, height_in: f32, dpi: f32) -> Self {
        Self { width_in, height_in, dpi }
    }

    /// Pixel dimensions `(width, height)`, rounded to the nearest pixel.
    /// Fails when either side would be smaller than one pixel or larger than
    /// [`MAX_DIMENSION`].
    pub fn pixels(&self) -> Result<(i32, i32)> {
        let ok = |v: f32| v.is_finite() && v > 0.0;
        if !ok(self.width_in) || !ok(self.height_in) || !ok(self.dpi) {
            return Err(ChartError::config(format!(
                "figure size must be positive, got {}x{} in at {} dpi",
                self.width_in, self.height_in, self.dpi
            )));
        }
        let w = (self.width_in * self.dpi).round();
        let h = (self.height_in * self.dpi).round();
        let max = MAX_DIMENSION as f32;
        if w < 1.0 || h < 1.0 || w > max || h > max {
            return Err(ChartError::config(format!("figure of {w}x{h} px is not drawable")));
        }
        Ok((w as i32, h as i32))
    }
}

impl Default for FigureSize {
    fn default() -> Self {
        Self::new(FIGURE_WIDTH_IN, FIGURE_HEIGHT_IN, DPI)
    }
}
