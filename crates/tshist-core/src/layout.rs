// File: crates/tshist-core/src/layout.rs
// Summary: Dual-panel layout: a narrow side panel on the left, the wide primary panel to its right.
//
// Horizontally, left to right: `pad_left | side (split) | gap | primary | pad_right`.
// Vertically both panels span `[bottom, 1 - pad_top]`.

use crate::error::{ChartError, Result};
use crate::geometry::NormRect;

/// Extents below this are treated as empty.
const MIN_EXTENT: f64 = 1e-9;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutParams {
    /// Width of the side (histogram) panel as a fraction of the figure.
    pub split: f64,
    /// Bottom margin shared by both panels.
    pub bottom: f64,
    /// Margin left of the side panel.
    pub pad_left: f64,
    /// Gap between the side panel and the primary panel.
    pub gap: f64,
    /// Margin right of the primary panel.
    pub pad_right: f64,
    /// Margin above both panels.
    pub pad_top: f64,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self { split: 0.1, bottom: 0.05, pad_left: 0.05, gap: 0.01, pad_right: 0.01, pad_top: 0.01 }
    }
}

impl LayoutParams {
    pub fn with_split(mut self, split: f64) -> Self {
        self.split = split;
        self
    }
}

/// The two panel rectangles; computed once per request, read-only afterwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelGeometry {
    pub primary: NormRect,
    pub side: NormRect,
}

impl PanelGeometry {
    /// Compute both panels. Fails instead of returning an empty or
    /// negative-size rectangle.
    pub fn compute(p: &LayoutParams) -> Result<Self> {
        let fields = [
            ("split", p.split),
            ("bottom", p.bottom),
            ("pad_left", p.pad_left),
            ("gap", p.gap),
            ("pad_right", p.pad_right),
            ("pad_top", p.pad_top),
        ];
        for (name, v) in fields {
            if !v.is_finite() || v < 0.0 {
                return Err(ChartError::layout(format!("{name} must be finite and non-negative, got {v}")));
            }
        }
        if p.split <= 0.0 {
            return Err(ChartError::layout(format!("split must be positive, got {}", p.split)));
        }

        let height = 1.0 - p.bottom - p.pad_top;
        if height < MIN_EXTENT {
            return Err(ChartError::layout(format!(
                "vertical margins {} + {} leave no room for the panels",
                p.bottom, p.pad_top
            )));
        }

        let primary_left = p.pad_left + p.split + p.gap;
        let primary_width = 1.0 - primary_left - p.pad_right;
        if primary_width < MIN_EXTENT {
            return Err(ChartError::layout(format!(
                "split {} plus horizontal padding exceeds the figure width",
                p.split
            )));
        }

        Ok(Self {
            side: NormRect::new(p.pad_left, p.bottom, p.split, height),
            primary: NormRect::new(primary_left, p.bottom, primary_width, height),
        })
    }
}
