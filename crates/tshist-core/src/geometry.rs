// File: crates/tshist-core/src/geometry.rs
// Summary: Rectangles in normalized figure space and in pixel space.

use skia_safe as skia;

/// Axis-aligned rectangle in figure coordinates, origin bottom-left,
/// both axes spanning `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NormRect {
    pub left: f64,
    pub bottom: f64,
    pub width: f64,
    pub height: f64,
}

impl NormRect {
    pub const fn new(left: f64, bottom: f64, width: f64, height: f64) -> Self {
        Self { left, bottom, width, height }
    }
    pub fn right(&self) -> f64 { self.left + self.width }
    pub fn top(&self) -> f64 { self.bottom + self.height }

    /// Horizontal extent `(left, right)`.
    pub fn x_extent(&self) -> (f64, f64) { (self.left, self.right()) }
    /// Vertical extent `(bottom, top)`.
    pub fn y_extent(&self) -> (f64, f64) { (self.bottom, self.top()) }

    /// Map onto a `width` x `height` pixel surface (origin top-left).
    pub fn to_pixels(&self, width: i32, height: i32) -> RectI32 {
        let w = width as f64;
        let h = height as f64;
        RectI32::from_ltrb(
            (self.left * w).round() as i32,
            ((1.0 - self.top()) * h).round() as i32,
            (self.right() * w).round() as i32,
            ((1.0 - self.bottom) * h).round() as i32,
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RectI32 {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectI32 {
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }
    pub const fn width(&self) -> i32 { self.right - self.left }
    pub const fn height(&self) -> i32 { self.bottom - self.top }

    pub fn to_skia(&self) -> skia::Rect {
        skia::Rect::from_ltrb(self.left as f32, self.top as f32, self.right as f32, self.bottom as f32)
    }
}
