// File: crates/tshist-core/src/scale.rs
// Summary: Linear value -> pixel transform for one panel axis.

use crate::axis::Axis;

/// Maps `[domain_start, domain_end]` onto `[px_start, px_end]`. Either
/// interval may run backwards; an inverted axis or a y axis (pixels grow
/// downward) is just a reversed interval.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub domain_start: f64,
    pub domain_end: f64,
    pub px_start: f32,
    pub px_end: f32,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64, px_start: f32, px_end: f32) -> Self {
        let (mut domain_start, mut domain_end) = (domain_start, domain_end);
        // A zero-width domain still has to land somewhere on screen.
        if (domain_end - domain_start).abs() < 1e-12 {
            domain_start -= 0.5;
            domain_end += 0.5;
        }
        Self { domain_start, domain_end, px_start, px_end }
    }

    /// Horizontal scale for `axis` across pixel columns `[left, right]`.
    pub fn horizontal(axis: &Axis, left: i32, right: i32) -> Self {
        Self::new(axis.start, axis.end, left as f32, right as f32)
    }

    /// Vertical scale for `axis`; `start` maps to `bottom`.
    pub fn vertical(axis: &Axis, top: i32, bottom: i32) -> Self {
        Self::new(axis.start, axis.end, bottom as f32, top as f32)
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        // Halved so domains spanning most of f64 do not overflow to inf.
        let t = (0.5 * v - 0.5 * self.domain_start) / (0.5 * self.domain_end - 0.5 * self.domain_start);
        self.px_start + t as f32 * (self.px_end - self.px_start)
    }
}
