// File: crates/tshist-core/src/axis.rs
// Summary: Axis model: limits in drawing order, optional label, tick-label and grid switches.

use crate::grid::nice_ticks;

/// Limits are stored in drawing order: `start` sits at the left (x) or
/// bottom (y) edge of the panel. An inverted axis has `start > end`.
#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: Option<String>,
    pub start: f64,
    pub end: f64,
    pub tick_labels: bool,
    pub grid: bool,
    /// Roughly how many tick intervals to aim for.
    pub tick_target: usize,
}

impl Axis {
    pub fn new(start: f64, end: f64) -> Self {
        Self { label: None, start, end, tick_labels: true, grid: false, tick_target: 6 }
    }

    pub fn with_label(mut self, label: Option<String>) -> Self {
        self.label = label;
        self
    }

    pub fn with_grid(mut self, grid: bool) -> Self {
        self.grid = grid;
        self
    }

    pub fn with_tick_target(mut self, target: usize) -> Self {
        self.tick_target = target;
        self
    }

    pub fn without_tick_labels(mut self) -> Self {
        self.tick_labels = false;
        self
    }

    pub fn limits(&self) -> (f64, f64) {
        (self.start, self.end)
    }

    pub fn set_limits(&mut self, (start, end): (f64, f64)) {
        self.start = start;
        self.end = end;
    }

    /// Swap the limits in place.
    pub fn invert(&mut self) {
        std::mem::swap(&mut self.start, &mut self.end);
    }

    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }

    /// Tick positions inside the limits, ascending.
    pub fn ticks(&self) -> Vec<f64> {
        let (lo, hi) = if self.is_inverted() { (self.end, self.start) } else { (self.start, self.end) };
        nice_ticks(lo, hi, self.tick_target)
    }
}
