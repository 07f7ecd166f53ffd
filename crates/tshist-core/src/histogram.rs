// File: crates/tshist-core/src/histogram.rs
// Summary: Equal-width histogram binning over the observed value range.

use crate::error::{ChartError, Result};
use crate::series::minmax;

/// `bins` equal-width intervals over `[min, max]`. Every bin is half-open
/// except the last, which also includes `max`.
#[derive(Clone, Debug, PartialEq)]
pub struct Histogram {
    pub edges: Vec<f64>,
    pub counts: Vec<u32>,
}

impl Histogram {
    pub fn compute(values: &[f64], bins: usize) -> Result<Self> {
        if bins == 0 {
            return Err(ChartError::config("bin count must be positive"));
        }
        if values.iter().any(|v| !v.is_finite()) {
            return Err(ChartError::config("histogram values must be finite"));
        }
        let (mut lo, mut hi) = minmax(values.iter().copied()).ok_or(ChartError::EmptySeries)?;
        if lo == hi {
            lo -= 0.5;
            hi += 0.5;
        }

        // Interpolate instead of `lo + i * (hi - lo) / bins`, which overflows
        // when the range spans most of f64.
        let n = bins as f64;
        let mut edges: Vec<f64> = (0..=bins)
            .map(|i| {
                let t = i as f64 / n;
                lo * (1.0 - t) + hi * t
            })
            .collect();
        edges[0] = lo;
        edges[bins] = hi;

        let mut counts = vec![0u32; bins];
        for &v in values {
            counts[bin_index(&edges, lo, hi, v)] += 1;
        }
        Ok(Self { edges, counts })
    }

    pub fn bins(&self) -> usize {
        self.counts.len()
    }

    pub fn max_count(&self) -> u32 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// `(0, C)` where `C` is the tallest bin.
    pub fn natural_count_range(&self) -> (f64, f64) {
        (0.0, self.max_count() as f64)
    }

    /// `(C, 0)`: the count axis flipped so bars grow toward the primary panel.
    pub fn reversed_count_range(&self) -> (f64, f64) {
        let (lo, hi) = self.natural_count_range();
        (hi, lo)
    }

    /// `(edges[i], edges[i + 1], counts[i])` for each bin.
    pub fn iter_bins(&self) -> impl Iterator<Item = (f64, f64, u32)> + '_ {
        self.edges.windows(2).zip(&self.counts).map(|(e, &c)| (e[0], e[1], c))
    }
}

fn bin_index(edges: &[f64], lo: f64, hi: f64, v: f64) -> usize {
    let last = edges.len() - 2;
    let bins = (last + 1) as f64;
    // Halved operands keep both differences finite.
    let frac = (0.5 * v - 0.5 * lo) / (0.5 * hi - 0.5 * lo);
    let mut i = ((frac * bins).floor().max(0.0) as usize).min(last);
    // Rounding in the division can land one bin off near an edge.
    if i > 0 && v < edges[i] {
        i -= 1;
    } else if i < last && v >= edges[i + 1] {
        i += 1;
    }
    i
}
