// File: crates/tshist-core/src/series.rs
// Summary: Series model: ordered (x, y) samples with index-derived x.
// Notes:
// - A series is immutable once built and lives for one request.
// - Construction rejects non-finite samples so later min/max never see NaN.

use crate::error::{ChartError, Result};

#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    data_xy: Vec<(f64, f64)>,
}

impl Series {
    /// Build a series whose x values are the sample indices `0..len`.
    pub fn from_y(ys: Vec<f64>) -> Result<Self> {
        let data = ys.into_iter().enumerate().map(|(i, y)| (i as f64, y)).collect();
        Self::with_data(data)
    }

    /// Build from explicit pairs. `x` must be strictly increasing and every
    /// sample finite.
    pub fn with_data(data_xy: Vec<(f64, f64)>) -> Result<Self> {
        for (i, &(x, y)) in data_xy.iter().enumerate() {
            if !x.is_finite() || !y.is_finite() {
                return Err(ChartError::config(format!("non-finite sample at index {i}")));
            }
        }
        if let Some(i) = data_xy.windows(2).position(|w| w[1].0 <= w[0].0) {
            return Err(ChartError::config(format!(
                "x must be strictly increasing (index {})",
                i + 1
            )));
        }
        Ok(Self { data_xy })
    }

    pub fn len(&self) -> usize {
        self.data_xy.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data_xy.is_empty()
    }

    pub fn points(&self) -> &[(f64, f64)] {
        &self.data_xy
    }

    pub fn xs(&self) -> impl Iterator<Item = f64> + '_ {
        self.data_xy.iter().map(|&(x, _)| x)
    }

    pub fn ys(&self) -> impl Iterator<Item = f64> + '_ {
        self.data_xy.iter().map(|&(_, y)| y)
    }

    /// `(min(x), max(x))`; x is sorted so these are the end points.
    pub fn x_range(&self) -> Result<(f64, f64)> {
        match (self.data_xy.first(), self.data_xy.last()) {
            (Some(&(first, _)), Some(&(last, _))) => Ok((first, last)),
            _ => Err(ChartError::EmptySeries),
        }
    }

    /// `(min(y), max(y))`.
    pub fn y_range(&self) -> Result<(f64, f64)> {
        minmax(self.ys()).ok_or(ChartError::EmptySeries)
    }
}

pub(crate) fn minmax(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}
