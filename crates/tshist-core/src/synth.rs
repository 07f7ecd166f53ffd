// File: crates/tshist-core/src/synth.rs
// Summary: Data synthesizer: a slow sine wave plus Gaussian noise, one fresh draw per request.

use rand::Rng;
use rand_distr::StandardNormal;

use crate::error::{ChartError, Result};
use crate::series::Series;
use crate::types::DEFAULT_SAMPLES;

/// Produces `y_i = sin(x_i / period) + noise_scale * n_i` with `n_i ~ N(0, 1)`
/// for `x_i = 0..samples`.
///
/// The random source is passed in by the caller: the server hands in an
/// entropy-seeded generator per request, tests hand in a fixed-seed one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SineNoise {
    pub samples: usize,
    pub period: f64,
    pub noise_scale: f64,
}

impl SineNoise {
    pub const fn new(samples: usize) -> Self {
        Self { samples, period: 50.0, noise_scale: 0.1 }
    }

    pub fn synthesize<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Series> {
        if self.samples == 0 {
            return Err(ChartError::config("sample count must be positive"));
        }
        if !(self.period.is_finite() && self.period != 0.0) || !self.noise_scale.is_finite() {
            return Err(ChartError::config(format!(
                "period {} / noise scale {} must be finite and period non-zero",
                self.period, self.noise_scale
            )));
        }
        let ys = (0..self.samples)
            .map(|i| {
                let noise: f64 = rng.sample(StandardNormal);
                (i as f64 / self.period).sin() + self.noise_scale * noise
            })
            .collect();
        Series::from_y(ys)
    }
}

impl Default for SineNoise {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLES)
    }
}
