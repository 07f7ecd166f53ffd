// File: crates/tshist-core/src/pipeline.rs
// Summary: One request end to end: synthesize -> lay out -> render -> encode -> envelope.

use std::time::Instant;

use rand::Rng;
use tracing::{debug, warn};

use crate::chart::{Chart, DualPanelAxes, RenderOptions};
use crate::encode::{encode_png, ImageBuffer};
use crate::error::{ChartError, Result};
use crate::layout::PanelGeometry;
use crate::response::ResponseEnvelope;
use crate::series::Series;
use crate::synth::SineNoise;
use crate::types::DEFAULT_SAMPLES;

/// Everything that stays fixed across requests.
pub struct PipelineConfig {
    pub samples: usize,
    pub render: RenderOptions,
    pub title: Option<String>,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            samples: DEFAULT_SAMPLES,
            render: RenderOptions::default(),
            title: None,
            x_label: None,
            y_label: None,
        }
    }
}

impl PipelineConfig {
    pub fn validate(&self) -> Result<()> {
        if self.samples == 0 {
            return Err(ChartError::config("sample count must be positive"));
        }
        self.render.validate()?;
        PanelGeometry::compute(&self.render.layout)?;
        Ok(())
    }
}

pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    /// Validates up front so a bad config fails at startup, not per request.
    pub fn new(config: PipelineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn synthesize<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Series> {
        let series = SineNoise::new(self.config.samples).synthesize(rng)?;
        debug!(samples = series.len(), "synthesized series");
        Ok(series)
    }

    fn chart(&self, series: Series) -> Chart {
        Chart::new(series)
            .with_title(self.config.title.clone())
            .with_x_label(self.config.x_label.clone())
            .with_y_label(self.config.y_label.clone())
    }

    /// Panel axes for `series` without drawing anything.
    pub fn axes(&self, series: Series) -> Result<DualPanelAxes> {
        self.chart(series).axes(self.config.render.bins)
    }

    /// Render `series` with the configured layout and encode it.
    pub fn render_series(&self, series: Series) -> Result<ImageBuffer> {
        let started = Instant::now();
        let geometry = PanelGeometry::compute(&self.config.render.layout)?;
        let rendered = self.chart(series).render(&geometry, &self.config.render)?;
        let rendered_at = started.elapsed();
        let buffer = encode_png(rendered.canvas)?;
        debug!(
            render_ms = rendered_at.as_secs_f64() * 1e3,
            total_ms = started.elapsed().as_secs_f64() * 1e3,
            bytes = buffer.len(),
            "pipeline finished"
        );
        Ok(buffer)
    }

    /// Fresh data from `rng`, rendered to PNG.
    pub fn render_png<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<ImageBuffer> {
        let series = self.synthesize(rng)?;
        self.render_series(series)
    }

    /// Full response for one image request. Nothing is built unless every
    /// earlier stage succeeded.
    pub fn respond<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<ResponseEnvelope> {
        match self.render_png(rng) {
            Ok(buffer) => Ok(ResponseEnvelope::png(buffer)),
            Err(e) => {
                warn!(error = %e, "image pipeline failed");
                Err(e)
            }
        }
    }
}
