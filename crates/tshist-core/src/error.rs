// File: crates/tshist-core/src/error.rs
// Summary: Error taxonomy for the request-to-image pipeline.

use thiserror::Error;

/// Every failure the pipeline can surface for a single request.
///
/// All variants are deterministic for a fixed configuration, so callers
/// report them instead of retrying.
#[derive(Debug, Error)]
pub enum ChartError {
    /// Bad sample count, bin count, opacity, figure size or color.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Panel rectangles would be empty or fall outside the figure.
    #[error("invalid panel layout: {0}")]
    Layout(String),

    /// Nothing to plot; axis limits over zero samples are undefined.
    #[error("series has no samples")]
    EmptySeries,

    /// Raster read-back or PNG serialization failed.
    #[error("image encoding failed: {0}")]
    Encoding(String),
}

impl ChartError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }

    pub(crate) fn layout(msg: impl Into<String>) -> Self {
        Self::Layout(msg.into())
    }
}

pub type Result<T, E = ChartError> = std::result::Result<T, E>;
