// File: crates/tshist-core/src/lib.rs
// Summary: Core library entry point; renders a time series next to a histogram of its values as PNG.

pub mod axis;
pub mod canvas;
pub mod chart;
pub mod encode;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod histogram;
pub mod layout;
pub mod pipeline;
pub mod response;
pub mod scale;
pub mod series;
pub mod synth;
pub mod text;
pub mod theme;
pub mod types;

pub use axis::Axis;
pub use canvas::Canvas;
pub use chart::{Chart, DualPanelAxes, PanelAxes, RenderOptions, RenderedChart};
pub use encode::{encode_png, ImageBuffer};
pub use error::{ChartError, Result};
pub use geometry::{NormRect, RectI32};
pub use histogram::Histogram;
pub use layout::{LayoutParams, PanelGeometry};
pub use pipeline::{Pipeline, PipelineConfig};
pub use response::{ResponseEnvelope, PNG_CONTENT_TYPE};
pub use series::Series;
pub use synth::SineNoise;
pub use text::TextShaper;
pub use theme::Theme;
pub use types::FigureSize;
