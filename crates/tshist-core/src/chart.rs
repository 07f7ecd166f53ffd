// File: crates/tshist-core/src/chart.rs
// Summary: Two-panel chart: the series as a line on the right, a horizontal
// histogram of its values on the left, both sharing one y range.

use skia_safe as skia;
use tracing::debug;

use crate::axis::Axis;
use crate::canvas::Canvas;
use crate::error::{ChartError, Result};
use crate::geometry::RectI32;
use crate::grid::format_tick;
use crate::histogram::Histogram;
use crate::layout::{LayoutParams, PanelGeometry};
use crate::scale::LinearScale;
use crate::series::Series;
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{FigureSize, DEFAULT_ALPHA, DEFAULT_BINS};

pub struct RenderOptions {
    pub figure: FigureSize,
    pub layout: LayoutParams,
    pub bins: usize,
    pub alpha: f32,
    pub color: skia::Color,
    pub theme: Theme,
    /// Tests turn text off to keep pixels independent of installed fonts.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            figure: FigureSize::default(),
            layout: LayoutParams::default(),
            bins: DEFAULT_BINS,
            alpha: DEFAULT_ALPHA,
            color: skia::Color::from_rgb(0, 0, 255),
            theme: Theme::classic(),
            draw_labels: true,
        }
    }
}

impl RenderOptions {
    pub fn validate(&self) -> Result<()> {
        if self.bins == 0 {
            return Err(ChartError::config("bin count must be positive"));
        }
        if !(0.0..=1.0).contains(&self.alpha) {
            return Err(ChartError::config(format!("alpha must be within [0, 1], got {}", self.alpha)));
        }
        self.figure.pixels()?;
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PanelAxes {
    pub x: Axis,
    pub y: Axis,
}

/// Axis state of both panels, computed before any pixel is drawn.
#[derive(Clone, Debug, PartialEq)]
pub struct DualPanelAxes {
    pub primary: PanelAxes,
    pub side: PanelAxes,
    pub histogram: Histogram,
}

pub struct RenderedChart {
    pub canvas: Canvas,
    pub axes: DualPanelAxes,
}

pub struct Chart {
    pub series: Series,
    pub title: Option<String>,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
}

impl Chart {
    pub fn new(series: Series) -> Self {
        Self { series, title: None, x_label: None, y_label: None }
    }

    pub fn with_title(mut self, title: Option<String>) -> Self {
        self.title = title;
        self
    }

    pub fn with_x_label(mut self, label: Option<String>) -> Self {
        self.x_label = label;
        self
    }

    pub fn with_y_label(mut self, label: Option<String>) -> Self {
        self.y_label = label;
        self
    }

    /// Axis limits for both panels.
    ///
    /// The primary panel is clamped to the data extent. The side panel's
    /// count axis is the histogram's natural `(0, C)` range swapped to
    /// `(C, 0)`, and its value axis copies the primary y limits.
    pub fn axes(&self, bins: usize) -> Result<DualPanelAxes> {
        if self.series.is_empty() {
            return Err(ChartError::EmptySeries);
        }
        let (x_min, x_max) = self.series.x_range()?;
        let (y_min, y_max) = self.series.y_range()?;

        let primary = PanelAxes {
            x: Axis::new(x_min, x_max).with_label(self.x_label.clone()).with_grid(true),
            y: Axis::new(y_min, y_max).with_grid(true).without_tick_labels(),
        };

        let values: Vec<f64> = self.series.ys().collect();
        let histogram = Histogram::compute(&values, bins)?;

        let (c_lo, c_hi) = histogram.natural_count_range();
        // Narrow panel: fewer count ticks keep the grid legible.
        let mut side_x = Axis::new(c_lo, c_hi).with_grid(true).with_tick_target(3).without_tick_labels();
        side_x.invert();

        let mut side_y = Axis::new(y_min, y_max).with_label(self.y_label.clone()).with_grid(true);
        side_y.set_limits(primary.y.limits());

        Ok(DualPanelAxes { primary, side: PanelAxes { x: side_x, y: side_y }, histogram })
    }

    /// Draw both panels into a fresh canvas sized from `opts.figure`.
    pub fn render(&self, geometry: &PanelGeometry, opts: &RenderOptions) -> Result<RenderedChart> {
        opts.validate()?;
        let axes = self.axes(opts.bins)?;
        let (width, height) = opts.figure.pixels()?;
        let mut canvas = Canvas::new(width, height, opts.theme.background)?;

        let primary_px = geometry.primary.to_pixels(width, height);
        let side_px = geometry.side.to_pixels(width, height);
        let style = Style::new(opts);
        let shaper = opts.draw_labels.then(TextShaper::new);

        {
            let sk = canvas.sk();

            // Primary panel: the series as a line.
            draw_panel_background(sk, primary_px, &style);
            draw_grid(sk, primary_px, &axes.primary, &style);
            let sx = LinearScale::horizontal(&axes.primary.x, primary_px.left, primary_px.right);
            let sy = LinearScale::vertical(&axes.primary.y, primary_px.top, primary_px.bottom);
            with_clip(sk, primary_px, |sk| draw_line_series(sk, &sx, &sy, &self.series, &style));
            draw_frame(sk, primary_px, &axes.primary, &style);

            // Side panel: horizontal histogram against the shared y range.
            draw_panel_background(sk, side_px, &style);
            draw_grid(sk, side_px, &axes.side, &style);
            let hx = LinearScale::horizontal(&axes.side.x, side_px.left, side_px.right);
            let hy = LinearScale::vertical(&axes.side.y, side_px.top, side_px.bottom);
            with_clip(sk, side_px, |sk| draw_horizontal_histogram(sk, &hx, &hy, &axes.histogram, &style));
            draw_frame(sk, side_px, &axes.side, &style);

            if let Some(shaper) = &shaper {
                draw_tick_labels(sk, shaper, primary_px, &axes.primary, &style);
                draw_tick_labels(sk, shaper, side_px, &axes.side, &style);
                draw_titles(sk, shaper, primary_px, side_px, &axes, self.title.as_deref(), &style);
            }
        }

        debug!(
            width,
            height,
            samples = self.series.len(),
            bins = axes.histogram.bins(),
            max_count = axes.histogram.max_count(),
            "rendered chart"
        );
        Ok(RenderedChart { canvas, axes })
    }
}

// ---- helpers ----------------------------------------------------------------

/// Pixel sizes derived from the DPI, so a bigger figure does not thin out.
struct Style {
    theme: Theme,
    color: skia::Color,
    alpha: f32,
    line_width: f32,
    grid_width: f32,
    frame_width: f32,
    tick_len: f32,
    font_size: f32,
    title_size: f32,
}

impl Style {
    fn new(opts: &RenderOptions) -> Self {
        let pt = opts.figure.dpi / 72.0;
        Self {
            theme: opts.theme,
            color: opts.color,
            alpha: opts.alpha,
            line_width: 1.5 * pt,
            grid_width: 0.8 * pt,
            frame_width: 0.8 * pt,
            tick_len: 3.5 * pt,
            font_size: 10.0 * pt,
            title_size: 12.0 * pt,
        }
    }

    fn stroke(&self, color: skia::Color, width: f32) -> skia::Paint {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(width);
        paint.set_color(color);
        paint
    }

    fn series_paint(&self, style: skia::paint::Style) -> skia::Paint {
        let mut paint = self.stroke(self.color, self.line_width);
        paint.set_style(style);
        paint.set_alpha_f(self.alpha);
        paint
    }
}

fn with_clip(canvas: &skia::Canvas, rect: RectI32, draw: impl FnOnce(&skia::Canvas)) {
    canvas.save();
    canvas.clip_rect(rect.to_skia(), skia::ClipOp::Intersect, true);
    draw(canvas);
    canvas.restore();
}

fn draw_panel_background(canvas: &skia::Canvas, rect: RectI32, style: &Style) {
    let mut paint = skia::Paint::default();
    paint.set_color(style.theme.panel);
    canvas.draw_rect(rect.to_skia(), &paint);
}

fn draw_grid(canvas: &skia::Canvas, rect: RectI32, axes: &PanelAxes, style: &Style) {
    let paint = style.stroke(style.theme.grid, style.grid_width);
    let (l, t, r, b) = (rect.left as f32, rect.top as f32, rect.right as f32, rect.bottom as f32);

    if axes.x.grid {
        let sx = LinearScale::horizontal(&axes.x, rect.left, rect.right);
        for v in axes.x.ticks() {
            let x = sx.to_px(v);
            canvas.draw_line((x, t), (x, b), &paint);
        }
    }
    if axes.y.grid {
        let sy = LinearScale::vertical(&axes.y, rect.top, rect.bottom);
        for v in axes.y.ticks() {
            let y = sy.to_px(v);
            canvas.draw_line((l, y), (r, y), &paint);
        }
    }
}

fn draw_frame(canvas: &skia::Canvas, rect: RectI32, axes: &PanelAxes, style: &Style) {
    let frame = style.stroke(style.theme.frame, style.frame_width);
    canvas.draw_rect(rect.to_skia(), &frame);

    let tick = style.stroke(style.theme.tick, style.frame_width);
    let sx = LinearScale::horizontal(&axes.x, rect.left, rect.right);
    for v in axes.x.ticks() {
        let x = sx.to_px(v);
        canvas.draw_line((x, rect.bottom as f32), (x, rect.bottom as f32 + style.tick_len), &tick);
    }
    let sy = LinearScale::vertical(&axes.y, rect.top, rect.bottom);
    for v in axes.y.ticks() {
        let y = sy.to_px(v);
        canvas.draw_line((rect.left as f32 - style.tick_len, y), (rect.left as f32, y), &tick);
    }
}

fn draw_line_series(canvas: &skia::Canvas, sx: &LinearScale, sy: &LinearScale, series: &Series, style: &Style) {
    let data = series.points();
    let Some(&(x0, y0)) = data.first() else { return };

    let mut path = skia::Path::new();
    path.move_to((sx.to_px(x0), sy.to_px(y0)));
    for &(x, y) in data.iter().skip(1) {
        path.line_to((sx.to_px(x), sy.to_px(y)));
    }

    let mut paint = style.series_paint(skia::paint::Style::Stroke);
    paint.set_stroke_join(skia::paint::Join::Round);
    paint.set_stroke_cap(skia::paint::Cap::Round);
    canvas.draw_path(&path, &paint);
}

fn draw_horizontal_histogram(
    canvas: &skia::Canvas,
    sx: &LinearScale,
    sy: &LinearScale,
    histogram: &Histogram,
    style: &Style,
) {
    let paint = style.series_paint(skia::paint::Style::Fill);
    let x_base = sx.to_px(0.0);
    for (lo, hi, count) in histogram.iter_bins() {
        if count == 0 {
            continue;
        }
        let x_tip = sx.to_px(count as f64);
        let (y_lo, y_hi) = (sy.to_px(lo), sy.to_px(hi));
        let rect = skia::Rect::from_ltrb(x_base.min(x_tip), y_lo.min(y_hi), x_base.max(x_tip), y_lo.max(y_hi));
        canvas.draw_rect(rect, &paint);
    }
}

fn draw_tick_labels(canvas: &skia::Canvas, shaper: &TextShaper, rect: RectI32, axes: &PanelAxes, style: &Style) {
    let color = style.theme.text;
    if axes.x.tick_labels {
        let ticks = axes.x.ticks();
        let sx = LinearScale::horizontal(&axes.x, rect.left, rect.right);
        let baseline = rect.bottom as f32 + style.tick_len + style.font_size;
        for &v in &ticks {
            shaper.draw_centered(canvas, &format_tick(v, &ticks), sx.to_px(v), baseline, style.font_size, color);
        }
    }
    if axes.y.tick_labels {
        let ticks = axes.y.ticks();
        let sy = LinearScale::vertical(&axes.y, rect.top, rect.bottom);
        let right = rect.left as f32 - style.tick_len - 2.0;
        for &v in &ticks {
            let baseline = sy.to_px(v) + style.font_size * 0.35;
            shaper.draw_right(canvas, &format_tick(v, &ticks), right, baseline, style.font_size, color);
        }
    }
}

fn draw_titles(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    primary: RectI32,
    side: RectI32,
    axes: &DualPanelAxes,
    title: Option<&str>,
    style: &Style,
) {
    let color = style.theme.text;
    if let Some(title) = title {
        let cx = (primary.left + primary.right) as f32 * 0.5;
        shaper.draw_centered(canvas, title, cx, primary.top as f32 + style.title_size * 1.2, style.title_size, color);
    }
    if let Some(label) = axes.primary.x.label.as_deref() {
        let w = shaper.measure_width(label, style.font_size);
        let (x, y) = (primary.right as f32 - w - 6.0, primary.bottom as f32 - 6.0);
        shaper.draw_left(canvas, label, x, y, style.font_size, color);
    }
    if let Some(label) = axes.side.y.label.as_deref() {
        let cy = (side.top + side.bottom) as f32 * 0.5;
        shaper.draw_vertical(canvas, label, style.font_size, cy, style.font_size, color);
    }
}
