// File: crates/tshist-core/src/theme.rs
// Summary: Figure colors (background, frame, grid, text) and series color parsing.

use skia_safe as skia;

use crate::error::{ChartError, Result};

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub panel: skia::Color,
    pub frame: skia::Color,
    pub grid: skia::Color,
    pub tick: skia::Color,
    pub text: skia::Color,
}

impl Theme {
    /// White figure, black spines, light grey grid.
    pub fn classic() -> Self {
        Self {
            name: "classic",
            background: skia::Color::from_argb(255, 255, 255, 255),
            panel: skia::Color::from_argb(255, 255, 255, 255),
            frame: skia::Color::from_argb(255, 0, 0, 0),
            grid: skia::Color::from_argb(255, 0xb0, 0xb0, 0xb0),
            tick: skia::Color::from_argb(255, 0, 0, 0),
            text: skia::Color::from_argb(255, 0, 0, 0),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            panel: skia::Color::from_argb(255, 24, 24, 28),
            frame: skia::Color::from_argb(255, 180, 180, 190),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            text: skia::Color::from_argb(255, 235, 235, 245),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::classic(), Theme::dark()]
}

/// Find a theme by its `name`.
pub fn find(name: &str) -> Option<Theme> {
    presets().into_iter().find(|t| t.name.eq_ignore_ascii_case(name))
}

/// Parse a single-letter color code (`b g r c m y k w`) or `#rrggbb`.
pub fn parse_color(s: &str) -> Result<skia::Color> {
    let s = s.trim();
    let rgb = match s {
        "b" => (0, 0, 255),
        "g" => (0, 128, 0),
        "r" => (255, 0, 0),
        "c" => (0, 191, 191),
        "m" => (191, 0, 191),
        "y" => (191, 191, 0),
        "k" => (0, 0, 0),
        "w" => (255, 255, 255),
        _ => {
            let hex = s
                .strip_prefix('#')
                .filter(|h| h.len() == 6)
                .ok_or_else(|| ChartError::config(format!("unknown color '{s}'")))?;
            let v = u32::from_str_radix(hex, 16)
                .map_err(|_| ChartError::config(format!("bad hex color '{s}'")))?;
            (((v >> 16) & 0xff) as u8, ((v >> 8) & 0xff) as u8, (v & 0xff) as u8)
        }
    };
    Ok(skia::Color::from_rgb(rgb.0, rgb.1, rgb.2))
}
