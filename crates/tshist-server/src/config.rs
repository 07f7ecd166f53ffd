// File: crates/tshist-server/src/config.rs
// Summary: Startup configuration from TSHIST_* environment variables over built-in defaults.

use std::fmt::Display;
use std::net::SocketAddr;
use std::str::FromStr;

use anyhow::{anyhow, Context, Result};
use tshist_core::{theme, PipelineConfig};

pub struct ServerConfig {
    pub addr: SocketAddr,
    /// Runtime worker threads, also the cap on concurrent renders.
    pub workers: usize,
    /// Fallback log level when `RUST_LOG` is unset.
    pub log_level: String,
    pub pipeline: PipelineConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 8880)),
            workers: default_workers(),
            log_level: "info".to_string(),
            pipeline: PipelineConfig::default(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut cfg = Self::default();
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        if let Some(addr) = parse::<SocketAddr>(&get, "TSHIST_ADDR")? {
            cfg.addr = addr;
        }
        if let Some(workers) = parse::<usize>(&get, "TSHIST_WORKERS")? {
            if workers == 0 {
                return Err(anyhow!("TSHIST_WORKERS must be at least 1"));
            }
            cfg.workers = workers;
        }
        if let Some(level) = get("TSHIST_LOG") {
            cfg.log_level = level;
        }

        let chart = &mut cfg.pipeline;
        if let Some(n) = parse(&get, "TSHIST_SAMPLES")? {
            chart.samples = n;
        }
        if let Some(bins) = parse(&get, "TSHIST_BINS")? {
            chart.render.bins = bins;
        }
        if let Some(alpha) = parse(&get, "TSHIST_ALPHA")? {
            chart.render.alpha = alpha;
        }
        if let Some(dpi) = parse(&get, "TSHIST_DPI")? {
            chart.render.figure.dpi = dpi;
        }
        if let Some(split) = parse(&get, "TSHIST_SPLIT")? {
            chart.render.layout.split = split;
        }
        if let Some(color) = get("TSHIST_COLOR") {
            chart.render.color = theme::parse_color(&color).context("TSHIST_COLOR")?;
        }
        if let Some(name) = get("TSHIST_THEME") {
            chart.render.theme = theme::find(&name).ok_or_else(|| anyhow!("TSHIST_THEME: unknown theme '{name}'"))?;
        }
        chart.title = get("TSHIST_TITLE");
        chart.x_label = get("TSHIST_XLABEL");
        chart.y_label = get("TSHIST_YLABEL");

        cfg.pipeline.validate().context("invalid chart configuration")?;
        Ok(cfg)
    }
}

fn parse<T>(get: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: Display,
{
    get(key)
        .map(|raw| raw.parse::<T>().map_err(|e| anyhow!("{key}={raw:?}: {e}")))
        .transpose()
}

fn default_workers() -> usize {
    std::thread::available_parallelism().map(|n| n.get()).unwrap_or(1)
}
