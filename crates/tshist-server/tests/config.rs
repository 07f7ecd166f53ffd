// File: crates/tshist-server/tests/config.rs
// Purpose: Environment overrides on top of defaults, and rejection of bad values.

use std::collections::HashMap;

use tshist_core::theme::parse_color;
use tshist_server::ServerConfig;

fn from(pairs: &[(&str, &str)]) -> anyhow::Result<ServerConfig> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    ServerConfig::from_lookup(|k| map.get(k).cloned())
}

#[test]
fn defaults_when_nothing_is_set() {
    let cfg = from(&[]).expect("defaults are valid");
    assert_eq!(cfg.addr.port(), 8880);
    assert!(cfg.workers >= 1);
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.pipeline.samples, 1000);
    assert_eq!(cfg.pipeline.render.bins, 30);
    assert_eq!(cfg.pipeline.render.alpha, 0.6);
    assert_eq!(cfg.pipeline.render.layout.split, 0.1);
    assert_eq!(cfg.pipeline.render.figure.pixels().unwrap(), (1200, 600));
    assert_eq!(cfg.pipeline.title, None);
}

#[test]
fn overrides_are_applied() {
    let cfg = from(&[
        ("TSHIST_ADDR", "127.0.0.1:9000"),
        ("TSHIST_WORKERS", "3"),
        ("TSHIST_SAMPLES", "250"),
        ("TSHIST_BINS", "12"),
        ("TSHIST_ALPHA", "0.25"),
        ("TSHIST_COLOR", "#ff8000"),
        ("TSHIST_DPI", "50"),
        ("TSHIST_SPLIT", "0.2"),
        ("TSHIST_THEME", "dark"),
        ("TSHIST_TITLE", "noisy sine"),
    ])
    .expect("valid overrides");
    assert_eq!(cfg.addr.to_string(), "127.0.0.1:9000");
    assert_eq!(cfg.workers, 3);
    assert_eq!(cfg.pipeline.samples, 250);
    assert_eq!(cfg.pipeline.render.bins, 12);
    assert_eq!(cfg.pipeline.render.alpha, 0.25);
    assert_eq!(cfg.pipeline.render.color, parse_color("#ff8000").unwrap());
    assert_eq!(cfg.pipeline.render.figure.pixels().unwrap(), (600, 300));
    assert_eq!(cfg.pipeline.render.layout.split, 0.2);
    assert_eq!(cfg.pipeline.render.theme.name, "dark");
    assert_eq!(cfg.pipeline.title.as_deref(), Some("noisy sine"));
}

#[test]
fn bad_values_fail_startup() {
    for pairs in [
        &[("TSHIST_SAMPLES", "0")][..],
        &[("TSHIST_SAMPLES", "many")][..],
        &[("TSHIST_BINS", "0")][..],
        &[("TSHIST_WORKERS", "0")][..],
        &[("TSHIST_SPLIT", "0.99")][..],
        &[("TSHIST_ALPHA", "2")][..],
        &[("TSHIST_DPI", "5000")][..],
        &[("TSHIST_COLOR", "chartreuse")][..],
        &[("TSHIST_THEME", "neon")][..],
        &[("TSHIST_ADDR", "not an addr")][..],
    ] {
        assert!(from(pairs).is_err(), "{pairs:?} should be rejected");
    }
}
