// File: crates/tshist-core/tests/smoke.rs
// Purpose: End-to-end pipeline: PNG bytes decode back to the canvas size,
// independent draws give distinct but equally sized images.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tshist_core::{ChartError, Pipeline, PipelineConfig, RenderOptions, PNG_CONTENT_TYPE};

fn pipeline() -> Pipeline {
    let render = RenderOptions { draw_labels: false, ..RenderOptions::default() };
    Pipeline::new(PipelineConfig { render, ..PipelineConfig::default() }).expect("valid config")
}

#[test]
fn render_smoke_png() {
    let buf = pipeline().render_png(&mut StdRng::seed_from_u64(3)).expect("render");
    assert!(!buf.is_empty());
    assert!(buf.bytes().starts_with(&[137, 80, 78, 71]), "should be PNG header");
    assert_eq!(buf.dimensions(), (1200, 600));

    let decoded = image::load_from_memory(buf.bytes()).expect("decodable png");
    assert_eq!((decoded.width(), decoded.height()), (1200, 600));
}

#[test]
fn two_requests_two_valid_images() {
    let p = pipeline();
    let a = p.respond(&mut StdRng::seed_from_u64(10)).expect("first");
    let b = p.respond(&mut StdRng::seed_from_u64(11)).expect("second");

    for env in [&a, &b] {
        assert_eq!(env.status(), http::StatusCode::OK);
        assert_eq!(env.headers()[http::header::CONTENT_TYPE], PNG_CONTENT_TYPE);
        let img = image::load_from_memory(env.body().bytes()).expect("decodable");
        assert_eq!((img.width(), img.height()), (1200, 600));
    }
    assert_ne!(a.body().bytes(), b.body().bytes(), "independent randomness should change the image");
}

#[test]
fn same_seed_same_pixels() {
    let p = pipeline();
    let a = p.render_png(&mut StdRng::seed_from_u64(5)).unwrap();
    let b = p.render_png(&mut StdRng::seed_from_u64(5)).unwrap();
    let a = image::load_from_memory(a.bytes()).unwrap().to_rgba8();
    let b = image::load_from_memory(b.bytes()).unwrap().to_rgba8();
    assert_eq!(a.as_raw(), b.as_raw());
}

#[test]
fn labelled_render_still_produces_a_png() {
    let config = PipelineConfig {
        samples: 200,
        title: Some("ts-hist".into()),
        x_label: Some("sample".into()),
        y_label: Some("value".into()),
        ..PipelineConfig::default()
    };
    let buf = Pipeline::new(config).unwrap().render_png(&mut StdRng::seed_from_u64(8)).unwrap();
    assert_eq!(buf.dimensions(), (1200, 600));
}

#[test]
fn invalid_configs_are_rejected_up_front() {
    let zero = PipelineConfig { samples: 0, ..PipelineConfig::default() };
    assert!(matches!(Pipeline::new(zero), Err(ChartError::InvalidConfiguration(_))));

    let mut wide = PipelineConfig::default();
    wide.render.layout.split = 0.97;
    assert!(matches!(Pipeline::new(wide), Err(ChartError::Layout(_))));
}
