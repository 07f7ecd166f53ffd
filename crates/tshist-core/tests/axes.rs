// File: crates/tshist-core/tests/axes.rs
// Purpose: Panel axis limits: primary clamped to data, side count axis reversed,
// side value axis locked to the primary one.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tshist_core::{Chart, ChartError, LayoutParams, PanelGeometry, RenderOptions, Series, SineNoise};

#[test]
fn primary_limits_are_exact_data_extent() {
    let series = Series::with_data(vec![(2.0, -1.5), (3.0, 4.0), (7.5, 0.25)]).unwrap();
    let axes = Chart::new(series).axes(30).expect("axes");
    assert_eq!(axes.primary.x.limits(), (2.0, 7.5));
    assert_eq!(axes.primary.y.limits(), (-1.5, 4.0));
    assert!(axes.primary.x.grid && axes.primary.y.grid);
    assert!(axes.primary.x.tick_labels);
    assert!(!axes.primary.y.tick_labels, "y tick labels belong to the side panel");
}

#[test]
fn side_panel_count_axis_is_reversed() {
    let series = Series::from_y(vec![1.0, 2.0, 2.0, 3.0, 3.0, 3.0]).unwrap();
    let axes = Chart::new(series).axes(3).expect("axes");
    assert_eq!(axes.histogram.counts, vec![1, 2, 3]);
    assert_eq!(axes.side.x.limits(), (3.0, 0.0));
    assert!(axes.side.x.is_inverted());
    assert!(!axes.side.x.tick_labels);
    assert!(axes.side.x.grid && axes.side.y.grid);
}

#[test]
fn side_value_axis_matches_primary_for_random_series() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..5 {
        let series = SineNoise::default().synthesize(&mut rng).unwrap();
        let (y_min, y_max) = series.y_range().unwrap();
        let axes = Chart::new(series).axes(30).expect("axes");
        assert_eq!(axes.primary.x.limits(), (0.0, 999.0));
        assert_eq!(axes.primary.y.limits(), (y_min, y_max));
        assert_eq!(axes.side.y.limits(), axes.primary.y.limits());
        let c = axes.histogram.max_count() as f64;
        assert_eq!(axes.side.x.limits(), (c, 0.0));
    }
}

#[test]
fn labels_only_when_given() {
    let series = Series::from_y(vec![0.0, 1.0]).unwrap();
    let bare = Chart::new(series.clone()).axes(2).unwrap();
    assert_eq!(bare.primary.x.label, None);
    assert_eq!(bare.side.y.label, None);

    let labelled = Chart::new(series)
        .with_x_label(Some("t".into()))
        .with_y_label(Some("value".into()))
        .axes(2)
        .unwrap();
    assert_eq!(labelled.primary.x.label.as_deref(), Some("t"));
    assert_eq!(labelled.side.y.label.as_deref(), Some("value"));
}

#[test]
fn empty_series_fails_before_drawing() {
    let chart = Chart::new(Series::from_y(Vec::new()).unwrap());
    assert!(matches!(chart.axes(30), Err(ChartError::EmptySeries)));

    let geometry = PanelGeometry::compute(&LayoutParams::default()).unwrap();
    let opts = RenderOptions { draw_labels: false, ..RenderOptions::default() };
    assert!(matches!(chart.render(&geometry, &opts), Err(ChartError::EmptySeries)));
}

#[test]
fn bad_render_options_are_invalid_configuration() {
    let chart = Chart::new(Series::from_y(vec![0.0, 1.0]).unwrap());
    let geometry = PanelGeometry::compute(&LayoutParams::default()).unwrap();
    for opts in [
        RenderOptions { bins: 0, ..RenderOptions::default() },
        RenderOptions { alpha: 1.5, ..RenderOptions::default() },
    ] {
        assert!(matches!(chart.render(&geometry, &opts), Err(ChartError::InvalidConfiguration(_))));
    }
}

#[test]
fn huge_value_range_gets_finite_bounded_ticks() {
    let series = Series::from_y(vec![-1e308, 1e308]).unwrap();
    let axes = Chart::new(series.clone()).axes(3).expect("axes");
    assert_eq!(axes.primary.y.limits(), (-1e308, 1e308));

    let ticks = axes.primary.y.ticks();
    assert!(!ticks.is_empty() && ticks.len() <= 20, "ticks {ticks:?}");
    assert!(ticks.iter().all(|t| t.is_finite()));

    let edges = &axes.histogram.edges;
    assert_eq!((edges[0], edges[3]), (-1e308, 1e308));
    assert!(edges.iter().all(|e| e.is_finite()));

    let geometry = PanelGeometry::compute(&LayoutParams::default()).unwrap();
    let opts = RenderOptions { draw_labels: false, ..RenderOptions::default() };
    Chart::new(series).render(&geometry, &opts).expect("render finishes");
}

#[test]
fn oversized_tick_target_falls_back_to_the_limits() {
    let axis = tshist_core::Axis::new(0.0, 1.0).with_tick_target(1_000_000);
    assert_eq!(axis.ticks(), vec![0.0, 1.0]);
}
