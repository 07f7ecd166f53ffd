// File: crates/tshist-core/tests/layout.rs
// Purpose: Panel geometry for the default margins, invalid splits, and the
// shared-height / no-overlap invariant over random splits.

use proptest::prelude::*;
use tshist_core::{ChartError, LayoutParams, PanelGeometry};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-12
}

#[test]
fn default_layout_matches_reference_rectangles() {
    let g = PanelGeometry::compute(&LayoutParams::default()).expect("layout");

    assert!(approx(g.side.left, 0.05));
    assert!(approx(g.side.right(), 0.15));
    assert!(approx(g.side.bottom, 0.05));
    assert!(approx(g.side.top(), 0.99));

    assert!(approx(g.primary.left, 0.16));
    assert!(approx(g.primary.right(), 0.99));
    assert_eq!(g.primary.y_extent(), g.side.y_extent());
}

#[test]
fn pixel_rects_for_default_figure() {
    let g = PanelGeometry::compute(&LayoutParams::default()).expect("layout");
    let side = g.side.to_pixels(1200, 600);
    let primary = g.primary.to_pixels(1200, 600);
    assert_eq!((side.left, side.top, side.right, side.bottom), (60, 6, 180, 570));
    assert_eq!((primary.left, primary.top, primary.right, primary.bottom), (192, 6, 1188, 570));
}

#[test]
fn split_that_overflows_figure_is_a_layout_error() {
    for split in [0.93, 0.95, 1.0, 2.0] {
        let params = LayoutParams::default().with_split(split);
        assert!(
            matches!(PanelGeometry::compute(&params), Err(ChartError::Layout(_))),
            "split {split} should be rejected"
        );
    }
}

#[test]
fn non_positive_or_nan_split_is_a_layout_error() {
    for split in [0.0, -0.1, f64::NAN] {
        let params = LayoutParams::default().with_split(split);
        assert!(matches!(PanelGeometry::compute(&params), Err(ChartError::Layout(_))));
    }
}

#[test]
fn vertical_margins_that_overflow_are_rejected() {
    let params = LayoutParams { bottom: 0.6, pad_top: 0.5, ..LayoutParams::default() };
    assert!(matches!(PanelGeometry::compute(&params), Err(ChartError::Layout(_))));
}

proptest! {
    #[test]
    fn panels_share_height_and_never_overlap(split in 0.001f64..0.92) {
        let g = PanelGeometry::compute(&LayoutParams::default().with_split(split)).unwrap();
        prop_assert_eq!(g.side.y_extent(), g.primary.y_extent());
        prop_assert!(g.side.right() <= g.primary.left);
        prop_assert!(g.side.width > 0.0 && g.primary.width > 0.0);
        prop_assert!(g.primary.right() <= 1.0 + 1e-12);
    }
}
