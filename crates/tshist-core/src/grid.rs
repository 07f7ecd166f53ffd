// File: crates/tshist-core/src/grid.rs
// Summary: Tick placement ("nice" steps) and tick label formatting.

/// Upper bound on ticks per axis; beyond this the step underflowed the span.
const MAX_TICKS: i64 = 1000;

/// Tick positions on multiples of a 1/2/2.5/5 x 10^k step, aiming for about
/// `target` intervals across `[lo, hi]`.
pub fn nice_ticks(lo: f64, hi: f64, target: usize) -> Vec<f64> {
    if !lo.is_finite() || !hi.is_finite() || hi <= lo || target == 0 {
        return if lo.is_finite() { vec![lo] } else { Vec::new() };
    }
    // Divide before subtracting: `hi - lo` overflows for spans near f64::MAX.
    let target = target as f64;
    let step = nice_step(hi / target - lo / target);
    if !step.is_finite() {
        return vec![lo, hi];
    }
    let eps = step * 1e-9;
    let first = (lo / step - 1e-9).ceil() as i64;
    let last = (hi / step + 1e-9).floor() as i64;
    if last.saturating_sub(first) > MAX_TICKS {
        return vec![lo, hi];
    }
    (first..=last)
        .map(|k| k as f64 * step)
        .filter(|v| *v >= lo - eps && *v <= hi + eps)
        // avoid printing "-0"
        .map(|v| if v.abs() < eps { 0.0 } else { v })
        .collect()
}

/// Smallest 1/2/2.5/5 x 10^k not below `raw`.
pub fn nice_step(raw: f64) -> f64 {
    if raw <= 0.0 || !raw.is_finite() {
        return 1.0;
    }
    let mag = 10f64.powf(raw.log10().floor());
    let frac = raw / mag;
    let m = if frac <= 1.0 {
        1.0
    } else if frac <= 2.0 {
        2.0
    } else if frac <= 2.5 {
        2.5
    } else if frac <= 5.0 {
        5.0
    } else {
        10.0
    };
    m * mag
}

/// Format `value` with just enough decimals to tell neighbouring ticks apart.
pub fn format_tick(value: f64, ticks: &[f64]) -> String {
    let step = ticks.windows(2).map(|w| (w[1] - w[0]).abs()).fold(f64::INFINITY, f64::min);
    let decimals = if step.is_finite() && step > 0.0 {
        (-(step.log10()).floor()).clamp(0.0, 6.0) as usize
    } else {
        0
    };
    // 2.5-style steps need one more digit than their magnitude suggests.
    let decimals = if step.is_finite() && ((step * 10f64.powi(decimals as i32)).fract()).abs() > 1e-6 {
        decimals + 1
    } else {
        decimals
    };
    format!("{value:.decimals$}")
}
