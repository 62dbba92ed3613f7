// File: crates/heatmap-examples/src/lib.rs
// Summary: Shared fixtures for the heat-map example binaries.

use heatmap_core::{HeatGrid, LinearRamp};
use skia_safe as skia;

/// MATLAB-style peaks surface.
pub fn peaks(x: f64, y: f64) -> f64 {
    3.0 * (1.0 - x) * (1.0 - x) * (-(x * x) - (y + 1.0) * (y + 1.0)).exp()
        - 10.0 * (x / 5.0 - x.powi(3) - y.powi(5)) * (-x * x - y * y).exp()
        - 1.0 / 3.0 * (-(x + 1.0) * (x + 1.0) - y * y).exp()
}

/// Blue-to-red ramp over `[vmin, vmax]` with gray above and black below
/// the range; NaN cells stay transparent so the background shows through.
pub fn demo_ramp(vmin: f64, vmax: f64) -> LinearRamp {
    LinearRamp::new(
        vmin,
        vmax,
        skia::Color::from_argb(255, 32, 80, 220),
        skia::Color::from_argb(255, 220, 60, 40),
    )
    .with_under(skia::Color::from_argb(255, 0, 0, 0))
    .with_over(skia::Color::from_argb(255, 128, 128, 128))
}

/// The 2x3 demo grid used by the interpolated/flat examples.
pub fn demo_grid() -> HeatGrid {
    HeatGrid::new(2, 3, vec![0.0, 0.1, 0.2, 0.3, 0.4, 0.2]).expect("static grid is valid")
}

/// Identity-diagonal grid of side `n`.
pub fn diagonal_grid(n: usize) -> HeatGrid {
    HeatGrid::from_fn(n, n, |i, j| if i == j { 1.0 } else { 0.0 }).expect("n > 0")
}
