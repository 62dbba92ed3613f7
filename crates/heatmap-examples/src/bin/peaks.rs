// File: crates/heatmap-examples/src/bin/peaks.rs
// Summary: Renders the peaks surface on a 100x100 grid to PNG.

use heatmap_core::{evaluate, linspace, render_to_png, HeatBounds, HeatMapSampler, RenderOptions};
use heatmap_examples::{demo_ramp, peaks};

fn main() {
    let x0 = -3.1;
    let x1 = 3.1;
    let y0 = -3.0;
    let y1 = 3.0;
    let xs = linspace(x0, x1, 100);
    let ys = linspace(y0, y1, 100);
    let grid = evaluate(peaks, &xs, &ys).expect("peaks grid");

    // The coordinate vectors are the cell centers
    let bounds = HeatBounds::center(x0, x1, y0, y1);
    let sampler = HeatMapSampler::new(grid, bounds, true).expect("valid sampler");

    let ramp = demo_ramp(-6.5, 8.0);
    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/out/heatmap_peaks.png");
    render_to_png(&sampler, &ramp, &opts, &out).expect("render to png");
    println!("Wrote {}", out.display());
}
