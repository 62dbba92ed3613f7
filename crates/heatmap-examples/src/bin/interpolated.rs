// File: crates/heatmap-examples/src/bin/interpolated.rs
// Summary: Renders the 2x3 center-defined grid, interpolated and flat, with NaN variants.

use heatmap_core::{render_to_png, HeatBounds, HeatMapSampler, RenderOptions};
use heatmap_examples::{demo_grid, demo_ramp};

fn main() {
    // Centers of the corner cells; bounding box comes out as [0,2] x [0,3]
    let bounds = HeatBounds::center(0.5, 1.5, 0.5, 2.5);
    let ramp = demo_ramp(0.0, 0.4);
    let opts = RenderOptions { width: 512, height: 768, ..Default::default() };

    for &(interpolate, with_nan) in
        &[(true, false), (true, true), (false, false), (false, true)]
    {
        let mut grid = demo_grid();
        if with_nan {
            grid.set(0, 1, f64::NAN);
            grid.set(1, 0, f64::NAN);
        }
        let sampler = HeatMapSampler::new(grid, bounds, interpolate).expect("valid sampler");

        let name = match (interpolate, with_nan) {
            (true, false) => "heatmap_interpolated.png",
            (true, true) => "heatmap_interpolated_nan.png",
            (false, false) => "heatmap_flat.png",
            (false, true) => "heatmap_flat_nan.png",
        };
        let out = std::path::PathBuf::from("target/out").join(name);
        render_to_png(&sampler, &ramp, &opts, &out).expect("render to png");
        println!("Wrote {}", out.display());
    }
}
