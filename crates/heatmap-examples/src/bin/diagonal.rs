// File: crates/heatmap-examples/src/bin/diagonal.rs
// Summary: Renders diagonal grids: 3x3 center/edge defined flat, 6x6 interpolated.

use heatmap_core::{render_to_png, HeatBounds, HeatMapSampler, RenderOptions};
use heatmap_examples::{demo_ramp, diagonal_grid};

fn main() {
    let ramp = demo_ramp(0.0, 1.0);
    let opts = RenderOptions { width: 512, height: 512, ..Default::default() };
    let out_dir = std::path::PathBuf::from("target/out");

    // Same 3x3 diagonal twice: centers at 0.5..2.5 vs edges at 0..3 describe
    // the identical effective box. Y is given top-down to show normalization.
    let cases = [
        ("heatmap_diagonal_center.png", HeatBounds::center(0.5, 2.5, 2.5, 0.5), 3, false),
        ("heatmap_diagonal_edge.png", HeatBounds::edge(0.0, 3.0, 3.0, 0.0), 3, false),
        ("heatmap_diagonal_6x6.png", HeatBounds::center(0.0, 5.0, 0.0, 5.0), 6, true),
    ];

    for (name, bounds, n, interpolate) in cases {
        let sampler =
            HeatMapSampler::new(diagonal_grid(n), bounds, interpolate).expect("valid sampler");
        let out = out_dir.join(name);
        render_to_png(&sampler, &ramp, &opts, &out).expect("render to png");
        println!("Wrote {}", out.display());
    }
}
