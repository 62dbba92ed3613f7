// File: crates/heatmap-core/tests/rgba.rs
// Purpose: Validate RGBA raster buffer shape and a few pixels.

use heatmap_core::{render_to_rgba8, HeatBounds, HeatGrid, HeatMapSampler, LinearRamp, RenderOptions};

#[test]
fn render_rgba8_buffer() {
    // Constant mid-range grid under a grayscale ramp: every pixel mid gray
    let grid = HeatGrid::from_fn(4, 4, |_, _| 0.5).unwrap();
    let sampler =
        HeatMapSampler::new(grid, HeatBounds::edge(0.0, 4.0, 0.0, 4.0), true).unwrap();
    let ramp = LinearRamp::grayscale(0.0, 1.0);

    let opts = RenderOptions { width: 16, height: 16, ..Default::default() };
    let (px, w, h, stride) = render_to_rgba8(&sampler, &ramp, &opts).expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Center pixel: fully opaque mid gray (RGBA)
    let center = (8 * stride) + 8 * 4;
    assert_eq!(px[center + 3], 255);
    assert_eq!(px[center], 128);
    assert_eq!(px[center + 1], 128);
    assert_eq!(px[center + 2], 128);
}

#[test]
fn invalid_cells_show_background() {
    // All-NaN grid maps to the transparent invalid color, so the surface
    // keeps its opaque background after compositing.
    let grid = HeatGrid::from_fn(2, 2, |_, _| f64::NAN).unwrap();
    let sampler =
        HeatMapSampler::new(grid, HeatBounds::edge(0.0, 2.0, 0.0, 2.0), false).unwrap();
    let ramp = LinearRamp::grayscale(0.0, 1.0);

    let opts = RenderOptions { width: 8, height: 8, ..Default::default() };
    let (px, _, _, stride) = render_to_rgba8(&sampler, &ramp, &opts).expect("rgba render");
    let p = (4 * stride) + 4 * 4;
    assert_eq!(px[p + 3], 255, "background stays opaque");
    assert_eq!(px[p], 18, "background red channel shows through");
}
