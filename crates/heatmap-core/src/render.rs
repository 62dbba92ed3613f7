// File: crates/heatmap-core/src/render.rs
// Summary: Headless raster output for a sampled heat surface using Skia CPU surfaces.

use anyhow::Result;
use skia_safe as skia;

use crate::colormap::ColorMap;
use crate::sampler::HeatMapSampler;
use crate::types::{HEIGHT, WIDTH};

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub background: skia::Color,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            background: skia::Color::from_argb(255, 18, 18, 20), // near-black
        }
    }
}

/// Sample the heat surface once per pixel center and map values through
/// `map`. Pixel row 0 is the top of the image; data Y grows upward.
fn field_rgba(sampler: &HeatMapSampler, map: &dyn ColorMap, w: i32, h: i32) -> Vec<u8> {
    let e = sampler.extent();
    let mut px = Vec::with_capacity(w as usize * h as usize * 4);
    for row in 0..h {
        let y = e.y1 - (row as f64 + 0.5) / h as f64 * e.height();
        for col in 0..w {
            let x = e.x0 + (col as f64 + 0.5) / w as f64 * e.width();
            let c = map.color_for(sampler.sample(x, y));
            px.extend_from_slice(&[c.r(), c.g(), c.b(), c.a()]);
        }
    }
    px
}

/// Paint the field onto a CPU raster surface over the background color.
fn paint_surface(
    sampler: &HeatMapSampler,
    map: &dyn ColorMap,
    opts: &RenderOptions,
) -> Result<skia::Surface> {
    let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
        .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
    surface.canvas().clear(opts.background);

    let pixels = field_rgba(sampler, map, opts.width, opts.height);
    let info = skia::ImageInfo::new(
        (opts.width, opts.height),
        skia::ColorType::RGBA8888,
        skia::AlphaType::Unpremul,
        None,
    );
    let data = skia::Data::new_copy(&pixels);
    let image = skia::images::raster_from_data(&info, data, opts.width as usize * 4)
        .ok_or_else(|| anyhow::anyhow!("failed to wrap field pixels"))?;
    surface.canvas().draw_image(&image, (0, 0), None);
    Ok(surface)
}

/// Render to a tightly packed RGBA8 buffer; returns (pixels, width, height, stride).
pub fn render_to_rgba8(
    sampler: &HeatMapSampler,
    map: &dyn ColorMap,
    opts: &RenderOptions,
) -> Result<(Vec<u8>, i32, i32, usize)> {
    let mut surface = paint_surface(sampler, map, opts)?;
    let stride = opts.width as usize * 4;
    let mut pixels = vec![0u8; stride * opts.height as usize];
    let info = skia::ImageInfo::new(
        (opts.width, opts.height),
        skia::ColorType::RGBA8888,
        skia::AlphaType::Unpremul,
        None,
    );
    if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
        return Err(anyhow::anyhow!("failed to read back surface pixels"));
    }
    Ok((pixels, opts.width, opts.height, stride))
}

/// Render and encode to PNG bytes in memory.
pub fn render_to_png_bytes(
    sampler: &HeatMapSampler,
    map: &dyn ColorMap,
    opts: &RenderOptions,
) -> Result<Vec<u8>> {
    let mut surface = paint_surface(sampler, map, opts)?;
    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
    Ok(data.as_bytes().to_vec())
}

/// Render the heat surface to a PNG at `output_png_path`.
pub fn render_to_png(
    sampler: &HeatMapSampler,
    map: &dyn ColorMap,
    opts: &RenderOptions,
    output_png_path: impl AsRef<std::path::Path>,
) -> Result<()> {
    let bytes = render_to_png_bytes(sampler, map, opts)?;
    if let Some(parent) = output_png_path.as_ref().parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(output_png_path, bytes)?;
    Ok(())
}
