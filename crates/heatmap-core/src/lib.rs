// File: crates/heatmap-core/src/lib.rs
// Summary: Core library entry point; exports the heat-map grid, sampler, and raster API.

pub mod bounds;
pub mod colormap;
pub mod error;
pub mod grid;
pub mod render;
pub mod sampler;
pub mod types;

pub use bounds::{CoordinateDefinition, Extent, HeatBounds};
pub use colormap::{ColorMap, LinearRamp};
pub use error::HeatMapError;
pub use grid::{evaluate, linspace, HeatGrid};
pub use render::{render_to_png, render_to_png_bytes, render_to_rgba8, RenderOptions};
pub use sampler::HeatMapSampler;
