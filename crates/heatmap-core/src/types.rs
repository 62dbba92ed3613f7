// File: crates/heatmap-core/src/types.rs
// Summary: Shared constants for raster output.

/// Default surface width in pixels.
pub const WIDTH: i32 = 1024;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 640;
