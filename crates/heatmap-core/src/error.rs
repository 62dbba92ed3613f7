// File: crates/heatmap-core/src/error.rs
// Summary: Configuration errors raised when building grids, bounds, or samplers.

use thiserror::Error;

/// Errors produced while constructing a grid or sampler.
/// All of these fail fast at construction time; queries themselves never
/// error and report "no data" through the NaN sentinel instead.
#[derive(Debug, Error)]
pub enum HeatMapError {
    #[error("grid must be at least 1x1 (got {cols}x{rows})")]
    EmptyGrid { cols: usize, rows: usize },

    #[error("grid data length {actual} does not match {cols}x{rows}")]
    GridDataLength { cols: usize, rows: usize, actual: usize },

    #[error("bounding box has zero span along {axis}")]
    DegenerateBounds { axis: &'static str },

    #[error("bounding box coordinates must be finite")]
    NonFiniteBounds,
}
