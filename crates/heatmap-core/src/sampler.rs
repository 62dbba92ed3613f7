// File: crates/heatmap-core/src/sampler.rs
// Summary: Continuous-domain value lookup over a heat-map grid (nearest or bilinear).

use crate::bounds::{Extent, HeatBounds};
use crate::error::HeatMapError;
use crate::grid::HeatGrid;

/// Maps data-space query points onto grid values.
///
/// Construction validates the grid and bounding box and precomputes the
/// effective extent and cell size; after that the sampler is immutable, so
/// `&self` queries are safe to share across threads without locking.
///
/// `sample` returns `f64::NAN` both for queries outside the extent and for
/// results touching "no data" cells; callers distinguish nothing further.
#[derive(Clone, Debug)]
pub struct HeatMapSampler {
    grid: HeatGrid,
    extent: Extent,
    cell_w: f64,
    cell_h: f64,
    interpolate: bool,
}

impl HeatMapSampler {
    pub fn new(
        grid: HeatGrid,
        bounds: HeatBounds,
        interpolate: bool,
    ) -> Result<Self, HeatMapError> {
        let extent = bounds.extent(grid.cols(), grid.rows())?;
        let cell_w = extent.width() / grid.cols() as f64;
        let cell_h = extent.height() / grid.rows() as f64;
        Ok(Self { grid, extent, cell_w, cell_h, interpolate })
    }

    pub fn extent(&self) -> Extent { self.extent }
    pub fn cell_width(&self) -> f64 { self.cell_w }
    pub fn cell_height(&self) -> f64 { self.cell_h }
    pub fn interpolate(&self) -> bool { self.interpolate }
    pub fn grid(&self) -> &HeatGrid { &self.grid }

    /// Sample the heat surface at data-space `(x, y)`.
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        if !self.extent.contains(x, y) {
            return f64::NAN;
        }
        if self.interpolate {
            self.sample_bilinear(x, y)
        } else {
            self.sample_nearest(x, y)
        }
    }

    /// Value of the containing cell, verbatim (possibly NaN).
    fn sample_nearest(&self, x: f64, y: f64) -> f64 {
        let i = cell_index(x, self.extent.x0, self.cell_w, self.grid.cols());
        let j = cell_index(y, self.extent.y0, self.cell_h, self.grid.rows());
        self.grid.value(i, j)
    }

    /// Bilinear blend of the four bracketing cell centers. Edge cells clamp
    /// flat: no wraparound and no extrapolation beyond the outermost
    /// centers. Any NaN among the four contributors poisons the result.
    fn sample_bilinear(&self, x: f64, y: f64) -> f64 {
        let u = (x - self.extent.x0) / self.cell_w - 0.5;
        let v = (y - self.extent.y0) / self.cell_h - 0.5;
        let (i0, i1, tx) = bracket(u, self.grid.cols());
        let (j0, j1, ty) = bracket(v, self.grid.rows());

        let v00 = self.grid.value(i0, j0);
        let v10 = self.grid.value(i1, j0);
        let v01 = self.grid.value(i0, j1);
        let v11 = self.grid.value(i1, j1);
        if v00.is_nan() || v10.is_nan() || v01.is_nan() || v11.is_nan() {
            return f64::NAN;
        }

        // Nested lerp keeps constant fields bit-exact (weights sum to one
        // by construction rather than by rounding).
        lerp(lerp(v00, v10, tx), lerp(v01, v11, tx), ty)
    }
}

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Containing-cell index with upper-boundary clamping, so a query exactly
/// on the far edge still lands in the last cell.
#[inline]
fn cell_index(q: f64, origin: f64, cell: f64, n: usize) -> usize {
    let i = ((q - origin) / cell).floor();
    if i <= 0.0 {
        0
    } else if i as usize >= n {
        n - 1
    } else {
        i as usize
    }
}

/// Bracketing cell centers along one axis in cell-center coordinates
/// (`u = 0` at the first center, `n - 1` at the last). Outside that range
/// the pair degenerates to the edge cell with zero fraction.
#[inline]
fn bracket(u: f64, n: usize) -> (usize, usize, f64) {
    if n == 1 || u <= 0.0 {
        return (0, 0, 0.0);
    }
    let last = (n - 1) as f64;
    if u >= last {
        return (n - 1, n - 1, 0.0);
    }
    let i0 = u.floor() as usize;
    (i0, i0 + 1, u - i0 as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bracket_clamps_at_both_ends() {
        assert_eq!(bracket(-0.4, 3), (0, 0, 0.0));
        assert_eq!(bracket(2.3, 3), (2, 2, 0.0));
        let (i0, i1, t) = bracket(1.25, 3);
        assert_eq!((i0, i1), (1, 2));
        assert!((t - 0.25).abs() < 1e-12);
    }

    #[test]
    fn cell_index_far_edge_lands_in_last_cell() {
        // 4 cells of width 1 starting at 0; query at exactly 4.0
        assert_eq!(cell_index(4.0, 0.0, 1.0, 4), 3);
        assert_eq!(cell_index(0.0, 0.0, 1.0, 4), 0);
        assert_eq!(cell_index(2.5, 0.0, 1.0, 4), 2);
    }
}
