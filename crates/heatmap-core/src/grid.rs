// File: crates/heatmap-core/src/grid.rs
// Summary: Immutable 2D scalar grid plus coordinate-vector helpers.

use crate::error::HeatMapError;

/// Rectangular array of `f64` samples.
///
/// Storage is row-major with the first index running along X:
/// `value(i, j)` addresses column `i` (X direction) of row `j`
/// (Y direction). Any cell may hold `f64::NAN`, the "no data" marker.
///
/// A grid is a plain value; once handed to a sampler it is owned there
/// and never mutated again.
#[derive(Clone, Debug)]
pub struct HeatGrid {
    cols: usize,
    rows: usize,
    data: Vec<f64>,
}

impl HeatGrid {
    /// Build a grid from row-major data (`data[j * cols + i]`).
    pub fn new(cols: usize, rows: usize, data: Vec<f64>) -> Result<Self, HeatMapError> {
        if cols == 0 || rows == 0 {
            return Err(HeatMapError::EmptyGrid { cols, rows });
        }
        if data.len() != cols * rows {
            return Err(HeatMapError::GridDataLength { cols, rows, actual: data.len() });
        }
        Ok(Self { cols, rows, data })
    }

    /// Build a grid by evaluating `f(i, j)` for every cell.
    pub fn from_fn(
        cols: usize,
        rows: usize,
        mut f: impl FnMut(usize, usize) -> f64,
    ) -> Result<Self, HeatMapError> {
        if cols == 0 || rows == 0 {
            return Err(HeatMapError::EmptyGrid { cols, rows });
        }
        let mut data = Vec::with_capacity(cols * rows);
        for j in 0..rows {
            for i in 0..cols {
                data.push(f(i, j));
            }
        }
        Ok(Self { cols, rows, data })
    }

    pub fn cols(&self) -> usize { self.cols }
    pub fn rows(&self) -> usize { self.rows }

    #[inline]
    pub fn value(&self, i: usize, j: usize) -> f64 {
        debug_assert!(i < self.cols && j < self.rows);
        self.data[j * self.cols + i]
    }

    /// Overwrite one cell. Only meaningful while the grid is still being
    /// prepared; samplers take the grid by value afterwards.
    pub fn set(&mut self, i: usize, j: usize, v: f64) {
        debug_assert!(i < self.cols && j < self.rows);
        self.data[j * self.cols + i] = v;
    }
}

/// Evenly spaced coordinate vector from `start` to `end` inclusive.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Evaluate `f(x, y)` over two coordinate vectors, producing a grid with
/// `xs.len()` columns and `ys.len()` rows.
pub fn evaluate(
    f: impl Fn(f64, f64) -> f64,
    xs: &[f64],
    ys: &[f64],
) -> Result<HeatGrid, HeatMapError> {
    HeatGrid::from_fn(xs.len(), ys.len(), |i, j| f(xs[i], ys[j]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_endpoints() {
        let v = linspace(-3.0, 3.0, 7);
        assert_eq!(v.len(), 7);
        assert_eq!(v[0], -3.0);
        assert!((v[6] - 3.0).abs() < 1e-12);
    }

    #[test]
    fn evaluate_indexes_x_first() {
        let g = evaluate(|x, y| x * 10.0 + y, &[0.0, 1.0, 2.0], &[0.0, 1.0]).unwrap();
        assert_eq!(g.cols(), 3);
        assert_eq!(g.rows(), 2);
        assert_eq!(g.value(2, 1), 21.0);
    }
}
