// File: crates/heatmap-core/src/bounds.rs
// Summary: Bounding-box model with edge/center coordinate definitions.

use crate::error::HeatMapError;

/// How the bounding-box coordinates relate to the extreme grid cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CoordinateDefinition {
    /// `(x0, y0)`-`(x1, y1)` are the outer edges of the first/last cells.
    Edge,
    /// `(x0, y0)`-`(x1, y1)` are the centers of the first/last cells; the
    /// effective box extends half a cell beyond each coordinate.
    Center,
}

/// Caller-supplied bounding box. Coordinates along each axis may be given
/// in either order; they are normalized when the effective extent is
/// computed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeatBounds {
    pub x0: f64,
    pub x1: f64,
    pub y0: f64,
    pub y1: f64,
    pub definition: CoordinateDefinition,
}

/// Normalized, ascending, edge-defined extent of the data.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extent {
    pub x0: f64,
    pub x1: f64,
    pub y0: f64,
    pub y1: f64,
}

impl Extent {
    #[inline]
    pub fn width(&self) -> f64 { self.x1 - self.x0 }
    #[inline]
    pub fn height(&self) -> f64 { self.y1 - self.y0 }
    /// Closed-interval containment, so queries exactly on the boundary hit.
    #[inline]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x0 && x <= self.x1 && y >= self.y0 && y <= self.y1
    }
}

impl HeatBounds {
    pub fn edge(x0: f64, x1: f64, y0: f64, y1: f64) -> Self {
        Self { x0, x1, y0, y1, definition: CoordinateDefinition::Edge }
    }

    pub fn center(x0: f64, x1: f64, y0: f64, y1: f64) -> Self {
        Self { x0, x1, y0, y1, definition: CoordinateDefinition::Center }
    }

    fn validate(&self) -> Result<(), HeatMapError> {
        if ![self.x0, self.x1, self.y0, self.y1].iter().all(|v| v.is_finite()) {
            return Err(HeatMapError::NonFiniteBounds);
        }
        if self.x0 == self.x1 {
            return Err(HeatMapError::DegenerateBounds { axis: "x" });
        }
        if self.y0 == self.y1 {
            return Err(HeatMapError::DegenerateBounds { axis: "y" });
        }
        Ok(())
    }

    /// Compute the effective edge-defined extent for a `cols` x `rows` grid.
    ///
    /// For `Edge` this is just the sorted coordinates. For `Center` the box
    /// grows by half a cell on every side, where the center-to-center cell
    /// size is `span / (n - 1)` for n > 1 and the full span for n == 1.
    pub fn extent(&self, cols: usize, rows: usize) -> Result<Extent, HeatMapError> {
        if cols == 0 || rows == 0 {
            return Err(HeatMapError::EmptyGrid { cols, rows });
        }
        self.validate()?;
        let (xl, xh) = sorted(self.x0, self.x1);
        let (yl, yh) = sorted(self.y0, self.y1);
        match self.definition {
            CoordinateDefinition::Edge => Ok(Extent { x0: xl, x1: xh, y0: yl, y1: yh }),
            CoordinateDefinition::Center => {
                let half_w = center_step(xl, xh, cols) / 2.0;
                let half_h = center_step(yl, yh, rows) / 2.0;
                Ok(Extent {
                    x0: xl - half_w,
                    x1: xh + half_w,
                    y0: yl - half_h,
                    y1: yh + half_h,
                })
            }
        }
    }

    /// Re-express these bounds under another coordinate definition without
    /// changing the effective extent. The translation is a pure half-cell
    /// shift, so converting back recovers the original extent.
    ///
    /// Converting to `Center` on a 1-wide axis collapses both coordinates
    /// onto the single cell center; such bounds are degenerate and will be
    /// rejected if used again.
    pub fn with_definition(
        &self,
        definition: CoordinateDefinition,
        cols: usize,
        rows: usize,
    ) -> Result<Self, HeatMapError> {
        let e = self.extent(cols, rows)?;
        let out = match definition {
            CoordinateDefinition::Edge => {
                Self { x0: e.x0, x1: e.x1, y0: e.y0, y1: e.y1, definition }
            }
            CoordinateDefinition::Center => {
                let half_w = e.width() / cols as f64 / 2.0;
                let half_h = e.height() / rows as f64 / 2.0;
                Self {
                    x0: e.x0 + half_w,
                    x1: e.x1 - half_w,
                    y0: e.y0 + half_h,
                    y1: e.y1 - half_h,
                    definition,
                }
            }
        };
        Ok(out)
    }
}

#[inline]
fn sorted(a: f64, b: f64) -> (f64, f64) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Center-to-center spacing along one axis of a center-defined box.
fn center_step(lo: f64, hi: f64, n: usize) -> f64 {
    if n > 1 { (hi - lo) / (n as f64 - 1.0) } else { hi - lo }
}
