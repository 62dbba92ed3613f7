// File: crates/heatmap-core/src/colormap.rs
// Summary: Scalar-to-color seam used by the raster output path.

use skia_safe as skia;

/// Maps a sampled value to a color. Implementers own the treatment of
/// values below/above their configured range and of NaN ("no data").
pub trait ColorMap {
    fn color_for(&self, value: f64) -> skia::Color;
}

/// Two-color linear ramp over `[vmin, vmax]` with dedicated under/over and
/// invalid colors. Richer palettes belong to the hosting framework; this
/// is the minimum a raster path or demo needs.
#[derive(Clone, Copy, Debug)]
pub struct LinearRamp {
    pub vmin: f64,
    pub vmax: f64,
    pub low: skia::Color,
    pub high: skia::Color,
    pub under: skia::Color,
    pub over: skia::Color,
    pub invalid: skia::Color,
}

impl LinearRamp {
    pub fn new(vmin: f64, vmax: f64, low: skia::Color, high: skia::Color) -> Self {
        Self {
            vmin,
            vmax,
            low,
            high,
            under: low,
            over: high,
            invalid: skia::Color::TRANSPARENT,
        }
    }

    /// Black-to-white ramp, handy for tests and quick inspection.
    pub fn grayscale(vmin: f64, vmax: f64) -> Self {
        Self::new(
            vmin,
            vmax,
            skia::Color::from_argb(255, 0, 0, 0),
            skia::Color::from_argb(255, 255, 255, 255),
        )
    }

    pub fn with_under(mut self, c: skia::Color) -> Self { self.under = c; self }
    pub fn with_over(mut self, c: skia::Color) -> Self { self.over = c; self }
    pub fn with_invalid(mut self, c: skia::Color) -> Self { self.invalid = c; self }
}

impl ColorMap for LinearRamp {
    fn color_for(&self, value: f64) -> skia::Color {
        if value.is_nan() {
            return self.invalid;
        }
        if value < self.vmin {
            return self.under;
        }
        if value > self.vmax {
            return self.over;
        }
        let span = (self.vmax - self.vmin).max(1e-12);
        let t = ((value - self.vmin) / span) as f32;
        mix(self.low, self.high, t)
    }
}

/// Per-channel linear blend between two colors.
fn mix(a: skia::Color, b: skia::Color, t: f32) -> skia::Color {
    let ch = |x: u8, y: u8| -> u8 {
        (x as f32 + (y as f32 - x as f32) * t).round().clamp(0.0, 255.0) as u8
    };
    skia::Color::from_argb(ch(a.a(), b.a()), ch(a.r(), b.r()), ch(a.g(), b.g()), ch(a.b(), b.b()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramp_endpoints_and_sentinels() {
        let ramp = LinearRamp::grayscale(0.0, 1.0)
            .with_under(skia::Color::from_argb(255, 1, 2, 3))
            .with_over(skia::Color::from_argb(255, 4, 5, 6));
        assert_eq!(ramp.color_for(0.0), skia::Color::from_argb(255, 0, 0, 0));
        assert_eq!(ramp.color_for(1.0), skia::Color::from_argb(255, 255, 255, 255));
        assert_eq!(ramp.color_for(-0.1), skia::Color::from_argb(255, 1, 2, 3));
        assert_eq!(ramp.color_for(1.1), skia::Color::from_argb(255, 4, 5, 6));
        assert_eq!(ramp.color_for(f64::NAN), skia::Color::TRANSPARENT);
    }

    #[test]
    fn ramp_midpoint_is_mid_gray() {
        let ramp = LinearRamp::grayscale(0.0, 1.0);
        let c = ramp.color_for(0.5);
        assert_eq!(c.r(), 128);
        assert_eq!(c.g(), 128);
        assert_eq!(c.b(), 128);
    }
}
