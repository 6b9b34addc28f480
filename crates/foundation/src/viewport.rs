use crate::math::Vec2;

/// Viewport dimensions in CSS pixels plus the device pixel ratio.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub device_pixel_ratio: f64,
}

fn sanitize_extent(v: f64) -> f64 {
    if v.is_finite() { v.max(0.0) } else { 0.0 }
}

fn sanitize_dpr(dpr: f64) -> f64 {
    if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 }
}

impl Viewport {
    /// Negative or non-finite extents clamp to zero; a missing or bogus
    /// device pixel ratio falls back to `1.0`.
    pub fn new(width: f64, height: f64, device_pixel_ratio: f64) -> Self {
        Self {
            width: sanitize_extent(width),
            height: sanitize_extent(height),
            device_pixel_ratio: sanitize_dpr(device_pixel_ratio),
        }
    }

    /// A viewport at `dpr = 1`.
    pub fn css(width: f64, height: f64) -> Self {
        Self::new(width, height, 1.0)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Horizontal position at a fraction of the width.
    pub fn x(&self, fraction: f64) -> f64 {
        self.width * fraction
    }

    /// Vertical position at a fraction of the height.
    pub fn y(&self, fraction: f64) -> f64 {
        self.height * fraction
    }

    pub fn at(&self, fx: f64, fy: f64) -> Vec2 {
        Vec2::new(self.x(fx), self.y(fy))
    }

    /// Backing-store size in physical pixels.
    ///
    /// Truncates like the canvas `width`/`height` setters do.
    pub fn backing_size(&self) -> (u32, u32) {
        (
            (self.width * self.device_pixel_ratio) as u32,
            (self.height * self.device_pixel_ratio) as u32,
        )
    }

    /// Absolute 2D transform `(a, b, c, d, e, f)` that keeps drawing
    /// coordinates in CSS pixels on the scaled backing store.
    pub fn transform(&self) -> [f64; 6] {
        let s = self.device_pixel_ratio;
        [s, 0.0, 0.0, s, 0.0, 0.0]
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::css(1280.0, 720.0)
    }
}
