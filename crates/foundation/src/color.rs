/// An opaque 8-bit RGB triple.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Attach an alpha channel. Alpha is clamped to `[0, 1]`; NaN becomes 0.
    pub fn with_alpha(self, alpha: f64) -> Rgba {
        let a = if alpha.is_nan() {
            0.0
        } else {
            alpha.clamp(0.0, 1.0)
        };
        Rgba { rgb: self, a }
    }
}

/// An RGB triple plus a floating-point alpha.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rgba {
    pub rgb: Rgb,
    pub a: f64,
}

impl Rgba {
    /// CSS color string, e.g. `rgba(45, 75, 110, 0.09)`.
    pub fn css(&self) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            self.rgb.r, self.rgb.g, self.rgb.b, self.a
        )
    }

    /// `#rrggbb` without alpha, for consumers that carry opacity separately.
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.rgb.r, self.rgb.g, self.rgb.b)
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Rgb::new(0, 0, 0).with_alpha(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::Rgb;

    #[test]
    fn css_matches_canvas_syntax() {
        let c = Rgb::new(45, 75, 110).with_alpha(0.09);
        assert_eq!(c.css(), "rgba(45, 75, 110, 0.09)");
    }

    #[test]
    fn alpha_is_clamped() {
        assert_eq!(Rgb::new(1, 2, 3).with_alpha(1.5).a, 1.0);
        assert_eq!(Rgb::new(1, 2, 3).with_alpha(-0.2).a, 0.0);
        assert_eq!(Rgb::new(1, 2, 3).with_alpha(f64::NAN).a, 0.0);
    }

    #[test]
    fn hex_drops_alpha() {
        assert_eq!(Rgb::new(170, 130, 70).with_alpha(0.5).hex(), "#aa8246");
    }
}
