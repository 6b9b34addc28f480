use foundation::{Rgb, Theme};

/// The five semantic stroke colors. Alpha is supplied per element.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Palette {
    pub primary: Rgb,
    pub secondary: Rgb,
    pub tertiary: Rgb,
    pub accent: Rgb,
    pub grid: Rgb,
}

pub const LIGHT: Palette = Palette {
    primary: Rgb::new(45, 75, 110),
    secondary: Rgb::new(55, 90, 130),
    tertiary: Rgb::new(70, 110, 150),
    accent: Rgb::new(170, 130, 70),
    grid: Rgb::new(50, 85, 120),
};

pub const DARK: Palette = Palette {
    primary: Rgb::new(120, 160, 200),
    secondary: Rgb::new(100, 140, 180),
    tertiary: Rgb::new(80, 120, 160),
    accent: Rgb::new(200, 175, 120),
    grid: Rgb::new(100, 140, 180),
};

impl Palette {
    pub fn for_theme(theme: Theme) -> &'static Palette {
        match theme {
            Theme::Light => &LIGHT,
            Theme::Dark => &DARK,
        }
    }

    pub fn colors(&self) -> [Rgb; 5] {
        [
            self.primary,
            self.secondary,
            self.tertiary,
            self.accent,
            self.grid,
        ]
    }
}
