use canvas::{Painter, stroke_line};
use foundation::Viewport;
use foundation::math::Vec2;

use crate::palette::Palette;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GridLayer {
    pub pitch: f64,
    pub alpha: f64,
}

/// Fine, medium and major grids, drawn in this order.
pub const LAYERS: [GridLayer; 3] = [
    GridLayer {
        pitch: 15.0,
        alpha: 0.012,
    },
    GridLayer {
        pitch: 75.0,
        alpha: 0.025,
    },
    GridLayer {
        pitch: 150.0,
        alpha: 0.045,
    },
];

pub const LINE_WIDTH: f64 = 0.5;

/// Grid line offsets from 0 up to and including `extent`.
pub fn ticks(extent: f64, pitch: f64) -> impl Iterator<Item = f64> {
    let count = if pitch > 0.0 && extent >= 0.0 {
        (extent / pitch).floor() as usize + 1
    } else {
        0
    };
    (0..count).map(move |i| i as f64 * pitch)
}

pub fn draw(p: &mut dyn Painter, palette: &Palette, viewport: &Viewport) {
    let (w, h) = (viewport.width, viewport.height);

    p.save();
    for layer in LAYERS {
        p.set_stroke(palette.grid.with_alpha(layer.alpha));
        p.set_line_width(LINE_WIDTH);
        for x in ticks(w, layer.pitch) {
            stroke_line(p, Vec2::new(x, 0.0), Vec2::new(x, h));
        }
        for y in ticks(h, layer.pitch) {
            stroke_line(p, Vec2::new(0.0, y), Vec2::new(w, y));
        }
    }
    p.restore();
}

#[cfg(test)]
mod tests {
    use super::ticks;

    #[test]
    fn ticks_include_both_ends_when_divisible() {
        let xs: Vec<f64> = ticks(150.0, 75.0).collect();
        assert_eq!(xs, vec![0.0, 75.0, 150.0]);
    }

    #[test]
    fn ticks_stop_before_extent() {
        assert_eq!(ticks(1080.0, 150.0).last(), Some(1050.0));
        assert_eq!(ticks(1920.0, 15.0).count(), 129);
    }

    #[test]
    fn zero_extent_still_draws_origin_line() {
        assert_eq!(ticks(0.0, 15.0).collect::<Vec<_>>(), vec![0.0]);
    }
}
