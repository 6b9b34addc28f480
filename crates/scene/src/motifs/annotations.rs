use canvas::{Painter, stroke_dashed_line};
use foundation::math::Vec2;
use foundation::{FrameTime, Viewport};

use crate::palette::Palette;
use crate::pulse::ANNOTATION;

const DASH: [f64; 2] = [2.0, 4.0];

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// A dimension callout: a dashed extent line with solid end ticks.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Dimension {
    pub axis: Axis,
    /// Fraction along the other axis where the line sits.
    pub at: f64,
    pub from: f64,
    pub to: f64,
    pub tick: f64,
}

pub const DIMENSIONS: [Dimension; 3] = [
    Dimension {
        axis: Axis::Horizontal,
        at: 0.1,
        from: 0.3,
        to: 0.7,
        tick: 5.0,
    },
    Dimension {
        axis: Axis::Vertical,
        at: 0.97,
        from: 0.2,
        to: 0.72,
        tick: 5.0,
    },
    Dimension {
        axis: Axis::Horizontal,
        at: 0.85,
        from: 0.15,
        to: 0.45,
        tick: 4.0,
    },
];

impl Dimension {
    /// Extent line endpoints in CSS pixels.
    pub fn endpoints(&self, viewport: &Viewport) -> (Vec2, Vec2) {
        match self.axis {
            Axis::Horizontal => {
                let y = viewport.y(self.at);
                (
                    Vec2::new(viewport.x(self.from), y),
                    Vec2::new(viewport.x(self.to), y),
                )
            }
            Axis::Vertical => {
                let x = viewport.x(self.at);
                (
                    Vec2::new(x, viewport.y(self.from)),
                    Vec2::new(x, viewport.y(self.to)),
                )
            }
        }
    }

    fn draw(&self, p: &mut dyn Painter, viewport: &Viewport) {
        let (a, b) = self.endpoints(viewport);
        stroke_dashed_line(p, &DASH, a, b);

        let t = self.tick;
        p.begin_path();
        for end in [a, b] {
            match self.axis {
                Axis::Horizontal => {
                    p.move_to(end.x, end.y - t);
                    p.line_to(end.x, end.y + t);
                }
                Axis::Vertical => {
                    p.move_to(end.x - t, end.y);
                    p.line_to(end.x + t, end.y);
                }
            }
        }
        p.stroke();
    }
}

pub fn alpha(time: FrameTime) -> f64 {
    ANNOTATION.at(time, 0.0)
}

pub fn draw(p: &mut dyn Painter, palette: &Palette, viewport: &Viewport, time: FrameTime) {
    p.save();
    p.set_stroke(palette.accent.with_alpha(alpha(time)));
    p.set_line_width(0.6);
    for dim in &DIMENSIONS {
        dim.draw(p, viewport);
    }
    p.restore();
}

#[cfg(test)]
mod tests {
    use super::{DIMENSIONS, draw};
    use crate::palette::DARK;
    use canvas::{PathSegment, RecordingPainter};
    use foundation::math::Vec2;
    use foundation::{FrameTime, Viewport};

    #[test]
    fn extent_lines_dashed_ticks_solid() {
        let mut p = RecordingPainter::new();
        draw(&mut p, &DARK, &Viewport::css(1000.0, 1000.0), FrameTime::ZERO);
        let frame = p.finish();
        let strokes: Vec<_> = frame.strokes().collect();
        assert_eq!(strokes.len(), 6);
        for pair in strokes.chunks(2) {
            assert_eq!(pair[0].style.dash, vec![2.0, 4.0]);
            assert!(pair[1].style.dash.is_empty());
        }
    }

    #[test]
    fn vertical_dimension_ticks_are_horizontal() {
        let mut p = RecordingPainter::new();
        draw(&mut p, &DARK, &Viewport::css(1000.0, 1000.0), FrameTime::ZERO);
        let frame = p.finish();
        let ticks = frame.strokes().nth(3).unwrap();
        let (top, _) = DIMENSIONS[1].endpoints(&Viewport::css(1000.0, 1000.0));
        assert_eq!(ticks.path[0], PathSegment::MoveTo(Vec2::new(top.x - 5.0, top.y)));
        assert_eq!(ticks.path[1], PathSegment::LineTo(Vec2::new(top.x + 5.0, top.y)));
    }
}
