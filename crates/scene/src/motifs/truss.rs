use canvas::{Painter, stroke_circle, stroke_line};
use foundation::FrameTime;
use foundation::math::Vec2;

use super::Motif;
use crate::palette::Palette;
use crate::pulse::WARREN_TRUSS;

pub const SEGMENTS: usize = 8;
pub const GUSSET_RADIUS: f64 = 2.5;

/// Warren truss between two parallel chords, anchored at its top-left.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct WarrenTruss {
    pub origin: Vec2,
    pub width: f64,
    pub height: f64,
}

impl WarrenTruss {
    pub fn new(origin: Vec2, width: f64, height: f64) -> Self {
        Self {
            origin,
            width,
            height,
        }
    }

    pub fn segment_width(&self) -> f64 {
        self.width / SEGMENTS as f64
    }

    /// Diagonal of segment `i`: even segments fall left-to-right from the
    /// top chord, odd segments rise.
    pub fn diagonal(&self, i: usize) -> (Vec2, Vec2) {
        let (sx, sy) = (self.origin.x, self.origin.y);
        let seg = self.segment_width();
        let x = sx + i as f64 * seg;
        if i % 2 == 0 {
            (Vec2::new(x, sy), Vec2::new(x + seg, sy + self.height))
        } else {
            (Vec2::new(x, sy + self.height), Vec2::new(x + seg, sy))
        }
    }
}

impl Motif for WarrenTruss {
    fn pulse(&self, time: FrameTime) -> f64 {
        WARREN_TRUSS.at(time, self.origin.x * 0.002)
    }

    fn draw(&self, p: &mut dyn Painter, palette: &Palette, time: FrameTime) {
        let pulse = self.pulse(time);
        let (sx, sy) = (self.origin.x, self.origin.y);
        let (w, h) = (self.width, self.height);
        let seg = self.segment_width();
        let member = palette.secondary.with_alpha(pulse);
        let gusset = palette.tertiary.with_alpha(pulse * 0.5);

        p.save();
        p.set_stroke(member);
        p.set_line_width(0.6);

        p.begin_path();
        p.move_to(sx, sy);
        p.line_to(sx + w, sy);
        p.move_to(sx, sy + h);
        p.line_to(sx + w, sy + h);
        p.stroke();

        for i in 0..=SEGMENTS {
            let x = sx + i as f64 * seg;

            if i == 0 || i == SEGMENTS {
                stroke_line(p, Vec2::new(x, sy), Vec2::new(x, sy + h));
            }

            if i < SEGMENTS {
                let (a, b) = self.diagonal(i);
                stroke_line(p, a, b);

                p.set_stroke(gusset);
                p.set_line_width(0.4);
                if i % 2 == 0 {
                    stroke_circle(p, Vec2::new(x, sy), GUSSET_RADIUS);
                    stroke_circle(p, Vec2::new(x + seg, sy + h), GUSSET_RADIUS);
                }
                p.set_stroke(member);
                p.set_line_width(0.6);
            }
        }

        p.restore();
    }
}

#[cfg(test)]
mod tests {
    use super::{Motif, WarrenTruss};
    use crate::palette::LIGHT;
    use canvas::{PathSegment, RecordingPainter};
    use foundation::FrameTime;
    use foundation::math::Vec2;

    #[test]
    fn diagonals_alternate_by_parity() {
        let truss = WarrenTruss::new(Vec2::new(0.0, 0.0), 80.0, 20.0);
        assert_eq!(truss.diagonal(0), (Vec2::new(0.0, 0.0), Vec2::new(10.0, 20.0)));
        assert_eq!(truss.diagonal(1), (Vec2::new(10.0, 20.0), Vec2::new(20.0, 0.0)));
    }

    #[test]
    fn stroke_counts() {
        let truss = WarrenTruss::new(Vec2::new(10.0, 10.0), 80.0, 20.0);
        let mut p = RecordingPainter::new();
        truss.draw(&mut p, &LIGHT, FrameTime::ZERO);
        let frame = p.finish();
        let gussets = frame
            .strokes()
            .filter(|s| matches!(s.path[0], PathSegment::Arc { .. }))
            .count();
        // Chords + 2 end verticals + 8 diagonals + 4 even segments × 2 gussets.
        assert_eq!(gussets, 8);
        assert_eq!(frame.strokes().count(), 1 + 2 + 8 + 8);
    }

    #[test]
    fn gussets_are_fainter_than_members() {
        let truss = WarrenTruss::new(Vec2::new(10.0, 10.0), 80.0, 20.0);
        let mut p = RecordingPainter::new();
        truss.draw(&mut p, &LIGHT, FrameTime(900.0));
        let frame = p.finish();
        let chord = frame.strokes().next().unwrap();
        let gusset = frame
            .strokes()
            .find(|s| matches!(s.path[0], PathSegment::Arc { .. }))
            .unwrap();
        assert_eq!(gusset.style.color.a, chord.style.color.a * 0.5);
        assert_eq!(chord.style.color.a, truss.pulse(FrameTime(900.0)));
    }
}
