//! Structural cross-sections: I-beams, box girders and reinforced columns,
//! plus [`Section`], which places any detail from the layout table.

use canvas::{Painter, stroke_circle, stroke_line, stroke_rect};
use foundation::math::Vec2;
use foundation::{FrameTime, Viewport};

use super::Motif;
use super::truss::WarrenTruss;
use crate::layout::{DetailKind, Placement};
use crate::palette::Palette;
use crate::pulse::{BOX_GIRDER, COLUMN, I_BEAM};

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct IBeam {
    pub center: Vec2,
    pub size: f64,
}

impl Motif for IBeam {
    fn pulse(&self, time: FrameTime) -> f64 {
        I_BEAM.at(time, self.center.x * 0.01)
    }

    fn draw(&self, p: &mut dyn Painter, palette: &Palette, time: FrameTime) {
        let pulse = self.pulse(time);
        let Vec2 { x, y } = self.center;
        let size = self.size;
        let fw = size * 0.9;
        let fh = size * 0.18;
        let ww = size * 0.14;
        let wh = size * 0.64;

        p.save();
        p.set_stroke(palette.primary.with_alpha(pulse));
        p.set_line_width(0.6);

        // Top flange and its edge line.
        stroke_rect(p, x - fw / 2.0, y - size / 2.0, fw, fh);
        p.set_stroke(palette.secondary.with_alpha(pulse * 0.6));
        stroke_line(
            p,
            Vec2::new(x - fw / 2.0 + 3.0, y - size / 2.0 + fh / 2.0),
            Vec2::new(x + fw / 2.0 - 3.0, y - size / 2.0 + fh / 2.0),
        );

        // Bottom flange, then web.
        p.set_stroke(palette.primary.with_alpha(pulse));
        stroke_rect(p, x - fw / 2.0, y + size / 2.0 - fh, fw, fh);
        stroke_rect(p, x - ww / 2.0, y - size / 2.0 + fh, ww, wh);

        p.set_stroke(palette.tertiary.with_alpha(pulse * 0.5));
        p.set_line_width(0.4);
        p.begin_path();
        for dy in [-size * 0.15, size * 0.15] {
            p.move_to(x - ww / 2.0 - 4.0, y + dy);
            p.line_to(x - ww / 2.0, y + dy);
            p.move_to(x + ww / 2.0, y + dy);
            p.line_to(x + ww / 2.0 + 4.0, y + dy);
        }
        p.stroke();

        p.set_stroke(palette.accent.with_alpha(pulse * 0.7));
        p.set_line_width(0.4);
        p.set_line_dash(&[2.0, 2.0]);
        p.begin_path();
        p.move_to(x - size * 0.6, y);
        p.line_to(x + size * 0.6, y);
        p.move_to(x, y - size * 0.6);
        p.line_to(x, y + size * 0.6);
        p.stroke();
        p.set_line_dash(&[]);

        p.restore();
    }
}

/// Box girder with two internal cells, a deck plate and a diaphragm line.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BoxGirder {
    pub center: Vec2,
    pub width: f64,
    pub height: f64,
}

impl Motif for BoxGirder {
    fn pulse(&self, time: FrameTime) -> f64 {
        BOX_GIRDER.at(time, self.center.y * 0.01)
    }

    fn draw(&self, p: &mut dyn Painter, palette: &Palette, time: FrameTime) {
        let pulse = self.pulse(time);
        let Vec2 { x, y } = self.center;
        let (w, h) = (self.width, self.height);
        let cell = w / 3.0;

        p.save();
        p.set_stroke(palette.primary.with_alpha(pulse));
        p.set_line_width(0.6);
        stroke_rect(p, x - w / 2.0, y - h / 2.0, w, h);

        p.set_stroke(palette.secondary.with_alpha(pulse * 0.7));
        p.set_line_width(0.4);
        p.begin_path();
        p.move_to(x - w / 2.0 + cell, y - h / 2.0);
        p.line_to(x - w / 2.0 + cell, y + h / 2.0);
        p.move_to(x + w / 2.0 - cell, y - h / 2.0);
        p.line_to(x + w / 2.0 - cell, y + h / 2.0);
        p.stroke();

        p.set_stroke(palette.tertiary.with_alpha(pulse * 0.5));
        stroke_line(
            p,
            Vec2::new(x - w / 2.0 - 8.0, y - h / 2.0),
            Vec2::new(x + w / 2.0 + 8.0, y - h / 2.0),
        );

        p.set_line_dash(&[1.0, 3.0]);
        stroke_line(p, Vec2::new(x - w / 2.0, y), Vec2::new(x + w / 2.0, y));
        p.set_line_dash(&[]);

        p.restore();
    }
}

pub const REBAR_PER_SIDE: usize = 4;
pub const REBAR_RADIUS: f64 = 1.5;

/// Square concrete column with a rebar lattice and a tie outline.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Column {
    pub center: Vec2,
    pub size: f64,
}

impl Column {
    pub fn rebar_spacing(&self) -> f64 {
        self.size / (REBAR_PER_SIDE + 1) as f64
    }

    pub fn rebar(&self) -> impl Iterator<Item = Vec2> + '_ {
        let spacing = self.rebar_spacing();
        let left = self.center.x - self.size / 2.0;
        let top = self.center.y - self.size / 2.0;
        (1..=REBAR_PER_SIDE).flat_map(move |i| {
            (1..=REBAR_PER_SIDE)
                .map(move |j| Vec2::new(left + spacing * i as f64, top + spacing * j as f64))
        })
    }
}

impl Motif for Column {
    fn pulse(&self, time: FrameTime) -> f64 {
        COLUMN.at(time, self.center.x * 0.005)
    }

    fn draw(&self, p: &mut dyn Painter, palette: &Palette, time: FrameTime) {
        let pulse = self.pulse(time);
        let Vec2 { x, y } = self.center;
        let size = self.size;
        let spacing = self.rebar_spacing();

        p.save();
        p.set_stroke(palette.primary.with_alpha(pulse));
        p.set_line_width(0.6);
        stroke_rect(p, x - size / 2.0, y - size / 2.0, size, size);

        p.set_stroke(palette.secondary.with_alpha(pulse * 0.6));
        p.set_line_width(0.4);
        for bar in self.rebar() {
            stroke_circle(p, bar, REBAR_RADIUS);
        }

        p.set_stroke(palette.tertiary.with_alpha(pulse * 0.4));
        p.set_line_dash(&[1.0, 2.0]);
        stroke_rect(
            p,
            x - size / 2.0 + spacing * 0.8,
            y - size / 2.0 + spacing * 0.8,
            size - spacing * 1.6,
            size - spacing * 1.6,
        );
        p.set_line_dash(&[]);

        p.restore();
    }
}

/// Any structural detail from the layout table, resolved to pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Section {
    IBeam(IBeam),
    WarrenTruss(WarrenTruss),
    BoxGirder(BoxGirder),
    Column(Column),
}

impl Section {
    pub fn place(placement: &Placement, viewport: &Viewport) -> Self {
        let anchor = viewport.at(placement.fx, placement.fy);
        match placement.kind {
            DetailKind::IBeam { size } => Section::IBeam(IBeam {
                center: anchor,
                size,
            }),
            DetailKind::WarrenTruss { width, height } => {
                Section::WarrenTruss(WarrenTruss::new(anchor, width, height))
            }
            DetailKind::BoxGirder { width, height } => Section::BoxGirder(BoxGirder {
                center: anchor,
                width,
                height,
            }),
            DetailKind::Column { size } => Section::Column(Column {
                center: anchor,
                size,
            }),
        }
    }

    pub fn anchor(&self) -> Vec2 {
        match self {
            Section::IBeam(m) => m.center,
            Section::WarrenTruss(m) => m.origin,
            Section::BoxGirder(m) => m.center,
            Section::Column(m) => m.center,
        }
    }

    fn motif(&self) -> &dyn Motif {
        match self {
            Section::IBeam(m) => m,
            Section::WarrenTruss(m) => m,
            Section::BoxGirder(m) => m,
            Section::Column(m) => m,
        }
    }
}

impl Motif for Section {
    fn pulse(&self, time: FrameTime) -> f64 {
        self.motif().pulse(time)
    }

    fn draw(&self, p: &mut dyn Painter, palette: &Palette, time: FrameTime) {
        self.motif().draw(p, palette, time)
    }
}

/// Draw every detail of the layout table in order.
pub fn draw_details(p: &mut dyn Painter, palette: &Palette, viewport: &Viewport, time: FrameTime) {
    for placement in &crate::layout::DETAILS {
        Section::place(placement, viewport).draw(p, palette, time);
    }
}

#[cfg(test)]
mod tests {
    use super::{BoxGirder, Column, IBeam, Section};
    use crate::layout::DETAILS;
    use crate::motifs::Motif;
    use crate::palette::LIGHT;
    use canvas::{PathSegment, RecordingPainter};
    use foundation::math::Vec2;
    use foundation::{FrameTime, Viewport};

    #[test]
    fn ibeam_axes_are_dashed_accent() {
        let beam = IBeam {
            center: Vec2::new(100.0, 100.0),
            size: 35.0,
        };
        let mut p = RecordingPainter::new();
        beam.draw(&mut p, &LIGHT, FrameTime::ZERO);
        let frame = p.finish();
        let axes = frame.strokes().last().unwrap();
        assert_eq!(axes.style.dash, vec![2.0, 2.0]);
        assert_eq!(axes.style.color.rgb, LIGHT.accent);
        assert_eq!(axes.style.color.a, beam.pulse(FrameTime::ZERO) * 0.7);
    }

    #[test]
    fn column_has_sixteen_rebar() {
        let col = Column {
            center: Vec2::new(50.0, 50.0),
            size: 25.0,
        };
        assert_eq!(col.rebar().count(), 16);
        assert_eq!(col.rebar().next(), Some(Vec2::new(42.5, 42.5)));

        let mut p = RecordingPainter::new();
        col.draw(&mut p, &LIGHT, FrameTime::ZERO);
        let frame = p.finish();
        let arcs = frame
            .strokes()
            .filter(|s| matches!(s.path[0], PathSegment::Arc { radius, .. } if radius == 1.5))
            .count();
        assert_eq!(arcs, 16);
    }

    #[test]
    fn box_girder_phase_follows_vertical_position() {
        let a = BoxGirder {
            center: Vec2::new(10.0, 100.0),
            width: 55.0,
            height: 25.0,
        };
        let b = BoxGirder {
            center: Vec2::new(900.0, 100.0),
            ..a
        };
        let t = FrameTime(2500.0);
        assert_eq!(a.pulse(t), b.pulse(t));
    }

    #[test]
    fn instances_do_not_pulse_in_lockstep() {
        let vp = Viewport::css(1920.0, 1080.0);
        let t = FrameTime(4000.0);
        let beams: Vec<f64> = DETAILS[..3]
            .iter()
            .map(|pl| Section::place(pl, &vp).pulse(t))
            .collect();
        assert_ne!(beams[0], beams[1]);
        assert_ne!(beams[1], beams[2]);
    }

    #[test]
    fn placement_scales_with_viewport() {
        let small = Section::place(&DETAILS[0], &Viewport::css(1000.0, 500.0));
        let large = Section::place(&DETAILS[0], &Viewport::css(2000.0, 1000.0));
        assert_eq!(large.anchor(), small.anchor() * 2.0);
    }
}
