//! Cable-stayed bridge: deck, two tapered towers, four stay-cable fans and
//! foundation piers.

use canvas::{Painter, stroke_line};
use foundation::math::Vec2;
use foundation::{FrameTime, Viewport};

use crate::layout::bridge::*;
use crate::palette::Palette;
use crate::pulse::{Span, cable_alpha};

/// Bridge dimensions resolved against one viewport.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BridgeGeometry {
    pub width: f64,
    pub deck_y: f64,
    pub tower_height: f64,
    pub tower_xs: [f64; 2],
}

impl BridgeGeometry {
    pub fn new(viewport: &Viewport) -> Self {
        Self {
            width: viewport.width,
            deck_y: viewport.y(DECK_Y),
            tower_height: viewport.y(TOWER_HEIGHT),
            tower_xs: [viewport.x(TOWER_XS[0]), viewport.x(TOWER_XS[1])],
        }
    }

    pub fn tower_top(&self) -> f64 {
        self.deck_y - self.tower_height
    }

    /// Where the two towers' main spans meet.
    pub fn midspan(&self) -> f64 {
        (self.tower_xs[0] + self.tower_xs[1]) / 2.0
    }

    /// Deck-level extents `(left, right)` of each tower's cable fans.
    pub fn fan_extents(&self) -> [(f64, f64); 2] {
        let mid = self.midspan();
        [(0.0, mid), (mid, self.width)]
    }

    /// Half-width of a tower leg pair at `progress` (0 = deck, 1 = top).
    pub fn leg_spread(progress: f64) -> f64 {
        LEG_SPREAD * (1.0 - progress * TAPER)
    }

    /// Deck anchor of cable `index` (1-based) in a fan.
    pub fn cable_anchor(tower_x: f64, extent: f64, index: usize) -> f64 {
        let t = index as f64 / (CABLES_PER_FAN + 1) as f64;
        tower_x + (extent - tower_x) * t
    }
}

pub fn draw(p: &mut dyn Painter, palette: &Palette, viewport: &Viewport, time: FrameTime) {
    let geo = BridgeGeometry::new(viewport);
    let w = geo.width;
    let deck_y = geo.deck_y;

    p.save();

    p.set_stroke(palette.primary.with_alpha(0.09));
    p.set_line_width(2.5);
    stroke_line(
        p,
        Vec2::new(-DECK_OVERHANG, deck_y),
        Vec2::new(w + DECK_OVERHANG, deck_y),
    );

    p.set_stroke(palette.secondary.with_alpha(0.05));
    p.set_line_width(0.5);
    p.begin_path();
    for dy in DECK_LAYERS {
        p.move_to(0.0, deck_y + dy);
        p.line_to(w, deck_y + dy);
    }
    p.stroke();

    p.set_stroke(palette.tertiary.with_alpha(0.03));
    for x in super::grid::ticks(w, RIB_PITCH) {
        stroke_line(p, Vec2::new(x, deck_y), Vec2::new(x, deck_y + DECK_DEPTH));
    }

    for tx in geo.tower_xs {
        draw_tower(p, palette, &geo, tx);
    }

    let top = geo.tower_top();
    for (tx, (left, right)) in geo.tower_xs.into_iter().zip(geo.fan_extents()) {
        draw_cables(p, palette, time, deck_y, Vec2::new(tx, top), left, right);
    }

    p.set_stroke(palette.primary.with_alpha(0.07));
    p.set_line_width(4.0);
    p.begin_path();
    for tx in geo.tower_xs {
        p.move_to(tx, deck_y + DECK_DEPTH);
        p.line_to(tx, deck_y + PIER_DEPTH);
    }
    p.stroke();

    p.set_stroke(palette.secondary.with_alpha(0.05));
    p.set_line_width(1.0);
    p.begin_path();
    for tx in geo.tower_xs {
        p.move_to(tx - PIER_CAP_HALF_WIDTH, deck_y + PIER_DEPTH);
        p.line_to(tx + PIER_CAP_HALF_WIDTH, deck_y + PIER_DEPTH);
    }
    p.stroke();

    p.restore();
}

fn draw_tower(p: &mut dyn Painter, palette: &Palette, geo: &BridgeGeometry, tx: f64) {
    let deck_y = geo.deck_y;
    let top = geo.tower_top();

    p.set_stroke(palette.primary.with_alpha(0.12));
    p.set_line_width(2.0);
    stroke_line(
        p,
        Vec2::new(tx - LEG_SPREAD, deck_y),
        Vec2::new(tx - LEG_TOP_SPREAD, top),
    );
    stroke_line(
        p,
        Vec2::new(tx + LEG_SPREAD, deck_y),
        Vec2::new(tx + LEG_TOP_SPREAD, top),
    );

    p.set_line_width(1.5);
    stroke_line(
        p,
        Vec2::new(tx - CAPITAL_HALF_WIDTH, top),
        Vec2::new(tx + CAPITAL_HALF_WIDTH, top),
    );

    p.set_stroke(palette.primary.with_alpha(0.14));
    p.set_line_width(1.5);
    stroke_line(p, Vec2::new(tx, top - PYLON_HEIGHT), Vec2::new(tx, top));

    p.set_stroke(palette.secondary.with_alpha(0.06));
    p.set_line_width(0.6);
    for i in 1..=CROSS_BEAMS {
        let prog = i as f64 / (CROSS_BEAMS + 1) as f64;
        let y = deck_y - geo.tower_height * prog;
        let spread = BridgeGeometry::leg_spread(prog);
        stroke_line(p, Vec2::new(tx - spread, y), Vec2::new(tx + spread, y));
    }

    p.set_stroke(palette.tertiary.with_alpha(0.035));
    p.set_line_width(0.4);
    let bays = (BRACE_BAYS + 1) as f64;
    for i in 0..BRACE_BAYS {
        let prog1 = i as f64 / bays;
        let prog2 = (i + 1) as f64 / bays;
        let y1 = deck_y - geo.tower_height * prog1;
        let y2 = deck_y - geo.tower_height * prog2;
        let sp1 = BridgeGeometry::leg_spread(prog1);
        let sp2 = BridgeGeometry::leg_spread(prog2);
        p.begin_path();
        p.move_to(tx - sp1, y1);
        p.line_to(tx + sp2, y2);
        p.move_to(tx + sp1, y1);
        p.line_to(tx - sp2, y2);
        p.stroke();
    }
}

fn draw_cables(
    p: &mut dyn Painter,
    palette: &Palette,
    time: FrameTime,
    deck_y: f64,
    head: Vec2,
    left: f64,
    right: f64,
) {
    p.set_line_width(0.5);
    for (span, extent) in [(Span::Back, left), (Span::Main, right)] {
        for i in 1..=CABLES_PER_FAN {
            let deck_x = BridgeGeometry::cable_anchor(head.x, extent, i);
            p.set_stroke(palette.secondary.with_alpha(cable_alpha(time, i, span)));
            stroke_line(p, head, Vec2::new(deck_x, deck_y));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{BridgeGeometry, draw};
    use crate::palette::LIGHT;
    use canvas::RecordingPainter;
    use foundation::{FrameTime, Viewport};

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn geometry_at_full_hd() {
        let geo = BridgeGeometry::new(&Viewport::css(1920.0, 1080.0));
        assert!(approx(geo.deck_y, 777.6));
        assert!(approx(geo.tower_height, 518.4));
        assert!(approx(geo.tower_xs[0], 576.0));
        assert!(approx(geo.tower_xs[1], 1344.0));
        assert!(approx(geo.midspan(), 960.0));
    }

    #[test]
    fn legs_taper_toward_the_top() {
        assert_eq!(BridgeGeometry::leg_spread(0.0), 30.0);
        assert!(BridgeGeometry::leg_spread(6.0 / 7.0) < BridgeGeometry::leg_spread(1.0 / 7.0));
        assert!(approx(BridgeGeometry::leg_spread(1.0), 3.9));
    }

    #[test]
    fn cable_anchors_stay_within_fan() {
        for i in 1..=16 {
            let back = BridgeGeometry::cable_anchor(576.0, 0.0, i);
            let main = BridgeGeometry::cable_anchor(576.0, 960.0, i);
            assert!(back > 0.0 && back < 576.0);
            assert!(main > 576.0 && main < 960.0);
        }
    }

    #[test]
    fn draws_sixty_four_cables() {
        let mut p = RecordingPainter::new();
        draw(&mut p, &LIGHT, &Viewport::css(1920.0, 1080.0), FrameTime::ZERO);
        let frame = p.finish();
        let cables = frame
            .strokes()
            .filter(|s| s.style.line_width == 0.5 && s.style.color.rgb == LIGHT.secondary)
            .filter(|s| s.path.len() == 2)
            .count();
        assert_eq!(cables, 64);
    }

    #[test]
    fn leaves_style_stack_balanced() {
        let mut p = RecordingPainter::new();
        draw(&mut p, &LIGHT, &Viewport::css(640.0, 480.0), FrameTime(500.0));
        assert_eq!(p.save_depth(), 0);
        assert_eq!(p.style().line_width, 1.0);
    }
}
