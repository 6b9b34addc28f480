//! Static tower-building silhouettes.

use canvas::{Painter, stroke_line, stroke_rect};
use foundation::Viewport;
use foundation::math::Vec2;

use crate::layout::{tower_a, tower_b};
use crate::palette::Palette;

/// Tall rectangular tower with floor lines, core walls, mechanical floors
/// and a spire.
pub fn draw_tall(p: &mut dyn Painter, palette: &Palette, viewport: &Viewport) {
    use tower_a::*;

    let bx = viewport.x(X);
    let base = viewport.y(BASE);
    let bh = viewport.y(HEIGHT);
    let half = WIDTH / 2.0;
    let top = base - bh;
    let floor_height = bh / FLOORS as f64;

    p.save();

    p.set_stroke(palette.primary.with_alpha(0.065));
    p.set_line_width(1.0);
    p.begin_path();
    p.move_to(bx - half, base);
    p.line_to(bx - half, top);
    p.line_to(bx + half, top);
    p.line_to(bx + half, base);
    p.stroke();

    p.set_stroke(palette.secondary.with_alpha(0.035));
    p.set_line_width(0.4);
    for i in 1..FLOORS {
        let y = base - floor_height * i as f64;
        stroke_line(p, Vec2::new(bx - half, y), Vec2::new(bx + half, y));
    }

    p.set_stroke(palette.tertiary.with_alpha(0.04));
    p.set_line_dash(&[2.0, 3.0]);
    p.begin_path();
    p.move_to(bx - CORE_OFFSET, base);
    p.line_to(bx - CORE_OFFSET, top);
    p.move_to(bx + CORE_OFFSET, base);
    p.line_to(bx + CORE_OFFSET, top);
    p.stroke();
    p.set_line_dash(&[]);

    p.set_stroke(palette.secondary.with_alpha(0.045));
    p.set_line_width(0.5);
    for floor in MECHANICAL_FLOORS {
        let y = base - floor_height * floor as f64;
        stroke_rect(p, bx - half, y - 2.0, WIDTH, 4.0);
    }

    p.set_stroke(palette.primary.with_alpha(0.08));
    p.set_line_width(1.0);
    stroke_line(p, Vec2::new(bx, top), Vec2::new(bx, top - SPIRE));

    p.set_stroke(palette.secondary.with_alpha(0.05));
    p.set_line_width(0.5);
    p.begin_path();
    p.move_to(bx - CROWN_HALF_WIDTH, top);
    p.line_to(bx, top - CROWN_HEIGHT);
    p.line_to(bx + CROWN_HALF_WIDTH, top);
    p.stroke();

    p.restore();
}

/// Tapered tower with curtain-wall banding.
pub fn draw_tapered(p: &mut dyn Painter, palette: &Palette, viewport: &Viewport) {
    use tower_b::*;

    let bx = viewport.x(X);
    let base = viewport.y(BASE);
    let bh = viewport.y(HEIGHT);
    let half = WIDTH / 2.0;

    p.save();

    p.set_stroke(palette.primary.with_alpha(0.05));
    p.set_line_width(0.8);
    p.begin_path();
    p.move_to(bx - half, base);
    p.line_to(bx - WIDTH * TOP_HALF_WIDTH, base - bh);
    p.line_to(bx + WIDTH * TOP_HALF_WIDTH, base - bh);
    p.line_to(bx + half, base);
    p.stroke();

    p.set_stroke(palette.secondary.with_alpha(0.03));
    p.set_line_width(0.4);
    for i in 1..BANDS {
        let prog = i as f64 / BANDS as f64;
        let y = base - bh * prog;
        let taper = 1.0 - prog * BAND_TAPER;
        stroke_line(
            p,
            Vec2::new(bx - half * taper, y),
            Vec2::new(bx + half * taper, y),
        );
    }

    p.restore();
}

#[cfg(test)]
mod tests {
    use super::{draw_tall, draw_tapered};
    use crate::palette::LIGHT;
    use canvas::{PathSegment, RecordingPainter};
    use foundation::Viewport;
    use foundation::math::Vec2;

    #[test]
    fn tall_tower_has_twenty_three_floor_lines() {
        let mut p = RecordingPainter::new();
        draw_tall(&mut p, &LIGHT, &Viewport::css(1000.0, 1000.0));
        let frame = p.finish();
        let floors = frame
            .strokes()
            .filter(|s| s.style.color == LIGHT.secondary.with_alpha(0.035))
            .count();
        assert_eq!(floors, 23);
        let bands = frame
            .strokes()
            .filter(|s| matches!(s.path[0], PathSegment::Rect { .. }))
            .count();
        assert_eq!(bands, 3);
    }

    #[test]
    fn core_walls_are_dashed_then_reset() {
        let mut p = RecordingPainter::new();
        draw_tall(&mut p, &LIGHT, &Viewport::css(1000.0, 1000.0));
        let frame = p.frame().clone();
        let dashed: Vec<_> = frame.strokes().filter(|s| !s.style.dash.is_empty()).collect();
        assert_eq!(dashed.len(), 1);
        assert_eq!(dashed[0].style.dash, vec![2.0, 3.0]);
        assert!(p.style().dash.is_empty());
    }

    #[test]
    fn tapered_outline_narrows_to_sixty_percent() {
        let mut p = RecordingPainter::new();
        draw_tapered(&mut p, &LIGHT, &Viewport::css(1000.0, 1000.0));
        let frame = p.finish();
        let outline = frame.strokes().next().unwrap();
        // bx = 60, base = 800, top = 400; half width 17.5 at base, 10.5 at top.
        assert_eq!(outline.path[0], PathSegment::MoveTo(Vec2::new(42.5, 800.0)));
        assert_eq!(outline.path[1], PathSegment::LineTo(Vec2::new(49.5, 400.0)));
        assert_eq!(frame.strokes().count(), 14);
    }
}
