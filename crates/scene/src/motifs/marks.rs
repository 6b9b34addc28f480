use canvas::{Painter, stroke_circle};
use foundation::Viewport;

use crate::layout::marks::*;
use crate::palette::Palette;

/// L-shaped registration brackets in all four corners.
pub fn draw_corners(p: &mut dyn Painter, palette: &Palette, viewport: &Viewport) {
    let (w, h) = (viewport.width, viewport.height);
    let (s, m) = (CORNER_SIZE, CORNER_MARGIN);

    p.save();
    p.set_stroke(palette.primary.with_alpha(0.09));
    p.set_line_width(0.8);

    let brackets = [
        [(m, m + s), (m, m), (m + s, m)],
        [(w - m - s, m), (w - m, m), (w - m, m + s)],
        [(m, h - m - s), (m, h - m), (m + s, h - m)],
        [(w - m - s, h - m), (w - m, h - m), (w - m, h - m - s)],
    ];
    for [a, corner, b] in brackets {
        p.begin_path();
        p.move_to(a.0, a.1);
        p.line_to(corner.0, corner.1);
        p.line_to(b.0, b.1);
        p.stroke();
    }
    p.restore();
}

/// Broken crosshair plus a small circle at the viewport center.
pub fn draw_center(p: &mut dyn Painter, palette: &Palette, viewport: &Viewport) {
    let c = viewport.center();
    let (inner, outer) = (CROSSHAIR_INNER, CROSSHAIR_OUTER);

    p.save();
    p.set_stroke(palette.primary.with_alpha(0.03));
    p.set_line_width(0.5);

    p.begin_path();
    p.move_to(c.x - outer, c.y);
    p.line_to(c.x - inner, c.y);
    p.move_to(c.x + inner, c.y);
    p.line_to(c.x + outer, c.y);
    p.move_to(c.x, c.y - outer);
    p.line_to(c.x, c.y - inner);
    p.move_to(c.x, c.y + inner);
    p.line_to(c.x, c.y + outer);
    p.stroke();

    stroke_circle(p, c, CROSSHAIR_RADIUS);
    p.restore();
}
