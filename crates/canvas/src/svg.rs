//! Export a recorded frame as a standalone SVG document.

use std::f64::consts::TAU;
use std::fmt::Write;

use foundation::Viewport;
use foundation::math::Vec2;

use crate::recorder::{PathSegment, RenderCommand, RenderFrame, Stroke};

fn num(v: f64) -> String {
    let s = format!("{v:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

fn polar(center: Vec2, radius: f64, angle: f64) -> Vec2 {
    Vec2::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}

fn path_data(path: &[PathSegment]) -> String {
    let mut d = String::new();
    let mut has_point = false;
    for seg in path {
        match *seg {
            PathSegment::MoveTo(p) => {
                let _ = write!(d, "M{} {} ", num(p.x), num(p.y));
                has_point = true;
            }
            PathSegment::LineTo(p) => {
                let cmd = if has_point { 'L' } else { 'M' };
                let _ = write!(d, "{cmd}{} {} ", num(p.x), num(p.y));
                has_point = true;
            }
            PathSegment::Rect { origin, size } => {
                let _ = write!(
                    d,
                    "M{} {} h{} v{} h{} Z ",
                    num(origin.x),
                    num(origin.y),
                    num(size.x),
                    num(size.y),
                    num(-size.x)
                );
                has_point = true;
            }
            PathSegment::Arc {
                center,
                radius,
                start_angle,
                end_angle,
            } => {
                let start = polar(center, radius, start_angle);
                // Canvas joins the previous point to the arc start.
                let cmd = if has_point { 'L' } else { 'M' };
                let _ = write!(d, "{cmd}{} {} ", num(start.x), num(start.y));
                let sweep = end_angle - start_angle;
                let r = num(radius);
                if sweep.abs() >= TAU {
                    // SVG cannot draw a full circle in one arc command.
                    let mid = polar(center, radius, start_angle + TAU / 2.0);
                    let _ = write!(d, "A{r} {r} 0 1 1 {} {} ", num(mid.x), num(mid.y));
                    let _ = write!(d, "A{r} {r} 0 1 1 {} {} ", num(start.x), num(start.y));
                } else {
                    let end = polar(center, radius, end_angle);
                    let large = u8::from(sweep.abs() > TAU / 2.0);
                    let dir = u8::from(sweep >= 0.0);
                    let _ = write!(
                        d,
                        "A{r} {r} 0 {large} {dir} {} {} ",
                        num(end.x),
                        num(end.y)
                    );
                }
                has_point = true;
            }
        }
    }
    d.trim_end().to_string()
}

fn stroke_element(stroke: &Stroke) -> String {
    let style = &stroke.style;
    let mut el = format!(
        r#"<path d="{}" fill="none" stroke="{}" stroke-opacity="{}" stroke-width="{}""#,
        path_data(&stroke.path),
        style.color.hex(),
        style.color.a,
        num(style.line_width)
    );
    if !style.dash.is_empty() {
        let dash: Vec<String> = style.dash.iter().map(|v| num(*v)).collect();
        let _ = write!(el, r#" stroke-dasharray="{}""#, dash.join(" "));
    }
    el.push_str("/>");
    el
}

/// Render `frame` as SVG in CSS-pixel units.
///
/// Clears are dropped since the document starts transparent. Strokes are
/// grouped per layer in draw order.
pub fn to_svg(frame: &RenderFrame, viewport: &Viewport) -> String {
    let w = num(viewport.width);
    let h = num(viewport.height);
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
    );

    let mut open_layer: Option<&'static str> = None;
    for cmd in &frame.commands {
        let RenderCommand::Stroke(stroke) = cmd else {
            continue;
        };
        if open_layer != Some(stroke.layer) {
            if open_layer.is_some() {
                out.push_str("</g>\n");
            }
            let _ = writeln!(out, r#"<g id="{}">"#, stroke.layer);
            open_layer = Some(stroke.layer);
        }
        out.push_str(&stroke_element(stroke));
        out.push('\n');
    }
    if open_layer.is_some() {
        out.push_str("</g>\n");
    }
    out.push_str("</svg>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::{num, to_svg};
    use crate::painter::{Painter, stroke_circle, stroke_line};
    use crate::recorder::RecordingPainter;
    use foundation::math::Vec2;
    use foundation::{Rgb, Viewport};

    #[test]
    fn formats_numbers_compactly() {
        assert_eq!(num(777.6000000001), "777.6");
        assert_eq!(num(15.0), "15");
        assert_eq!(num(-0.0001), "0");
    }

    #[test]
    fn writes_one_group_per_layer() {
        let mut p = RecordingPainter::new();
        p.begin_layer("grid");
        p.set_stroke(Rgb::new(50, 85, 120).with_alpha(0.012));
        stroke_line(&mut p, Vec2::ZERO, Vec2::new(0.0, 100.0));
        p.begin_layer("marks");
        p.set_line_dash(&[2.0, 2.0]);
        stroke_circle(&mut p, Vec2::new(50.0, 50.0), 5.0);

        let svg = to_svg(&p.finish(), &Viewport::css(100.0, 100.0));
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r#"<g id="grid">"#));
        assert!(svg.contains(r#"<g id="marks">"#));
        assert!(svg.contains(r#"d="M0 0 L0 100""#));
        assert!(svg.contains(r##"stroke="#325578""##));
        assert!(svg.contains(r#"stroke-opacity="0.012""#));
        assert!(svg.contains(r#"stroke-dasharray="2 2""#));
        assert_eq!(svg.matches("</g>").count(), 2);
    }
}
