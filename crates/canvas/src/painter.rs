use foundation::Rgba;
use foundation::math::Vec2;

/// The subset of the 2D canvas API the blueprint scene draws with.
///
/// Semantics follow `CanvasRenderingContext2D`: `save`/`restore` push and pop
/// stroke state (not the path), `stroke` leaves the current path intact, and
/// `begin_path` discards it.
pub trait Painter {
    fn save(&mut self);
    fn restore(&mut self);

    fn set_stroke(&mut self, color: Rgba);
    fn set_line_width(&mut self, width: f64);
    /// Empty slice means solid.
    fn set_line_dash(&mut self, segments: &[f64]);

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn arc(&mut self, x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64);
    fn stroke(&mut self);

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    /// Marks the start of a named layer. Painters that don't care ignore it.
    fn begin_layer(&mut self, _name: &'static str) {}
}

/// Painter trait object with a `'static` bound, as stored in pass tables.
pub type DynPainter = dyn Painter;

/// Stroke a single segment as its own path.
pub fn stroke_line(p: &mut dyn Painter, from: Vec2, to: Vec2) {
    p.begin_path();
    p.move_to(from.x, from.y);
    p.line_to(to.x, to.y);
    p.stroke();
}

/// Stroke a full circle as its own path.
pub fn stroke_circle(p: &mut dyn Painter, center: Vec2, radius: f64) {
    p.begin_path();
    p.arc(center.x, center.y, radius, 0.0, std::f64::consts::TAU);
    p.stroke();
}

/// Stroke an axis-aligned rectangle as its own path.
pub fn stroke_rect(p: &mut dyn Painter, x: f64, y: f64, width: f64, height: f64) {
    p.begin_path();
    p.rect(x, y, width, height);
    p.stroke();
}

/// Stroke a dashed segment, then return to solid lines.
pub fn stroke_dashed_line(p: &mut dyn Painter, dash: &[f64], from: Vec2, to: Vec2) {
    p.set_line_dash(dash);
    stroke_line(p, from, to);
    p.set_line_dash(&[]);
}
