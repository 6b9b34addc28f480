use std::collections::BTreeMap;

use foundation::Rgba;
use foundation::math::Vec2;
use serde::Serialize;

use crate::painter::Painter;

#[derive(Debug, Clone, PartialEq)]
pub enum PathSegment {
    MoveTo(Vec2),
    LineTo(Vec2),
    Rect { origin: Vec2, size: Vec2 },
    Arc {
        center: Vec2,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct StrokeStyle {
    pub color: Rgba,
    pub line_width: f64,
    pub dash: Vec<f64>,
}

impl Default for StrokeStyle {
    // Canvas defaults: opaque black, 1px, solid.
    fn default() -> Self {
        Self {
            color: Rgba::default(),
            line_width: 1.0,
            dash: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub layer: &'static str,
    pub style: StrokeStyle,
    pub path: Vec<PathSegment>,
}

impl Stroke {
    /// Every point the path touches: endpoints, rect corners, arc centers.
    pub fn points(&self) -> Vec<Vec2> {
        let mut out = Vec::new();
        for seg in &self.path {
            match *seg {
                PathSegment::MoveTo(p) | PathSegment::LineTo(p) => out.push(p),
                PathSegment::Rect { origin, size } => {
                    out.push(origin);
                    out.push(origin + size);
                }
                PathSegment::Arc { center, .. } => out.push(center),
            }
        }
        out
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    Clear { origin: Vec2, size: Vec2 },
    Stroke(Stroke),
}

/// Everything drawn during one frame, in call order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RenderFrame {
    pub commands: Vec<RenderCommand>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct FrameStats {
    pub clears: usize,
    pub strokes: usize,
    pub segments: usize,
    pub strokes_per_layer: BTreeMap<String, usize>,
}

impl RenderFrame {
    pub fn strokes(&self) -> impl Iterator<Item = &Stroke> {
        self.commands.iter().filter_map(|cmd| match cmd {
            RenderCommand::Stroke(s) => Some(s),
            RenderCommand::Clear { .. } => None,
        })
    }

    pub fn layer<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Stroke> + 'a {
        self.strokes().filter(move |s| s.layer == name)
    }

    /// Layer names in the order they were first drawn.
    pub fn layer_order(&self) -> Vec<&'static str> {
        let mut order: Vec<&'static str> = Vec::new();
        for s in self.strokes() {
            if !order.contains(&s.layer) {
                order.push(s.layer);
            }
        }
        order
    }

    pub fn stats(&self) -> FrameStats {
        let mut stats = FrameStats::default();
        for cmd in &self.commands {
            match cmd {
                RenderCommand::Clear { .. } => stats.clears += 1,
                RenderCommand::Stroke(s) => {
                    stats.strokes += 1;
                    stats.segments += s.path.len();
                    *stats.strokes_per_layer.entry(s.layer.to_string()).or_default() += 1;
                }
            }
        }
        stats
    }
}

/// A [`Painter`] that records strokes instead of rasterizing them.
///
/// Used for headless tests and for offline export.
#[derive(Debug, Default)]
pub struct RecordingPainter {
    frame: RenderFrame,
    style: StrokeStyle,
    saved: Vec<StrokeStyle>,
    path: Vec<PathSegment>,
    layer: &'static str,
}

impl RecordingPainter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frame(&self) -> &RenderFrame {
        &self.frame
    }

    pub fn finish(self) -> RenderFrame {
        self.frame
    }

    /// Depth of the `save` stack. Zero between balanced frames.
    pub fn save_depth(&self) -> usize {
        self.saved.len()
    }

    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }
}

impl Painter for RecordingPainter {
    fn save(&mut self) {
        self.saved.push(self.style.clone());
    }

    fn restore(&mut self) {
        // Like the canvas, an unmatched restore is ignored.
        if let Some(style) = self.saved.pop() {
            self.style = style;
        }
    }

    fn set_stroke(&mut self, color: Rgba) {
        self.style.color = color;
    }

    fn set_line_width(&mut self, width: f64) {
        if width.is_finite() && width > 0.0 {
            self.style.line_width = width;
        }
    }

    fn set_line_dash(&mut self, segments: &[f64]) {
        self.style.dash = segments.to_vec();
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.path.push(PathSegment::MoveTo(Vec2::new(x, y)));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.path.push(PathSegment::LineTo(Vec2::new(x, y)));
    }

    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.path.push(PathSegment::Rect {
            origin: Vec2::new(x, y),
            size: Vec2::new(width, height),
        });
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64) {
        self.path.push(PathSegment::Arc {
            center: Vec2::new(x, y),
            radius,
            start_angle,
            end_angle,
        });
    }

    fn stroke(&mut self) {
        if self.path.is_empty() {
            return;
        }
        self.frame.commands.push(RenderCommand::Stroke(Stroke {
            layer: self.layer,
            style: self.style.clone(),
            path: self.path.clone(),
        }));
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.frame.commands.push(RenderCommand::Clear {
            origin: Vec2::new(x, y),
            size: Vec2::new(width, height),
        });
    }

    fn begin_layer(&mut self, name: &'static str) {
        self.layer = name;
    }
}
