use canvas::{DynPainter, RecordingPainter, RenderFrame};
use runtime::{Frame, Job, Scheduler};

use crate::motifs::{annotations, bridge, buildings, grid, marks, sections};
use crate::palette::Palette;

/// One scene layer: an id (also the recorded layer name) and its pass.
pub type LayerPass = (&'static str, fn(&Frame, &mut DynPainter));

/// Layers in z-order. Later entries composite over earlier ones.
pub const LAYERS: [LayerPass; 8] = [
    ("grid", grid_layer),
    ("corners", corners_layer),
    ("center", center_layer),
    ("bridge", bridge_layer),
    ("tower_a", tower_a_layer),
    ("tower_b", tower_b_layer),
    ("details", details_layer),
    ("annotations", annotations_layer),
];

fn grid_layer(frame: &Frame, p: &mut DynPainter) {
    p.begin_layer("grid");
    grid::draw(p, Palette::for_theme(frame.theme), &frame.viewport);
}

fn corners_layer(frame: &Frame, p: &mut DynPainter) {
    p.begin_layer("corners");
    marks::draw_corners(p, Palette::for_theme(frame.theme), &frame.viewport);
}

fn center_layer(frame: &Frame, p: &mut DynPainter) {
    p.begin_layer("center");
    marks::draw_center(p, Palette::for_theme(frame.theme), &frame.viewport);
}

fn bridge_layer(frame: &Frame, p: &mut DynPainter) {
    p.begin_layer("bridge");
    bridge::draw(p, Palette::for_theme(frame.theme), &frame.viewport, frame.time);
}

fn tower_a_layer(frame: &Frame, p: &mut DynPainter) {
    p.begin_layer("tower_a");
    buildings::draw_tall(p, Palette::for_theme(frame.theme), &frame.viewport);
}

fn tower_b_layer(frame: &Frame, p: &mut DynPainter) {
    p.begin_layer("tower_b");
    buildings::draw_tapered(p, Palette::for_theme(frame.theme), &frame.viewport);
}

fn details_layer(frame: &Frame, p: &mut DynPainter) {
    p.begin_layer("details");
    sections::draw_details(p, Palette::for_theme(frame.theme), &frame.viewport, frame.time);
}

fn annotations_layer(frame: &Frame, p: &mut DynPainter) {
    p.begin_layer("annotations");
    annotations::draw(p, Palette::for_theme(frame.theme), &frame.viewport, frame.time);
}

/// The composited blueprint background.
pub struct BlueprintScene {
    passes: Scheduler<DynPainter>,
}

impl Default for BlueprintScene {
    fn default() -> Self {
        Self::new()
    }
}

impl BlueprintScene {
    pub fn new() -> Self {
        let mut passes = Scheduler::new();
        for (z, (id, run)) in LAYERS.into_iter().enumerate() {
            passes.add_job(Job::with_priority(id, z as i32, run));
        }
        log::debug!("blueprint scene: {} layers", passes.job_count());
        Self { passes }
    }

    pub fn layer_ids(&self) -> Vec<&'static str> {
        self.passes.job_ids()
    }

    /// Clear the viewport and draw every layer for `frame`.
    pub fn draw(&self, painter: &mut DynPainter, frame: &Frame) {
        let vp = &frame.viewport;
        painter.begin_layer("clear");
        painter.clear_rect(0.0, 0.0, vp.width, vp.height);
        self.passes.run_frame(frame, painter);
    }

    /// Draw `frame` into a fresh recording.
    pub fn record(&self, frame: &Frame) -> RenderFrame {
        let mut painter = RecordingPainter::new();
        self.draw(&mut painter, frame);
        painter.finish()
    }
}
