//! Drawing routines. Each one is pure with respect to host state: it reads
//! only its arguments and leaves the painter's style as it found it.

pub mod annotations;
pub mod bridge;
pub mod buildings;
pub mod grid;
pub mod marks;
pub mod sections;
pub mod truss;

use canvas::Painter;
use foundation::FrameTime;

use crate::palette::Palette;

/// A structural detail drawn at a fixed anchor with its own pulse.
pub trait Motif {
    /// Base stroke alpha at `time`. Secondary strokes are fractions of it.
    fn pulse(&self, time: FrameTime) -> f64;

    fn draw(&self, painter: &mut dyn Painter, palette: &Palette, time: FrameTime);
}
