//! The blueprint scene: palette, pulse functions, layout and every drawing
//! motif, composited into one frame by [`BlueprintScene`].

pub mod compose;
pub mod layout;
pub mod motifs;
pub mod palette;
pub mod pulse;

pub use compose::*;
pub use palette::*;
pub use pulse::*;
