pub mod painter;
pub mod recorder;
pub mod svg;

pub use painter::*;
pub use recorder::*;
