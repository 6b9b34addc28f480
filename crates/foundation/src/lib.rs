pub mod color;
pub mod math;
pub mod theme;
pub mod time;
pub mod viewport;

// Foundation crate: small, well-tested primitives only.
pub use color::*;
pub use theme::*;
pub use time::*;
pub use viewport::*;
