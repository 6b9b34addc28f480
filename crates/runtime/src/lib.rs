pub mod error;
pub mod event_bus;
pub mod frame;
pub mod frame_loop;
pub mod job;
pub mod lifecycle;
pub mod scheduler;
pub mod teardown;

pub use error::*;
pub use event_bus::*;
pub use frame::*;
pub use frame_loop::*;
pub use job::*;
pub use lifecycle::*;
pub use scheduler::*;
pub use teardown::*;
