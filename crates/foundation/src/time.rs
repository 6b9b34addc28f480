/// A reading of the host frame clock, in milliseconds.
///
/// The browser hands one of these to every animation-frame callback. It is
/// monotonic within a page but carries no meaning beyond being a phase input
/// for the pulsing functions.
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
pub struct FrameTime(pub f64); // milliseconds

impl FrameTime {
    pub const ZERO: Self = Self(0.0);

    pub fn millis(self) -> f64 {
        self.0
    }
}
