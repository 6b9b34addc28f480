use foundation::{FrameTime, Theme, Viewport};

/// Per-frame input to every draw pass.
///
/// Everything a pass needs is carried here by value, so a pass never reads
/// host globals and the same `Frame` always produces the same drawing.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Frame {
    /// 0-based frame index since mount.
    pub index: u64,
    /// Host clock reading handed to the frame callback.
    pub time: FrameTime,
    pub viewport: Viewport,
    pub theme: Theme,
}

impl Frame {
    pub fn new(index: u64, time: FrameTime, viewport: Viewport, theme: Theme) -> Self {
        Self {
            index,
            time,
            viewport,
            theme,
        }
    }

    /// The frame after this one, at a new clock reading with the current
    /// viewport and theme.
    pub fn next(self, time: FrameTime, viewport: Viewport, theme: Theme) -> Self {
        Self::new(self.index + 1, time, viewport, theme)
    }
}
