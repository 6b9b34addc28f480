use crate::frame::Frame;

/// One ordered unit of work run by the [`Scheduler`](crate::Scheduler) every
/// frame.
///
/// `C` is whatever the pass draws into, usually a `dyn Painter`.
pub struct Job<C: ?Sized> {
    pub id: &'static str,
    /// Smaller values run earlier.
    pub priority: i32,
    pub run: fn(frame: &Frame, ctx: &mut C),
}

impl<C: ?Sized> Job<C> {
    pub fn new(id: &'static str, run: fn(frame: &Frame, ctx: &mut C)) -> Self {
        Self {
            id,
            priority: 0,
            run,
        }
    }

    pub fn with_priority(
        id: &'static str,
        priority: i32,
        run: fn(frame: &Frame, ctx: &mut C),
    ) -> Self {
        Self { id, priority, run }
    }
}

impl<C: ?Sized> std::fmt::Debug for Job<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Job")
            .field("id", &self.id)
            .field("priority", &self.priority)
            .finish()
    }
}
