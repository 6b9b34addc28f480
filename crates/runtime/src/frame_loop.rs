//! Self-rescheduling frame loop with explicit cancellation.
//!
//! The host supplies a [`FrameScheduler`] (in the browser, a wrapper around
//! `requestAnimationFrame`). The loop keeps at most one request pending and
//! guards every frame body with a [`CancelToken`], so a callback that was
//! already queued when the loop stopped returns without drawing.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::RuntimeError;

/// "Run after the next display refresh" primitive provided by the host.
pub trait FrameScheduler {
    type Handle: Copy + Eq + std::fmt::Debug;

    fn request_frame(&mut self) -> Result<Self::Handle, RuntimeError>;

    fn cancel_frame(&mut self, handle: Self::Handle);
}

/// Shared "still active" flag. Cancelling is permanent.
#[derive(Debug, Clone)]
pub struct CancelToken {
    active: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self {
            active: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    pub fn cancel(&self) {
        self.active.store(false, Ordering::Release);
    }
}

impl Default for CancelToken {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
pub struct FrameLoop<H> {
    token: CancelToken,
    pending: Option<H>,
    frames_run: u64,
}

impl<H: Copy + Eq + std::fmt::Debug> Default for FrameLoop<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: Copy + Eq + std::fmt::Debug> FrameLoop<H> {
    pub fn new() -> Self {
        Self {
            token: CancelToken::new(),
            pending: None,
            frames_run: 0,
        }
    }

    pub fn token(&self) -> CancelToken {
        self.token.clone()
    }

    pub fn is_active(&self) -> bool {
        self.token.is_active()
    }

    #[cfg(test)]
    fn pending(&self) -> Option<H> {
        self.pending
    }

    pub fn frames_run(&self) -> u64 {
        self.frames_run
    }

    /// Request the first frame. No-op if a frame is already pending or the
    /// loop has been stopped.
    pub fn start<S>(&mut self, scheduler: &mut S) -> Result<(), RuntimeError>
    where
        S: FrameScheduler<Handle = H>,
    {
        if !self.token.is_active() || self.pending.is_some() {
            return Ok(());
        }
        self.pending = Some(scheduler.request_frame()?);
        Ok(())
    }

    /// Handle one delivered frame callback.
    ///
    /// Runs `body` with the frame index and requests the next frame, unless
    /// the loop was stopped in the meantime. Returns whether `body` ran.
    pub fn tick<S, F>(&mut self, scheduler: &mut S, body: F) -> Result<bool, RuntimeError>
    where
        S: FrameScheduler<Handle = H>,
        F: FnOnce(u64),
    {
        self.pending = None;
        if !self.token.is_active() {
            return Ok(false);
        }
        body(self.frames_run);
        self.frames_run += 1;
        self.pending = Some(scheduler.request_frame()?);
        Ok(true)
    }

    /// Cancel the token and any pending request. Idempotent.
    pub fn stop<S>(&mut self, scheduler: &mut S)
    where
        S: FrameScheduler<Handle = H>,
    {
        self.token.cancel();
        if let Some(handle) = self.pending.take() {
            scheduler.cancel_frame(handle);
        }
    }
}
