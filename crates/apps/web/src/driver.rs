//! The per-frame step of a mounted background, independent of the browser.
//!
//! [`FrameDriver`] owns the lifecycle, the frame loop and the signal queue.
//! The host hands it a painter and a [`SurfaceSink`] on every frame; listener
//! registrations are recorded in its teardown list as they succeed.

use canvas::DynPainter;
use foundation::{FrameTime, Viewport};
use runtime::{
    Frame, FrameLoop, FrameScheduler, HostSignal, HostState, Lifecycle, LifecycleState,
    RuntimeError, SignalBus, Teardown,
};
use scene::BlueprintScene;

/// Whatever holds the drawing surface's size and transform.
pub trait SurfaceSink {
    /// Size the backing store to `viewport × dpr` and reset the transform to
    /// the dpr scale.
    fn resize(&mut self, viewport: &Viewport);
}

pub struct FrameDriver<S: FrameScheduler> {
    scene: BlueprintScene,
    lifecycle: Lifecycle,
    frame_loop: FrameLoop<S::Handle>,
    scheduler: S,
    signals: SignalBus,
    host: HostState,
    teardown: Teardown,
}

impl<S: FrameScheduler> FrameDriver<S> {
    pub fn new(scheduler: S, host: HostState) -> Self {
        Self {
            scene: BlueprintScene::new(),
            lifecycle: Lifecycle::new(),
            frame_loop: FrameLoop::new(),
            scheduler,
            signals: SignalBus::new(),
            host,
            teardown: Teardown::new(),
        }
    }

    pub fn is_running(&self) -> bool {
        self.lifecycle.is_running()
    }

    pub fn frames_drawn(&self) -> u64 {
        self.frame_loop.frames_run()
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Record how to undo a listener registration that just succeeded.
    pub fn on_teardown(&mut self, name: &'static str, step: impl FnOnce() + 'static) {
        self.teardown.push(name, step);
    }

    /// Initial sizing, done once before [`start`](Self::start).
    pub fn size(&mut self, sink: &mut dyn SurfaceSink) -> Result<(), RuntimeError> {
        self.lifecycle.transition(LifecycleState::Sizing)?;
        sink.resize(&self.host.viewport);
        Ok(())
    }

    /// Enter `Running` and request the first frame.
    pub fn start(&mut self) -> Result<(), RuntimeError> {
        self.lifecycle.transition(LifecycleState::Running)?;
        self.frame_loop.start(&mut self.scheduler)
    }

    /// Queue a host signal for the next frame. Dropped once the loop stopped.
    pub fn emit(&mut self, signal: HostSignal) {
        if self.frame_loop.is_active() {
            self.signals.emit(signal);
        }
    }

    /// Handle one delivered frame callback. Returns whether a frame was drawn.
    ///
    /// If the next frame cannot be requested the background disposes itself.
    pub fn on_frame(
        &mut self,
        timestamp: f64,
        painter: &mut DynPainter,
        sink: &mut dyn SurfaceSink,
    ) -> bool {
        let FrameDriver {
            scene,
            lifecycle,
            frame_loop,
            scheduler,
            signals,
            host,
            ..
        } = self;

        let mut drew = false;
        let result = frame_loop.tick(scheduler, |index| {
            let applied = host.apply(signals.drain());
            if applied.resized {
                if let Err(err) = resize(lifecycle, sink, &host.viewport) {
                    log::error!("resize: {err}");
                }
            }
            if applied.theme_changed {
                log::debug!("theme: {}", host.theme.as_str());
            }
            let frame = Frame::new(index, FrameTime(timestamp), host.viewport, host.theme);
            scene.draw(painter, &frame);
            drew = true;
        });

        if let Err(err) = result {
            log::error!("frame loop stopped: {err}");
            self.dispose();
        }
        drew
    }

    /// Stop the loop and release every listener. Returns `false` if already
    /// disposed.
    pub fn dispose(&mut self) -> bool {
        if !self.lifecycle.dispose() {
            return false;
        }
        self.frame_loop.stop(&mut self.scheduler);
        self.signals.drain();
        let released = self.teardown.run();
        log::debug!("released {released} listener(s)");
        true
    }
}

fn resize(
    lifecycle: &mut Lifecycle,
    sink: &mut dyn SurfaceSink,
    viewport: &Viewport,
) -> Result<(), RuntimeError> {
    lifecycle.transition(LifecycleState::Sizing)?;
    sink.resize(viewport);
    lifecycle.transition(LifecycleState::Running)
}
