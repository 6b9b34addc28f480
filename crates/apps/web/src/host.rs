//! Browser host for the blueprint scene.
//!
//! A [`Renderer`] pairs the canvas surface with a [`FrameDriver`], which owns
//! the frame loop and every listener registered on its behalf. Callbacks only
//! hold a `Weak` reference to the renderer, so dropping the last strong
//! handle releases everything.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use foundation::{Theme, Viewport};
use runtime::{FrameScheduler, HostSignal, HostState, RuntimeError};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    CanvasRenderingContext2d, Document, Element, HtmlCanvasElement, MutationObserver,
    MutationObserverInit, Window,
};

use crate::config::BackgroundConfig;
use crate::driver::{FrameDriver, SurfaceSink};
use crate::error::MountError;
use crate::painter::CanvasPainter;

pub fn css_px(value: f64) -> String {
    format!("{value}px")
}

/// Current CSS viewport of `window`. Missing readings count as zero.
pub fn measure(window: &Window) -> Viewport {
    let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    Viewport::new(width, height, window.device_pixel_ratio())
}

fn root_theme(root: &Element, config: &BackgroundConfig) -> Theme {
    Theme::from_dark_flag(config.is_dark(&root.class_name()))
}

/// The canvas element whose size tracks the viewport.
pub struct Surface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl Surface {
    pub fn acquire(document: &Document, canvas_id: &str) -> Result<Self, MountError> {
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| MountError::CanvasMissing(canvas_id.to_string()))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| MountError::NotACanvas(canvas_id.to_string()))?;
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .ok_or(MountError::ContextUnavailable)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| MountError::ContextUnavailable)?;

        // Purely decorative.
        if let Err(err) = canvas.set_attribute("aria-hidden", "true") {
            log::warn!("aria-hidden: {err:?}");
        }

        Ok(Self { canvas, ctx })
    }

    pub fn painter(&self) -> CanvasPainter {
        CanvasPainter::new(self.ctx.clone())
    }
}

impl SurfaceSink for Surface {
    fn resize(&mut self, viewport: &Viewport) {
        let (w, h) = viewport.backing_size();
        self.canvas.set_width(w);
        self.canvas.set_height(h);

        let style = self.canvas.style();
        for (prop, px) in [("width", viewport.width), ("height", viewport.height)] {
            if let Err(err) = style.set_property(prop, &css_px(px)) {
                log::error!("style {prop}: {err:?}");
            }
        }

        let [a, b, c, d, e, f] = viewport.transform();
        if let Err(err) = self.ctx.set_transform(a, b, c, d, e, f) {
            log::error!("set_transform failed: {err:?}");
        }
    }
}

type FrameCallback = Closure<dyn FnMut(f64)>;

/// `requestAnimationFrame` behind [`FrameScheduler`].
pub struct RafScheduler {
    window: Window,
    callback: Option<FrameCallback>,
}

impl RafScheduler {
    pub fn new(window: Window) -> Self {
        Self {
            window,
            callback: None,
        }
    }

    fn install(&mut self, callback: FrameCallback) {
        self.callback = Some(callback);
    }

    fn release(&mut self) {
        self.callback = None;
    }
}

impl FrameScheduler for RafScheduler {
    type Handle = i32;

    fn request_frame(&mut self) -> Result<i32, RuntimeError> {
        let callback = self
            .callback
            .as_ref()
            .ok_or_else(|| RuntimeError::Schedule("frame callback released".to_string()))?;
        self.window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .map_err(|err| RuntimeError::Schedule(format!("{err:?}")))
    }

    fn cancel_frame(&mut self, handle: i32) {
        let _ = self.window.cancel_animation_frame(handle);
    }
}

/// One mounted background.
pub struct Renderer {
    config: BackgroundConfig,
    surface: Surface,
    painter: CanvasPainter,
    driver: FrameDriver<RafScheduler>,
}

pub type SharedRenderer = Rc<RefCell<Renderer>>;

impl Renderer {
    pub fn is_running(&self) -> bool {
        self.driver.is_running()
    }

    pub fn frames_drawn(&self) -> u64 {
        self.driver.frames_drawn()
    }

    pub fn config(&self) -> &BackgroundConfig {
        &self.config
    }

    fn on_frame(&mut self, timestamp: f64) {
        self.driver.on_frame(timestamp, &mut self.painter, &mut self.surface);
    }

    /// Stop the loop and release every listener. Idempotent.
    ///
    /// Must not be called from inside the frame callback, which this drops.
    pub fn dispose(&mut self) {
        if self.driver.dispose() {
            self.driver.scheduler_mut().release();
        }
    }
}

fn emit(weak: &Weak<RefCell<Renderer>>, signal: HostSignal) {
    if let Some(renderer) = weak.upgrade() {
        renderer.borrow_mut().driver.emit(signal);
    }
}

/// Mount a renderer on the canvas named by `config`.
///
/// On error every listener registered so far has already been removed.
pub fn mount(config: BackgroundConfig) -> Result<SharedRenderer, MountError> {
    let window = web_sys::window().ok_or(MountError::NoWindow)?;
    let document = window.document().ok_or(MountError::NoDocument)?;
    let root = document.document_element().ok_or(MountError::NoDocument)?;
    let mut surface = Surface::acquire(&document, &config.canvas_id)?;

    let host = HostState::new(measure(&window), root_theme(&root, &config));
    let mut driver = FrameDriver::new(RafScheduler::new(window.clone()), host);
    driver.size(&mut surface)?;

    let renderer = Rc::new(RefCell::new(Renderer {
        config,
        painter: surface.painter(),
        surface,
        driver,
    }));
    let weak = Rc::downgrade(&renderer);

    let on_frame = weak.clone();
    let frame_cb = FrameCallback::new(move |timestamp: f64| {
        if let Some(renderer) = on_frame.upgrade() {
            renderer.borrow_mut().on_frame(timestamp);
        }
    });
    renderer
        .borrow_mut()
        .driver
        .scheduler_mut()
        .install(frame_cb);

    register_resize(&renderer, &window, weak.clone())?;
    register_theme_observer(&renderer, &root, weak)?;

    renderer.borrow_mut().driver.start()?;
    Ok(renderer)
}

fn register_resize(
    renderer: &SharedRenderer,
    window: &Window,
    weak: Weak<RefCell<Renderer>>,
) -> Result<(), MountError> {
    let target = window.clone();
    let on_resize = Closure::<dyn FnMut()>::new(move || {
        emit(&weak, HostSignal::Resized(measure(&target)));
    });
    window
        .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
        .map_err(|err| MountError::listener("resize", err))?;

    let window = window.clone();
    renderer.borrow_mut().driver.on_teardown("resize listener", move || {
        let _ = window
            .remove_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
    });
    Ok(())
}

fn register_theme_observer(
    renderer: &SharedRenderer,
    root: &Element,
    weak: Weak<RefCell<Renderer>>,
) -> Result<(), MountError> {
    let target = root.clone();
    let on_mutation = Closure::<dyn FnMut()>::new(move || {
        let Some(renderer) = weak.upgrade() else {
            return;
        };
        let theme = root_theme(&target, renderer.borrow().config());
        renderer
            .borrow_mut()
            .driver
            .emit(HostSignal::ThemeChanged(theme));
    });

    let observer = MutationObserver::new(on_mutation.as_ref().unchecked_ref())
        .map_err(|err| MountError::listener("theme observer", err))?;
    let options = MutationObserverInit::new();
    options.set_attributes(true);
    options.set_attribute_filter(&js_sys::Array::of1(&JsValue::from_str("class")));
    observer
        .observe_with_options(root, &options)
        .map_err(|err| MountError::listener("theme observer", err))?;

    renderer.borrow_mut().driver.on_teardown("theme observer", move || {
        observer.disconnect();
        drop(on_mutation);
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::css_px;

    #[test]
    fn css_sizes_keep_fractional_pixels() {
        assert_eq!(css_px(800.0), "800px");
        assert_eq!(css_px(1536.5), "1536.5px");
    }
}
