use std::cell::RefCell;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};

use wasm_bindgen::prelude::*;

mod config;
mod driver;
mod error;
mod host;
mod painter;

pub use config::BackgroundConfig;
pub use driver::{FrameDriver, SurfaceSink};
pub use error::MountError;
pub use host::{Renderer, SharedRenderer, Surface};
pub use painter::CanvasPainter;

// Guard to prevent double-initialization of global state (relevant during hot reload).
static INITIALIZED: AtomicBool = AtomicBool::new(false);
static PANIC_HOOK_SET: OnceLock<()> = OnceLock::new();

#[derive(Default)]
struct BackgroundState {
    renderer: Option<SharedRenderer>,
    /// Last config passed to a mount, used by the theme toggle.
    config: BackgroundConfig,
}

thread_local! {
    static STATE: RefCell<BackgroundState> = RefCell::new(BackgroundState::default());
}

fn with_state<F, R>(f: F) -> R
where
    F: FnOnce(&RefCell<BackgroundState>) -> R,
    R: Default,
{
    STATE.try_with(f).unwrap_or_default()
}

fn init_panic_hook() {
    PANIC_HOOK_SET.get_or_init(console_error_panic_hook::set_once);
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Avoid double-initialization (can happen during hot-reload edge cases).
    if INITIALIZED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }
    init_panic_hook();
    // Another logger may already be installed by the embedding page.
    console_log::init_with_level(log::Level::Info).ok();
    Ok(())
}

/// Mount on `#blueprint-background` with default options.
#[wasm_bindgen]
pub fn mount() -> Result<(), JsValue> {
    mount_inner(BackgroundConfig::default())
}

/// Mount with a JSON [`BackgroundConfig`]. Invalid JSON mounts nothing.
#[wasm_bindgen]
pub fn mount_with_config(json: &str) -> Result<(), JsValue> {
    let config = BackgroundConfig::from_json(json).map_err(|err| {
        log::error!("{err}");
        JsValue::from(err)
    })?;
    mount_inner(config)
}

fn mount_inner(config: BackgroundConfig) -> Result<(), JsValue> {
    unmount();
    log::set_max_level(config.level_filter());
    with_state(|state| state.borrow_mut().config = config.clone());

    let canvas_id = config.canvas_id.clone();
    match host::mount(config) {
        Ok(renderer) => {
            log::info!("blueprint background mounted on #{canvas_id}");
            with_state(|state| state.borrow_mut().renderer = Some(renderer));
            Ok(())
        }
        Err(err) if err.is_surface_unavailable() => {
            log::warn!("blueprint background inert: {err}");
            Ok(())
        }
        Err(err) => {
            log::error!("blueprint background mount failed: {err}");
            Err(err.into())
        }
    }
}

/// Dispose the active background. No-op when nothing is mounted.
#[wasm_bindgen]
pub fn unmount() {
    let Some(renderer) = with_state(|state| state.borrow_mut().renderer.take()) else {
        return;
    };
    let frames = {
        let mut r = renderer.borrow_mut();
        r.dispose();
        r.frames_drawn()
    };
    log::info!("blueprint background unmounted after {frames} frame(s)");
}

#[wasm_bindgen]
pub fn is_mounted() -> bool {
    with_state(|state| {
        state
            .borrow()
            .renderer
            .as_ref()
            .is_some_and(|r| r.borrow().is_running())
    })
}

#[wasm_bindgen]
pub fn frames_drawn() -> u64 {
    with_state(|state| {
        state
            .borrow()
            .renderer
            .as_ref()
            .map_or(0, |r| r.borrow().frames_drawn())
    })
}

/// Set or clear the dark class on `document.documentElement`.
///
/// The renderer sees the change through its class observer and switches
/// palettes on its next frame.
#[wasm_bindgen]
pub fn set_dark_mode(dark: bool) -> Result<(), JsValue> {
    toggle_root_class(Some(dark)).map(|_| ())
}

/// Flip the dark class. Returns whether it is now set.
#[wasm_bindgen]
pub fn toggle_dark_mode() -> Result<bool, JsValue> {
    toggle_root_class(None)
}

fn toggle_root_class(force: Option<bool>) -> Result<bool, JsValue> {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .ok_or_else(|| JsValue::from(MountError::NoDocument))?;
    let dark_class = with_state(|state| state.borrow().config.dark_class.clone());
    let classes = root.class_list();
    match force {
        Some(force) => classes.toggle_with_force(&dark_class, force),
        None => classes.toggle(&dark_class),
    }
}
