#![cfg(target_arch = "wasm32")]
use ink_cursor_core::CursorTrail;
use install::InstallOnce;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod install;
mod settings;
mod style;

use constants::MOBILE_BREAKPOINT_PX;

static INSTALLED: InstallOnce = InstallOnce::new();

thread_local! {
    static ACTIVE_TRAIL: RefCell<Option<Rc<RefCell<CursorTrail>>>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("ink-cursor starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Latest frame as `x, y, scale_x, scale_y` per marker; empty until installed.
#[wasm_bindgen(js_name = inkCursorFrame)]
pub fn ink_cursor_frame() -> js_sys::Float32Array {
    ACTIVE_TRAIL.with(|slot| match slot.borrow().as_ref() {
        Some(trail) => js_sys::Float32Array::from(trail.borrow().frame_f32().as_slice()),
        None => js_sys::Float32Array::new_with_length(0),
    })
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;

    if viewport_qualifies(&window) {
        match install_once() {
            Ok(()) => return Ok(()),
            Err(e) => log::error!("install error: {:?}; retrying on resize", e),
        }
    } else {
        // Small or not yet laid out: keep the native cursor and retry on resize
        log::info!("[init] viewport below {}px; ink cursor deferred", MOBILE_BREAKPOINT_PX);
    }
    dom::add_listener(&window, "resize", move |_| {
        let Some(w) = web::window() else {
            return;
        };
        if INSTALLED.is_done() || !viewport_qualifies(&w) {
            return;
        }
        if let Err(e) = install_once() {
            log::error!("install error: {:?}", e);
        }
    });
    Ok(())
}

fn viewport_qualifies(window: &web::Window) -> bool {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    input::viewport_qualifies(width, MOBILE_BREAKPOINT_PX)
}

fn install_once() -> anyhow::Result<()> {
    if !INSTALLED.run(install)? {
        log::warn!("[init] ink cursor already installed; ignoring");
    }
    Ok(())
}

fn install() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    dom::inject_goo_filter(&document)?;
    let container = dom::ensure_container(&document)?;
    let config = settings::trail_config_from_attrs(|name| container.get_attribute(name));
    let markers = dom::populate_markers(&document, &container, config.amount, config.width)?;
    dom::hide_native_cursor(&document);

    log::info!(
        "[init] trail: {} markers, width {:.0}px, idle after {:?}",
        config.amount,
        config.width,
        config.idle_delay
    );
    let trail = Rc::new(RefCell::new(CursorTrail::new(config, rand::random())?));
    let markers = Rc::new(markers);
    ACTIVE_TRAIL.with(|slot| *slot.borrow_mut() = Some(trail.clone()));

    events::wire_pointer_input(&window, trail.clone());

    let hover_loop = frame::HoverLoop::new(trail.clone(), markers.clone());
    let wired = events::wire_hover_targets(
        &document,
        &events::HoverWiring {
            trail: trail.clone(),
            hover_loop,
        },
    );
    log::info!("[init] hover blob wired on {} elements", wired);

    frame::start_loop(Rc::new(RefCell::new(frame::FrameContext {
        trail,
        markers,
        last_instant: Instant::now(),
    })));
    Ok(())
}
