use crate::constants::MAX_FRAME_DT_SEC;
use crate::dom;
use ink_cursor_core::CursorTrail;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

#[inline]
fn clamped_dt(last: Instant, now: Instant) -> Duration {
    (now - last).min(Duration::from_secs_f32(MAX_FRAME_DT_SEC))
}

fn request_frame(tick: &TickSlot) -> Option<i32> {
    let w = web::window()?;
    let slot = tick.borrow();
    let cb = slot.as_ref()?;
    w.request_animation_frame(cb.as_ref().unchecked_ref()).ok()
}

/// State for the trailing loop, which runs every frame for the page lifetime.
pub struct FrameContext {
    pub trail: Rc<RefCell<CursorTrail>>,
    pub markers: Rc<Vec<web::HtmlElement>>,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = clamped_dt(self.last_instant, now);
        self.last_instant = now;

        let mut trail = self.trail.borrow_mut();
        trail.tick_trail(dt);
        // the hover loop owns the DOM while a target is active
        if !trail.is_hovering() {
            dom::apply_frame(&self.markers, &trail.frame());
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: TickSlot = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        _ = request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    if request_frame(&tick).is_none() {
        log::error!("[frame] requestAnimationFrame unavailable; trail will not animate");
    }
}

/// Blob deformation loop, alive only between hover enter and leave.
///
/// `start` cancels any in-flight frame before scheduling, so entering a new
/// target never leaves two chains running; `cancel` stops the chain before
/// control returns to the trailing loop.
pub struct HoverLoop {
    raf_id: Rc<Cell<Option<i32>>>,
    last_instant: Rc<Cell<Instant>>,
    tick: TickSlot,
}

impl HoverLoop {
    pub fn new(trail: Rc<RefCell<CursorTrail>>, markers: Rc<Vec<web::HtmlElement>>) -> Rc<Self> {
        let raf_id = Rc::new(Cell::new(None));
        let last_instant = Rc::new(Cell::new(Instant::now()));
        let tick: TickSlot = Rc::new(RefCell::new(None));

        let raf_id_tick = raf_id.clone();
        let last_tick = last_instant.clone();
        let tick_clone = tick.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            raf_id_tick.set(None);
            let now = Instant::now();
            let dt = clamped_dt(last_tick.get(), now);
            last_tick.set(now);

            let hovering = {
                let mut trail = trail.borrow_mut();
                trail.tick_hover(dt);
                if trail.is_hovering() {
                    dom::apply_frame(&markers, &trail.frame());
                }
                trail.is_hovering()
            };
            if hovering {
                raf_id_tick.set(request_frame(&tick_clone));
            }
        }) as Box<dyn FnMut()>));

        Rc::new(Self {
            raf_id,
            last_instant,
            tick,
        })
    }

    pub fn start(&self) {
        self.cancel();
        self.last_instant.set(Instant::now());
        self.raf_id.set(request_frame(&self.tick));
    }

    pub fn cancel(&self) {
        if let Some(id) = self.raf_id.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
    }
}
