use crate::dom;
use crate::input;
use ink_cursor_core::CursorTrail;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Feed window mouse and touch movement into the trail.
pub fn wire_pointer_input(window: &web::Window, trail: Rc<RefCell<CursorTrail>>) {
    let trail_mouse = trail.clone();
    dom::add_listener(window, "mousemove", move |ev: web::Event| {
        if let Some(ev) = ev.dyn_ref::<web::MouseEvent>() {
            let p = input::mouse_client_px(ev);
            trail_mouse.borrow_mut().on_pointer_move(p.x, p.y);
        }
    });

    dom::add_listener(window, "touchmove", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::TouchEvent>() else {
            return;
        };
        if let Some(p) = input::first_touch_px(ev) {
            trail.borrow_mut().on_pointer_move(p.x, p.y);
        }
    });
}
