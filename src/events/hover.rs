use crate::constants::{BLOB_SHAPE_ATTR, BLOB_TARGET_ATTR, HOVER_SELECTOR, NO_BLOB_CLASS};
use crate::dom;
use crate::frame::HoverLoop;
use crate::input;
use ink_cursor_core::CursorTrail;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
pub struct HoverWiring {
    pub trail: Rc<RefCell<CursorTrail>>,
    pub hover_loop: Rc<HoverLoop>,
}

impl HoverWiring {
    fn enter(&self, el: &web::Element) {
        let rect = el.get_bounding_client_rect();
        let shape = el.get_attribute(BLOB_SHAPE_ATTR);
        let target = input::hover_target(&rect, shape.as_deref());
        self.trail.borrow_mut().on_hover_enter(target);
        self.hover_loop.start();
    }

    fn leave(&self) {
        self.hover_loop.cancel();
        self.trail.borrow_mut().on_hover_leave();
    }
}

/// Register hover enter/leave on interactive elements and blob triggers.
///
/// Returns the number of elements wired.
pub fn wire_hover_targets(document: &web::Document, w: &HoverWiring) -> usize {
    let mut wired = 0;

    for el in dom::query_elements(document, HOVER_SELECTOR) {
        if el.class_list().contains(NO_BLOB_CLASS) {
            continue;
        }
        let w_enter = w.clone();
        let el_enter = el.clone();
        dom::add_listener(&el, "mouseenter", move |_| w_enter.enter(&el_enter));
        let w_leave = w.clone();
        dom::add_listener(&el, "mouseleave", move |_| w_leave.leave());
        wired += 1;
    }

    // Hovering a trigger morphs the blob around one of its descendants
    let trigger_selector = format!("[{}]", BLOB_TARGET_ATTR);
    for el in dom::query_elements(document, &trigger_selector) {
        let Some(selector) = el.get_attribute(BLOB_TARGET_ATTR).filter(|s| !s.is_empty()) else {
            continue;
        };
        let w_enter = w.clone();
        let el_enter = el.clone();
        dom::add_listener(&el, "mouseenter", move |_| {
            match el_enter.query_selector(&selector) {
                Ok(Some(target)) => w_enter.enter(&target),
                _ => log::debug!("[hover] no {:?} under trigger; skipping", selector),
            }
        });
        let w_leave = w.clone();
        dom::add_listener(&el, "mouseleave", move |_| w_leave.leave());
        wired += 1;
    }

    wired
}
