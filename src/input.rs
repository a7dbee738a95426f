use glam::Vec2;
use ink_cursor_core::{BlobShape, Bounds, HoverTarget};
use web_sys as web;

#[inline]
pub fn mouse_client_px(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

#[inline]
pub fn first_touch_px(ev: &web::TouchEvent) -> Option<Vec2> {
    let touch = ev.touches().get(0)?;
    Some(Vec2::new(touch.client_x() as f32, touch.client_y() as f32))
}

#[inline]
pub fn rect_bounds(rect: &web::DomRect) -> Bounds {
    Bounds {
        left: rect.left() as f32,
        top: rect.top() as f32,
        width: rect.width() as f32,
        height: rect.height() as f32,
    }
}

/// Hover target for an element: its client rect plus the padding of the
/// shape named in `shape_attr`.
#[inline]
pub fn hover_target(rect: &web::DomRect, shape_attr: Option<&str>) -> HoverTarget {
    HoverTarget::from_bounds(rect_bounds(rect), BlobShape::from_attr(shape_attr))
}

/// Whether a viewport this wide gets the ink cursor.
#[inline]
pub fn viewport_qualifies(inner_width_px: f64, breakpoint_px: f64) -> bool {
    inner_width_px.is_finite() && inner_width_px >= breakpoint_px
}
