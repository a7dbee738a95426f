// Host-side tests for the hover blob deformation loop.

use glam::Vec2;
use ink_cursor_core::hover::{blob_placement, core_count};
use ink_cursor_core::*;
use std::time::Duration;

const FRAME: Duration = Duration::from_micros(16_667);

fn make_trail() -> CursorTrail {
    CursorTrail::new(TrailConfig::default(), 42).unwrap()
}

fn rect_target() -> (Bounds, HoverTarget) {
    // 100x40 element centered on (200, 200)
    let bounds = Bounds {
        left: 150.0,
        top: 180.0,
        width: 100.0,
        height: 40.0,
    };
    (bounds, HoverTarget::from_bounds(bounds, BlobShape::Rectangle))
}

fn settle(trail: &mut CursorTrail, frames: usize) {
    for _ in 0..frames {
        trail.tick(FRAME);
    }
}

#[test]
fn target_padding_depends_on_shape() {
    let (bounds, rect) = rect_target();
    assert_eq!(rect.center, Vec2::new(200.0, 200.0));
    assert_eq!(rect.size, Vec2::new(108.0, 46.0));
    let pill = HoverTarget::from_bounds(bounds, BlobShape::Pill);
    assert_eq!(pill.size, Vec2::new(120.0, 56.0));
}

#[test]
fn enter_then_leave_without_time_keeps_base_scales() {
    let mut trail = make_trail();
    trail.on_pointer_move(10.0, 10.0);
    trail.tick(FRAME);
    let (_, target) = rect_target();
    trail.on_hover_enter(target);
    trail.on_hover_leave();
    assert!(!trail.is_hovering());
    for m in trail.markers() {
        assert_eq!(m.rendered.scale(), Vec2::splat(m.scale()));
    }
    trail.tick(FRAME);
    for m in trail.markers() {
        assert_eq!(m.rendered.scale(), Vec2::splat(m.scale()));
    }
}

#[test]
fn leave_eases_scales_back_to_base() {
    let mut trail = make_trail();
    let (_, target) = rect_target();
    trail.on_hover_enter(target);
    settle(&mut trail, 30);
    assert!(trail
        .markers()
        .iter()
        .any(|m| (m.rendered.scale_x - m.scale()).abs() > 0.05));

    trail.on_hover_leave();
    trail.tick(Duration::from_millis(50));
    // partway: moving toward base but not there yet for at least one marker
    assert!(trail
        .markers()
        .iter()
        .any(|m| m.rendered.scale() != Vec2::splat(m.scale())));

    settle(&mut trail, 20);
    for m in trail.markers() {
        assert_eq!(m.rendered.scale(), Vec2::splat(m.scale()));
        assert!(m.scale() <= 1.0);
    }
}

#[test]
fn rectangle_edge_markers_stay_inside_padded_box() {
    let mut trail = make_trail();
    let (bounds, target) = rect_target();
    trail.on_hover_enter(target);
    settle(&mut trail, 240);

    let pad = Vec2::from_array(ink_cursor_core::constants::RECT_PADDING);
    let half = Vec2::new(bounds.width, bounds.height) / 2.0 + pad;
    let first_edge = core_count(BlobShape::Rectangle, trail.markers().len());
    for _ in 0..120 {
        trail.tick(FRAME);
        for m in &trail.markers()[first_edge..] {
            let d = (m.rendered.position() - bounds.center()).abs();
            assert!(d.x <= half.x && d.y <= half.y, "marker {} at {:?}", m.index, d);
        }
    }
}

#[test]
fn rectangle_edge_markers_trace_the_outline() {
    let (bounds, target) = rect_target();
    let amount = 20;
    let first_edge = core_count(BlobShape::Rectangle, amount);
    let half = target.half_extents();
    for i in first_edge..amount {
        let p = blob_placement(&target, i, amount, 0.7, 26.0).position - bounds.center();
        // on the rounded outline, give or take the wobble and corner rounding
        let to_edge_x = half.x - p.x.abs();
        let to_edge_y = half.y - p.y.abs();
        assert!(to_edge_x.min(to_edge_y) <= 2.0 + 8.0, "marker {i} inside outline: {p:?}");
    }
}

#[test]
fn pill_core_markers_cluster_at_center() {
    let mut trail = make_trail();
    let bounds = Bounds {
        left: 0.0,
        top: 0.0,
        width: 160.0,
        height: 48.0,
    };
    trail.on_hover_enter(HoverTarget::from_bounds(bounds, BlobShape::Pill));
    settle(&mut trail, 240);
    let cores = core_count(BlobShape::Pill, trail.markers().len());
    assert!(cores > 0);
    for m in &trail.markers()[..cores] {
        assert!(
            m.rendered.position().distance(bounds.center()) <= 8.0,
            "core marker {} strayed to {:?}",
            m.index,
            m.rendered.position()
        );
    }
}

#[test]
fn hover_motion_is_continuous_frame_to_frame() {
    for shape in [BlobShape::Pill, BlobShape::Rectangle] {
        let mut trail = make_trail();
        let (bounds, _) = rect_target();
        trail.on_hover_enter(HoverTarget::from_bounds(bounds, shape));
        settle(&mut trail, 120);
        let mut prev = trail.frame();
        for _ in 0..600 {
            trail.tick(FRAME);
            let cur = trail.frame();
            for (a, b) in prev.iter().zip(cur.iter()) {
                assert!(a.position().distance(b.position()) < 2.0, "{shape:?} jump");
                assert!((a.scale() - b.scale()).abs().max_element() < 0.05, "{shape:?} scale jump");
            }
            prev = cur;
        }
    }
}

#[test]
fn trail_tick_leaves_positions_alone_while_hovering() {
    let mut trail = make_trail();
    let (_, target) = rect_target();
    trail.on_hover_enter(target);
    settle(&mut trail, 10);
    let before = trail.frame();
    trail.on_pointer_move(900.0, 900.0);
    trail.tick_trail(FRAME);
    assert_eq!(before, trail.frame());
}

#[test]
fn hover_tick_without_target_is_a_no_op() {
    let mut trail = make_trail();
    trail.on_pointer_move(40.0, 40.0);
    trail.tick_trail(FRAME);
    let before = trail.frame();
    trail.tick_hover(FRAME);
    assert_eq!(before, trail.frame());
}

#[test]
fn new_enter_replaces_previous_target() {
    let mut trail = make_trail();
    let (_, first) = rect_target();
    let second = HoverTarget::from_bounds(
        Bounds {
            left: 400.0,
            top: 400.0,
            width: 60.0,
            height: 20.0,
        },
        BlobShape::Pill,
    );
    trail.on_hover_enter(first);
    settle(&mut trail, 5);
    trail.on_hover_enter(second);
    assert_eq!(trail.hover_target(), Some(&second));
    trail.on_hover_leave();
    assert_eq!(trail.hover_target(), None);
}

#[test]
fn trailing_resumes_after_leave() {
    let mut trail = make_trail();
    let (_, target) = rect_target();
    trail.on_hover_enter(target);
    settle(&mut trail, 10);
    trail.on_hover_leave();
    trail.on_pointer_move(5.0, 5.0);
    trail.tick(FRAME);
    assert_eq!(trail.markers()[0].rendered.position(), Vec2::new(5.0, 5.0));
}
