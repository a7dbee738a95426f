// Host-side tests for the trailing and idle-drift loop.

use glam::Vec2;
use ink_cursor_core::*;
use std::time::Duration;

const FRAME: Duration = Duration::from_micros(16_667);

fn make_trail() -> CursorTrail {
    CursorTrail::new(TrailConfig::default(), 42).unwrap()
}

#[test]
fn base_scales_never_increase_along_the_chain() {
    let trail = make_trail();
    let markers = trail.markers();
    assert_eq!(markers.len(), TrailConfig::default().amount);
    for pair in markers.windows(2) {
        assert!(pair[1].scale() <= pair[0].scale());
    }
    assert!((markers[0].scale() - 1.0).abs() < 1e-6);
    assert!(markers.last().unwrap().scale() > 0.0);
}

#[test]
fn first_follower_keeps_attenuated_gap_to_leader() {
    let mut trail = make_trail();
    trail.on_pointer_move(100.0, 100.0);
    trail.tick_trail(FRAME);

    let m = trail.markers();
    assert_eq!(m[0].position, Vec2::new(100.0, 100.0));
    // leader + (follower_prev - leader) * 0.35 = 100 - 35
    assert!((m[1].position - Vec2::new(65.0, 65.0)).length() < 1e-4);
    // chaining continues from the follower: 65 - 65 * 0.35
    assert!((m[2].position - Vec2::splat(42.25)).length() < 1e-3);
}

#[test]
fn markers_close_on_a_still_pointer_monotonically() {
    let mut trail = make_trail();
    let target = Vec2::new(100.0, 100.0);
    let mut prev: Vec<f32> = trail
        .markers()
        .iter()
        .map(|m| m.position.distance(target))
        .collect();

    for _ in 0..120 {
        trail.on_pointer_move(target.x, target.y);
        trail.tick_trail(FRAME);
        for (m, d_prev) in trail.markers().iter().zip(prev.iter_mut()) {
            let d = m.position.distance(target);
            assert!(d <= *d_prev + 1e-3, "marker {} moved away: {} -> {}", m.index, d_prev, d);
            *d_prev = d;
        }
    }
    assert!(prev.iter().all(|d| *d < 1.0), "chain did not converge: {prev:?}");
}

#[test]
fn rendered_transform_follows_position_when_not_hovering() {
    let mut trail = make_trail();
    trail.on_pointer_move(30.0, 40.0);
    trail.tick_trail(FRAME);
    for m in trail.markers() {
        assert_eq!(m.rendered.position(), m.position);
        assert_eq!(m.rendered.scale(), Vec2::splat(m.scale()));
    }
}

#[test]
fn idle_timeout_then_move_exits_idle() {
    let mut trail = make_trail();
    trail.on_idle_timeout();
    assert!(trail.is_idle());
    trail.on_pointer_move(10.0, 10.0);
    assert!(!trail.is_idle());
    trail.tick_trail(FRAME);
    assert!(!trail.is_idle());
}

#[test]
fn idle_fires_after_delay_and_move_debounces_it() {
    let mut trail = make_trail();
    trail.on_pointer_move(10.0, 10.0);
    trail.tick_trail(Duration::from_millis(100));
    assert!(!trail.is_idle());

    // activity restarts the full countdown
    trail.on_pointer_move(12.0, 12.0);
    trail.tick_trail(Duration::from_millis(100));
    assert!(!trail.is_idle());
    trail.tick_trail(Duration::from_millis(40));
    assert!(!trail.is_idle());
    // the countdown runs out during this step; idle begins on the next one
    trail.tick_trail(Duration::from_millis(20));
    assert!(!trail.is_idle());
    trail.tick_trail(FRAME);
    assert!(trail.is_idle());
}

#[test]
fn move_after_idle_trails_even_when_frame_exceeds_idle_delay() {
    let config = TrailConfig {
        idle_delay: Duration::from_millis(10),
        ..TrailConfig::default()
    };
    let mut trail = CursorTrail::new(config, 7).unwrap();
    trail.on_idle_timeout();
    trail.on_pointer_move(50.0, 50.0);
    trail.tick_trail(FRAME);

    assert!(!trail.is_idle());
    assert_eq!(trail.markers()[0].position, Vec2::new(50.0, 50.0));
    // every marker trailed, none drifted around a lock
    assert!((trail.markers()[1].position - Vec2::new(32.5, 32.5)).length() < 1e-4);

    // without further movement the next step goes idle
    trail.tick_trail(FRAME);
    assert!(trail.is_idle());
}

#[test]
fn idle_drift_stays_within_range_of_lock() {
    let mut trail = make_trail();
    for _ in 0..10 {
        trail.on_pointer_move(200.0, 150.0);
        trail.tick_trail(FRAME);
    }
    trail.on_idle_timeout();
    trail.tick_trail(FRAME);
    trail.tick_trail(FRAME);

    let exempt = trail.config().sine_exempt_max();
    for m in trail.markers().iter().filter(|m| m.index > exempt) {
        let d = (m.position - m.locked).abs();
        assert!(d.x <= m.range() + 1e-4, "marker {} x drift {}", m.index, d.x);
        assert!(d.y <= m.range() + 1e-4, "marker {} y drift {}", m.index, d.y);
    }
}

#[test]
fn sine_exempt_markers_keep_trailing_while_idle() {
    let mut trail = make_trail();
    trail.on_pointer_move(80.0, 80.0);
    trail.tick_trail(FRAME);
    trail.on_idle_timeout();
    trail.tick_trail(FRAME);
    assert_eq!(trail.markers()[0].position, Vec2::new(80.0, 80.0));
}

#[test]
fn idle_phases_are_seeded_per_simulator() {
    let mut a = CursorTrail::new(TrailConfig::default(), 7).unwrap();
    let mut b = CursorTrail::new(TrailConfig::default(), 7).unwrap();
    a.on_idle_timeout();
    b.on_idle_timeout();
    for (ma, mb) in a.markers().iter().zip(b.markers()) {
        assert_eq!(ma.phase, mb.phase);
        assert!(ma.phase.x >= 0.0 && ma.phase.x < std::f32::consts::TAU);
        assert!(ma.phase.y >= 0.0 && ma.phase.y < std::f32::consts::TAU);
    }
}

#[test]
fn frame_exposes_one_transform_per_marker() {
    let mut trail = make_trail();
    trail.on_pointer_move(5.0, 6.0);
    trail.tick(FRAME);
    let frame = trail.frame();
    assert_eq!(frame.len(), trail.markers().len());
    let flat = trail.frame_f32();
    assert_eq!(flat.len(), frame.len() * 4);
    assert_eq!(&flat[..4], &[frame[0].x, frame[0].y, frame[0].scale_x, frame[0].scale_y]);
}
