use crate::config::{ConfigError, TrailConfig};
use crate::hover::{blob_placement, HoverTarget};
use crate::idle::IdleTimer;
use crate::marker::{Marker, MarkerTransform};
use crate::tween::{approach_alpha, ScaleTween};
use glam::Vec2;
use rand::prelude::*;
use smallvec::SmallVec;
use std::time::Duration;

/// One frame of output, one transform per marker index.
pub type Frame = SmallVec<[MarkerTransform; 32]>;

#[derive(Clone, Debug)]
struct HoverSession {
    target: HoverTarget,
    time: f32,
}

/// The ink cursor simulation.
///
/// Owns the marker chain exclusively. The host feeds it pointer and hover
/// notifications and drives two loops: [`tick_trail`](Self::tick_trail) every
/// frame for the lifetime of the cursor, and [`tick_hover`](Self::tick_hover)
/// only between hover enter and leave.
pub struct CursorTrail {
    config: TrailConfig,
    markers: Vec<Marker>,
    pointer: Vec2,
    idle: bool,
    idle_timer: IdleTimer,
    /// Countdown ran out during the previous step; idle starts on the next.
    idle_due: bool,
    hover: Option<HoverSession>,
    leave_tweens: Vec<Option<ScaleTween>>,
    rng: StdRng,
}

impl CursorTrail {
    pub fn new(config: TrailConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let markers = (0..config.amount)
            .map(|i| Marker::new(i, config.base_scale(i), config.width))
            .collect::<Vec<_>>();
        let mut idle_timer = IdleTimer::new(config.idle_delay);
        idle_timer.restart();
        Ok(Self {
            leave_tweens: vec![None; markers.len()],
            markers,
            config,
            pointer: Vec2::ZERO,
            idle: false,
            idle_timer,
            idle_due: false,
            hover: None,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    #[inline]
    pub fn config(&self) -> &TrailConfig {
        &self.config
    }

    #[inline]
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    #[inline]
    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.idle
    }

    #[inline]
    pub fn is_hovering(&self) -> bool {
        self.hover.is_some()
    }

    pub fn hover_target(&self) -> Option<&HoverTarget> {
        self.hover.as_ref().map(|h| &h.target)
    }

    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        self.pointer = Vec2::new(x, y);
        self.idle_timer.restart();
        self.idle_due = false;
        if self.idle {
            log::debug!("[trail] pointer active");
        }
        self.idle = false;
    }

    pub fn on_idle_timeout(&mut self) {
        self.idle = true;
        self.idle_due = false;
        for m in &mut self.markers {
            m.lock(&mut self.rng);
        }
        log::debug!("[trail] idle: locked {} markers", self.markers.len());
    }

    pub fn on_hover_enter(&mut self, target: HoverTarget) {
        if self.hover.is_some() {
            log::debug!("[hover] replacing active target");
        }
        log::debug!(
            "[hover] enter {:?} at ({:.1},{:.1}) size {:.1}x{:.1}",
            target.shape,
            target.center.x,
            target.center.y,
            target.size.x,
            target.size.y
        );
        self.hover = Some(HoverSession { target, time: 0.0 });
        for tween in &mut self.leave_tweens {
            *tween = None;
        }
    }

    pub fn on_hover_leave(&mut self) {
        if self.hover.take().is_none() {
            return;
        }
        let duration = self.config.leave_scale_sec;
        for (m, tween) in self.markers.iter().zip(self.leave_tweens.iter_mut()) {
            *tween = Some(ScaleTween::new(
                m.rendered.scale(),
                Vec2::splat(m.scale()),
                duration,
            ));
        }
        log::debug!("[hover] leave");
    }

    /// Trailing and idle-drift step. Leaves positions untouched while hovering.
    ///
    /// A countdown that runs out during this step switches to idle at the
    /// start of the next one, so the step right after a pointer move always
    /// trails and leaves the simulator active, however long `dt` is.
    pub fn tick_trail(&mut self, dt: Duration) {
        if std::mem::take(&mut self.idle_due) {
            self.on_idle_timeout();
        }
        self.idle_due = self.idle_timer.advance(dt);
        self.advance_leave_tweens(dt.as_secs_f32());
        if self.hover.is_none() {
            self.place_trail();
        }
    }

    fn place_trail(&mut self) {
        let idle = self.idle;
        let exempt_max = self.config.sine_exempt_max();
        let attenuation = self.config.attenuation;
        let angle_speed = self.config.idle_angle_speed;
        let n = self.markers.len();
        let mut target = self.pointer;

        for i in 0..n {
            let next_prev = self.markers[(i + 1) % n].position;
            let m = &mut self.markers[i];
            m.position = target;
            let trails = !idle || i <= exempt_max;
            if !trails {
                m.drift(angle_speed);
            }
            m.place_rendered(m.position);
            if trails {
                target += (next_prev - m.position) * attenuation;
            }
        }
    }

    /// Blob deformation step. A no-op without an active hover target.
    pub fn tick_hover(&mut self, dt: Duration) {
        let Some(session) = self.hover.as_mut() else {
            return;
        };
        let dt_sec = dt.as_secs_f32();
        session.time += dt_sec * self.config.hover_time_rate;
        let target = session.target;
        let time = session.time;

        let n = self.markers.len();
        let width = self.config.width;
        let alpha = approach_alpha(dt_sec, self.config.hover_ease_tau_sec);
        for (i, m) in self.markers.iter_mut().enumerate() {
            let placement = blob_placement(&target, i, n, time, width);
            m.position = placement.position;
            let pos = m.rendered.position().lerp(placement.position, alpha);
            let scale = m.rendered.scale().lerp(placement.scale, alpha);
            m.place_rendered(pos);
            m.set_rendered_scale(scale);
        }
    }

    /// Both loops in order, for hosts with a single frame callback.
    pub fn tick(&mut self, dt: Duration) {
        self.tick_trail(dt);
        self.tick_hover(dt);
    }

    pub fn transforms(&self) -> impl ExactSizeIterator<Item = MarkerTransform> + '_ {
        self.markers.iter().map(|m| m.rendered)
    }

    pub fn frame(&self) -> Frame {
        self.transforms().collect()
    }

    /// Frame flattened to `x, y, scale_x, scale_y` per marker.
    pub fn frame_f32(&self) -> Vec<f32> {
        bytemuck::cast_slice::<MarkerTransform, f32>(&self.frame()).to_vec()
    }

    fn advance_leave_tweens(&mut self, dt_sec: f32) {
        for (m, slot) in self.markers.iter_mut().zip(self.leave_tweens.iter_mut()) {
            if let Some(tween) = slot {
                m.set_rendered_scale(tween.advance(dt_sec));
                if tween.is_done() {
                    *slot = None;
                }
            }
        }
    }
}
