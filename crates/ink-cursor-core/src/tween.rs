use glam::Vec2;

/// Exponential approach factor for a step of `dt_sec` with time constant `tau_sec`.
#[inline]
pub fn approach_alpha(dt_sec: f32, tau_sec: f32) -> f32 {
    if tau_sec <= 0.0 {
        return 1.0;
    }
    1.0 - (-dt_sec / tau_sec).exp()
}

#[inline]
pub fn ease_out_quad(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Two-axis scale animation from a captured value to a fixed end value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleTween {
    from: Vec2,
    to: Vec2,
    elapsed_sec: f32,
    duration_sec: f32,
}

impl ScaleTween {
    pub fn new(from: Vec2, to: Vec2, duration_sec: f32) -> Self {
        Self {
            from,
            to,
            elapsed_sec: 0.0,
            duration_sec,
        }
    }

    pub fn advance(&mut self, dt_sec: f32) -> Vec2 {
        self.elapsed_sec += dt_sec;
        self.value()
    }

    pub fn value(&self) -> Vec2 {
        if self.is_done() {
            return self.to;
        }
        let k = ease_out_quad(self.elapsed_sec / self.duration_sec);
        self.from.lerp(self.to, k)
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.duration_sec <= 0.0 || self.elapsed_sec >= self.duration_sec
    }
}
