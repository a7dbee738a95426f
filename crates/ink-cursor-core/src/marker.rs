use crate::constants::IDLE_RANGE_MARGIN;
use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

/// Transform handed to the host renderer for one marker.
///
/// `#[repr(C)]` so a frame can be viewed as a flat `[f32]` of
/// `x, y, scale_x, scale_y` quadruples.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MarkerTransform {
    pub x: f32,
    pub y: f32,
    pub scale_x: f32,
    pub scale_y: f32,
}

impl MarkerTransform {
    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn scale(&self) -> Vec2 {
        Vec2::new(self.scale_x, self.scale_y)
    }
}

#[derive(Clone, Debug)]
pub struct Marker {
    pub index: usize,
    pub position: Vec2,
    scale: f32,
    range: f32,
    pub locked: Vec2,
    pub phase: Vec2,
    pub rendered: MarkerTransform,
}

impl Marker {
    pub fn new(index: usize, scale: f32, width: f32) -> Self {
        Self {
            index,
            position: Vec2::ZERO,
            scale,
            range: width / 2.0 - width / 2.0 * scale + IDLE_RANGE_MARGIN,
            locked: Vec2::ZERO,
            phase: Vec2::ZERO,
            rendered: MarkerTransform {
                x: 0.0,
                y: 0.0,
                scale_x: scale,
                scale_y: scale,
            },
        }
    }

    /// Base scale; fixed at construction.
    #[inline]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Idle drift amplitude in px.
    #[inline]
    pub fn range(&self) -> f32 {
        self.range
    }

    pub fn lock<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.locked = self.position;
        self.phase = Vec2::new(rng.gen_range(0.0..TAU), rng.gen_range(0.0..TAU));
    }

    /// One idle step: advance both phases and orbit the locked position.
    pub fn drift(&mut self, angle_speed: f32) {
        self.phase.x = (self.phase.x + angle_speed) % TAU;
        self.phase.y = (self.phase.y + angle_speed) % TAU;
        let wave = Vec2::new(self.phase.x.sin(), self.phase.y.sin());
        self.position = self.locked + wave * self.range;
    }

    #[inline]
    pub fn place_rendered(&mut self, pos: Vec2) {
        self.rendered.x = pos.x;
        self.rendered.y = pos.y;
    }

    #[inline]
    pub fn set_rendered_scale(&mut self, scale: Vec2) {
        self.rendered.scale_x = scale.x;
        self.rendered.scale_y = scale.y;
    }
}
