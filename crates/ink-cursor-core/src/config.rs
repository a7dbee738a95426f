//! Runtime configuration for a [`CursorTrail`](crate::CursorTrail).
//!
//! Defaults come from `constants.rs`; hosts may override individual fields
//! (the web front end reads a few from data attributes) and must call
//! [`TrailConfig::validate`] or go through `CursorTrail::new`, which does.

use crate::constants::*;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("trail needs at least one marker")]
    NoMarkers,
    #[error("marker width must be positive, got {0}")]
    NonPositiveWidth(f32),
    #[error("attenuation must be in (0, 1], got {0}")]
    AttenuationOutOfRange(f32),
    #[error("scale step must not be negative, got {0}")]
    NegativeScaleStep(f32),
    #[error("scale step {step} leaves marker {index} with non-positive scale")]
    NonPositiveTailScale { step: f32, index: usize },
    #[error("idle delay must be non-zero")]
    ZeroIdleDelay,
    #[error("sine-exempt fraction must be in [0, 1], got {0}")]
    SineExemptFractionOutOfRange(f32),
    #[error("{field} must be finite and not negative, got {value}")]
    InvalidRate { field: &'static str, value: f32 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct TrailConfig {
    pub amount: usize,
    pub width: f32,
    pub scale_step: f32,
    pub sine_exempt_fraction: f32,
    pub attenuation: f32,
    pub idle_delay: Duration,
    pub idle_angle_speed: f32,
    pub hover_time_rate: f32,
    pub hover_ease_tau_sec: f32,
    pub leave_scale_sec: f32,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            amount: MARKER_COUNT,
            width: MARKER_WIDTH,
            scale_step: SCALE_STEP,
            sine_exempt_fraction: SINE_EXEMPT_FRACTION,
            attenuation: TRAIL_ATTENUATION,
            idle_delay: Duration::from_millis(IDLE_DELAY_MS),
            idle_angle_speed: IDLE_ANGLE_SPEED,
            hover_time_rate: HOVER_TIME_RATE,
            hover_ease_tau_sec: HOVER_EASE_TAU_SEC,
            leave_scale_sec: LEAVE_SCALE_SEC,
        }
    }
}

impl TrailConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.amount == 0 {
            return Err(ConfigError::NoMarkers);
        }
        if !(self.width > 0.0) {
            return Err(ConfigError::NonPositiveWidth(self.width));
        }
        if !(self.attenuation > 0.0 && self.attenuation <= 1.0) {
            return Err(ConfigError::AttenuationOutOfRange(self.attenuation));
        }
        if !(self.scale_step >= 0.0) {
            return Err(ConfigError::NegativeScaleStep(self.scale_step));
        }
        let last = self.amount - 1;
        if self.base_scale(last) <= 0.0 {
            return Err(ConfigError::NonPositiveTailScale {
                step: self.scale_step,
                index: last,
            });
        }
        if self.idle_delay.is_zero() {
            return Err(ConfigError::ZeroIdleDelay);
        }
        if !(0.0..=1.0).contains(&self.sine_exempt_fraction) {
            return Err(ConfigError::SineExemptFractionOutOfRange(
                self.sine_exempt_fraction,
            ));
        }
        for (field, value) in [
            ("idle_angle_speed", self.idle_angle_speed),
            ("hover_time_rate", self.hover_time_rate),
            ("hover_ease_tau_sec", self.hover_ease_tau_sec),
            ("leave_scale_sec", self.leave_scale_sec),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::InvalidRate { field, value });
            }
        }
        Ok(())
    }

    /// Base scale of the marker at `index`.
    #[inline]
    pub fn base_scale(&self, index: usize) -> f32 {
        1.0 - self.scale_step * index as f32
    }

    /// Markers with an index up to and including this value never drift.
    #[inline]
    pub fn sine_exempt_max(&self) -> usize {
        (self.amount as f32 * self.sine_exempt_fraction).floor() as usize
    }
}
