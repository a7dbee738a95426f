use crate::constants::{AMOUNT_ATTR, IDLE_MS_ATTR, WIDTH_ATTR};
use ink_cursor_core::TrailConfig;
use std::time::Duration;

#[inline]
pub fn parse_positive_usize(raw: Option<&str>) -> Option<usize> {
    raw?.trim().parse::<usize>().ok().filter(|v| *v > 0)
}

#[inline]
pub fn parse_positive_f32(raw: Option<&str>) -> Option<f32> {
    raw?.trim()
        .parse::<f32>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
}

/// Build a trail config from the container's data attributes.
///
/// `attr` looks up an attribute by name. Missing attributes keep the default;
/// malformed ones are logged and ignored. If the overrides combine into an
/// invalid config the defaults are used instead.
pub fn trail_config_from_attrs(attr: impl Fn(&str) -> Option<String>) -> TrailConfig {
    let mut config = TrailConfig::default();

    if let Some(raw) = attr(AMOUNT_ATTR) {
        match parse_positive_usize(Some(raw.as_str())) {
            Some(v) => config.amount = v,
            None => log::warn!("[config] ignoring {}={:?}", AMOUNT_ATTR, raw),
        }
    }
    if let Some(raw) = attr(WIDTH_ATTR) {
        match parse_positive_f32(Some(raw.as_str())) {
            Some(v) => config.width = v,
            None => log::warn!("[config] ignoring {}={:?}", WIDTH_ATTR, raw),
        }
    }
    if let Some(raw) = attr(IDLE_MS_ATTR) {
        match parse_positive_usize(Some(raw.as_str())) {
            Some(ms) => config.idle_delay = Duration::from_millis(ms as u64),
            None => log::warn!("[config] ignoring {}={:?}", IDLE_MS_ATTR, raw),
        }
    }

    if let Err(e) = config.validate() {
        log::warn!("[config] {}; falling back to defaults", e);
        return TrailConfig::default();
    }
    config
}
