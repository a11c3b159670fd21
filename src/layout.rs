// Pure helpers for canvas sizing and DOM flag parsing.
use crate::constants::{BACKDROP_DISABLED_VALUE, BACKDROP_ENABLED_VALUE, MIN_BACKING_PX};

/// Backing-store size for a canvas of `css_w` x `css_h` CSS pixels rendered at
/// `pixel_ratio`, never smaller than one pixel per side.
#[inline]
pub fn backing_size(css_w: f64, css_h: f64, pixel_ratio: f64) -> (u32, u32) {
    let ratio = if pixel_ratio > 0.0 { pixel_ratio } else { 1.0 };
    let w = (css_w.max(0.0) * ratio) as u32;
    let h = (css_h.max(0.0) * ratio) as u32;
    (w.max(MIN_BACKING_PX), h.max(MIN_BACKING_PX))
}

/// Effective ratio: the device ratio clamped to `cap`, defaulting to 1.
#[inline]
pub fn capped_ratio(device_ratio: f64, cap: f64) -> f64 {
    if device_ratio > 0.0 {
        device_ratio.min(cap)
    } else {
        1.0_f64.min(cap)
    }
}

/// Whether a `data-bg-disabled` value switches the backdrop off.
#[inline]
pub fn is_disabled_flag(value: Option<&str>) -> bool {
    value == Some(BACKDROP_DISABLED_VALUE)
}

/// Body flag value written when page script turns the backdrop on or off.
#[inline]
pub fn disabled_flag_value(enabled: bool) -> &'static str {
    if enabled {
        BACKDROP_ENABLED_VALUE
    } else {
        BACKDROP_DISABLED_VALUE
    }
}
