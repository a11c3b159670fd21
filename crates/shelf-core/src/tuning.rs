//! Viewport- and preference-driven tuning for the bookshelf scene.
//!
//! A `Tuning` is recomputed from scratch on every resize and replaces the
//! previous value wholesale. The reduced-motion preference wins over the
//! viewport band for spawn cadence and gravity.

use crate::constants::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewportBand {
    Narrow,
    Medium,
    Wide,
}

impl ViewportBand {
    /// Classify a CSS pixel width.
    pub fn classify(width: f32) -> Self {
        if width < NARROW_MAX_WIDTH {
            ViewportBand::Narrow
        } else if width < MEDIUM_MAX_WIDTH {
            ViewportBand::Medium
        } else {
            ViewportBand::Wide
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MotionPreference {
    #[default]
    Full,
    Reduced,
}

impl MotionPreference {
    #[inline]
    pub fn from_reduced_flag(reduced: bool) -> Self {
        if reduced {
            MotionPreference::Reduced
        } else {
            MotionPreference::Full
        }
    }
}

/// Canvas size in CSS pixels plus the device pixel ratio reported by the page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub device_pixel_ratio: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32, device_pixel_ratio: f32) -> Self {
        Self {
            width,
            height,
            device_pixel_ratio,
        }
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.width.max(1.0) / self.height.max(1.0)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 720.0, 1.0)
    }
}

/// Camera placement for a viewport band: eye height and distance from the cabinet.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraFraming {
    pub height: f32,
    pub distance: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tuning {
    pub band: ViewportBand,
    pub camera: CameraFraming,
    /// Effective render pixel ratio (device ratio clamped to the band's cap).
    pub pixel_ratio: f32,
    /// Frames between spawn attempts.
    pub spawn_interval: u32,
    /// Per-frame velocity increment for falling books (negative).
    pub gravity: f32,
    pub visible_candles: usize,
}

impl Default for Tuning {
    fn default() -> Self {
        Self::resolve(&Viewport::default(), MotionPreference::Full)
    }
}

impl Tuning {
    pub fn resolve(viewport: &Viewport, motion: MotionPreference) -> Self {
        let band = ViewportBand::classify(viewport.width);
        let camera = match band {
            ViewportBand::Narrow => CameraFraming {
                height: 1.9,
                distance: 8.6,
            },
            ViewportBand::Medium => CameraFraming {
                height: 2.2,
                distance: 9.0,
            },
            ViewportBand::Wide => CameraFraming {
                height: 2.6,
                distance: 9.5,
            },
        };
        let pixel_cap = match band {
            ViewportBand::Narrow => 1.0,
            _ => 2.0,
        };
        let dpr = if viewport.device_pixel_ratio > 0.0 {
            viewport.device_pixel_ratio
        } else {
            1.0
        };
        let (spawn_interval, gravity_scale) = match (motion, band) {
            (MotionPreference::Reduced, _) => ((SPAWN_INTERVAL_FRAMES * 3).max(140), 0.6),
            (MotionPreference::Full, ViewportBand::Narrow) => {
                ((SPAWN_INTERVAL_FRAMES * 9 / 5).max(100), 0.8)
            }
            (MotionPreference::Full, _) => (SPAWN_INTERVAL_FRAMES, 1.0),
        };
        Self {
            band,
            camera,
            pixel_ratio: dpr.min(pixel_cap),
            spawn_interval,
            gravity: GRAVITY * gravity_scale,
            visible_candles: visible_candles(band, CANDLE_COUNT),
        }
    }

    #[inline]
    pub fn gravity_scale(&self) -> f32 {
        self.gravity / GRAVITY
    }

    /// Spawn attempts per frame.
    #[inline]
    pub fn spawn_rate(&self) -> f32 {
        1.0 / self.spawn_interval.max(1) as f32
    }
}

/// How many of `total` candles stay visible in `band`.
pub fn visible_candles(band: ViewportBand, total: usize) -> usize {
    let wanted = match band {
        ViewportBand::Narrow => (total / 6).max(4),
        ViewportBand::Medium => (total / 3).max(8),
        ViewportBand::Wide => total,
    };
    wanted.min(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full(width: f32, height: f32, ratio: f32) -> Tuning {
        let viewport = Viewport::new(width, height, ratio);
        Tuning::resolve(&viewport, MotionPreference::Full)
    }

    fn reduced(width: f32, height: f32, ratio: f32) -> Tuning {
        let viewport = Viewport::new(width, height, ratio);
        Tuning::resolve(&viewport, MotionPreference::Reduced)
    }

    #[test]
    fn bands_split_at_700_and_1100() {
        assert_eq!(ViewportBand::classify(320.0), ViewportBand::Narrow);
        assert_eq!(ViewportBand::classify(699.9), ViewportBand::Narrow);
        assert_eq!(ViewportBand::classify(700.0), ViewportBand::Medium);
        assert_eq!(ViewportBand::classify(1099.0), ViewportBand::Medium);
        assert_eq!(ViewportBand::classify(1100.0), ViewportBand::Wide);
    }

    #[test]
    fn camera_pulls_in_on_smaller_screens() {
        let wide = full(1400.0, 800.0, 1.0);
        let medium = full(900.0, 800.0, 1.0);
        let narrow = full(400.0, 800.0, 1.0);
        assert!(wide.camera.distance > medium.camera.distance);
        assert!(medium.camera.distance > narrow.camera.distance);
        assert!(wide.camera.height > narrow.camera.height);
    }

    #[test]
    fn pixel_ratio_is_capped_per_band() {
        let narrow = full(400.0, 800.0, 3.0);
        let wide = full(1400.0, 800.0, 3.0);
        let low = full(1400.0, 800.0, 1.25);
        assert_eq!(narrow.pixel_ratio, 1.0);
        assert_eq!(wide.pixel_ratio, 2.0);
        assert_eq!(low.pixel_ratio, 1.25);
    }

    #[test]
    fn narrow_screens_spawn_slower_and_fall_gentler() {
        let narrow = full(400.0, 800.0, 1.0);
        assert_eq!(narrow.spawn_interval, 108);
        assert!((narrow.gravity_scale() - 0.8).abs() < 1e-6);
    }

    #[test]
    fn reduced_motion_overrides_every_band() {
        for width in [400.0, 900.0, 1600.0] {
            let t = reduced(width, 800.0, 1.0);
            assert_eq!(t.spawn_interval, 180);
            assert!((t.gravity_scale() - 0.6).abs() < 1e-6);
        }
    }

    #[test]
    fn candle_counts_per_band() {
        assert_eq!(visible_candles(ViewportBand::Narrow, 28), 4);
        assert_eq!(visible_candles(ViewportBand::Medium, 28), 9);
        assert_eq!(visible_candles(ViewportBand::Wide, 28), 28);
        assert_eq!(visible_candles(ViewportBand::Narrow, 2), 2);
    }
}
