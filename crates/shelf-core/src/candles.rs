use crate::constants::*;
use crate::spawner::jitter;
use glam::Vec3;
use rand::Rng;

#[derive(Clone, Debug, PartialEq)]
pub struct Candle {
    pub position: Vec3,
    pub phase: f32,
    pub visible: bool,
    pub flame_scale: f32,
    pub intensity: f32,
}

/// Decorative candles scattered in front of the cabinet. Hidden candles are
/// kept around so a later resize can show them again.
#[derive(Clone, Debug, Default)]
pub struct Candles {
    items: Vec<Candle>,
}

impl Candles {
    pub fn scatter<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Self {
        let spread = CANDLE_SPREAD_MIN.max(SHELF_WIDTH * CANDLE_SPREAD_PER_SHELF);
        let step = spread / count.max(1) as f32;
        let items = (0..count)
            .map(|i| {
                let x = -spread / 2.0 + (i as f32 + 0.5) * step + jitter(rng, CANDLE_X_JITTER);
                let z = -SHELF_DEPTH / 2.0 - CANDLE_Z_OFFSET + jitter(rng, CANDLE_Z_JITTER);
                let y = FLOOR_Y - CANDLE_Y_DROP + rng.gen::<f32>() * CANDLE_Y_RANGE;
                Candle {
                    position: Vec3::new(x, y, z),
                    phase: i as f32,
                    visible: true,
                    flame_scale: 1.0,
                    intensity: 1.0,
                }
            })
            .collect();
        Self { items }
    }

    /// Show the first `count` candles and hide the rest.
    pub fn set_visible_count(&mut self, count: usize) {
        for (i, c) in self.items.iter_mut().enumerate() {
            c.visible = i < count;
            if c.visible {
                c.intensity = c.intensity.min(CANDLE_MAX_INTENSITY);
            }
        }
    }

    /// Recompute flame scale and light intensity for `frame`.
    pub fn flicker<R: Rng + ?Sized>(&mut self, frame: u64, rng: &mut R) {
        let t = (frame % 1_000_000) as f32;
        for c in &mut self.items {
            c.flame_scale = FLICKER_BASE
                + (t * FLICKER_RATE + c.phase * FLICKER_PHASE_STEP).sin() * FLICKER_SWING
                + jitter(rng, FLICKER_NOISE);
            let glow = (t * GLOW_RATE + c.phase).sin().abs();
            c.intensity = GLOW_BASE + glow * GLOW_SWING * rng.gen::<f32>();
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Candle> {
        self.items.iter()
    }

    pub fn visible(&self) -> impl Iterator<Item = &Candle> {
        self.items.iter().filter(|c| c.visible)
    }

    pub fn visible_count(&self) -> usize {
        self.visible().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn candles_sit_in_front_of_the_cabinet() {
        let mut rng = StdRng::seed_from_u64(8);
        let candles = Candles::scatter(CANDLE_COUNT, &mut rng);
        assert_eq!(candles.len(), CANDLE_COUNT);
        for c in candles.iter() {
            assert!(c.position.z < -SHELF_DEPTH / 2.0);
            assert!(c.position.y >= FLOOR_Y - CANDLE_Y_DROP);
            let reach = CANDLE_SPREAD_MIN / 2.0 + CANDLE_X_JITTER;
            assert!(c.position.x.abs() <= reach);
        }
    }

    #[test]
    fn visibility_hides_without_removing() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut candles = Candles::scatter(10, &mut rng);
        candles.set_visible_count(4);
        assert_eq!(candles.visible_count(), 4);
        assert_eq!(candles.len(), 10);
        assert!(candles.iter().take(4).all(|c| c.visible));
        candles.set_visible_count(10);
        assert_eq!(candles.visible_count(), 10);
    }

    #[test]
    fn flicker_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut candles = Candles::scatter(CANDLE_COUNT, &mut rng);
        for frame in 0..500 {
            candles.flicker(frame, &mut rng);
            for c in candles.iter() {
                let lo = FLICKER_BASE - FLICKER_SWING - FLICKER_NOISE / 2.0;
                let hi = FLICKER_BASE + FLICKER_SWING + FLICKER_NOISE / 2.0;
                assert!(c.flame_scale >= lo - 1e-6 && c.flame_scale <= hi + 1e-6);
                let peak = GLOW_BASE + GLOW_SWING + 1e-6;
                assert!(c.intensity >= GLOW_BASE && c.intensity <= peak);
            }
        }
    }
}
