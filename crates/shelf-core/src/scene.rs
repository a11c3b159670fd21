//! Frame driver for the bookshelf scene.
//!
//! Per frame, in order: spawn (at most once, on the cadence timer), integrate
//! falling then rising books, flicker the candles, move the camera, render.
//! Everything is owned here and passed down by reference, so there is no
//! shared state beyond this struct.

use crate::book::Book;
use crate::cabinet::cabinet_panels;
use crate::camera::Camera;
use crate::candles::Candles;
use crate::constants::*;
use crate::draw::{BoxInstance, DrawList, Lighting, PointLight, SceneRenderer};
use crate::grid::{SlotGrid, Tier};
use crate::integrator::integrate;
use crate::spawner::Spawner;
use crate::tuning::{MotionPreference, Tuning, Viewport};
use glam::{Quat, Vec3};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// What happened during one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// Set on the very first frame only; the caller raises readiness on it.
    pub first_frame: bool,
    pub spawned: bool,
    pub settled: usize,
    pub rendered: bool,
}

pub struct ShelfScene {
    grid: SlotGrid,
    spawner: Spawner,
    books: Vec<Book>,
    shelved: Vec<usize>,
    candles: Candles,
    panels: Vec<BoxInstance>,
    viewport: Viewport,
    motion: MotionPreference,
    tuning: Tuning,
    spawn_timer: u32,
    frame: u64,
    rng: StdRng,
}

impl ShelfScene {
    /// Full scene with generated queues; bottom-tier books start at rest.
    pub fn new(viewport: Viewport, motion: MotionPreference, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let grid = SlotGrid::default();
        let spawner = Spawner::generate(&grid, &mut rng);
        let candles = Candles::scatter(CANDLE_COUNT, &mut rng);
        Self::from_parts(grid, spawner, candles, viewport, motion, rng)
    }

    /// Scene built from explicit parts.
    pub fn from_parts(
        mut grid: SlotGrid,
        mut spawner: Spawner,
        candles: Candles,
        viewport: Viewport,
        motion: MotionPreference,
        mut rng: StdRng,
    ) -> Self {
        let books = spawner.place_bottom(&mut grid, &mut rng);
        let shelved = (0..books.len()).collect();
        let mut scene = Self {
            grid,
            spawner,
            books,
            shelved,
            candles,
            panels: cabinet_panels(),
            viewport,
            motion,
            tuning: Tuning::default(),
            spawn_timer: 0,
            frame: 0,
            rng,
        };
        scene.resize(viewport);
        scene
    }

    /// Recompute tuning for a new viewport. Replaces the previous tuning
    /// entirely; the motion preference stays as read at startup.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.tuning = Tuning::resolve(&viewport, self.motion);
        self.candles.set_visible_count(self.tuning.visible_candles);
        log::info!(
            "[tune] {:?} width={:.0} cadence={} gravity={:.4} candles={} dpr={:.2}",
            self.tuning.band,
            viewport.width,
            self.tuning.spawn_interval,
            self.tuning.gravity,
            self.tuning.visible_candles,
            self.tuning.pixel_ratio
        );
    }

    /// Advance the simulation one frame without rendering.
    pub fn step(&mut self) -> FrameReport {
        let first_frame = self.frame == 0;
        let mut spawned = false;
        if self.spawn_timer == 0 {
            if self.spawner.has_pending_motion() {
                if let Some(book) = self.spawner.spawn_next(&mut self.grid, &mut self.rng) {
                    self.books.push(book);
                    spawned = true;
                }
            }
            self.spawn_timer = self.tuning.spawn_interval;
        } else {
            self.spawn_timer -= 1;
        }

        let settled = integrate(
            &mut self.books,
            &mut self.grid,
            &self.tuning,
            &mut self.rng,
        );
        self.shelved.extend_from_slice(&settled);

        self.candles.flicker(self.frame, &mut self.rng);
        self.frame += 1;

        FrameReport {
            first_frame,
            spawned,
            settled: settled.len(),
            rendered: false,
        }
    }

    /// Step, then hand the frame to `renderer`. Render failures are logged
    /// and reported, never propagated.
    pub fn tick<R: SceneRenderer + ?Sized>(&mut self, renderer: &mut R) -> FrameReport {
        let mut report = self.step();
        match renderer.render(&self.draw_list()) {
            Ok(()) => report.rendered = true,
            Err(e) => log::warn!("[shelf] {}", e),
        }
        report
    }

    /// Camera for the frame that was just stepped.
    pub fn camera(&self) -> Camera {
        Camera::shelf(
            &self.tuning.camera,
            self.viewport.aspect(),
            self.frame.saturating_sub(1),
        )
    }

    pub fn draw_list(&self) -> DrawList {
        let capacity = self.panels.len() + self.books.len() + self.candles.len() * 2;
        let mut boxes = Vec::with_capacity(capacity);
        boxes.extend_from_slice(&self.panels);
        boxes.extend(self.books.iter().map(|b| {
            BoxInstance::new(
                b.position,
                b.size(),
                Quat::from_rotation_y(b.yaw()),
                b.descriptor.color,
            )
        }));

        let mut lights = Vec::with_capacity(self.tuning.visible_candles + 1);
        lights.push(PointLight {
            position: Vec3::new(0.0, -2.0, 2.0),
            color: BRAND_BLUE,
            intensity: 0.18,
            range: 15.0,
        });
        for c in self.candles.visible() {
            let body = Vec3::new(0.0, CANDLE_BODY_HEIGHT * 0.45, 0.0);
            let flame = Vec3::new(0.0, CANDLE_BODY_HEIGHT, 0.0);
            boxes.push(
                BoxInstance::new(
                    c.position + body,
                    Vec3::new(
                        CANDLE_BODY_RADIUS * 2.0,
                        CANDLE_BODY_HEIGHT,
                        CANDLE_BODY_RADIUS * 2.0,
                    ),
                    Quat::IDENTITY,
                    BRAND_BLUE,
                )
                .with_emissive(0.12),
            );
            boxes.push(
                BoxInstance::new(
                    c.position + flame,
                    Vec3::splat(CANDLE_FLAME_RADIUS * 2.0 * c.flame_scale),
                    Quat::IDENTITY,
                    BRAND_RED,
                )
                .with_emissive(1.0),
            );
            lights.push(PointLight {
                position: c.position + flame,
                color: BRAND_RED,
                intensity: c.intensity,
                range: CANDLE_LIGHT_RANGE,
            });
        }

        DrawList {
            camera: self.camera(),
            lighting: Lighting {
                ambient: 0.6,
                sun_direction: Vec3::new(3.0, 10.0, 5.0).normalize(),
                sun_intensity: 0.6,
            },
            boxes,
            lights,
        }
    }

    #[inline]
    pub fn grid(&self) -> &SlotGrid {
        &self.grid
    }

    #[inline]
    pub fn spawner(&self) -> &Spawner {
        &self.spawner
    }

    /// Every book ever spawned, in spawn order.
    #[inline]
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Books at rest, in the order they settled.
    pub fn shelved(&self) -> impl Iterator<Item = &Book> {
        self.shelved.iter().map(|&i| &self.books[i])
    }

    pub fn shelved_count(&self) -> usize {
        self.shelved.len()
    }

    pub fn shelved_in(&self, tier: Tier) -> impl Iterator<Item = &Book> {
        self.shelved().filter(move |b| b.slot.tier == tier)
    }

    #[inline]
    pub fn candles(&self) -> &Candles {
        &self.candles
    }

    #[inline]
    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// True once nothing is queued or in flight.
    pub fn is_complete(&self) -> bool {
        !self.spawner.has_pending_motion() && self.books.iter().all(Book::is_settled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::RecordingRenderer;
    use crate::error::ShelfError;

    struct FailingRenderer;

    impl SceneRenderer for FailingRenderer {
        fn render(&mut self, _frame: &DrawList) -> Result<(), ShelfError> {
            Err(ShelfError::Renderer("lost".into()))
        }
    }

    #[test]
    fn bottom_tier_starts_full_and_settled() {
        let scene = ShelfScene::new(Viewport::default(), MotionPreference::Full, 1);
        assert!(scene.grid().is_full(Tier::Bottom));
        assert_eq!(scene.shelved_in(Tier::Bottom).count(), SLOTS_PER_TIER);
        assert_eq!(scene.shelved_count(), SLOTS_PER_TIER);
    }

    #[test]
    fn first_frame_spawns_and_reports_readiness_once() {
        let mut scene = ShelfScene::new(Viewport::default(), MotionPreference::Full, 2);
        let first = scene.step();
        assert!(first.first_frame);
        assert!(first.spawned);
        for _ in 0..200 {
            assert!(!scene.step().first_frame);
        }
    }

    #[test]
    fn spawns_follow_the_cadence() {
        let mut scene = ShelfScene::new(Viewport::default(), MotionPreference::Full, 3);
        let interval = scene.tuning().spawn_interval as usize;
        // spawns land on frames 0, interval + 1 and 2 * (interval + 1)
        let spawned = (0..interval * 2 + 3)
            .filter(|_| scene.step().spawned)
            .count();
        assert_eq!(spawned, 3);
    }

    #[test]
    fn render_failures_are_swallowed() {
        let mut scene = ShelfScene::new(Viewport::default(), MotionPreference::Full, 4);
        let report = scene.tick(&mut FailingRenderer);
        assert!(report.first_frame);
        assert!(!report.rendered);
        let mut rec = RecordingRenderer::default();
        assert!(scene.tick(&mut rec).rendered);
        assert_eq!(rec.frames, 1);
    }

    #[test]
    fn draw_list_contains_cabinet_books_and_visible_candles() {
        let viewport = Viewport::new(400.0, 800.0, 2.0);
        let mut scene = ShelfScene::new(viewport, MotionPreference::Full, 5);
        let mut rec = RecordingRenderer::default();
        scene.tick(&mut rec);
        let list = rec.last.unwrap();
        let candles = scene.tuning().visible_candles;
        assert_eq!(candles, 4);
        assert_eq!(list.boxes.len(), 8 + scene.books().len() + candles * 2);
        assert_eq!(list.lights.len(), 1 + candles);
    }

    #[test]
    fn explicit_parts_are_tuned_for_their_viewport() {
        let viewport = Viewport::new(390.0, 844.0, 3.0);
        let mut rng = StdRng::seed_from_u64(6);
        let candles = Candles::scatter(CANDLE_COUNT, &mut rng);
        let grid = SlotGrid::default();
        let spawner = Spawner::generate(&grid, &mut rng);
        let motion = MotionPreference::Reduced;
        let scene = ShelfScene::from_parts(grid, spawner, candles, viewport, motion, rng);
        let expected = Tuning::resolve(&viewport, motion);
        assert_eq!(*scene.tuning(), expected);
        assert_ne!(*scene.tuning(), Tuning::default());
        assert_eq!(scene.candles().visible_count(), expected.visible_candles);
    }
}
