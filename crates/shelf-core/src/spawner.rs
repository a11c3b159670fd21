//! Turns queued descriptors into books, one slot reservation at a time.
//!
//! Top-tier books fall in from above the cabinet, middle-tier books rise from
//! below its floor and bottom-tier books are placed directly at rest when the
//! scene is built. The top queue is always drained before the middle queue
//! gets a turn, and at most one book is spawned per call.

use crate::book::{Book, Motion};
use crate::constants::*;
use crate::grid::{SlotGrid, SlotRef, Tier};
use crate::palette::{descriptor_queue, BookDescriptor};
use glam::Vec3;
use rand::Rng;
use std::collections::VecDeque;

#[derive(Clone, Debug, Default)]
pub struct Spawner {
    queues: [VecDeque<BookDescriptor>; 3],
    dropped: usize,
}

impl Spawner {
    pub fn new(
        top: VecDeque<BookDescriptor>,
        middle: VecDeque<BookDescriptor>,
        bottom: VecDeque<BookDescriptor>,
    ) -> Self {
        Self {
            queues: [top, middle, bottom],
            dropped: 0,
        }
    }

    /// One descriptor per slot for every tier.
    pub fn generate<R: Rng + ?Sized>(grid: &SlotGrid, rng: &mut R) -> Self {
        let n = grid.slot_count();
        let w = grid.slot_width();
        Self::new(
            descriptor_queue(Tier::Top, n, w, rng),
            descriptor_queue(Tier::Middle, n, w, rng),
            descriptor_queue(Tier::Bottom, n, w, rng),
        )
    }

    #[inline]
    pub fn pending(&self, tier: Tier) -> usize {
        self.queues[tier.index()].len()
    }

    /// Descriptors discarded because their tier had no free slot.
    #[inline]
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// True while either animated queue still has work.
    #[inline]
    pub fn has_pending_motion(&self) -> bool {
        self.pending(Tier::Top) > 0 || self.pending(Tier::Middle) > 0
    }

    /// Drain the bottom queue straight onto its plank, no animation.
    pub fn place_bottom<R: Rng + ?Sized>(
        &mut self,
        grid: &mut SlotGrid,
        rng: &mut R,
    ) -> Vec<Book> {
        let mut placed = Vec::with_capacity(self.pending(Tier::Bottom));
        while let Some(info) = self.queues[Tier::Bottom.index()].pop_front() {
            let Some(slot) = grid.reserve(Tier::Bottom) else {
                self.drop_descriptor(Tier::Bottom);
                continue;
            };
            let x = grid.slot_x(slot.index).unwrap_or(0.0);
            placed.push(Book {
                descriptor: info,
                slot,
                position: Vec3::new(x, Tier::Bottom.rest_height(info.height), 0.0),
                motion: Motion::Settled {
                    yaw: jitter(rng, RISE_SETTLE_YAW),
                },
            });
        }
        placed
    }

    /// Spawn at most one book, from the top queue if it has anything left,
    /// otherwise from the middle queue. A descriptor whose tier is full is
    /// consumed and discarded.
    pub fn spawn_next<R: Rng + ?Sized>(
        &mut self,
        grid: &mut SlotGrid,
        rng: &mut R,
    ) -> Option<Book> {
        let tier = if self.pending(Tier::Top) > 0 {
            Tier::Top
        } else if self.pending(Tier::Middle) > 0 {
            Tier::Middle
        } else {
            return None;
        };
        let info = self.queues[tier.index()].pop_front()?;
        let Some(slot) = grid.reserve(tier) else {
            self.drop_descriptor(tier);
            return None;
        };
        let x = grid.slot_x(slot.index).unwrap_or(0.0) + jitter(rng, SPAWN_X_JITTER);
        let book = match tier {
            Tier::Top => falling_book(info, slot, x, rng),
            _ => rising_book(info, slot, x, rng),
        };
        log::debug!(
            "[spawn] {:?} slot {} at y={:.2}",
            tier,
            slot.index,
            book.position.y
        );
        Some(book)
    }

    fn drop_descriptor(&mut self, tier: Tier) {
        self.dropped += 1;
        log::debug!("[spawn] {:?} tier full, descriptor dropped", tier);
    }
}

fn falling_book<R: Rng + ?Sized>(
    descriptor: BookDescriptor,
    slot: SlotRef,
    x: f32,
    rng: &mut R,
) -> Book {
    let y = slot.tier.plank_y() + FALL_SPAWN_LIFT + rng.gen::<f32>() * FALL_SPAWN_LIFT_JITTER;
    Book {
        descriptor,
        slot,
        position: Vec3::new(x, y, SPAWN_Z),
        motion: Motion::Falling {
            vy: FALL_INITIAL_VY,
        },
    }
}

fn rising_book<R: Rng + ?Sized>(
    descriptor: BookDescriptor,
    slot: SlotRef,
    x: f32,
    rng: &mut R,
) -> Book {
    let y = FLOOR_Y - RISE_SPAWN_DROP + rng.gen::<f32>() * RISE_SPAWN_DROP_JITTER;
    let distance = slot.tier.rest_height(descriptor.height) - y;
    Book {
        descriptor,
        slot,
        position: Vec3::new(x, y, SPAWN_Z),
        motion: Motion::Rising {
            vy: rising_launch_speed(distance),
        },
    }
}

/// Launch speed for a rising book that must climb `distance` while losing
/// `RISE_DECEL` per frame and still be moving at `RISE_ARRIVAL_VY` when it
/// reaches its plank. Never below the base launch speed.
pub fn rising_launch_speed(distance: f32) -> f32 {
    let v_sq = RISE_ARRIVAL_VY * RISE_ARRIVAL_VY + 2.0 * RISE_DECEL * distance.max(0.0);
    v_sq.sqrt().max(RISE_INITIAL_VY)
}

/// Uniform offset in `[-width/2, width/2)`.
#[inline]
pub(crate) fn jitter<R: Rng + ?Sized>(rng: &mut R, width: f32) -> f32 {
    (rng.gen::<f32>() - 0.5) * width
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn descriptors(n: usize) -> VecDeque<BookDescriptor> {
        (0..n)
            .map(|i| BookDescriptor {
                color: BOOK_PALETTE[i % BOOK_PALETTE.len()],
                width: 0.2,
                height: 0.5 + i as f32 * 0.05,
                depth: 0.2,
            })
            .collect()
    }

    #[test]
    fn top_queue_is_exhausted_before_middle() {
        let mut grid = SlotGrid::default();
        let mut rng = StdRng::seed_from_u64(1);
        let mut spawner = Spawner::new(descriptors(2), descriptors(2), VecDeque::new());
        let tiers: Vec<Tier> = (0..4)
            .filter_map(|_| spawner.spawn_next(&mut grid, &mut rng))
            .map(|b| b.slot.tier)
            .collect();
        assert_eq!(
            tiers,
            vec![Tier::Top, Tier::Top, Tier::Middle, Tier::Middle]
        );
        assert!(!spawner.has_pending_motion());
        assert!(spawner.spawn_next(&mut grid, &mut rng).is_none());
    }

    #[test]
    fn falling_books_start_above_and_heading_down() {
        let mut grid = SlotGrid::default();
        let mut rng = StdRng::seed_from_u64(2);
        let mut spawner = Spawner::new(descriptors(1), VecDeque::new(), VecDeque::new());
        let book = spawner.spawn_next(&mut grid, &mut rng).unwrap();
        assert!(book.position.y > book.rest_height());
        assert!(book.position.y > FLOOR_Y + CABINET_HEIGHT);
        match book.motion {
            Motion::Falling { vy } => assert!(vy < 0.0),
            other => panic!("unexpected motion {:?}", other),
        }
        let slot_x = grid.slot_x(book.slot.index).unwrap();
        assert!((book.position.x - slot_x).abs() <= SPAWN_X_JITTER / 2.0);
    }

    #[test]
    fn rising_books_start_below_the_floor_heading_up() {
        let mut grid = SlotGrid::default();
        let mut rng = StdRng::seed_from_u64(3);
        let mut spawner = Spawner::new(VecDeque::new(), descriptors(1), VecDeque::new());
        let book = spawner.spawn_next(&mut grid, &mut rng).unwrap();
        assert_eq!(book.slot.tier, Tier::Middle);
        assert!(book.position.y < FLOOR_Y);
        match book.motion {
            Motion::Rising { vy } => assert!(vy >= RISE_INITIAL_VY),
            other => panic!("unexpected motion {:?}", other),
        }
    }

    #[test]
    fn spawning_reserves_the_slot_immediately() {
        let mut grid = SlotGrid::default();
        let mut rng = StdRng::seed_from_u64(4);
        let mut spawner = Spawner::new(descriptors(2), VecDeque::new(), VecDeque::new());
        let a = spawner.spawn_next(&mut grid, &mut rng).unwrap();
        assert!(grid.is_occupied(a.slot));
        let b = spawner.spawn_next(&mut grid, &mut rng).unwrap();
        assert_ne!(a.slot, b.slot);
    }

    #[test]
    fn bottom_books_are_placed_at_rest() {
        let mut grid = SlotGrid::default();
        let mut rng = StdRng::seed_from_u64(5);
        let mut spawner = Spawner::new(
            VecDeque::new(),
            VecDeque::new(),
            descriptors(SLOTS_PER_TIER),
        );
        let placed = spawner.place_bottom(&mut grid, &mut rng);
        assert_eq!(placed.len(), SLOTS_PER_TIER);
        assert_eq!(spawner.pending(Tier::Bottom), 0);
        assert!(grid.is_full(Tier::Bottom));
        for (i, book) in placed.iter().enumerate() {
            assert!(book.is_settled());
            assert_eq!(book.slot.index, i);
            assert_eq!(book.position.y, book.rest_height());
            assert_eq!(book.position.x, grid.slot_x(i).unwrap());
        }
    }

    #[test]
    fn launch_speed_covers_the_climb() {
        let short = rising_launch_speed(0.1);
        assert_eq!(short, RISE_INITIAL_VY);
        let long = rising_launch_speed(5.0);
        assert!(long > RISE_INITIAL_VY);
        // continuous-time reach with the chosen launch speed
        let reach = (long * long - RISE_ARRIVAL_VY * RISE_ARRIVAL_VY) / (2.0 * RISE_DECEL);
        assert!((reach - 5.0).abs() < 1e-3);
    }
}
