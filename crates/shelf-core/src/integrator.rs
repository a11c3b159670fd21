//! Per-frame kinematics for books still in flight.
//!
//! Falling books accelerate under the tuned gravity; rising books decelerate
//! by a fixed decrement. Both stop the moment they reach the height at which
//! they sit flush on their plank, snap onto their slot and settle for good.
//! Target heights are fixed per tier and slots are reserved at spawn time, so
//! no collision checks are needed.

use crate::book::{Book, Motion};
use crate::constants::*;
use crate::grid::SlotGrid;
use crate::spawner::jitter;
use crate::tuning::Tuning;
use rand::Rng;
use smallvec::SmallVec;

/// Indices (into the book pool) of books that settled during one step.
pub type Settled = SmallVec<[usize; 4]>;

/// Advance every unsettled book by one frame. Falling books are processed
/// before rising books; settled books are skipped.
pub fn integrate<R: Rng + ?Sized>(
    books: &mut [Book],
    grid: &mut SlotGrid,
    tuning: &Tuning,
    rng: &mut R,
) -> Settled {
    let mut settled = Settled::new();
    for (i, book) in books.iter_mut().enumerate() {
        if let Motion::Falling { vy } = book.motion {
            if step_falling(book, vy, tuning.gravity) {
                settle(book, grid, jitter(rng, FALL_SETTLE_YAW));
                settled.push(i);
            }
        }
    }
    for (i, book) in books.iter_mut().enumerate() {
        if let Motion::Rising { vy } = book.motion {
            if step_rising(book, vy) {
                settle(book, grid, jitter(rng, RISE_SETTLE_YAW));
                settled.push(i);
            }
        }
    }
    settled
}

/// Returns true once the book has reached or passed its resting height.
fn step_falling(book: &mut Book, vy: f32, gravity: f32) -> bool {
    let vy = vy + gravity;
    book.position.y += vy;
    book.motion = Motion::Falling { vy };
    book.position.y <= book.rest_height()
}

fn step_rising(book: &mut Book, vy: f32) -> bool {
    book.position.y += vy;
    book.motion = Motion::Rising {
        vy: (vy - RISE_DECEL).max(RISE_MIN_VY),
    };
    book.position.y >= book.rest_height()
}

/// Snap onto the slot (clearing spawn jitter) and freeze.
fn settle(book: &mut Book, grid: &mut SlotGrid, yaw: f32) {
    book.position.y = book.rest_height();
    if let Some(x) = grid.slot_x(book.slot.index) {
        book.position.x = x;
    }
    book.position.z = 0.0;
    book.motion = Motion::Settled { yaw };
    grid.mark_occupied(book.slot);
    let slot = book.slot;
    log::debug!("[shelf] settled {:?} slot {}", slot.tier, slot.index);
}
