//! Tier planes and per-tier slot occupancy.
//!
//! Each of the three tiers is split into equally wide slots. Occupancy is
//! monotonic: a slot is reserved when a book is spawned for it and is never
//! released, matching the one-way settle lifecycle of the books themselves.

use crate::constants::*;
use crate::error::ShelfError;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tier {
    Top,
    Middle,
    Bottom,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Top, Tier::Middle, Tier::Bottom];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Tier::Top => 0,
            Tier::Middle => 1,
            Tier::Bottom => 2,
        }
    }

    /// Center height of this tier's plank.
    #[inline]
    pub fn plank_y(self) -> f32 {
        FLOOR_Y + TIER_FRACTIONS[self.index()] * CABINET_HEIGHT
    }

    /// Height of the plank's upper surface, the plane books rest on.
    #[inline]
    pub fn resting_plane(self) -> f32 {
        self.plank_y() + PLANK_HEIGHT / 2.0
    }

    /// Center height at which a book of `object_height` sits flush on the plank.
    #[inline]
    pub fn rest_height(self, object_height: f32) -> f32 {
        self.resting_plane() + object_height / 2.0
    }
}

impl TryFrom<usize> for Tier {
    type Error = ShelfError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Tier::ALL
            .get(value)
            .copied()
            .ok_or(ShelfError::InvalidTier(value))
    }
}

/// Address of a single slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SlotRef {
    pub tier: Tier,
    pub index: usize,
}

#[derive(Clone, Debug)]
pub struct SlotGrid {
    slot_x: SmallVec<[f32; SLOTS_PER_TIER]>,
    slot_width: f32,
    occupied: [SmallVec<[bool; SLOTS_PER_TIER]>; 3],
}

impl Default for SlotGrid {
    fn default() -> Self {
        Self::with_layout(SLOTS_PER_TIER, SHELF_WIDTH - SLOT_MARGIN)
    }
}

impl SlotGrid {
    /// Split `usable_width` (centered on x = 0) into `slots` equal slots per tier.
    pub fn with_layout(slots: usize, usable_width: f32) -> Self {
        let slot_width = if slots == 0 {
            0.0
        } else {
            usable_width / slots as f32
        };
        let left = -usable_width / 2.0 + slot_width / 2.0;
        let slot_x = (0..slots).map(|i| left + slot_width * i as f32).collect();
        let empty = || SmallVec::from_elem(false, slots);
        Self {
            slot_x,
            slot_width,
            occupied: [empty(), empty(), empty()],
        }
    }

    #[inline]
    pub fn slot_count(&self) -> usize {
        self.slot_x.len()
    }

    #[inline]
    pub fn slot_width(&self) -> f32 {
        self.slot_width
    }

    #[inline]
    pub fn slot_x(&self, index: usize) -> Option<f32> {
        self.slot_x.get(index).copied()
    }

    /// Lowest-index free slot in `tier`, without reserving it.
    pub fn first_free(&self, tier: Tier) -> Option<usize> {
        self.occupied[tier.index()].iter().position(|taken| !taken)
    }

    /// Reserve the lowest-index free slot in `tier`. The slot is marked
    /// occupied before returning, so a second request in the same frame
    /// cannot receive it.
    pub fn reserve(&mut self, tier: Tier) -> Option<SlotRef> {
        let index = self.first_free(tier)?;
        self.occupied[tier.index()][index] = true;
        Some(SlotRef { tier, index })
    }

    /// Idempotent; out-of-range slots are ignored.
    pub fn mark_occupied(&mut self, slot: SlotRef) {
        if let Some(taken) = self.occupied[slot.tier.index()].get_mut(slot.index) {
            *taken = true;
        }
    }

    #[inline]
    pub fn is_occupied(&self, slot: SlotRef) -> bool {
        self.occupied[slot.tier.index()]
            .get(slot.index)
            .copied()
            .unwrap_or(false)
    }

    pub fn occupied_count(&self, tier: Tier) -> usize {
        self.occupied[tier.index()].iter().filter(|t| **t).count()
    }

    #[inline]
    pub fn is_full(&self, tier: Tier) -> bool {
        self.first_free(tier).is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_are_stacked_top_to_bottom() {
        assert!(Tier::Top.plank_y() > Tier::Middle.plank_y());
        assert!(Tier::Middle.plank_y() > Tier::Bottom.plank_y());
        assert!(Tier::Bottom.plank_y() > FLOOR_Y);
        assert!(Tier::Top.plank_y() < FLOOR_Y + CABINET_HEIGHT);
    }

    #[test]
    fn tier_from_index() {
        assert_eq!(Tier::try_from(0), Ok(Tier::Top));
        assert_eq!(Tier::try_from(2), Ok(Tier::Bottom));
        assert_eq!(Tier::try_from(3), Err(ShelfError::InvalidTier(3)));
    }

    #[test]
    fn slots_are_centered_and_evenly_spaced() {
        let grid = SlotGrid::default();
        assert_eq!(grid.slot_count(), SLOTS_PER_TIER);
        let first = grid.slot_x(0).unwrap();
        let last = grid.slot_x(SLOTS_PER_TIER - 1).unwrap();
        assert!((first + last).abs() < 1e-5);
        for i in 1..SLOTS_PER_TIER {
            let gap = grid.slot_x(i).unwrap() - grid.slot_x(i - 1).unwrap();
            assert!((gap - grid.slot_width()).abs() < 1e-5);
        }
        assert!(grid.slot_x(SLOTS_PER_TIER).is_none());
    }

    #[test]
    fn reserve_returns_lowest_free_index_and_marks_it() {
        let mut grid = SlotGrid::default();
        let a = grid.reserve(Tier::Top).unwrap();
        let b = grid.reserve(Tier::Top).unwrap();
        assert_eq!(a.index, 0);
        assert_eq!(b.index, 1);
        assert!(grid.is_occupied(a));
        assert_eq!(grid.occupied_count(Tier::Top), 2);
        // other tiers are independent
        assert_eq!(grid.occupied_count(Tier::Middle), 0);
        assert_eq!(grid.first_free(Tier::Middle), Some(0));
    }

    #[test]
    fn reserve_fails_once_the_tier_is_full() {
        let mut grid = SlotGrid::with_layout(3, 1.0);
        for _ in 0..3 {
            assert!(grid.reserve(Tier::Bottom).is_some());
        }
        assert!(grid.is_full(Tier::Bottom));
        assert_eq!(grid.reserve(Tier::Bottom), None);
        assert_eq!(grid.occupied_count(Tier::Bottom), 3);
    }

    #[test]
    fn mark_occupied_is_idempotent() {
        let mut grid = SlotGrid::default();
        let slot = SlotRef {
            tier: Tier::Middle,
            index: 4,
        };
        grid.mark_occupied(slot);
        grid.mark_occupied(slot);
        assert_eq!(grid.occupied_count(Tier::Middle), 1);
        assert_eq!(grid.first_free(Tier::Middle), Some(0));
        grid.mark_occupied(SlotRef {
            tier: Tier::Middle,
            index: 99,
        });
        assert_eq!(grid.occupied_count(Tier::Middle), 1);
    }
}
