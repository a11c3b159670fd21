//! Randomized size/color descriptors for the books waiting to be shelved.

use crate::constants::*;
use crate::grid::Tier;
use rand::Rng;
use std::collections::VecDeque;

/// Size and color of one book, consumed once from its tier's queue.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BookDescriptor {
    pub color: [f32; 3],
    pub width: f32,
    pub height: f32,
    pub depth: f32,
}

/// Size ranges and palette offset used when generating a tier's books.
#[derive(Clone, Copy, Debug)]
struct SizeProfile {
    palette_offset: usize,
    height_base: f32,
    height_span: f32,
    depth_base: f32,
    depth_span: f32,
}

const WIDTH_BASE: f32 = 0.12;
const WIDTH_SPAN: f32 = 0.12;

fn profile(tier: Tier) -> SizeProfile {
    match tier {
        Tier::Top => SizeProfile {
            palette_offset: 0,
            height_base: 0.5,
            height_span: 0.6,
            depth_base: 0.16,
            depth_span: 0.1,
        },
        Tier::Middle => SizeProfile {
            palette_offset: 3,
            height_base: 0.5,
            height_span: 0.6,
            depth_base: 0.16,
            depth_span: 0.1,
        },
        Tier::Bottom => SizeProfile {
            palette_offset: 5,
            height_base: 0.45,
            height_span: 0.5,
            depth_base: 0.16,
            depth_span: 0.08,
        },
    }
}

/// Clamp a book depth so it sits fully inside the cabinet.
#[inline]
pub fn clamp_depth(depth: f32) -> f32 {
    depth.min(BOOK_MIN_DEPTH.max(SHELF_DEPTH - BOOK_DEPTH_INSET))
}

/// Generate `count` descriptors for `tier`. Widths never exceed the slot
/// width minus padding so neighbours never touch.
pub fn descriptor_queue<R: Rng + ?Sized>(
    tier: Tier,
    count: usize,
    slot_width: f32,
    rng: &mut R,
) -> VecDeque<BookDescriptor> {
    let p = profile(tier);
    let max_width = (slot_width - SLOT_PADDING).max(0.0);
    (0..count)
        .map(|i| {
            let width = (WIDTH_BASE + rng.gen::<f32>() * WIDTH_SPAN).min(max_width);
            let height = p.height_base + rng.gen::<f32>() * p.height_span;
            let depth = clamp_depth(p.depth_base + rng.gen::<f32>() * p.depth_span);
            BookDescriptor {
                color: BOOK_PALETTE[(i + p.palette_offset) % BOOK_PALETTE.len()],
                width,
                height,
                depth,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn descriptors_respect_slot_width_and_depth_limits() {
        let mut rng = StdRng::seed_from_u64(3);
        let slot_width = 0.4;
        for tier in Tier::ALL {
            let queue = descriptor_queue(tier, 64, slot_width, &mut rng);
            assert_eq!(queue.len(), 64);
            for d in &queue {
                assert!(d.width <= slot_width - SLOT_PADDING + 1e-6);
                assert!(d.width > 0.0);
                assert!(d.depth <= SHELF_DEPTH - BOOK_DEPTH_INSET + 1e-6);
                assert!(d.height >= 0.45 && d.height <= 1.1 + 1e-6);
            }
        }
    }

    #[test]
    fn narrow_slots_cap_width() {
        let mut rng = StdRng::seed_from_u64(11);
        let queue = descriptor_queue(Tier::Top, 16, 0.1, &mut rng);
        for d in &queue {
            assert!((d.width - 0.04).abs() < 1e-6);
        }
    }

    #[test]
    fn palette_alternates_with_tier_offset() {
        let mut rng = StdRng::seed_from_u64(5);
        let top = descriptor_queue(Tier::Top, 2, 0.4, &mut rng);
        let mid = descriptor_queue(Tier::Middle, 1, 0.4, &mut rng);
        assert_eq!(top[0].color, BRAND_BLUE);
        assert_eq!(top[1].color, BRAND_RED);
        assert_eq!(mid[0].color, BRAND_RED);
    }

    #[test]
    fn clamp_depth_keeps_small_books_untouched() {
        assert_eq!(clamp_depth(0.2), 0.2);
        let deepest = SHELF_DEPTH - BOOK_DEPTH_INSET;
        assert!((clamp_depth(0.9) - deepest).abs() < 1e-6);
    }
}
