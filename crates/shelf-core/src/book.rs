use crate::grid::SlotRef;
use crate::palette::BookDescriptor;
use glam::Vec3;

/// Motion state of a book. Each variant carries only what its kind needs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Motion {
    /// Dropping onto the top tier; `vy` grows more negative every frame.
    Falling { vy: f32 },
    /// Climbing onto the middle tier; `vy` decays towards a small floor.
    Rising { vy: f32 },
    /// Resting on its plank for the rest of the session.
    Settled { yaw: f32 },
}

/// A book in the scene, owned for the page's lifetime.
#[derive(Clone, Debug)]
pub struct Book {
    pub descriptor: BookDescriptor,
    pub slot: SlotRef,
    pub position: Vec3,
    pub motion: Motion,
}

impl Book {
    #[inline]
    pub fn is_settled(&self) -> bool {
        matches!(self.motion, Motion::Settled { .. })
    }

    /// Height the book's center comes to rest at.
    #[inline]
    pub fn rest_height(&self) -> f32 {
        self.slot.tier.rest_height(self.descriptor.height)
    }

    #[inline]
    pub fn yaw(&self) -> f32 {
        match self.motion {
            Motion::Settled { yaw } => yaw,
            _ => 0.0,
        }
    }

    #[inline]
    pub fn size(&self) -> Vec3 {
        Vec3::new(
            self.descriptor.width,
            self.descriptor.height,
            self.descriptor.depth,
        )
    }
}
