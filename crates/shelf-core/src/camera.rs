//! Perspective camera shared by the shelf scene and the backdrop.

use crate::constants::*;
use crate::tuning::CameraFraming;
use glam::{Mat4, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Shelf camera for `frame`: the tuned framing plus a slow vertical bob,
    /// always aimed at the cabinet's look-at point.
    pub fn shelf(framing: &CameraFraming, aspect: f32, frame: u64) -> Self {
        // eye height is the band's tuned height plus the bob, not a fixed 1.6
        let eye_y = framing.height + bob_offset(frame);
        Self {
            eye: Vec3::new(0.0, eye_y, framing.distance),
            target: look_at_point(),
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    #[inline]
    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Vertical camera offset for `frame`.
#[inline]
pub fn bob_offset(frame: u64) -> f32 {
    // wrap keeps the f32 argument precise on long-lived pages
    let period = (std::f32::consts::TAU / CAMERA_BOB_RATE) as u64;
    ((frame % period) as f32 * CAMERA_BOB_RATE).sin() * CAMERA_BOB_AMPLITUDE
}
