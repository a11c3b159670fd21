//! Renderer-agnostic frame description.
//!
//! The scene never talks to a GPU directly. Each frame it fills a `DrawList`
//! of lit boxes and point lights and hands it to a `SceneRenderer`.

use crate::camera::Camera;
use crate::error::ShelfError;
use glam::{Mat4, Quat, Vec3};

/// One box, drawn as a unit cube scaled, rotated and translated by `transform`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxInstance {
    pub transform: Mat4,
    pub color: [f32; 3],
    /// Self-illumination added on top of the lit color, 0 for plain surfaces.
    pub emissive: f32,
}

impl BoxInstance {
    pub fn new(center: Vec3, size: Vec3, rotation: Quat, color: [f32; 3]) -> Self {
        Self {
            transform: Mat4::from_scale_rotation_translation(size, rotation, center),
            color,
            emissive: 0.0,
        }
    }

    #[inline]
    pub fn with_emissive(mut self, emissive: f32) -> Self {
        self.emissive = emissive;
        self
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        self.transform.w_axis.truncate()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub color: [f32; 3],
    pub intensity: f32,
    pub range: f32,
}

/// Ambient term plus one directional "sun".
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lighting {
    pub ambient: f32,
    /// Points from the scene toward the sun.
    pub sun_direction: Vec3,
    pub sun_intensity: f32,
}

#[derive(Clone, Debug)]
pub struct DrawList {
    pub camera: Camera,
    pub lighting: Lighting,
    pub boxes: Vec<BoxInstance>,
    pub lights: Vec<PointLight>,
}

/// The rendering capability: consumes one frame's draw list.
pub trait SceneRenderer {
    fn render(&mut self, frame: &DrawList) -> Result<(), ShelfError>;
}

/// Keeps the last frame it was given. Handy for tests and headless runs.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub frames: usize,
    pub last: Option<DrawList>,
}

impl SceneRenderer for RecordingRenderer {
    fn render(&mut self, frame: &DrawList) -> Result<(), ShelfError> {
        self.frames += 1;
        self.last = Some(frame.clone());
        Ok(())
    }
}
