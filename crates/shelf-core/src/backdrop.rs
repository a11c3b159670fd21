//! Ambient orbiting particles behind the page content.
//!
//! Runs on its own loop, independent of the shelf. It pauses while the page
//! is hidden or the body opts out, but keeps its clock current so it resumes
//! without a jump.

use crate::camera::Camera;
use crate::constants::{BRAND_BLUE, BRAND_RED};
use crate::draw::{BoxInstance, DrawList, Lighting, PointLight};
use crate::tuning::MotionPreference;
use glam::{Quat, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const PARTICLE_COUNT: usize = 36;
pub const PARTICLE_COUNT_REDUCED: usize = 10;
pub const MAX_STEP_MS: f64 = 40.0;
const REDUCED_SPEED_SCALE: f32 = 0.2;
const GROUP_YAW_RATE: f32 = 0.08;
const GROUP_PITCH_RATE: f32 = 0.02;
const ORBIT_Z_SQUASH: f32 = 0.6;
const DRIFT_Y: f32 = 0.01;
const SPIN_X_RATE: f32 = 0.2;
const SPIN_Y_RATE: f32 = 0.15;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticleShape {
    Round,
    Cube,
}

impl ParticleShape {
    /// Edge length of the box standing in for this shape at unit scale.
    #[inline]
    fn extent(self) -> f32 {
        match self {
            ParticleShape::Round => 1.2,
            ParticleShape::Cube => 1.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Orbiter {
    pub shape: ParticleShape,
    pub color: [f32; 3],
    pub angle: f32,
    pub radius: f32,
    /// Radians per frame.
    pub speed: f32,
    pub scale: f32,
    pub position: Vec3,
    pub spin: Vec3,
}

pub struct Backdrop {
    particles: Vec<Orbiter>,
    speed_scale: f32,
    yaw: f32,
    pitch: f32,
    running: bool,
    last_ms: Option<f64>,
}

impl Backdrop {
    pub fn new(motion: MotionPreference, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let count = match motion {
            MotionPreference::Full => PARTICLE_COUNT,
            MotionPreference::Reduced => PARTICLE_COUNT_REDUCED,
        };
        let particles = (0..count)
            .map(|i| {
                let angle = (rng.gen::<f32>() - 0.5) * std::f32::consts::TAU;
                let radius = 10.0 + rng.gen::<f32>() * 30.0;
                let y = (rng.gen::<f32>() - 0.4) * 8.0;
                Orbiter {
                    shape: if i % 2 == 0 {
                        ParticleShape::Round
                    } else {
                        ParticleShape::Cube
                    },
                    color: if i % 2 == 0 { BRAND_BLUE } else { BRAND_RED },
                    angle,
                    radius,
                    scale: 0.4 + rng.gen::<f32>() * 1.3,
                    speed: 0.001 + rng.gen::<f32>() * 0.004,
                    position: Vec3::new(
                        angle.cos() * radius,
                        y,
                        angle.sin() * radius * ORBIT_Z_SQUASH,
                    ),
                    spin: Vec3::ZERO,
                }
            })
            .collect();
        Self {
            particles,
            speed_scale: match motion {
                MotionPreference::Full => 1.0,
                MotionPreference::Reduced => REDUCED_SPEED_SCALE,
            },
            yaw: 0.0,
            pitch: 0.0,
            running: true,
            last_ms: None,
        }
    }

    /// Running only while the page is visible and the body has not opted out.
    pub fn set_running(&mut self, page_visible: bool, disabled: bool) {
        let running = page_visible && !disabled;
        if running != self.running {
            log::info!("[backdrop] running={}", running);
        }
        self.running = running;
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Advance to timestamp `now_ms`. Returns whether the backdrop moved and
    /// should be rendered this frame.
    pub fn frame(&mut self, now_ms: f64) -> bool {
        let elapsed = self.last_ms.map_or(0.0, |last| (now_ms - last).max(0.0));
        self.last_ms = Some(now_ms);
        if !self.running {
            return false;
        }
        let dt = (elapsed.min(MAX_STEP_MS) / 1000.0) as f32;
        self.yaw += dt * GROUP_YAW_RATE;
        self.pitch += dt * GROUP_PITCH_RATE;
        for p in &mut self.particles {
            p.angle += p.speed * self.speed_scale;
            p.position.x = p.angle.cos() * p.radius;
            p.position.z = p.angle.sin() * p.radius * ORBIT_Z_SQUASH;
            p.position.y += (p.angle * 0.5).sin() * DRIFT_Y;
            p.spin.x += dt * SPIN_X_RATE * p.scale;
            p.spin.y += dt * SPIN_Y_RATE * p.scale;
        }
        true
    }

    #[inline]
    pub fn particles(&self) -> &[Orbiter] {
        &self.particles
    }

    #[inline]
    pub fn group_rotation(&self) -> Quat {
        Quat::from_euler(glam::EulerRot::YXZ, self.yaw, self.pitch, 0.0)
    }

    pub fn draw_list(&self, aspect: f32) -> DrawList {
        let group = self.group_rotation();
        let boxes = self
            .particles
            .iter()
            .map(|p| {
                let spin = Quat::from_euler(glam::EulerRot::XYZ, p.spin.x, p.spin.y, 0.0);
                BoxInstance::new(
                    group * p.position,
                    Vec3::splat(p.shape.extent() * p.scale),
                    group * spin,
                    p.color,
                )
                .with_emissive(0.02)
            })
            .collect();
        DrawList {
            camera: Camera {
                eye: Vec3::new(0.0, 0.0, 30.0),
                target: Vec3::ZERO,
                up: Vec3::Y,
                aspect,
                fovy_radians: 60f32.to_radians(),
                znear: 0.1,
                zfar: 1000.0,
            },
            lighting: Lighting {
                ambient: 0.35,
                sun_direction: Vec3::Z,
                sun_intensity: 0.0,
            },
            boxes,
            lights: vec![PointLight {
                position: Vec3::new(0.0, 20.0, 50.0),
                color: [1.0, 1.0, 1.0],
                intensity: 0.6,
                range: 200.0,
            }],
        }
    }
}
