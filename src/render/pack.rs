// GPU-side layouts for the lit box pipeline and the packing from a
// `DrawList`. No wgpu types here so host tests can include this file.
use crate::constants::MAX_POINT_LIGHTS;
use bytemuck::{Pod, Zeroable};
use shelf_core::{BoxInstance, DrawList, PointLight};

#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct InstanceRaw {
    pub model: [[f32; 4]; 4],
    /// rgb plus emissive strength in `w`
    pub color_emissive: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct LightRaw {
    pub position_range: [f32; 4],
    pub color_intensity: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
pub struct Globals {
    pub view_proj: [[f32; 4]; 4],
    pub camera_pos: [f32; 4],
    pub sun_dir_intensity: [f32; 4],
    /// ambient in `x`, active light count in `w`
    pub ambient: [f32; 4],
    pub lights: [LightRaw; MAX_POINT_LIGHTS],
}

impl InstanceRaw {
    pub fn from_box(b: &BoxInstance) -> Self {
        Self {
            model: b.transform.to_cols_array_2d(),
            color_emissive: [b.color[0], b.color[1], b.color[2], b.emissive],
        }
    }
}

impl LightRaw {
    pub fn from_light(l: &PointLight) -> Self {
        Self {
            position_range: [l.position.x, l.position.y, l.position.z, l.range],
            color_intensity: [l.color[0], l.color[1], l.color[2], l.intensity],
        }
    }
}

/// Instances for at most `max` boxes, in draw-list order.
pub fn pack_instances(boxes: &[BoxInstance], max: usize) -> Vec<InstanceRaw> {
    boxes.iter().take(max).map(InstanceRaw::from_box).collect()
}

/// Uniform block for one frame. Lights past the shader's array length are
/// dropped; the shader loops over `ambient.w` entries only.
pub fn pack_globals(frame: &DrawList) -> Globals {
    let mut lights = [LightRaw::zeroed(); MAX_POINT_LIGHTS];
    let count = frame.lights.len().min(MAX_POINT_LIGHTS);
    for (slot, light) in lights.iter_mut().zip(frame.lights.iter()) {
        *slot = LightRaw::from_light(light);
    }
    let sun = frame.lighting.sun_direction.normalize_or_zero();
    let eye = frame.camera.eye;
    Globals {
        view_proj: frame.camera.view_projection().to_cols_array_2d(),
        camera_pos: [eye.x, eye.y, eye.z, 1.0],
        sun_dir_intensity: [sun.x, sun.y, sun.z, frame.lighting.sun_intensity],
        ambient: [frame.lighting.ambient, 0.0, 0.0, count as f32],
        lights,
    }
}

/// Unit cube centered on the origin with per-face normals.
pub fn cube_mesh() -> (Vec<Vertex>, Vec<u16>) {
    let p = 0.5_f32;
    let faces: [([f32; 3], [[f32; 3]; 4]); 6] = [
        (
            [0.0, 0.0, 1.0],
            [[-p, -p, p], [p, -p, p], [p, p, p], [-p, p, p]],
        ),
        (
            [0.0, 0.0, -1.0],
            [[p, -p, -p], [-p, -p, -p], [-p, p, -p], [p, p, -p]],
        ),
        (
            [1.0, 0.0, 0.0],
            [[p, -p, p], [p, -p, -p], [p, p, -p], [p, p, p]],
        ),
        (
            [-1.0, 0.0, 0.0],
            [[-p, -p, -p], [-p, -p, p], [-p, p, p], [-p, p, -p]],
        ),
        (
            [0.0, 1.0, 0.0],
            [[-p, p, p], [p, p, p], [p, p, -p], [-p, p, -p]],
        ),
        (
            [0.0, -1.0, 0.0],
            [[-p, -p, -p], [p, -p, -p], [p, -p, p], [-p, -p, p]],
        ),
    ];
    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);
    for (normal, corners) in faces {
        let base = vertices.len() as u16;
        vertices.extend(corners.iter().map(|&position| Vertex { position, normal }));
        indices.extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 3, base]);
    }
    (vertices, indices)
}
