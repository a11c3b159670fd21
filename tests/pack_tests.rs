// Host-side tests for GPU buffer packing.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod pack {
    include!("../src/render/pack.rs");
}

use constants::MAX_POINT_LIGHTS;
use glam::{Quat, Vec3};
use pack::*;
use shelf_core::{Backdrop, BoxInstance, MotionPreference, ShelfScene, Viewport};

#[test]
fn globals_size_is_uniform_aligned() {
    assert_eq!(std::mem::size_of::<Globals>() % 16, 0);
    assert_eq!(std::mem::size_of::<InstanceRaw>(), 80);
    assert_eq!(std::mem::size_of::<LightRaw>(), 32);
}

#[test]
fn instance_carries_transform_color_and_emissive() {
    let center = Vec3::new(1.0, 2.0, 3.0);
    let color = [0.1, 0.2, 0.3];
    let b = BoxInstance::new(center, Vec3::ONE, Quat::IDENTITY, color)
        .with_emissive(0.5);
    let raw = InstanceRaw::from_box(&b);
    assert_eq!(raw.model[3], [1.0, 2.0, 3.0, 1.0]);
    assert_eq!(raw.color_emissive, [0.1, 0.2, 0.3, 0.5]);
}

#[test]
fn instances_are_capped() {
    let unit = BoxInstance::new(Vec3::ZERO, Vec3::ONE, Quat::IDENTITY, [1.0; 3]);
    let boxes = vec![unit; 10];
    assert_eq!(pack_instances(&boxes, 4).len(), 4);
    assert_eq!(pack_instances(&boxes, 40).len(), 10);
}

#[test]
fn shelf_frame_packs_visible_candle_lights() {
    let mut scene = ShelfScene::new(Viewport::new(1440.0, 900.0, 1.0), MotionPreference::Full, 1);
    scene.step();
    let list = scene.draw_list();
    let g = pack_globals(&list);
    let count = g.ambient[3] as usize;
    assert_eq!(count, list.lights.len().min(MAX_POINT_LIGHTS));
    let candles = scene.tuning().visible_candles;
    assert!(count > candles.min(MAX_POINT_LIGHTS - 1));
    assert_eq!(g.camera_pos[2], list.camera.eye.z);
    // unused slots stay zeroed
    if count < MAX_POINT_LIGHTS {
        assert_eq!(g.lights[count].color_intensity, [0.0; 4]);
    }
}

#[test]
fn backdrop_frame_packs_without_sun() {
    let bd = Backdrop::new(MotionPreference::Reduced, 2);
    let g = pack_globals(&bd.draw_list(16.0 / 9.0));
    assert_eq!(g.sun_dir_intensity[3], 0.0);
    assert_eq!(g.ambient[3], 1.0);
}

#[test]
fn cube_mesh_has_six_quads() {
    let (verts, indices) = cube_mesh();
    assert_eq!(verts.len(), 24);
    assert_eq!(indices.len(), 36);
    assert!(indices.iter().all(|&i| (i as usize) < verts.len()));
    for v in &verts {
        let n = Vec3::from(v.normal);
        let p = Vec3::from(v.position);
        // every vertex lies on the face its normal points out of
        assert!((p.dot(n) - 0.5).abs() < 1e-6);
    }
}
