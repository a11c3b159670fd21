use crate::constants::*;
use crate::draw::BoxInstance;
use crate::grid::Tier;
use glam::{Quat, Vec3};

/// Static cabinet boxes: floor and roof panels, both sides, the backboard and
/// one plank per tier.
pub fn cabinet_panels() -> Vec<BoxInstance> {
    let lip_depth = SHELF_DEPTH + PANEL_LIP;
    let body_y = FLOOR_Y + CABINET_HEIGHT / 2.0 - 0.1;
    let roof_y = FLOOR_Y + CABINET_HEIGHT - PANEL_THICKNESS / 2.0 - 0.08;
    let side_x = SHELF_WIDTH / 2.0 + SIDE_PANEL_WIDTH / 2.0;

    let mut boxes = vec![
        panel(
            Vec3::new(0.0, FLOOR_Y - PANEL_THICKNESS / 2.0 - 0.02, 0.0),
            Vec3::new(SHELF_WIDTH + PANEL_LIP, PANEL_THICKNESS, lip_depth),
        ),
        panel(
            Vec3::new(0.0, roof_y, 0.0),
            Vec3::new(SHELF_WIDTH + PANEL_LIP, PANEL_THICKNESS, lip_depth),
        ),
        panel(
            Vec3::new(-side_x, body_y, 0.0),
            Vec3::new(SIDE_PANEL_WIDTH, CABINET_HEIGHT + 0.2, lip_depth),
        ),
        panel(
            Vec3::new(side_x, body_y, 0.0),
            Vec3::new(SIDE_PANEL_WIDTH, CABINET_HEIGHT + 0.2, lip_depth),
        ),
        BoxInstance::new(
            Vec3::new(0.0, body_y, -SHELF_DEPTH / 2.0 - BACKBOARD_DEPTH / 2.0),
            Vec3::new(SHELF_WIDTH, CABINET_HEIGHT, BACKBOARD_DEPTH),
            Quat::IDENTITY,
            BACKBOARD_COLOR,
        ),
    ];
    boxes.extend(Tier::ALL.iter().map(|tier| {
        BoxInstance::new(
            Vec3::new(0.0, tier.plank_y(), 0.0),
            Vec3::new(SHELF_WIDTH - 0.1, PLANK_HEIGHT, SHELF_DEPTH - 0.08),
            Quat::IDENTITY,
            PLANK_COLOR,
        )
    }));
    boxes
}

fn panel(center: Vec3, size: Vec3) -> BoxInstance {
    BoxInstance::new(center, size, Quat::IDENTITY, PANEL_COLOR)
}
