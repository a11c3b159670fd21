use glam::Vec3;

// Cabinet geometry and motion tuning shared by the bookshelf scene and its tests.

// Cabinet layout
pub const SHELF_WIDTH: f32 = 3.6; // interior width between the side panels
pub const PANEL_THICKNESS: f32 = 0.25; // top/bottom panel height
pub const PANEL_LIP: f32 = 0.16; // how far top/bottom panels overhang the interior
pub const SIDE_PANEL_WIDTH: f32 = 0.12;
pub const BACKBOARD_DEPTH: f32 = 0.08;
pub const SHELF_DEPTH: f32 = 0.6;
pub const FLOOR_Y: f32 = -1.0; // cabinet floor; lowered so the cabinet sits low on the page
pub const CABINET_HEIGHT: f32 = 4.8; // interior height, tall enough for the largest books
pub const PLANK_HEIGHT: f32 = 0.02;
pub const TIER_FRACTIONS: [f32; 3] = [0.75, 0.5, 0.25]; // top, middle, bottom plank heights

// Slots
pub const SLOTS_PER_TIER: usize = 8;
pub const SLOT_PADDING: f32 = 0.06; // minimum gap left between neighbouring books
pub const SLOT_MARGIN: f32 = 0.4; // inside margin subtracted from the shelf width

// Book sizing
pub const BOOK_MIN_DEPTH: f32 = 0.12;
pub const BOOK_DEPTH_INSET: f32 = 0.18; // keeps books fully inside the cabinet

// Motion (per-frame units)
pub const GRAVITY: f32 = -0.045;
pub const FALL_INITIAL_VY: f32 = -0.02; // already heading down on the first frame
pub const RISE_INITIAL_VY: f32 = 0.06;
pub const RISE_DECEL: f32 = 0.0025;
pub const RISE_ARRIVAL_VY: f32 = 0.02; // residual climb speed when a rising book reaches its plank
pub const RISE_MIN_VY: f32 = 0.01; // rising books never stall below their plank
pub const SPAWN_INTERVAL_FRAMES: u32 = 60;

// Spawn placement
pub const SPAWN_X_JITTER: f32 = 0.06; // full width of the random horizontal offset
pub const SPAWN_Z: f32 = -0.02;
pub const FALL_SPAWN_LIFT: f32 = 2.0; // height above the top plank
pub const FALL_SPAWN_LIFT_JITTER: f32 = 0.6;
pub const RISE_SPAWN_DROP: f32 = 1.8; // depth below the cabinet floor
pub const RISE_SPAWN_DROP_JITTER: f32 = 0.25;
pub const FALL_SETTLE_YAW: f32 = 0.08; // full width of the random settle yaw
pub const RISE_SETTLE_YAW: f32 = 0.06;

// Candles
pub const CANDLE_COUNT: usize = 28;
pub const CANDLE_SPREAD_MIN: f32 = 12.0;
pub const CANDLE_SPREAD_PER_SHELF: f32 = 1.8;
pub const CANDLE_X_JITTER: f32 = 0.6;
pub const CANDLE_Z_OFFSET: f32 = 0.4;
pub const CANDLE_Z_JITTER: f32 = 0.6;
pub const CANDLE_Y_DROP: f32 = 0.4;
pub const CANDLE_Y_RANGE: f32 = 2.0;
pub const CANDLE_MAX_INTENSITY: f32 = 1.8;
pub const CANDLE_LIGHT_RANGE: f32 = 6.0;
pub const CANDLE_BODY_RADIUS: f32 = 0.045;
pub const CANDLE_BODY_HEIGHT: f32 = 0.2;
pub const CANDLE_FLAME_RADIUS: f32 = 0.04;

// Flicker
pub const FLICKER_BASE: f32 = 0.85;
pub const FLICKER_SWING: f32 = 0.14;
pub const FLICKER_NOISE: f32 = 0.04;
pub const FLICKER_RATE: f32 = 0.08;
pub const FLICKER_PHASE_STEP: f32 = 0.6;
pub const GLOW_BASE: f32 = 0.4;
pub const GLOW_SWING: f32 = 0.9;
pub const GLOW_RATE: f32 = 0.05;

// Camera
pub const CAMERA_FOV_DEG: f32 = 50.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 200.0;
pub const CAMERA_BOB_AMPLITUDE: f32 = 0.03;
pub const CAMERA_BOB_RATE: f32 = 0.003;

// Viewport bands (CSS pixels)
pub const NARROW_MAX_WIDTH: f32 = 700.0;
pub const MEDIUM_MAX_WIDTH: f32 = 1100.0;

// Brand palette (#00ADF1 / #F4000A) and cabinet finishes
pub const BRAND_BLUE: [f32; 3] = [0.0, 0.678, 0.945];
pub const BRAND_RED: [f32; 3] = [0.957, 0.0, 0.039];
pub const PANEL_COLOR: [f32; 3] = [0.165, 0.165, 0.227]; // #2a2a3a
pub const BACKBOARD_COLOR: [f32; 3] = [0.082, 0.078, 0.125]; // #151420
pub const PLANK_COLOR: [f32; 3] = [0.059, 0.059, 0.071]; // #0f0f12

pub const BOOK_PALETTE: [[f32; 3]; 8] = [
    BRAND_BLUE, BRAND_RED, BRAND_BLUE, BRAND_RED, BRAND_BLUE, BRAND_RED, BRAND_BLUE, BRAND_RED,
];

/// Point the camera keeps aimed at, a third of the way up the cabinet.
#[inline]
pub fn look_at_point() -> Vec3 {
    Vec3::new(0.0, FLOOR_Y + CABINET_HEIGHT / 3.0, 0.0)
}
