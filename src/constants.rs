/// DOM hooks, signal names and render tuning for the web front-end.
///
/// Kept free of `web_sys`/`wgpu` types so host-side tests can include it.
// Mount points
pub const SHELF_CANVAS_ID: &str = "three-canvas";
pub const BACKDROP_CANVAS_ID: &str = "bg-canvas";

// Signals
pub const READY_EVENT: &str = "threeReady"; // listened for by the page loader
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
pub const BACKDROP_DISABLED_KEY: &str = "bgDisabled"; // body `data-bg-disabled`
pub const BACKDROP_DISABLED_VALUE: &str = "true";
pub const BACKDROP_ENABLED_VALUE: &str = "false";

// Backing store
pub const BACKDROP_MAX_PIXEL_RATIO: f64 = 1.5;
pub const MIN_BACKING_PX: u32 = 1;

// GPU budgets
pub const MAX_INSTANCES: usize = 256;
pub const MAX_POINT_LIGHTS: usize = 32; // must match the WGSL array length

// Clear colors (straight alpha; both canvases overlay page content)
pub const SHELF_CLEAR: [f64; 4] = [0.0, 0.0, 0.0, 0.0];
pub const BACKDROP_CLEAR: [f64; 4] = [0.0, 0.0, 0.0, 0.0];
