//! Platform-free core of the bookshelf scene: slot allocation, spawn queues,
//! settle kinematics, responsive tuning and the per-frame driver, plus the
//! ambient backdrop. The web front-end owns the DOM and the GPU and talks to
//! this crate through `ShelfScene`, `Backdrop` and `SceneRenderer`.

pub mod backdrop;
pub mod book;
pub mod cabinet;
pub mod camera;
pub mod candles;
pub mod constants;
pub mod draw;
pub mod error;
pub mod grid;
pub mod integrator;
pub mod palette;
pub mod ready;
pub mod scene;
pub mod spawner;
pub mod tuning;

pub use backdrop::Backdrop;
pub use book::{Book, Motion};
pub use camera::Camera;
pub use candles::{Candle, Candles};
pub use draw::{BoxInstance, DrawList, Lighting, PointLight, RecordingRenderer, SceneRenderer};
pub use error::ShelfError;
pub use grid::{SlotGrid, SlotRef, Tier};
pub use palette::BookDescriptor;
pub use ready::{InitOutcome, ReadyLatch};
pub use scene::{FrameReport, ShelfScene};
pub use spawner::Spawner;
pub use tuning::{CameraFraming, MotionPreference, Tuning, Viewport, ViewportBand};
