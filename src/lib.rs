#![cfg(target_arch = "wasm32")]
use constants::*;
use instant::Instant;
use shelf_core::{Backdrop, InitOutcome, MotionPreference, ShelfError, ShelfScene};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod layout;
mod ready;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("shelf-web starting");

    spawn_local(async move {
        let motion = MotionPreference::from_reduced_flag(dom::prefers_reduced_motion());
        if let Err(e) = init_shelf(motion).await {
            log::warn!("[shelf] {:?}", e);
            ready::announce(&InitOutcome::Unavailable(e.to_string()));
        }
    });
    spawn_local(async move {
        let motion = MotionPreference::from_reduced_flag(dom::prefers_reduced_motion());
        if let Err(e) = init_backdrop(motion).await {
            log::warn!("[backdrop] {:?}", e);
        }
    });
    Ok(())
}

async fn init_shelf(motion: MotionPreference) -> anyhow::Result<()> {
    let document = dom::window_document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let Some(canvas) = dom::find_canvas(&document, SHELF_CANVAS_ID) else {
        // pages without the shelf still expect the readiness signal
        let err = ShelfError::Unavailable(format!("missing #{}", SHELF_CANVAS_ID));
        ready::announce(&InitOutcome::from(err));
        return Ok(());
    };

    let viewport = dom::viewport_for(&canvas);
    let scene = ShelfScene::new(viewport, motion, rand::random());
    dom::sync_canvas_backing_size(&canvas, scene.tuning().pixel_ratio as f64);
    log::info!(
        "[shelf] {}x{} band={:?} motion={:?}",
        viewport.width,
        viewport.height,
        scene.tuning().band,
        motion
    );

    let gpu = frame::init_gpu(&canvas, SHELF_CLEAR)
        .await
        .ok_or_else(|| ShelfError::Unavailable("WebGPU".into()))?;
    let shelf = Rc::new(RefCell::new(frame::ShelfFrame { scene, canvas, gpu }));
    events::wire_shelf_resize(&shelf);
    frame::start_loop(shelf);
    Ok(())
}

async fn init_backdrop(motion: MotionPreference) -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }
    let document = dom::window_document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let Some(canvas) = dom::find_canvas(&document, BACKDROP_CANVAS_ID) else {
        return Ok(());
    };

    let ratio = layout::capped_ratio(
        web::window().map_or(1.0, |w| w.device_pixel_ratio()),
        BACKDROP_MAX_PIXEL_RATIO,
    );
    dom::sync_canvas_backing_size(&canvas, ratio);
    let gpu = frame::init_gpu(&canvas, BACKDROP_CLEAR)
        .await
        .ok_or_else(|| ShelfError::Unavailable("WebGPU".into()))?;

    events::wire_backdrop_resize(&canvas, BACKDROP_MAX_PIXEL_RATIO);
    events::wire_visibility_log(&document);
    let backdrop = Backdrop::new(motion, rand::random());
    log::info!(
        "[backdrop] particles={} motion={:?}",
        backdrop.particles().len(),
        motion
    );
    let ctx = Rc::new(RefCell::new(frame::BackdropFrame {
        backdrop,
        document,
        canvas,
        gpu,
        started: Instant::now(),
        shown: true,
    }));
    frame::start_loop(ctx);
    Ok(())
}

/// Page-script switch for the backdrop, e.g. `toggle_backdrop(false)`.
#[wasm_bindgen]
pub fn toggle_backdrop(enabled: bool) {
    if let Some(document) = dom::window_document() {
        dom::set_backdrop_enabled(&document, enabled);
    }
}
