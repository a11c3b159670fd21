use crate::dom;
use crate::frame::ShelfFrame;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Re-tune the shelf on every window resize: new band, camera framing,
/// pixel ratio and candle count, then resize the canvas backing store.
pub fn wire_shelf_resize(shelf: &Rc<RefCell<ShelfFrame>>) {
    let Some(window) = web::window() else {
        return;
    };
    let shelf = shelf.clone();
    dom::add_listener(&window, "resize", move || {
        let mut s = shelf.borrow_mut();
        let viewport = dom::viewport_for(&s.canvas);
        s.scene.resize(viewport);
        let ratio = s.scene.tuning().pixel_ratio as f64;
        dom::sync_canvas_backing_size(&s.canvas, ratio);
    });
}

/// Keep the backdrop canvas backing store current between frames too, so a
/// paused backdrop resumes at the right size.
pub fn wire_backdrop_resize(canvas: &web::HtmlCanvasElement, max_ratio: f64) {
    let Some(window) = web::window() else {
        return;
    };
    let canvas = canvas.clone();
    dom::add_listener(&window, "resize", move || {
        let ratio = web::window().map_or(1.0, |w| w.device_pixel_ratio());
        dom::sync_canvas_backing_size(&canvas, crate::layout::capped_ratio(ratio, max_ratio));
    });
}

pub fn wire_visibility_log(document: &web::Document) {
    let doc = document.clone();
    dom::add_listener(document, "visibilitychange", move || {
        log::info!("[backdrop] page visible={}", dom::page_visible(&doc));
    });
}
