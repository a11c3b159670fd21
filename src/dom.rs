use crate::constants::*;
use crate::layout;
use shelf_core::Viewport;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Look up a canvas mount point; `None` when absent or not a canvas.
pub fn find_canvas(document: &web::Document, id: &str) -> Option<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
}

/// Size the canvas backing store to its CSS box times `pixel_ratio`.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, pixel_ratio: f64) {
    let rect = canvas.get_bounding_client_rect();
    let (w_px, h_px) = layout::backing_size(rect.width(), rect.height(), pixel_ratio);
    if canvas.width() != w_px || canvas.height() != h_px {
        canvas.set_width(w_px);
        canvas.set_height(h_px);
    }
}

/// Canvas CSS size (falling back to the window size when the canvas has no
/// layout yet) and the device pixel ratio.
pub fn viewport_for(canvas: &web::HtmlCanvasElement) -> Viewport {
    let Some(window) = web::window() else {
        return Viewport::default();
    };
    let inner = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    };
    let mut width = canvas.client_width() as f64;
    let mut height = canvas.client_height() as f64;
    if width <= 0.0 {
        width = inner(window.inner_width());
    }
    if height <= 0.0 {
        height = inner(window.inner_height());
    }
    let ratio = window.device_pixel_ratio() as f32;
    Viewport::new(width as f32, height as f32, ratio)
}

/// Read once at startup; the preference is treated as fixed for the session.
pub fn prefers_reduced_motion() -> bool {
    web::window()
        .and_then(|w| w.match_media(REDUCED_MOTION_QUERY).ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

#[inline]
pub fn page_visible(document: &web::Document) -> bool {
    !document.hidden()
}

/// Body opt-out for the backdrop, read fresh on every call.
pub fn backdrop_disabled(document: &web::Document) -> bool {
    let value = document
        .body()
        .and_then(|body| body.dataset().get(BACKDROP_DISABLED_KEY));
    layout::is_disabled_flag(value.as_deref())
}

/// Write the body opt-out flag; the backdrop loop picks it up next frame.
pub fn set_backdrop_enabled(document: &web::Document, enabled: bool) {
    let Some(body) = document.body() else {
        return;
    };
    let value = layout::disabled_flag_value(enabled);
    match body.dataset().set(BACKDROP_DISABLED_KEY, value) {
        Ok(()) => log::info!("[backdrop] enabled={}", enabled),
        Err(e) => log::warn!("[backdrop] could not set flag: {:?}", e),
    }
}

pub fn set_canvas_shown(canvas: &web::HtmlCanvasElement, shown: bool) {
    _ = canvas
        .style()
        .set_property("display", if shown { "block" } else { "none" });
}

/// Attach `handler` to `target` for the page's lifetime.
pub fn add_listener(target: &web::EventTarget, event: &str, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}
