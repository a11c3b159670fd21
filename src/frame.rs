use crate::constants::*;
use crate::dom;
use crate::layout;
use crate::ready;
use crate::render::GpuState;
use instant::Instant;
use shelf_core::{Backdrop, InitOutcome, SceneRenderer, ShelfScene};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Anything driven once per animation frame.
pub trait FrameDriver {
    fn frame(&mut self);
}

pub struct ShelfFrame {
    pub scene: ShelfScene,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: GpuState,
}

impl FrameDriver for ShelfFrame {
    fn frame(&mut self) {
        self.gpu
            .resize_if_needed(self.canvas.width(), self.canvas.height());
        let report = self.scene.tick(&mut self.gpu);
        if report.first_frame {
            let outcome = if report.rendered {
                InitOutcome::Ready
            } else {
                InitOutcome::Unavailable("first frame failed to render".into())
            };
            ready::announce(&outcome);
        }
        if report.spawned || report.settled > 0 {
            log::debug!(
                "[shelf] frame={} shelved={} spawned={} settled={}",
                self.scene.frame(),
                self.scene.shelved_count(),
                report.spawned,
                report.settled
            );
        }
    }
}

pub struct BackdropFrame {
    pub backdrop: Backdrop,
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: GpuState,
    pub started: Instant,
    pub shown: bool,
}

impl FrameDriver for BackdropFrame {
    fn frame(&mut self) {
        let disabled = dom::backdrop_disabled(&self.document);
        if disabled == self.shown {
            self.shown = !disabled;
            dom::set_canvas_shown(&self.canvas, self.shown);
        }
        self.backdrop
            .set_running(dom::page_visible(&self.document), disabled);

        let now_ms = self.started.elapsed().as_secs_f64() * 1000.0;
        if !self.backdrop.frame(now_ms) {
            return;
        }
        let ratio = layout::capped_ratio(
            web::window().map_or(1.0, |w| w.device_pixel_ratio()),
            BACKDROP_MAX_PIXEL_RATIO,
        );
        dom::sync_canvas_backing_size(&self.canvas, ratio);
        let (w, h) = (self.canvas.width(), self.canvas.height());
        self.gpu.resize_if_needed(w, h);
        let aspect = w as f32 / h.max(1) as f32;
        if let Err(e) = self.gpu.render(&self.backdrop.draw_list(aspect)) {
            log::warn!("[backdrop] {}", e);
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement, clear: [f64; 4]) -> Option<GpuState> {
    match GpuState::new(canvas, clear).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("[gpu] WebGPU init error: {:?}", e);
            None
        }
    }
}

/// Drive `ctx` from `requestAnimationFrame` for the lifetime of the page.
/// The loop reschedules itself every frame, paused or not.
pub fn start_loop<F: FrameDriver + 'static>(ctx: Rc<RefCell<F>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
