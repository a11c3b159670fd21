use crate::constants::READY_EVENT;
use crate::dom;
use shelf_core::{InitOutcome, ReadyLatch};
use web_sys as web;

// Shared by every visual subsystem on the page; whichever finishes first wins.
static READY: ReadyLatch = ReadyLatch::new();

/// Tell the page loader the decorative layer is done. Only the first call
/// dispatches the event.
pub fn announce(outcome: &InitOutcome) {
    if !READY.fire() {
        return;
    }
    match outcome {
        InitOutcome::Ready => log::info!("[ready] first frame rendered"),
        InitOutcome::Unavailable(reason) => log::info!("[ready] scene unavailable: {}", reason),
    }
    let Some(document) = dom::window_document() else {
        return;
    };
    match web::Event::new(READY_EVENT) {
        Ok(ev) => {
            _ = document.dispatch_event(&ev);
        }
        Err(e) => log::warn!("[ready] could not create event: {:?}", e),
    }
}
