//! One-shot readiness signalling.

use crate::error::ShelfError;
use std::sync::atomic::{AtomicBool, Ordering};

/// Fires at most once, no matter how many subsystems or events trigger it.
/// `const`-constructible so a front-end can keep one in a `static`.
#[derive(Debug, Default)]
pub struct ReadyLatch {
    fired: AtomicBool,
}

impl ReadyLatch {
    pub const fn new() -> Self {
        Self {
            fired: AtomicBool::new(false),
        }
    }

    /// Returns true only for the call that actually fired the latch.
    #[inline]
    pub fn fire(&self) -> bool {
        !self.fired.swap(true, Ordering::SeqCst)
    }

    #[inline]
    pub fn has_fired(&self) -> bool {
        self.fired.load(Ordering::SeqCst)
    }
}

/// How a visual subsystem's startup went. Both outcomes release the page.
#[derive(Clone, Debug, PartialEq)]
pub enum InitOutcome {
    Ready,
    Unavailable(String),
}

impl InitOutcome {
    #[inline]
    pub fn is_ready(&self) -> bool {
        matches!(self, InitOutcome::Ready)
    }
}

impl From<ShelfError> for InitOutcome {
    fn from(err: ShelfError) -> Self {
        match err {
            ShelfError::Unavailable(reason) => InitOutcome::Unavailable(reason),
            other => InitOutcome::Unavailable(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latch_fires_exactly_once() {
        let latch = ReadyLatch::new();
        assert!(!latch.has_fired());
        let fired: usize = (0..10).filter(|_| latch.fire()).count();
        assert_eq!(fired, 1);
        assert!(latch.has_fired());
    }

    #[test]
    fn static_latch_is_shared() {
        static LATCH: ReadyLatch = ReadyLatch::new();
        assert!(LATCH.fire());
        assert!(!LATCH.fire());
    }

    #[test]
    fn errors_become_unavailable() {
        let reason = String::from("missing #three-canvas");
        let missing = InitOutcome::from(ShelfError::Unavailable(reason.clone()));
        assert_eq!(missing, InitOutcome::Unavailable(reason));
        let failed: InitOutcome = ShelfError::Renderer("lost".into()).into();
        assert!(!failed.is_ready());
    }
}
