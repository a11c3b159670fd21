use thiserror::Error;

/// Failures surfaced by the scene core. None of them is fatal to the page:
/// callers log and carry on without the decorative feature.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ShelfError {
    #[error("tier index {0} is out of range (expected 0..3)")]
    InvalidTier(usize),
    #[error("renderer failed: {0}")]
    Renderer(String),
    #[error("rendering capability unavailable: {0}")]
    Unavailable(String),
}
