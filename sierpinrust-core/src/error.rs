use thiserror::Error;

/// Errors originating from the core geometry engine.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid recursion depth: {0} (must be <= 8)")]
    InvalidDepth(u32),

    #[error("invalid viewport: {reason}")]
    InvalidViewport { reason: String },
}
