use thiserror::Error;

/// Errors originating from the projection pipeline.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid surface dimensions: {width}\u{d7}{height}")]
    InvalidDimensions { width: f32, height: f32 },

    #[error(transparent)]
    Core(#[from] sierpinrust_core::CoreError),
}
