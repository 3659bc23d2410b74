pub mod error;
pub mod mapping;
pub mod scene;

pub use error::RenderError;
pub use mapping::SurfaceMapping;
pub use scene::{Scene, ScreenTriangle};

/// Convenience result type for the render crate.
pub type Result<T> = std::result::Result<T, RenderError>;
