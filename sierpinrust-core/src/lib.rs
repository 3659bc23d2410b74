pub mod error;
pub mod point;
pub mod sierpinski;
pub mod triangle;
pub mod view;
pub mod viewport;

// Re-export primary types for convenience.
pub use error::CoreError;
pub use point::Point;
pub use sierpinski::{hit_test, leaves, subdivide, SubdivisionParams, TriangleNode};
pub use triangle::Triangle;
pub use view::{View, MAX_ZOOM, MIN_ZOOM, ZOOM_STEP};
pub use viewport::Viewport;

/// Convenience result type for the core crate.
pub type Result<T> = std::result::Result<T, CoreError>;
