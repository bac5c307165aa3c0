//! Errors raised while building a scene or validating a render setup.
//!
//! Nothing in here is produced while tracing: degenerate geometry met by a
//! ray is simply a miss.

use thiserror::Error;

/// Invalid shape or light parameters, detected at construction time.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("plane normal has zero length")]
    ZeroNormal,

    #[error("rectangle edge `{0}` is shorter than the minimum length")]
    DegenerateEdge(&'static str),

    #[error("rectangle edges are parallel, the quad has no area")]
    ParallelEdges,

    #[error("sphere radius must be positive and finite, got {0}")]
    InvalidRadius(f32),

    #[error("light power must be non-negative and finite, got {0}")]
    InvalidPower(f32),
}

/// Invalid render settings, detected before any ray is traced.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("image dimensions must be non-zero, got {width}x{height}")]
    EmptyImage { width: u32, height: u32 },

    #[error("`{0}` must be at least 1")]
    ZeroSamples(&'static str),

    #[error("field of view must be inside (0, 180) degrees, got {0}")]
    InvalidFov(f32),

    #[error("camera target coincides with camera position")]
    DegenerateView,

    #[error("camera up vector is parallel to the view direction")]
    DegenerateUp,
}
