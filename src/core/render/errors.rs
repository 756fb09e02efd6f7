use thiserror::Error;

use crate::core::render::target::BitmapHandle;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("no surface factory is attached to the render resource")]
    NoFactory,

    #[error("cannot create a surface for an empty client area")]
    EmptyClientArea,

    #[error("failed to create surface: {0}")]
    SurfaceCreation(String),

    #[error("bitmap data holds {actual} pixels, expected {expected}")]
    BitmapSizeMismatch { expected: usize, actual: usize },

    #[error("bitmap {handle:?} was created by render target generation {handle_generation}, current generation is {target_generation}")]
    StaleBitmap {
        handle: BitmapHandle,
        handle_generation: u64,
        target_generation: u64,
    },

    #[error("unknown bitmap {0:?}")]
    UnknownBitmap(BitmapHandle),

    #[error("draw call issued outside of a begin_draw/end_draw pass")]
    NotDrawing,
}

/// Failure reported by a surface when presenting a frame.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurfaceError {
    /// The device behind the surface is gone; the render target must be
    /// recreated.
    #[error("render device lost")]
    DeviceLost,

    #[error("surface backend error: {0}")]
    Backend(String),
}
