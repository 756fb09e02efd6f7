use crate::core::data::client_size::ClientSize;
use crate::core::render::canvas::Canvas;
use crate::core::render::errors::{RenderError, SurfaceError};

/// A device-dependent surface the finished canvas is presented to.
pub trait SurfacePort {
    fn size(&self) -> ClientSize;

    fn present(&mut self, canvas: &Canvas) -> Result<(), SurfaceError>;
}

/// Creates surfaces bound to the window they were built for.
pub trait SurfaceFactoryPort {
    fn create_surface(&mut self, size: ClientSize) -> Result<Box<dyn SurfacePort>, RenderError>;
}
