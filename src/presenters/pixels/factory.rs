use pixels::{Pixels, SurfaceTexture};
use winit::window::Window;

use crate::core::data::client_size::ClientSize;
use crate::core::render::errors::RenderError;
use crate::core::render::ports::surface::{SurfaceFactoryPort, SurfacePort};
use crate::presenters::pixels::surface::PixelsSurface;

/// Builds a fresh `pixels` surface for the window on every request.
pub struct PixelsSurfaceFactory {
    window: &'static Window,
}

impl PixelsSurfaceFactory {
    #[must_use]
    pub fn new(window: &'static Window) -> Self {
        Self { window }
    }
}

impl SurfaceFactoryPort for PixelsSurfaceFactory {
    fn create_surface(&mut self, size: ClientSize) -> Result<Box<dyn SurfacePort>, RenderError> {
        let surface_texture = SurfaceTexture::new(size.width, size.height, self.window);
        let pixels = Pixels::new(size.width, size.height, surface_texture)
            .map_err(|error| RenderError::SurfaceCreation(error.to_string()))?;

        Ok(Box::new(PixelsSurface::new(pixels, size)))
    }
}
