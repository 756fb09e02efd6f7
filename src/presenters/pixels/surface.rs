use log::warn;
use pixels::{Pixels, wgpu};

use crate::adapters::pixel_format::copy_bgra_to_rgba;
use crate::core::data::client_size::ClientSize;
use crate::core::render::canvas::Canvas;
use crate::core::render::errors::SurfaceError;
use crate::core::render::ports::surface::SurfacePort;

/// Presents the canvas through a `pixels` framebuffer.
pub struct PixelsSurface {
    pixels: Pixels<'static>,
    size: ClientSize,
}

impl PixelsSurface {
    pub(crate) fn new(pixels: Pixels<'static>, size: ClientSize) -> Self {
        Self { pixels, size }
    }
}

impl SurfacePort for PixelsSurface {
    fn size(&self) -> ClientSize {
        self.size
    }

    fn present(&mut self, canvas: &Canvas) -> Result<(), SurfaceError> {
        if canvas.size() != self.size {
            return Err(SurfaceError::Backend(format!(
                "canvas is {}x{} but surface is {}x{}",
                canvas.size().width,
                canvas.size().height,
                self.size.width,
                self.size.height
            )));
        }

        copy_bgra_to_rgba(canvas.pixels(), self.pixels.frame_mut());
        self.pixels.render().map_err(surface_error)
    }
}

fn surface_error(error: pixels::Error) -> SurfaceError {
    match error {
        pixels::Error::Surface(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
            SurfaceError::DeviceLost
        }
        other => {
            warn!("pixels render failed: {other}");
            SurfaceError::Backend(other.to_string())
        }
    }
}
