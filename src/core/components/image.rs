use std::any::Any;

use log::debug;

use crate::core::components::component::{Component, Drawable};
use crate::core::components::context::WindowContext;
use crate::core::components::errors::ImageError;
use crate::core::data::client_size::ClientSize;
use crate::core::data::pixel::Pixel;
use crate::core::data::position::Position;
use crate::core::render::errors::RenderError;
use crate::core::render::target::{BitmapHandle, RenderTarget};

/// A still image held in BGRA memory.
///
/// The pixels are uploaded to the render target the first time the image is
/// drawn on it; `reconstruct` forgets the upload so the next draw repeats it
/// on the new target.
#[derive(Debug, Clone)]
pub struct Image {
    position: Position,
    size: ClientSize,
    pixels: Vec<Pixel>,
    bitmap: Option<BitmapHandle>,
}

impl Image {
    pub fn new(position: Position, size: ClientSize, pixels: Vec<Pixel>) -> Result<Self, ImageError> {
        if size.is_empty() {
            return Err(ImageError::Empty);
        }
        if pixels.len() != size.area() {
            return Err(ImageError::SizeMismatch {
                expected: size.area(),
                actual: pixels.len(),
            });
        }

        Ok(Self {
            position,
            size,
            pixels,
            bitmap: None,
        })
    }

    pub fn solid(position: Position, size: ClientSize, colour: Pixel) -> Result<Self, ImageError> {
        Self::new(position, size, vec![colour; size.area()])
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    #[must_use]
    pub fn size(&self) -> ClientSize {
        self.size
    }

    #[must_use]
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Whether a bitmap is currently uploaded.
    #[must_use]
    pub fn has_bitmap(&self) -> bool {
        self.bitmap.is_some()
    }

    fn bitmap_on(&mut self, target: &mut RenderTarget) -> Result<BitmapHandle, RenderError> {
        if let Some(handle) = self.bitmap {
            return Ok(handle);
        }

        let handle = target.create_bitmap(self.size, &self.pixels)?;
        debug!(
            "uploaded {}x{} image to render target generation {}",
            self.size.width,
            self.size.height,
            target.generation()
        );
        Ok(*self.bitmap.insert(handle))
    }
}

impl Component for Image {
    fn as_drawable_mut(&mut self) -> Option<&mut dyn Drawable> {
        Some(self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl Drawable for Image {
    fn draw(&mut self, _window: &WindowContext, target: &mut RenderTarget) -> Result<(), RenderError> {
        let handle = self.bitmap_on(target)?;
        target.draw_bitmap(handle, self.position)
    }

    fn reconstruct(&mut self) {
        self.bitmap = None;
    }
}
