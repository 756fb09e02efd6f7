use log::warn;

use crate::core::data::client_size::ClientSize;
use crate::core::data::pixel::Pixel;
use crate::core::data::position::Position;
use crate::core::render::canvas::Canvas;
use crate::core::render::errors::{RenderError, SurfaceError};
use crate::core::render::ports::surface::SurfacePort;

/// Handle to a bitmap uploaded to one particular render target.
///
/// The handle remembers the generation of the target that created it, so a
/// handle kept across a recreation is refused instead of drawing garbage.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct BitmapHandle {
    generation: u64,
    index: usize,
}

impl BitmapHandle {
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug)]
struct Bitmap {
    size: ClientSize,
    pixels: Vec<Pixel>,
}

/// A drawable surface plus the device-dependent bitmaps created on it.
pub struct RenderTarget {
    generation: u64,
    canvas: Canvas,
    bitmaps: Vec<Bitmap>,
    surface: Box<dyn SurfacePort>,
    drawing: bool,
}

impl RenderTarget {
    pub(crate) fn new(generation: u64, surface: Box<dyn SurfacePort>) -> Self {
        Self {
            generation,
            canvas: Canvas::new(surface.size()),
            bitmaps: Vec::new(),
            surface,
            drawing: false,
        }
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn size(&self) -> ClientSize {
        self.canvas.size()
    }

    #[must_use]
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    #[must_use]
    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    #[must_use]
    pub fn bitmap_count(&self) -> usize {
        self.bitmaps.len()
    }

    pub fn begin_draw(&mut self) {
        if self.drawing {
            warn!("begin_draw called twice on render target generation {}", self.generation);
        }
        self.drawing = true;
    }

    pub fn clear(&mut self, colour: Pixel) -> Result<(), RenderError> {
        self.require_drawing()?;
        self.canvas.clear(colour);
        Ok(())
    }

    /// Uploads `pixels` (row-major, `size`) as a bitmap owned by this target.
    pub fn create_bitmap(&mut self, size: ClientSize, pixels: &[Pixel]) -> Result<BitmapHandle, RenderError> {
        if pixels.len() != size.area() {
            return Err(RenderError::BitmapSizeMismatch {
                expected: size.area(),
                actual: pixels.len(),
            });
        }

        self.bitmaps.push(Bitmap {
            size,
            pixels: pixels.to_vec(),
        });

        Ok(BitmapHandle {
            generation: self.generation,
            index: self.bitmaps.len() - 1,
        })
    }

    /// Size of the bitmap behind `handle`, if the handle is current.
    #[must_use]
    pub fn bitmap_size(&self, handle: BitmapHandle) -> Option<ClientSize> {
        lookup(&self.bitmaps, self.generation, handle)
            .ok()
            .map(|bitmap| bitmap.size)
    }

    pub fn draw_bitmap(&mut self, handle: BitmapHandle, position: Position) -> Result<(), RenderError> {
        self.require_drawing()?;

        let bitmap = lookup(&self.bitmaps, self.generation, handle)?;
        self.canvas.blit(&bitmap.pixels, bitmap.size, position);
        Ok(())
    }

    /// Finishes the pass and presents the canvas.
    ///
    /// `SurfaceError::DeviceLost` means this target is unusable and has to be
    /// torn down.
    pub fn end_draw(&mut self) -> Result<(), SurfaceError> {
        if !self.drawing {
            warn!("end_draw without begin_draw on render target generation {}", self.generation);
            return Ok(());
        }
        self.drawing = false;
        self.surface.present(&self.canvas)
    }

    fn require_drawing(&self) -> Result<(), RenderError> {
        if self.drawing {
            Ok(())
        } else {
            Err(RenderError::NotDrawing)
        }
    }
}

fn lookup(bitmaps: &[Bitmap], generation: u64, handle: BitmapHandle) -> Result<&Bitmap, RenderError> {
    if handle.generation != generation {
        return Err(RenderError::StaleBitmap {
            handle,
            handle_generation: handle.generation,
            target_generation: generation,
        });
    }
    bitmaps
        .get(handle.index)
        .ok_or(RenderError::UnknownBitmap(handle))
}
