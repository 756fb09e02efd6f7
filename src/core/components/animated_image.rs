use std::any::Any;

use crate::core::components::component::{Component, Drawable};
use crate::core::components::context::WindowContext;
use crate::core::components::errors::ImageError;
use crate::core::data::client_size::ClientSize;
use crate::core::data::pixel::Pixel;
use crate::core::data::position::Position;
use crate::core::render::errors::RenderError;
use crate::core::render::target::{BitmapHandle, RenderTarget};

/// A sequence of equally sized frames; each draw shows the current frame
/// and then advances, wrapping after the last one.
#[derive(Debug, Clone)]
pub struct AnimatedImage {
    position: Position,
    size: ClientSize,
    frames: Vec<Vec<Pixel>>,
    bitmaps: Vec<Option<BitmapHandle>>,
    current: usize,
}

impl AnimatedImage {
    pub fn new(position: Position, size: ClientSize, frames: Vec<Vec<Pixel>>) -> Result<Self, ImageError> {
        if size.is_empty() {
            return Err(ImageError::Empty);
        }
        if frames.is_empty() {
            return Err(ImageError::NoFrames);
        }
        if let Some((index, frame)) = frames
            .iter()
            .enumerate()
            .find(|(_, frame)| frame.len() != size.area())
        {
            return Err(ImageError::FrameSizeMismatch {
                index,
                expected: size.area(),
                actual: frame.len(),
            });
        }

        Ok(Self {
            position,
            size,
            bitmaps: vec![None; frames.len()],
            frames,
            current: 0,
        })
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
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    #[must_use]
    pub fn current_frame(&self) -> usize {
        self.current
    }

    /// Jumps to `frame`; out of range values wrap around.
    pub fn set_current_frame(&mut self, frame: usize) {
        self.current = frame % self.frames.len();
    }

    #[must_use]
    pub fn uploaded_frames(&self) -> usize {
        self.bitmaps.iter().flatten().count()
    }
}

impl Component for AnimatedImage {
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

impl Drawable for AnimatedImage {
    fn draw(&mut self, _window: &WindowContext, target: &mut RenderTarget) -> Result<(), RenderError> {
        let handle = match self.bitmaps[self.current] {
            Some(handle) => handle,
            None => {
                let handle = target.create_bitmap(self.size, &self.frames[self.current])?;
                self.bitmaps[self.current] = Some(handle);
                handle
            }
        };

        target.draw_bitmap(handle, self.position)?;
        self.current = (self.current + 1) % self.frames.len();
        Ok(())
    }

    fn reconstruct(&mut self) {
        self.bitmaps.fill(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::render::canvas::Canvas;
    use crate::core::render::errors::SurfaceError;
    use crate::core::render::ports::surface::SurfacePort;

    struct NullSurface;

    impl SurfacePort for NullSurface {
        fn size(&self) -> ClientSize {
            ClientSize::new(1, 1)
        }

        fn present(&mut self, _canvas: &Canvas) -> Result<(), SurfaceError> {
            Ok(())
        }
    }

    fn target(generation: u64) -> RenderTarget {
        let mut target = RenderTarget::new(generation, Box::new(NullSurface));
        target.begin_draw();
        target
    }

    fn three_frames() -> AnimatedImage {
        let frames = vec![
            vec![Pixel::rgb(255, 0, 0)],
            vec![Pixel::rgb(0, 255, 0)],
            vec![Pixel::rgb(0, 0, 255)],
        ];
        AnimatedImage::new(Position::ORIGIN, ClientSize::new(1, 1), frames).expect("valid frames")
    }

    #[test]
    fn frames_must_match_size() {
        let frames = vec![vec![Pixel::BLACK], vec![Pixel::BLACK; 2]];

        let result = AnimatedImage::new(Position::ORIGIN, ClientSize::new(1, 1), frames);

        assert_eq!(
            result.unwrap_err(),
            ImageError::FrameSizeMismatch {
                index: 1,
                expected: 1,
                actual: 2
            }
        );
    }

    #[test]
    fn at_least_one_frame_is_required() {
        let result = AnimatedImage::new(Position::ORIGIN, ClientSize::new(1, 1), Vec::new());

        assert_eq!(result.unwrap_err(), ImageError::NoFrames);
    }

    #[test]
    fn draw_shows_current_frame_and_wraps() {
        let mut image = three_frames();
        let mut target = target(1);
        let window = WindowContext::default();

        let mut shown = Vec::new();
        for _ in 0..4 {
            image.draw(&window, &mut target).expect("draws");
            shown.push(target.canvas().pixel(0, 0));
        }

        assert_eq!(
            shown,
            vec![
                Some(Pixel::rgb(255, 0, 0)),
                Some(Pixel::rgb(0, 255, 0)),
                Some(Pixel::rgb(0, 0, 255)),
                Some(Pixel::rgb(255, 0, 0)),
            ]
        );
        assert_eq!(target.bitmap_count(), 3);
        assert_eq!(image.current_frame(), 1);
    }

    #[test]
    fn reconstruct_forgets_every_upload() {
        let mut image = three_frames();
        let mut target = target(1);
        image.draw(&WindowContext::default(), &mut target).expect("draws");
        image.draw(&WindowContext::default(), &mut target).expect("draws");
        assert_eq!(image.uploaded_frames(), 2);

        image.reconstruct();

        assert_eq!(image.uploaded_frames(), 0);
        assert_eq!(image.current_frame(), 2);
    }

    #[test]
    fn set_current_frame_wraps() {
        let mut image = three_frames();

        image.set_current_frame(7);

        assert_eq!(image.current_frame(), 1);
    }
}
