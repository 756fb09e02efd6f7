use rayon::prelude::*;

use crate::core::data::client_size::ClientSize;
use crate::core::data::pixel::Pixel;
use crate::core::data::position::Position;

/// BGRA software framebuffer the render target draws into.
#[derive(Debug, Clone)]
pub struct Canvas {
    size: ClientSize,
    pixels: Vec<Pixel>,
}

impl Canvas {
    #[must_use]
    pub fn new(size: ClientSize) -> Self {
        Self {
            size,
            pixels: vec![Pixel::TRANSPARENT; size.area()],
        }
    }

    #[must_use]
    pub fn size(&self) -> ClientSize {
        self.size
    }

    #[must_use]
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Pixel> {
        if x >= self.size.width || y >= self.size.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.size.width as usize + x as usize)
            .copied()
    }

    pub fn clear(&mut self, colour: Pixel) {
        self.pixels.par_iter_mut().for_each(|pixel| *pixel = colour);
    }

    /// Composites `source` (row-major, `source_size`) with its top-left
    /// corner at `position`, clipping against the canvas bounds.
    pub fn blit(&mut self, source: &[Pixel], source_size: ClientSize, position: Position) {
        debug_assert_eq!(source.len(), source_size.area());

        if self.size.is_empty() || source_size.is_empty() {
            return;
        }

        let left = position.x.floor() as i64;
        let top = position.y.floor() as i64;
        let source_width = source_size.width as i64;

        let x_start = left.max(0);
        let x_end = (left + source_width).min(i64::from(self.size.width));
        let y_start = top.max(0);
        let y_end = (top + i64::from(source_size.height)).min(i64::from(self.size.height));

        if x_start >= x_end || y_start >= y_end {
            return;
        }

        let row_width = self.size.width as usize;

        self.pixels
            .par_chunks_mut(row_width)
            .enumerate()
            .skip(y_start as usize)
            .take((y_end - y_start) as usize)
            .for_each(|(y, row)| {
                let source_row = ((y as i64 - top) * source_width) as usize;
                for x in x_start..x_end {
                    let source_index = source_row + (x - left) as usize;
                    let destination = &mut row[x as usize];
                    *destination = source[source_index].over(*destination);
                }
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(size: ClientSize, colour: Pixel) -> Vec<Pixel> {
        vec![colour; size.area()]
    }

    #[test]
    fn new_canvas_is_transparent() {
        let canvas = Canvas::new(ClientSize::new(3, 2));

        assert_eq!(canvas.pixels().len(), 6);
        assert!(canvas.pixels().iter().all(|pixel| *pixel == Pixel::TRANSPARENT));
    }

    #[test]
    fn clear_fills_every_pixel() {
        let mut canvas = Canvas::new(ClientSize::new(4, 4));

        canvas.clear(Pixel::AZURE);

        assert!(canvas.pixels().iter().all(|pixel| *pixel == Pixel::AZURE));
    }

    #[test]
    fn blit_places_source_at_position() {
        let mut canvas = Canvas::new(ClientSize::new(4, 4));
        canvas.clear(Pixel::WHITE);
        let red = Pixel::rgb(255, 0, 0);

        canvas.blit(&solid(ClientSize::new(2, 2), red), ClientSize::new(2, 2), Position::new(1.0, 1.0));

        assert_eq!(canvas.pixel(0, 0), Some(Pixel::WHITE));
        assert_eq!(canvas.pixel(1, 1), Some(red));
        assert_eq!(canvas.pixel(2, 2), Some(red));
        assert_eq!(canvas.pixel(3, 3), Some(Pixel::WHITE));
    }

    #[test]
    fn blit_clips_against_all_edges() {
        let mut canvas = Canvas::new(ClientSize::new(3, 3));
        canvas.clear(Pixel::WHITE);
        let blue = Pixel::rgb(0, 0, 255);

        canvas.blit(&solid(ClientSize::new(5, 5), blue), ClientSize::new(5, 5), Position::new(-1.0, -1.0));

        assert!(canvas.pixels().iter().all(|pixel| *pixel == blue));
    }

    #[test]
    fn fractional_positions_are_floored() {
        let mut canvas = Canvas::new(ClientSize::new(3, 3));
        canvas.clear(Pixel::WHITE);

        canvas.blit(&solid(ClientSize::new(2, 2), Pixel::BLACK), ClientSize::new(2, 2), Position::new(-0.5, 1.7));

        assert_eq!(canvas.pixel(0, 1), Some(Pixel::BLACK));
        assert_eq!(canvas.pixel(1, 1), Some(Pixel::WHITE));
        assert_eq!(canvas.pixel(0, 2), Some(Pixel::BLACK));
        assert_eq!(canvas.pixel(0, 0), Some(Pixel::WHITE));
    }

    #[test]
    fn blit_entirely_outside_is_a_no_op() {
        let mut canvas = Canvas::new(ClientSize::new(3, 3));
        canvas.clear(Pixel::WHITE);

        canvas.blit(&solid(ClientSize::new(2, 2), Pixel::BLACK), ClientSize::new(2, 2), Position::new(10.0, 0.0));
        canvas.blit(&solid(ClientSize::new(2, 2), Pixel::BLACK), ClientSize::new(2, 2), Position::new(0.0, -5.0));

        assert!(canvas.pixels().iter().all(|pixel| *pixel == Pixel::WHITE));
    }

    #[test]
    fn blit_onto_empty_canvas_does_not_panic() {
        let mut canvas = Canvas::new(ClientSize::new(0, 0));

        canvas.blit(&solid(ClientSize::new(1, 1), Pixel::BLACK), ClientSize::new(1, 1), Position::ORIGIN);

        assert!(canvas.pixels().is_empty());
    }

    #[test]
    fn pixel_out_of_bounds_is_none() {
        let canvas = Canvas::new(ClientSize::new(2, 2));

        assert_eq!(canvas.pixel(2, 0), None);
        assert_eq!(canvas.pixel(0, 2), None);
    }
}
