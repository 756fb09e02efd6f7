//! Pixel format conversion helpers for presentation adapters.

use crate::core::data::pixel::Pixel;

/// Copies BGRA canvas pixels into an RGBA byte buffer.
///
/// # Arguments
/// * `src` - Canvas pixels, one `Pixel` per pixel
/// * `dst` - Destination buffer for RGBA data (4 bytes per pixel)
///
/// # Panics
/// Panics if `dst.len()` is not `src.len() * 4`.
pub fn copy_bgra_to_rgba(src: &[Pixel], dst: &mut [u8]) {
    let expected_dst_len = src.len() * 4;
    assert_eq!(
        dst.len(),
        expected_dst_len,
        "dst length {} does not match expected {}",
        dst.len(),
        expected_dst_len
    );

    for (src_pixel, dst_pixel) in src.iter().zip(dst.chunks_exact_mut(4)) {
        dst_pixel[0] = src_pixel.r;
        dst_pixel[1] = src_pixel.g;
        dst_pixel[2] = src_pixel.b;
        dst_pixel[3] = src_pixel.a;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_bgra_to_rgba_known_values() {
        let src = vec![
            Pixel::rgb(255, 0, 0),
            Pixel::rgb(0, 255, 0),
            Pixel::rgb(0, 0, 255),
            Pixel::rgba(10, 20, 30, 40),
        ];
        let mut dst = vec![0; src.len() * 4];

        copy_bgra_to_rgba(&src, &mut dst);

        assert_eq!(
            dst,
            vec![255, 0, 0, 255, 0, 255, 0, 255, 0, 0, 255, 255, 10, 20, 30, 40]
        );
    }

    #[test]
    fn test_copy_bgra_to_rgba_empty_buffers() {
        let src: Vec<Pixel> = vec![];
        let mut dst: Vec<u8> = vec![];

        copy_bgra_to_rgba(&src, &mut dst);

        assert!(dst.is_empty());
    }

    #[test]
    #[should_panic(expected = "does not match expected")]
    fn test_copy_bgra_to_rgba_rejects_short_destination() {
        let src = vec![Pixel::WHITE; 2];
        let mut dst = vec![0; 4];

        copy_bgra_to_rgba(&src, &mut dst);
    }
}
