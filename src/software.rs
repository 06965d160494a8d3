/*! CPU-side pixel images and the power-of-two padding transform.

A [`PixelImage`] is what pixel producers (decoders, procedural generators)
hand to the texture store: a width, a height, and an RGBA byte buffer in
row-major order. The module also owns [`PixelImage::padded`], the pure
transform that rounds an image up to the power-of-two extent the backend
requires — the store calls it on every upload, and callers can run it
themselves to see exactly what the backend will be given.

# Memory layout

Row-major, top-left origin, 4 bytes per pixel, row stride `width * 4`.
This layout uploads directly.

# Example

```
use padded_textures::pixel_formats::Rgba;
use padded_textures::software::PixelImage;

// A 10x10 opaque red image...
let image = PixelImage::new_with(10, 10, |_, _| Rgba { r: 255, g: 0, b: 0, a: 255 });

// ...pads to 16x16 with a transparent black border.
let padded = image.padded();
assert_eq!((padded.width(), padded.height()), (16, 16));
assert_eq!(&padded.data()[..4], &[255, 0, 0, 255]); // top-left pixel
assert_eq!(&padded.data()[10 * 4..11 * 4], &[0, 0, 0, 0]); // first border pixel
```
*/

use crate::bittricks::next_power_of_two;
use crate::pixel_formats::{BYTES_PER_PIXEL, Rgba, pixel_as_bytes};
use std::borrow::Cow;

/// An in-memory RGBA image with its own width and height.
///
/// This is the input to [`Texture::from_image`](crate::textures::Texture::from_image).
/// The store never mutates it; padding produces a new buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelImage {
    data: Vec<u8>,
    width: u32,
    height: u32,
}

impl PixelImage {
    /// Wraps an existing RGBA buffer.
    ///
    /// # Panics
    ///
    /// Panics if `data.len() != width * height * 4`; a mis-sized producer
    /// buffer is a programming error, not a recoverable condition.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Self {
        assert_eq!(
            data.len(),
            width as usize * height as usize * BYTES_PER_PIXEL,
            "pixel buffer must be width * height * 4 bytes"
        );
        Self {
            data,
            width,
            height,
        }
    }

    /// Creates an image with pixels computed by a function of `(x, y)`.
    ///
    /// This is how procedural producers (noise, gradients, test patterns)
    /// build their input without touching byte offsets.
    pub fn new_with<F: Fn(u32, u32) -> Rgba>(width: u32, height: u32, initialize_with: F) -> Self {
        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(initialize_with(x, y));
            }
        }
        Self {
            data: pixel_as_bytes(&pixels).to_vec(),
            width,
            height,
        }
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The raw RGBA bytes, row-major, stride `width * 4`.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Whether the stored extent already equals the power-of-two extent.
    #[inline]
    pub fn is_padded(&self) -> bool {
        self.width == next_power_of_two(self.width) && self.height == next_power_of_two(self.height)
    }

    /// Rounds the image up to the power-of-two extent the backend requires.
    ///
    /// The source is copied into the top-left origin-aligned region; border
    /// pixels are transparent black. Pure: the input image is untouched.
    ///
    /// When the stored extent is already exactly the padded extent this
    /// borrows the image instead of copying — an optimization only, the
    /// copying path is always correct.
    pub fn padded(&self) -> Cow<'_, PixelImage> {
        if self.is_padded() {
            return Cow::Borrowed(self);
        }
        let padded_width = next_power_of_two(self.width) as usize;
        let padded_height = next_power_of_two(self.height) as usize;
        let src_stride = self.width as usize * BYTES_PER_PIXEL;
        let dst_stride = padded_width * BYTES_PER_PIXEL;
        let mut data = vec![0u8; dst_stride * padded_height];
        for y in 0..self.height as usize {
            let src = &self.data[y * src_stride..(y + 1) * src_stride];
            data[y * dst_stride..y * dst_stride + src_stride].copy_from_slice(src);
        }
        Cow::Owned(PixelImage {
            data,
            width: padded_width as u32,
            height: padded_height as u32,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgba = Rgba {
        r: 255,
        g: 0,
        b: 0,
        a: 255,
    };

    #[test]
    fn new_with_fills_row_major() {
        let image = PixelImage::new_with(2, 2, |x, y| Rgba {
            r: x as u8,
            g: y as u8,
            b: 0,
            a: 255,
        });
        assert_eq!(
            image.data(),
            &[0, 0, 0, 255, 1, 0, 0, 255, 0, 1, 0, 255, 1, 1, 0, 255]
        );
    }

    #[test]
    fn exact_extent_takes_borrow_fast_path() {
        let image = PixelImage::new_with(16, 16, |_, _| RED);
        assert!(image.is_padded());
        assert!(matches!(image.padded(), Cow::Borrowed(_)));
    }

    #[test]
    fn pads_to_power_of_two_with_zero_border() {
        let image = PixelImage::new_with(10, 10, |_, _| RED);
        let padded = image.padded();
        assert_eq!((padded.width(), padded.height()), (16, 16));
        for y in 0..16u32 {
            for x in 0..16u32 {
                let offset = (y as usize * 16 + x as usize) * BYTES_PER_PIXEL;
                let pixel = &padded.data()[offset..offset + BYTES_PER_PIXEL];
                if x < 10 && y < 10 {
                    assert_eq!(pixel, &[255, 0, 0, 255], "interior pixel at ({x},{y})");
                } else {
                    assert_eq!(pixel, &[0, 0, 0, 0], "border pixel at ({x},{y})");
                }
            }
        }
        // the input is untouched
        assert_eq!((image.width(), image.height()), (10, 10));
    }

    #[test]
    fn pads_each_axis_independently() {
        let image = PixelImage::new_with(16, 5, |_, _| RED);
        let padded = image.padded();
        assert_eq!((padded.width(), padded.height()), (16, 8));
    }

    #[test]
    #[should_panic(expected = "width * height * 4")]
    fn from_rgba_rejects_short_buffer() {
        PixelImage::from_rgba(4, 4, vec![0u8; 3]);
    }
}
