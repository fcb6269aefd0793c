// THEORY:
// `PixelGrid` is the bridge between the image decoder and the contrast core. It
// owns a flat, row-major buffer of samples indexed `[row, column, channel]`, the
// same layout `image` uses for its interleaved buffers, so decoding is a plain
// widening copy with no reordering.
//
// The grid itself only guarantees that the buffer length matches its declared
// shape. Whether the shape is usable (three channels, non-empty) is checked by
// the estimator, which is the component that needs those properties.

use crate::core_modules::error::InvalidInput;
use crate::core_modules::pixel::pixel::{CHANNELS, Channel, Pixel};
use image::DynamicImage;

/// A decoded image as a `height x width x channels` grid of samples.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelGrid {
    height: usize,
    width: usize,
    channels: usize,
    samples: Vec<Channel>,
}

impl PixelGrid {
    /// Wraps a row-major, channel-interleaved sample buffer.
    pub fn new(
        height: usize,
        width: usize,
        channels: usize,
        samples: Vec<Channel>,
    ) -> Result<Self, InvalidInput> {
        let expected = height
            .checked_mul(width)
            .and_then(|cells| cells.checked_mul(channels))
            .unwrap_or(usize::MAX);
        if samples.len() != expected {
            return Err(InvalidInput::SampleCount {
                expected,
                found: samples.len(),
            });
        }
        Ok(Self {
            height,
            width,
            channels,
            samples,
        })
    }

    /// Builds an RGB grid by evaluating `f(row, column)` for every cell.
    pub fn from_fn<F>(height: usize, width: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> Pixel,
    {
        let mut samples = Vec::with_capacity(height * width * CHANNELS);
        for row in 0..height {
            for column in 0..width {
                samples.extend(<[Channel; 3]>::from(f(row, column)));
            }
        }
        Self {
            height,
            width,
            channels: CHANNELS,
            samples,
        }
    }

    /// Converts a decoded image, keeping samples at their native scale.
    ///
    /// Only three-channel layouts are accepted; grayscale and alpha-carrying
    /// images are rejected rather than silently converted.
    pub fn from_dynamic_image(image: &DynamicImage) -> Result<Self, InvalidInput> {
        let (width, height) = (image.width() as usize, image.height() as usize);
        let samples: Vec<Channel> = match image {
            DynamicImage::ImageRgb8(buffer) => buffer.as_raw().iter().map(|&s| s as Channel).collect(),
            DynamicImage::ImageRgb16(buffer) => buffer.as_raw().iter().map(|&s| s as Channel).collect(),
            DynamicImage::ImageRgb32F(buffer) => buffer.as_raw().iter().map(|&s| s as Channel).collect(),
            other => {
                return Err(InvalidInput::ChannelCount {
                    found: other.color().channel_count() as usize,
                });
            }
        };
        Self::new(height, width, CHANNELS, samples)
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    pub fn samples(&self) -> &[Channel] {
        &self.samples
    }

    /// Iterates the channel groups of every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &[Channel]> {
        // A zero channel count would make `chunks_exact` panic.
        self.samples.chunks_exact(self.channels.max(1))
    }

    /// The pixel at `(row, column)`, if in bounds and the grid is RGB.
    pub fn pixel(&self, row: usize, column: usize) -> Option<Pixel> {
        if row >= self.height || column >= self.width || self.channels != CHANNELS {
            return None;
        }
        let start = (row * self.width + column) * CHANNELS;
        Pixel::try_from(&self.samples[start..start + CHANNELS]).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgb, Rgba};

    #[test]
    fn new_rejects_mismatched_sample_count() {
        let err = PixelGrid::new(2, 2, 3, vec![0.0; 11]).unwrap_err();
        assert_eq!(
            err,
            InvalidInput::SampleCount {
                expected: 12,
                found: 11
            }
        );
    }

    #[test]
    fn new_accepts_any_shape_with_matching_length() {
        let grid = PixelGrid::new(1, 2, 4, vec![0.0; 8]).unwrap();
        assert_eq!(grid.channels(), 4);
        assert_eq!(grid.cells().count(), 2);
        assert!(grid.pixel(0, 0).is_none());
    }

    #[test]
    fn from_fn_lays_out_rows_then_columns() {
        let grid = PixelGrid::from_fn(2, 3, |row, column| {
            Pixel::new(row as f64, column as f64, 0.0)
        });
        assert_eq!((grid.height(), grid.width(), grid.channels()), (2, 3, 3));
        assert_eq!(grid.pixel(1, 2), Some(Pixel::new(1.0, 2.0, 0.0)));
        assert_eq!(&grid.samples()[..6], &[0.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
        assert!(grid.pixel(2, 0).is_none());
    }

    #[test]
    fn rgb8_image_converts_at_native_scale() {
        let buffer = ImageBuffer::from_fn(2, 1, |x, _| Rgb([x as u8 * 200, 10, 255]));
        let grid = PixelGrid::from_dynamic_image(&DynamicImage::ImageRgb8(buffer)).unwrap();
        assert_eq!((grid.height(), grid.width()), (1, 2));
        assert_eq!(grid.pixel(0, 1), Some(Pixel::new(200.0, 10.0, 255.0)));
    }

    #[test]
    fn rgb16_image_converts_at_native_scale() {
        let buffer = ImageBuffer::from_pixel(1, 1, Rgb([65535u16, 0, 1]));
        let grid = PixelGrid::from_dynamic_image(&DynamicImage::ImageRgb16(buffer)).unwrap();
        assert_eq!(grid.pixel(0, 0), Some(Pixel::new(65535.0, 0.0, 1.0)));
    }

    #[test]
    fn rgba_and_grayscale_images_are_rejected() {
        let rgba = ImageBuffer::from_pixel(1, 1, Rgba([0u8, 0, 0, 255]));
        assert_eq!(
            PixelGrid::from_dynamic_image(&DynamicImage::ImageRgba8(rgba)),
            Err(InvalidInput::ChannelCount { found: 4 })
        );

        let luma = DynamicImage::new_luma8(2, 2);
        assert_eq!(
            PixelGrid::from_dynamic_image(&luma),
            Err(InvalidInput::ChannelCount { found: 1 })
        );
    }
}
