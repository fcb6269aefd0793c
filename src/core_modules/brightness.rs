// THEORY:
// The `BrightnessGrid` collapses a `PixelGrid` into one value per pixel, the
// unweighted channel mean from `Pixel::brightness`. It keeps the row/column extent
// of its source and stores values row-major, so any run of whole rows (and
// therefore any `Band`) is one contiguous slice. That lets band statistics run over
// a borrowed `&[f64]` without copying.
//
// The grid is the point where input shape is enforced: three channels, at least one
// row and one column. It can also be built straight from a decoded image, which
// skips the widened `PixelGrid` copy and keeps a load at one `f64` per pixel.

use crate::core_modules::band::Band;
use crate::core_modules::error::InvalidInput;
use crate::core_modules::pixel::pixel::{Brightness, CHANNELS, Pixel};
use crate::core_modules::pixel_grid::PixelGrid;
use image::DynamicImage;
use std::ops::Range;

#[derive(Debug, Clone, PartialEq)]
pub struct BrightnessGrid {
    height: usize,
    width: usize,
    values: Vec<Brightness>,
}

impl BrightnessGrid {
    pub fn from_pixels(pixels: &PixelGrid) -> Result<Self, InvalidInput> {
        if pixels.channels() != CHANNELS {
            return Err(InvalidInput::ChannelCount {
                found: pixels.channels(),
            });
        }
        if pixels.height() == 0 || pixels.width() == 0 {
            return Err(InvalidInput::EmptyGrid {
                height: pixels.height(),
                width: pixels.width(),
            });
        }

        let values = pixels
            .cells()
            .map(|cell| Pixel::try_from(cell).map(|pixel| pixel.brightness()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            height: pixels.height(),
            width: pixels.width(),
            values,
        })
    }

    /// Builds the grid directly from a decoded three-channel image. Values are
    /// identical to going through [`PixelGrid::from_dynamic_image`].
    pub fn from_dynamic_image(image: &DynamicImage) -> Result<Self, InvalidInput> {
        let (height, width) = (image.height() as usize, image.width() as usize);
        let values = match image {
            DynamicImage::ImageRgb8(buffer) => brightness_of(buffer.as_raw()),
            DynamicImage::ImageRgb16(buffer) => brightness_of(buffer.as_raw()),
            DynamicImage::ImageRgb32F(buffer) => brightness_of(buffer.as_raw()),
            other => {
                return Err(InvalidInput::ChannelCount {
                    found: other.color().channel_count() as usize,
                });
            }
        };
        if height == 0 || width == 0 {
            return Err(InvalidInput::EmptyGrid { height, width });
        }
        Ok(Self {
            height,
            width,
            values,
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Every cell, flattened row-major.
    pub fn values(&self) -> &[Brightness] {
        &self.values
    }

    /// The cells of a run of whole rows.
    ///
    /// Panics if `rows` reaches past `height`; band ranges never do.
    pub(crate) fn rows(&self, rows: Range<usize>) -> &[Brightness] {
        &self.values[rows.start * self.width..rows.end * self.width]
    }

    pub fn band(&self, band: Band) -> &[Brightness] {
        self.rows(band.rows(self.height))
    }
}

fn brightness_of<S: Copy + Into<f64>>(samples: &[S]) -> Vec<Brightness> {
    samples
        .chunks_exact(CHANNELS)
        .map(|rgb| Pixel::new(rgb[0].into(), rgb[1].into(), rgb[2].into()).brightness())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray(value: f64) -> Pixel {
        Pixel::new(value, value, value)
    }

    #[test]
    fn brightness_keeps_extent_and_order() {
        let pixels = PixelGrid::from_fn(2, 2, |row, column| gray((row * 2 + column) as f64));
        let grid = BrightnessGrid::from_pixels(&pixels).unwrap();
        assert_eq!((grid.height(), grid.width()), (2, 2));
        assert_eq!(grid.values(), &[0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn bands_slice_whole_rows() {
        let pixels = PixelGrid::from_fn(6, 2, |row, _| gray(row as f64));
        let grid = BrightnessGrid::from_pixels(&pixels).unwrap();
        assert_eq!(grid.band(Band::Upper), &[0.0, 0.0, 1.0, 1.0]);
        assert_eq!(grid.band(Band::Middle), &[2.0, 2.0, 3.0, 3.0]);
        assert_eq!(grid.band(Band::Lower), &[4.0, 4.0, 5.0, 5.0]);
    }

    #[test]
    fn bands_stay_in_bounds_and_cover_every_cell() {
        for height in 1..=12 {
            let pixels = PixelGrid::from_fn(height, 3, |row, _| gray(row as f64 + 1.0));
            let grid = BrightnessGrid::from_pixels(&pixels).unwrap();
            let covered: usize = Band::ALL.iter().map(|&band| grid.band(band).len()).sum();
            assert_eq!(covered, grid.values().len(), "height {height}");
        }
    }

    #[test]
    fn rejects_non_rgb_grid() {
        let pixels = PixelGrid::new(1, 1, 4, vec![1.0; 4]).unwrap();
        assert_eq!(
            BrightnessGrid::from_pixels(&pixels),
            Err(InvalidInput::ChannelCount { found: 4 })
        );
    }

    #[test]
    fn rejects_empty_dimensions() {
        let no_rows = PixelGrid::new(0, 5, 3, Vec::new()).unwrap();
        assert_eq!(
            BrightnessGrid::from_pixels(&no_rows),
            Err(InvalidInput::EmptyGrid { height: 0, width: 5 })
        );

        let no_columns = PixelGrid::new(4, 0, 3, Vec::new()).unwrap();
        assert_eq!(
            BrightnessGrid::from_pixels(&no_columns),
            Err(InvalidInput::EmptyGrid { height: 4, width: 0 })
        );
    }

    #[test]
    fn direct_image_conversion_matches_pixel_grid_path() {
        let buffer = image::ImageBuffer::from_fn(7, 5, |x, y| {
            image::Rgb([(x * 31 + y * 7) as u8, (y * 50) as u8, 255 - (x * 3) as u8])
        });
        let image = DynamicImage::ImageRgb8(buffer);

        let direct = BrightnessGrid::from_dynamic_image(&image).unwrap();
        let widened = PixelGrid::from_dynamic_image(&image).unwrap();
        assert_eq!(direct, BrightnessGrid::from_pixels(&widened).unwrap());
        assert_eq!((direct.height(), direct.width()), (5, 7));
    }

    #[test]
    fn direct_image_conversion_rejects_bad_shapes() {
        assert_eq!(
            BrightnessGrid::from_dynamic_image(&DynamicImage::new_rgba8(2, 2)),
            Err(InvalidInput::ChannelCount { found: 4 })
        );
        assert_eq!(
            BrightnessGrid::from_dynamic_image(&DynamicImage::new_rgb8(0, 3)),
            Err(InvalidInput::EmptyGrid { height: 3, width: 0 })
        );
    }
}
