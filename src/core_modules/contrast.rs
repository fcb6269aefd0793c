// THEORY:
// The `contrast_estimator` is the only part of the system with algorithmic content.
// It turns one decoded image into four scalars: the brightness contrast of the whole
// image and of each of its three horizontal bands.
//
// Key architectural principles & algorithm steps:
// 1.  **Brightness**: every pixel is reduced to the unweighted mean of its red, green
//     and blue channels (`BrightnessGrid`).
// 2.  **Contrast**: over a set of brightness values, contrast is the coefficient of
//     variation, population standard deviation divided by mean.
// 3.  **Bands**: the same statistic is taken over each third of the rows, split at
//     `floor(H/3)` and `floor(2H/3)`.
// 4.  **Undefined is data**: a zero mean (an all-black region) or an empty band (an
//     image shorter than three rows) yields NaN. Only malformed input is an error.
// 5.  **Stateless Utility**: `estimate` is a pure function of its borrowed input. It
//     performs no I/O and holds no state, so it may be called from any thread.

use crate::core_modules::band::Band;
use crate::core_modules::brightness::BrightnessGrid;
use crate::core_modules::error::InvalidInput;
use crate::core_modules::pixel_grid::PixelGrid;
use crate::core_modules::statistics::coefficient_of_variation;

/// Contrast of the whole image and of its upper, middle and lower bands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContrastResult {
    pub overall: f64,
    pub band1: f64,
    pub band2: f64,
    pub band3: f64,
}

impl ContrastResult {
    /// A result with every value undefined, used as a placeholder row.
    pub fn undefined() -> Self {
        Self {
            overall: f64::NAN,
            band1: f64::NAN,
            band2: f64::NAN,
            band3: f64::NAN,
        }
    }

    pub fn band(&self, band: Band) -> f64 {
        match band {
            Band::Upper => self.band1,
            Band::Middle => self.band2,
            Band::Lower => self.band3,
        }
    }

    /// `[overall, band1, band2, band3]`.
    pub fn to_array(&self) -> [f64; 4] {
        [self.overall, self.band1, self.band2, self.band3]
    }
}

pub mod contrast_estimator {
    use super::*;

    /// Computes whole-image and per-band brightness contrast.
    pub fn estimate(pixels: &PixelGrid) -> Result<ContrastResult, InvalidInput> {
        let brightness = BrightnessGrid::from_pixels(pixels)?;
        Ok(estimate_brightness(&brightness))
    }

    /// Same as [`estimate`], for a brightness grid that has already been built.
    pub fn estimate_brightness(brightness: &BrightnessGrid) -> ContrastResult {
        let [band1, band2, band3] =
            Band::ALL.map(|band| coefficient_of_variation(brightness.band(band)));
        ContrastResult {
            overall: coefficient_of_variation(brightness.values()),
            band1,
            band2,
            band3,
        }
    }
}
