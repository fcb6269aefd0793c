use crate::core_modules::brightness::BrightnessGrid;
use crate::core_modules::error::{ContrastError, Result};
use crate::core_modules::pixel_grid::PixelGrid;
use image::ImageEncoder;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

const JPEG_QUALITY: u8 = 95;

fn open(path: &Path) -> Result<image::DynamicImage> {
    image::open(path).map_err(|source| ContrastError::Image {
        path: path.to_path_buf(),
        source,
    })
}

/// Decodes an image file into a `PixelGrid`.
pub fn load(path: &Path) -> Result<PixelGrid> {
    Ok(PixelGrid::from_dynamic_image(&open(path)?)?)
}

/// Decodes an image file straight into per-pixel brightness.
pub fn load_brightness(path: &Path) -> Result<BrightnessGrid> {
    Ok(BrightnessGrid::from_dynamic_image(&open(path)?)?)
}

/// Encodes a packed RGB8 buffer, as JPEG for `.jpg`/`.jpeg` and PNG otherwise.
pub fn save_rgb(path: &Path, width: u32, height: u32, buffer: &[u8]) -> Result<()> {
    let file = File::create(path).map_err(|source| ContrastError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let output = BufWriter::new(file);

    let is_jpeg = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("jpg") || ext.eq_ignore_ascii_case("jpeg"));

    let encoded = if is_jpeg {
        JpegEncoder::new_with_quality(output, JPEG_QUALITY).write_image(
            buffer,
            width,
            height,
            image::ExtendedColorType::Rgb8,
        )
    } else {
        PngEncoder::new(output).write_image(buffer, width, height, image::ExtendedColorType::Rgb8)
    };

    encoded.map_err(|source| ContrastError::Image {
        path: path.to_path_buf(),
        source,
    })
}
