//! Error types shared by the contrast core and the image helpers.

use std::path::PathBuf;

/// Why a pixel grid was rejected before any statistic was computed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidInput {
    /// The last dimension is not red, green, blue.
    #[error("expected 3 channels per pixel, found {found}")]
    ChannelCount { found: usize },
    /// Mean and standard deviation are undefined over zero cells.
    #[error("grid has an empty dimension ({height}x{width})")]
    EmptyGrid { height: usize, width: usize },
    /// The flat sample buffer does not cover `height * width * channels`.
    #[error("expected {expected} samples, found {found}")]
    SampleCount { expected: usize, found: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum ContrastError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),

    #[error("failed to decode image {path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("i/o error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ContrastError>;
