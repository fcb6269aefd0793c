// THEORY:
// This file is the main entry point for the `band_contrast` library crate.
//
// The library measures brightness contrast in photographs: for each image, the
// coefficient of variation (population standard deviation over mean) of per-pixel
// brightness, over the whole frame and over three horizontal bands. The core
// routine lives in `core_modules::contrast`; everything around it (the fixed label
// set, decoding, batch drivers and CSV output) is thin plumbing exported here so
// the binary and external callers share one API.

pub mod config;
pub mod core_modules;
pub mod labels;
pub mod logging;
pub mod parallel_pipeline;
pub mod pipeline;
pub mod report;

pub use config::BatchConfig;
pub use core_modules::contrast::{ContrastResult, contrast_estimator::estimate};
pub use core_modules::error::{ContrastError, InvalidInput};
pub use core_modules::pixel_grid::PixelGrid;
pub use parallel_pipeline::ParallelContrastPipeline;
pub use pipeline::{BatchSummary, ContrastPipeline};
