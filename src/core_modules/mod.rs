pub mod band;
pub mod brightness;
pub mod contrast;
pub mod error;
pub mod pixel;
pub mod pixel_grid;
pub mod statistics;
pub mod utils;
