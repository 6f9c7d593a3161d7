//! I/O operations for reading raster inputs

mod gray;
mod native;

pub use gray::{read_gray_image, read_gray_image_from_buffer};
pub use native::{read_geotiff, read_geotiff_from_buffer};
