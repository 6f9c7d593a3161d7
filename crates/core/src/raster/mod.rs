//! Raster grid type and element trait

mod element;
mod grid;

pub use element::RasterElement;
pub use grid::Raster;
