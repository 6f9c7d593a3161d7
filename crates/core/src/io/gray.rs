//! Grayscale PNG/JPEG reading via the `image` crate
//!
//! The upstream imagery provider delivers 8-bit grayscale tiles; color
//! inputs are collapsed to luma on decode.

use crate::error::{Error, Result};
use crate::raster::Raster;
use std::path::Path;

/// Read an image file as a single-band 8-bit raster
pub fn read_gray_image<P: AsRef<Path>>(path: P) -> Result<Raster<u8>> {
    let img = image::open(path.as_ref())
        .map_err(|e| Error::Decode(format!("Image decode error: {}", e)))?;
    luma_to_raster(img)
}

/// Read an image from an in-memory buffer as a single-band 8-bit raster
pub fn read_gray_image_from_buffer(data: &[u8]) -> Result<Raster<u8>> {
    let img = image::load_from_memory(data)
        .map_err(|e| Error::Decode(format!("Image decode error: {}", e)))?;
    luma_to_raster(img)
}

fn luma_to_raster(img: image::DynamicImage) -> Result<Raster<u8>> {
    let gray = img.to_luma8();
    let (width, height) = gray.dimensions();
    Raster::from_vec(gray.into_raw(), height as usize, width as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_garbage_fails() {
        let result = read_gray_image_from_buffer(b"not a png");
        assert!(matches!(result, Err(Error::Decode(_))));
    }

    #[test]
    fn test_png_roundtrip_dimensions() {
        // Encode a tiny 3x2 grayscale PNG, then read it back
        let img = image::GrayImage::from_raw(3, 2, vec![0, 50, 100, 150, 200, 250]).unwrap();
        let mut bytes = Vec::new();
        img.write_to(
            &mut std::io::Cursor::new(&mut bytes),
            image::ImageFormat::Png,
        )
        .unwrap();

        let raster = read_gray_image_from_buffer(&bytes).unwrap();
        assert_eq!(raster.shape(), (2, 3));
        assert_eq!(raster.get(0, 0).unwrap(), 0);
        assert_eq!(raster.get(1, 2).unwrap(), 250);
    }
}
