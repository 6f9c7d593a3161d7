//! Raster-to-image rendering for display thumbnails

use image::imageops::FilterType;
use image::{GrayImage, ImageFormat, RgbaImage};
use std::io::Cursor;
use terradiff_core::raster::Raster;
use terradiff_core::{Error, Result};

/// Encode an 8-bit raster as a grayscale PNG.
///
/// With `resize_to` set, the image is scaled to a square of that side
/// using nearest-neighbor sampling, so binary masks stay strictly 0/255.
/// Empty rasters cannot be encoded and fail with an error; callers decide
/// whether to skip the thumbnail instead.
pub fn encode_gray_png(raster: &Raster<u8>, resize_to: Option<u32>) -> Result<Vec<u8>> {
    if raster.is_empty() {
        return Err(Error::Other("cannot encode an empty raster".to_string()));
    }

    let (rows, cols) = raster.shape();
    let data: Vec<u8> = raster.data().iter().copied().collect();
    let mut img = GrayImage::from_raw(cols as u32, rows as u32, data)
        .ok_or_else(|| Error::Other("raster buffer does not match dimensions".to_string()))?;

    if let Some(side) = resize_to {
        if side == 0 {
            return Err(Error::Other("thumbnail size must be positive".to_string()));
        }
        img = image::imageops::resize(&img, side, side, FilterType::Nearest);
    }

    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|e| Error::Other(format!("PNG encode error: {}", e)))?;
    Ok(bytes)
}

/// Render a grayscale base image with changed pixels tinted red.
///
/// Produces an RGBA PNG: unchanged pixels keep their gray value, changed
/// pixels are blended halfway toward solid red so the underlying surface
/// stays recognizable.
pub fn encode_overlay_png(
    base: &Raster<u8>,
    mask: &Raster<u8>,
    resize_to: Option<u32>,
) -> Result<Vec<u8>> {
    if base.shape() != mask.shape() {
        return Err(Error::dimension_mismatch(base.shape(), mask.shape()));
    }
    if base.is_empty() {
        return Err(Error::Other("cannot encode an empty raster".to_string()));
    }

    let (rows, cols) = base.shape();
    let mut rgba = vec![0u8; rows * cols * 4];

    for (i, (&v, &m)) in base.data().iter().zip(mask.data().iter()).enumerate() {
        let offset = i * 4;
        if m != 0 {
            rgba[offset] = (v / 2).saturating_add(128);
            rgba[offset + 1] = v / 2;
            rgba[offset + 2] = v / 2;
        } else {
            rgba[offset] = v;
            rgba[offset + 1] = v;
            rgba[offset + 2] = v;
        }
        rgba[offset + 3] = 255;
    }

    let mut img = RgbaImage::from_raw(cols as u32, rows as u32, rgba)
        .ok_or_else(|| Error::Other("raster buffer does not match dimensions".to_string()))?;

    if let Some(side) = resize_to {
        if side == 0 {
            return Err(Error::Other("thumbnail size must be positive".to_string()));
        }
        img = image::imageops::resize(&img, side, side, FilterType::Nearest);
    }

    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|e| Error::Other(format!("PNG encode error: {}", e)))?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(bytes: &[u8]) -> image::DynamicImage {
        image::load_from_memory(bytes).unwrap()
    }

    #[test]
    fn test_encode_gray_roundtrip() {
        let raster = Raster::from_vec(vec![0u8, 100, 200, 255], 2, 2).unwrap();
        let bytes = encode_gray_png(&raster, None).unwrap();

        let img = decode(&bytes).to_luma8();
        assert_eq!(img.dimensions(), (2, 2));
        assert_eq!(img.get_pixel(0, 0).0[0], 0);
        assert_eq!(img.get_pixel(1, 1).0[0], 255);
    }

    #[test]
    fn test_encode_gray_resizes() {
        let raster = Raster::filled(2, 2, 128u8);
        let bytes = encode_gray_png(&raster, Some(8)).unwrap();
        assert_eq!(decode(&bytes).to_luma8().dimensions(), (8, 8));
    }

    #[test]
    fn test_nearest_resize_keeps_mask_binary() {
        let mask = Raster::from_vec(vec![0u8, 255, 255, 0], 2, 2).unwrap();
        let bytes = encode_gray_png(&mask, Some(16)).unwrap();

        let img = decode(&bytes).to_luma8();
        for pixel in img.pixels() {
            assert!(pixel.0[0] == 0 || pixel.0[0] == 255);
        }
    }

    #[test]
    fn test_encode_empty_fails() {
        let raster: Raster<u8> = Raster::new(0, 0);
        assert!(encode_gray_png(&raster, None).is_err());
    }

    #[test]
    fn test_overlay_tints_changed_pixels() {
        let base = Raster::filled(2, 2, 100u8);
        let mut mask: Raster<u8> = Raster::new(2, 2);
        mask.set(0, 0, 255).unwrap();

        let bytes = encode_overlay_png(&base, &mask, None).unwrap();
        let img = decode(&bytes).to_rgba8();

        let changed = img.get_pixel(0, 0).0;
        let unchanged = img.get_pixel(1, 1).0;
        assert!(changed[0] > changed[1], "changed pixel should lean red");
        assert_eq!(unchanged, [100, 100, 100, 255]);
    }

    #[test]
    fn test_overlay_dimension_mismatch() {
        let base = Raster::filled(2, 2, 100u8);
        let mask: Raster<u8> = Raster::new(2, 3);
        assert!(matches!(
            encode_overlay_png(&base, &mask, None),
            Err(Error::DimensionMismatch { .. })
        ));
    }
}
