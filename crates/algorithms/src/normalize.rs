//! Min-max normalization to 8-bit
//!
//! Rescales a float raster so its observed value range maps onto 0-255.
//! Upstream composites arrive as raw reflectance floats; the rest of the
//! pipeline works on the common 8-bit representation.

use crate::maybe_rayon::*;
use terradiff_core::raster::Raster;
use terradiff_core::Result;

/// Rescale a float raster to the full 0-255 range.
///
/// The minimum finite sample maps to 0 and the maximum to 255, with linear
/// interpolation in between (rounded to nearest). Degenerate inputs — empty,
/// constant, or without any finite sample — produce an all-zero raster of
/// the same shape. Non-finite samples map to 0.
pub fn normalize(raster: &Raster<f32>) -> Result<Raster<u8>> {
    let (rows, cols) = raster.shape();

    let mut min = f32::INFINITY;
    let mut max = f32::NEG_INFINITY;
    for &v in raster.data().iter() {
        if v.is_finite() {
            if v < min {
                min = v;
            }
            if v > max {
                max = v;
            }
        }
    }

    if !min.is_finite() || (max - min).abs() < f32::EPSILON {
        return Ok(Raster::new(rows, cols));
    }

    let scale = 255.0 / (max - min);
    let data: Vec<u8> = (0..rows)
        .into_par_iter()
        .flat_map(|row| {
            let mut out = vec![0u8; cols];
            for col in 0..cols {
                let v = unsafe { raster.get_unchecked(row, col) };
                if v.is_finite() {
                    out[col] = ((v - min) * scale).round() as u8;
                }
            }
            out
        })
        .collect();

    Raster::from_vec(data, rows, cols)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_full_range() {
        // Range 0..255 gives a unit scale, so samples map to themselves
        let raster = Raster::from_vec(vec![0.0f32, 51.0, 255.0], 1, 3).unwrap();
        let norm = normalize(&raster).unwrap();
        assert_eq!(norm.get(0, 0).unwrap(), 0);
        assert_eq!(norm.get(0, 1).unwrap(), 51);
        assert_eq!(norm.get(0, 2).unwrap(), 255);
    }

    #[test]
    fn test_normalize_offset_range() {
        let raster = Raster::from_vec(vec![1000.0f32, 3000.0], 1, 2).unwrap();
        let norm = normalize(&raster).unwrap();
        assert_eq!(norm.get(0, 0).unwrap(), 0);
        assert_eq!(norm.get(0, 1).unwrap(), 255);
    }

    #[test]
    fn test_normalize_constant_is_zero() {
        let raster = Raster::filled(4, 4, 42.0f32);
        let norm = normalize(&raster).unwrap();
        assert_eq!(norm.count_where(|v| v != 0), 0);
    }

    #[test]
    fn test_normalize_empty() {
        let raster: Raster<f32> = Raster::new(0, 0);
        let norm = normalize(&raster).unwrap();
        assert!(norm.is_empty());
    }

    #[test]
    fn test_normalize_nan_maps_to_zero() {
        let raster = Raster::from_vec(vec![f32::NAN, 10.0, 20.0], 1, 3).unwrap();
        let norm = normalize(&raster).unwrap();
        assert_eq!(norm.get(0, 0).unwrap(), 0);
        assert_eq!(norm.get(0, 2).unwrap(), 255);
    }
}
