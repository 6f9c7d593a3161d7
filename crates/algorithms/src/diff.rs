//! Absolute pixel-wise difference between two temporal rasters

use crate::maybe_rayon::*;
use terradiff_core::raster::Raster;
use terradiff_core::{Error, Result};

/// Compute the absolute per-pixel difference of two equal-dimension rasters.
///
/// Each output sample is `|after - before|`, widened through `i16` so the
/// unsigned subtraction cannot wrap. The operation is symmetric in its
/// arguments and order-independent over pixels. Empty inputs yield an empty
/// output; mismatched shapes fail with [`Error::DimensionMismatch`] before
/// any pixel is read.
pub fn abs_diff(before: &Raster<u8>, after: &Raster<u8>) -> Result<Raster<u8>> {
    let (rows, cols) = before.shape();
    if after.shape() != (rows, cols) {
        return Err(Error::dimension_mismatch(before.shape(), after.shape()));
    }

    let data: Vec<u8> = (0..rows)
        .into_par_iter()
        .flat_map(|row| {
            let mut out = Vec::with_capacity(cols);
            for col in 0..cols {
                let b = unsafe { before.get_unchecked(row, col) } as i16;
                let a = unsafe { after.get_unchecked(row, col) } as i16;
                out.push((a - b).unsigned_abs() as u8);
            }
            out
        })
        .collect();

    Raster::from_vec(data, rows, cols)
}
