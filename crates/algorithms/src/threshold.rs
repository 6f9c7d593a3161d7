//! Binary thresholding of a difference raster

use crate::maybe_rayon::*;
use terradiff_core::raster::Raster;
use terradiff_core::{Error, Result};

/// Mask value for a changed pixel
pub const MASK_SET: u8 = 255;
/// Mask value for an unchanged pixel
pub const MASK_CLEAR: u8 = 0;

/// Binarize a difference raster into a raw change mask.
///
/// Boundary rule: a pixel is changed iff its difference magnitude is
/// *strictly greater* than `t`; a pixel equal to the threshold stays
/// unchanged. `t` must fit the 8-bit sample range; larger values fail with
/// [`Error::InvalidThreshold`] rather than being clamped.
pub fn threshold(diff: &Raster<u8>, t: u16) -> Result<Raster<u8>> {
    if t > u8::MAX as u16 {
        return Err(Error::InvalidThreshold {
            value: t,
            max: u8::MAX as u16,
        });
    }
    let t = t as u8;

    let (rows, cols) = diff.shape();
    let data: Vec<u8> = (0..rows)
        .into_par_iter()
        .flat_map(|row| {
            let mut out = Vec::with_capacity(cols);
            for col in 0..cols {
                let v = unsafe { diff.get_unchecked(row, col) };
                out.push(if v > t { MASK_SET } else { MASK_CLEAR });
            }
            out
        })
        .collect();

    Raster::from_vec(data, rows, cols)
}
