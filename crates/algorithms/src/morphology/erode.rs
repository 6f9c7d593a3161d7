//! Binary erosion (all-of-neighborhood filter)
//!
//! A pixel survives erosion only if every structuring-element neighbor is
//! set. Shrinks changed regions and removes speckle smaller than the
//! element footprint.

use crate::maybe_rayon::*;
use crate::threshold::{MASK_CLEAR, MASK_SET};
use terradiff_core::raster::Raster;
use terradiff_core::{Algorithm, Error, Result};

use super::element::StructuringElement;

/// Parameters for binary erosion
#[derive(Debug, Clone, Default)]
pub struct ErodeParams {
    /// Structuring element shape
    pub element: StructuringElement,
}

/// Erosion algorithm
#[derive(Debug, Clone, Default)]
pub struct Erode;

impl Algorithm for Erode {
    type Input = Raster<u8>;
    type Output = Raster<u8>;
    type Params = ErodeParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "Erode"
    }

    fn description(&self) -> &'static str {
        "Binary erosion (pixel stays set only if all neighbors are set)"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        erode(&input, &params.element)
    }
}

/// Perform binary erosion on a 0/255 change mask.
///
/// Neighbors that fall outside the raster do not vote, so a uniformly set
/// mask is a fixed point of erosion. This mirrors replicated-border
/// semantics: the mask never loses area merely for touching the edge.
///
/// # Arguments
/// * `mask` - Input binary mask (zero = clear, nonzero = set)
/// * `element` - Structuring element defining the neighborhood shape
pub fn erode(mask: &Raster<u8>, element: &StructuringElement) -> Result<Raster<u8>> {
    element.validate()?;

    let (rows, cols) = mask.shape();
    let offsets = element.offsets();

    let data: Vec<u8> = (0..rows)
        .into_par_iter()
        .flat_map(|row| {
            let mut out = vec![MASK_CLEAR; cols];

            for col in 0..cols {
                let r = row as isize;
                let c = col as isize;
                let mut all_set = true;

                for &(dr, dc) in &offsets {
                    let nr = r + dr;
                    let nc = c + dc;
                    if nr < 0 || nr >= rows as isize || nc < 0 || nc >= cols as isize {
                        continue;
                    }
                    if unsafe { mask.get_unchecked(nr as usize, nc as usize) } == 0 {
                        all_set = false;
                        break;
                    }
                }

                if all_set {
                    out[col] = MASK_SET;
                }
            }

            out
        })
        .collect();

    Raster::from_vec(data, rows, cols)
}
