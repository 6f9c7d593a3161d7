//! Binary dilation (any-of-neighborhood filter)
//!
//! A pixel becomes set if any structuring-element neighbor is set. Expands
//! changed regions and bridges gaps smaller than the element footprint.

use crate::maybe_rayon::*;
use crate::threshold::{MASK_CLEAR, MASK_SET};
use terradiff_core::raster::Raster;
use terradiff_core::{Algorithm, Error, Result};

use super::element::StructuringElement;

/// Parameters for binary dilation
#[derive(Debug, Clone, Default)]
pub struct DilateParams {
    /// Structuring element shape
    pub element: StructuringElement,
}

/// Dilation algorithm
#[derive(Debug, Clone, Default)]
pub struct Dilate;

impl Algorithm for Dilate {
    type Input = Raster<u8>;
    type Output = Raster<u8>;
    type Params = DilateParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "Dilate"
    }

    fn description(&self) -> &'static str {
        "Binary dilation (pixel becomes set if any neighbor is set)"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        dilate(&input, &params.element)
    }
}

/// Perform binary dilation on a 0/255 change mask.
///
/// Neighbors that fall outside the raster do not vote, matching the border
/// behavior of [`erode`](super::erode).
///
/// # Arguments
/// * `mask` - Input binary mask (zero = clear, nonzero = set)
/// * `element` - Structuring element defining the neighborhood shape
pub fn dilate(mask: &Raster<u8>, element: &StructuringElement) -> Result<Raster<u8>> {
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

                for &(dr, dc) in &offsets {
                    let nr = r + dr;
                    let nc = c + dc;
                    if nr < 0 || nr >= rows as isize || nc < 0 || nc >= cols as isize {
                        continue;
                    }
                    if unsafe { mask.get_unchecked(nr as usize, nc as usize) } != 0 {
                        out[col] = MASK_SET;
                        break;
                    }
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
    fn test_dilate_uniform_clear_is_fixed_point() {
        let mask: Raster<u8> = Raster::new(4, 4);
        let result = dilate(&mask, &StructuringElement::Square(3)).unwrap();
        assert_eq!(result.count_where(|v| v == MASK_SET), 0);
    }

    #[test]
    fn test_dilate_grows_single_pixel() {
        let mut mask = Raster::filled(5, 5, MASK_CLEAR);
        mask.set(2, 2, MASK_SET).unwrap();

        let result = dilate(&mask, &StructuringElement::Square(3)).unwrap();
        // Single pixel grows to its full 3x3 footprint
        assert_eq!(result.count_where(|v| v == MASK_SET), 9);
        assert_eq!(result.get(1, 1).unwrap(), MASK_SET);
        assert_eq!(result.get(3, 3).unwrap(), MASK_SET);
        assert_eq!(result.get(0, 0).unwrap(), MASK_CLEAR);
    }

    #[test]
    fn test_dilate_clipped_at_border() {
        let mut mask = Raster::filled(4, 4, MASK_CLEAR);
        mask.set(0, 0, MASK_SET).unwrap();

        let result = dilate(&mask, &StructuringElement::Square(3)).unwrap();
        // Corner pixel grows only into the in-bounds quadrant
        assert_eq!(result.count_where(|v| v == MASK_SET), 4);
    }

    #[test]
    fn test_dilate_size_one_identity() {
        let mut mask = Raster::filled(3, 3, MASK_CLEAR);
        mask.set(1, 0, MASK_SET).unwrap();

        let result = dilate(&mask, &StructuringElement::Square(1)).unwrap();
        assert_eq!(result, mask);
    }

    #[test]
    fn test_dilate_even_element_rejected() {
        let mask: Raster<u8> = Raster::new(3, 3);
        assert!(matches!(
            dilate(&mask, &StructuringElement::Disk(4)),
            Err(Error::InvalidKernelSize { .. })
        ));
    }
}
