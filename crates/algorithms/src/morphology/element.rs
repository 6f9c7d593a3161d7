//! Structuring element definitions for morphological operations
//!
//! A structuring element defines the neighborhood shape used in erosion,
//! dilation, and the derived opening/closing transforms. Elements are
//! parameterized by their side length in pixels, which must be odd so the
//! element has a center cell.

use terradiff_core::{Error, Result};

/// Shape of a structuring element for morphological operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructuringElement {
    /// Square element of given odd side length
    Square(usize),
    /// Cross (plus-shaped) element of given odd side length
    Cross(usize),
    /// Disk element of given odd side length (diameter)
    Disk(usize),
}

impl Default for StructuringElement {
    fn default() -> Self {
        StructuringElement::Square(3)
    }
}

impl StructuringElement {
    /// Validate the structuring element, returning an error for invalid configurations
    pub fn validate(&self) -> Result<()> {
        let side = self.side();
        if side == 0 || side % 2 == 0 {
            return Err(Error::InvalidKernelSize { size: side });
        }
        Ok(())
    }

    /// Side length of the element in pixels
    pub fn side(&self) -> usize {
        match self {
            StructuringElement::Square(k)
            | StructuringElement::Cross(k)
            | StructuringElement::Disk(k) => *k,
        }
    }

    /// Radius of the element (side / 2)
    pub fn radius(&self) -> usize {
        self.side() / 2
    }

    /// Compute (dr, dc) offsets relative to center for all active cells
    pub fn offsets(&self) -> Vec<(isize, isize)> {
        let r = self.radius() as isize;
        let mut offsets = Vec::new();
        match self {
            StructuringElement::Square(_) => {
                for dr in -r..=r {
                    for dc in -r..=r {
                        offsets.push((dr, dc));
                    }
                }
            }
            StructuringElement::Cross(_) => {
                for d in -r..=r {
                    offsets.push((d, 0));
                    if d != 0 {
                        offsets.push((0, d));
                    }
                }
            }
            StructuringElement::Disk(_) => {
                for dr in -r..=r {
                    for dc in -r..=r {
                        if dr * dr + dc * dc <= r * r {
                            offsets.push((dr, dc));
                        }
                    }
                }
            }
        }
        offsets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_offsets() {
        let se = StructuringElement::Square(3);
        let offsets = se.offsets();
        assert_eq!(offsets.len(), 9);
        assert!(offsets.contains(&(0, 0)));
        assert!(offsets.contains(&(-1, -1)));
        assert!(offsets.contains(&(1, 1)));
    }

    #[test]
    fn test_cross_offsets() {
        let se = StructuringElement::Cross(3);
        let offsets = se.offsets();
        // Plus shape: center + 4 arms = 5
        assert_eq!(offsets.len(), 5);
        assert!(offsets.contains(&(0, 0)));
        assert!(offsets.contains(&(-1, 0)));
        assert!(offsets.contains(&(0, 1)));
        assert!(!offsets.contains(&(-1, -1)));
    }

    #[test]
    fn test_disk_offsets() {
        let se = StructuringElement::Disk(3);
        let offsets = se.offsets();
        // Radius 1: center + 4 cardinal (diagonals are sqrt(2) > 1)
        assert_eq!(offsets.len(), 5);
        assert!(offsets.contains(&(0, 0)));
        assert!(offsets.contains(&(1, 0)));
    }

    #[test]
    fn test_size_one_is_identity_footprint() {
        let se = StructuringElement::Square(1);
        assert_eq!(se.offsets(), vec![(0, 0)]);
        assert!(se.validate().is_ok());
    }

    #[test]
    fn test_validate_even_side() {
        assert!(matches!(
            StructuringElement::Square(4).validate(),
            Err(Error::InvalidKernelSize { size: 4 })
        ));
        assert!(StructuringElement::Cross(2).validate().is_err());
        assert!(StructuringElement::Disk(0).validate().is_err());
    }

    #[test]
    fn test_default() {
        let se = StructuringElement::default();
        assert_eq!(se, StructuringElement::Square(3));
        assert_eq!(se.radius(), 1);
    }
}
