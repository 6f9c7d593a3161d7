//! Summary statistics over a cleaned change mask

use serde::{Deserialize, Serialize};
use terradiff_core::raster::Raster;

use crate::pipeline::PipelineConfig;
use crate::threshold::MASK_SET;

/// Aggregate change statistics plus the parameters that produced them.
///
/// Field names are a stable contract with downstream consumers of the
/// metadata record; do not rename them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeStatistics {
    /// Count of pixels classified as changed in the cleaned mask
    pub changed_pixel_count: u64,
    /// Width times height of the input rasters
    pub total_pixel_count: u64,
    /// `100 * changed / total`, in [0, 100]; 0 for empty rasters
    pub percent_changed: f64,
    /// Threshold the mask was binarized with
    pub threshold_used: u16,
    /// Structuring element side length used for cleanup
    pub morphology_kernel_size: usize,
    /// Cleanup iteration count
    pub morphology_iterations: usize,
}

/// Compute change statistics from a cleaned mask.
///
/// Single sequential pass. `percent_changed` is kept at full precision so
/// it is zero exactly when the changed count is zero; display rounding is
/// the presentation layer's concern. An empty mask yields all-zero counts
/// rather than a division-by-zero fault.
pub fn summarize(mask: &Raster<u8>, config: &PipelineConfig) -> ChangeStatistics {
    let changed = mask.count_where(|v| v == MASK_SET) as u64;
    let total = mask.len() as u64;

    let percent_changed = if total == 0 {
        0.0
    } else {
        100.0 * changed as f64 / total as f64
    };

    ChangeStatistics {
        changed_pixel_count: changed,
        total_pixel_count: total,
        percent_changed,
        threshold_used: config.threshold,
        morphology_kernel_size: config.kernel_size,
        morphology_iterations: config.iterations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::threshold::MASK_CLEAR;

    #[test]
    fn test_summarize_counts() {
        let mut mask = Raster::filled(4, 4, MASK_CLEAR);
        mask.set(0, 0, MASK_SET).unwrap();
        mask.set(3, 3, MASK_SET).unwrap();

        let stats = summarize(&mask, &PipelineConfig::default());
        assert_eq!(stats.changed_pixel_count, 2);
        assert_eq!(stats.total_pixel_count, 16);
        assert!((stats.percent_changed - 12.5).abs() < 1e-12);
    }

    #[test]
    fn test_summarize_empty_mask() {
        let mask: Raster<u8> = Raster::new(0, 0);
        let stats = summarize(&mask, &PipelineConfig::default());
        assert_eq!(stats.changed_pixel_count, 0);
        assert_eq!(stats.total_pixel_count, 0);
        assert_eq!(stats.percent_changed, 0.0);
    }

    #[test]
    fn test_percent_zero_iff_no_changes() {
        let clear = Raster::filled(8, 8, MASK_CLEAR);
        assert_eq!(summarize(&clear, &PipelineConfig::default()).percent_changed, 0.0);

        // Even a single changed pixel must read as strictly positive
        let mut one = Raster::filled(100, 100, MASK_CLEAR);
        one.set(50, 50, MASK_SET).unwrap();
        let stats = summarize(&one, &PipelineConfig::default());
        assert!(stats.percent_changed > 0.0);
        assert!(stats.percent_changed <= 100.0);
    }

    #[test]
    fn test_percent_full_mask_is_100() {
        let mask = Raster::filled(4, 4, MASK_SET);
        let stats = summarize(&mask, &PipelineConfig::default());
        assert_eq!(stats.percent_changed, 100.0);
    }

    #[test]
    fn test_metadata_field_names_are_stable() {
        let mask = Raster::filled(2, 2, MASK_SET);
        let stats = summarize(&mask, &PipelineConfig::default());
        let json = serde_json::to_value(&stats).unwrap();

        for key in [
            "changed_pixel_count",
            "total_pixel_count",
            "percent_changed",
            "threshold_used",
            "morphology_kernel_size",
        ] {
            assert!(json.get(key).is_some(), "missing metadata field {}", key);
        }
    }
}
