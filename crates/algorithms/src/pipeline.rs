//! End-to-end change-detection pipeline
//!
//! Stages run strictly left to right: diff → threshold → cleanup →
//! statistics. Every stage is a pure function over its whole input; the
//! caller supplies one immutable [`PipelineConfig`] that is validated once
//! at entry.
//!
//! Inputs are expected on a common 8-bit scale. Float sources (raw
//! reflectance TIFFs) go through [`normalize`](crate::normalize::normalize)
//! at load time; already-8-bit sources are used as-is, so a uniform input
//! is preserved rather than collapsed by a degenerate min-max stretch.

use terradiff_core::raster::Raster;
use terradiff_core::{Error, Result};

use crate::diff::abs_diff;
use crate::morphology::{clean_mask, StructuringElement};
use crate::stats::{summarize, ChangeStatistics};
use crate::threshold::threshold;

/// Configuration for one pipeline run.
///
/// Immutable for the duration of the run; validated before any pixel
/// processing begins so bad configuration fails cheap and early.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Intensity cutoff on the 0-255 difference scale (strict `>` rule)
    pub threshold: u16,
    /// Structuring element side length in pixels, odd and >= 1
    pub kernel_size: usize,
    /// Cleanup passes; 0 leaves the raw mask untouched
    pub iterations: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            threshold: 25,
            kernel_size: 3,
            iterations: 1,
        }
    }
}

impl PipelineConfig {
    /// Check all parameters, without touching any pixel data
    pub fn validate(&self) -> Result<()> {
        if self.threshold > u8::MAX as u16 {
            return Err(Error::InvalidThreshold {
                value: self.threshold,
                max: u8::MAX as u16,
            });
        }
        self.element().validate()
    }

    /// The structuring element implied by `kernel_size`
    pub fn element(&self) -> StructuringElement {
        StructuringElement::Square(self.kernel_size)
    }
}

/// Everything one pipeline run produces: the four viewable rasters plus
/// the aggregate statistics.
#[derive(Debug, Clone)]
pub struct ChangeDetection {
    /// Before image on the common 8-bit scale
    pub before: Raster<u8>,
    /// After image on the common 8-bit scale
    pub after: Raster<u8>,
    /// Absolute per-pixel difference
    pub diff: Raster<u8>,
    /// Cleaned binary change mask (0/255)
    pub mask: Raster<u8>,
    /// Aggregate statistics over the cleaned mask
    pub stats: ChangeStatistics,
}

/// Run the full change-detection pipeline on two co-registered 8-bit rasters.
///
/// Fails with [`Error::DimensionMismatch`] before any pixel is read when
/// the inputs disagree in shape; the pipeline never resamples. Empty
/// inputs flow through to an empty result with zeroed statistics.
pub fn run(
    before: &Raster<u8>,
    after: &Raster<u8>,
    config: &PipelineConfig,
) -> Result<ChangeDetection> {
    config.validate()?;

    if before.shape() != after.shape() {
        return Err(Error::dimension_mismatch(before.shape(), after.shape()));
    }

    let diff = abs_diff(before, after)?;
    let raw_mask = threshold(&diff, config.threshold)?;
    let mask = clean_mask(&raw_mask, &config.element(), config.iterations)?;
    let stats = summarize(&mask, config);

    Ok(ChangeDetection {
        before: before.clone(),
        after: after.clone(),
        diff,
        mask,
        stats,
    })
}
