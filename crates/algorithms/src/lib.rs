//! # TerraDiff Algorithms
//!
//! The change-detection pipeline stages for TerraDiff.
//!
//! ## Stages (in flow order)
//!
//! - **normalize**: min-max rescale of float inputs to 8-bit
//! - **diff**: absolute pixel-wise difference
//! - **threshold**: binarization into a raw change mask
//! - **morphology**: opening/closing cleanup of the mask
//! - **stats**: changed-pixel count and percent-of-area summary
//! - **pipeline**: the single `run` entry point wiring them together

pub mod diff;
pub mod morphology;
pub mod normalize;
pub mod pipeline;
pub mod stats;
pub mod threshold;

mod maybe_rayon;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::diff::abs_diff;
    pub use crate::morphology::{
        clean_mask, closing, dilate, erode, opening, CleanMask, CleanMaskParams,
        StructuringElement,
    };
    pub use crate::normalize::normalize;
    pub use crate::pipeline::{run, ChangeDetection, PipelineConfig};
    pub use crate::stats::{summarize, ChangeStatistics};
    pub use crate::threshold::{threshold, MASK_CLEAR, MASK_SET};
    pub use terradiff_core::prelude::*;
}
