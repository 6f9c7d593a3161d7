//! Binary morphology for change-mask cleanup
//!
//! Classical morphological operations specialized to 0/255 masks:
//! - **Erosion**: pixel stays set only if all neighbors are set
//! - **Dilation**: pixel becomes set if any neighbor is set
//! - **Opening**: erosion then dilation (removes small set features)
//! - **Closing**: dilation then erosion (fills small clear gaps)
//! - **Cleanup**: opening then closing, the pipeline's canonical pass

mod cleanup;
mod closing;
mod dilate;
mod element;
mod erode;
mod opening;

pub use cleanup::{clean_mask, CleanMask, CleanMaskParams};
pub use closing::{closing, Closing, ClosingParams};
pub use dilate::{dilate, Dilate, DilateParams};
pub use element::StructuringElement;
pub use erode::{erode, Erode, ErodeParams};
pub use opening::{opening, Opening, OpeningParams};
