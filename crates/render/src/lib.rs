//! # TerraDiff Render
//!
//! Thumbnail rendering and output persistence for TerraDiff.
//!
//! Turns the pipeline's rasters into viewable PNGs and writes them, along
//! with the JSON metadata record, through a narrow [`OutputSink`]
//! capability. Everything upstream of the sink is pure.

pub mod output;
pub mod thumb;

pub use output::{
    write_outputs, DirSink, MemorySink, OutputOptions, OutputSink, AFTER_THUMB, BEFORE_THUMB,
    DIFF_THUMB, MASK_THUMB, META_FILE, OVERLAY_THUMB,
};
pub use thumb::{encode_gray_png, encode_overlay_png};
