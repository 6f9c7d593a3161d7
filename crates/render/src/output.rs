//! Output writing: thumbnails plus the metadata record
//!
//! The only I/O in the system lives behind [`OutputSink`], a narrow
//! "write named output" capability, so the pipeline itself stays pure and
//! the writer is testable against an in-memory sink.

use std::fs;
use std::path::PathBuf;
use terradiff_algorithms::pipeline::ChangeDetection;
use terradiff_core::{Error, Result};

use crate::thumb::{encode_gray_png, encode_overlay_png};

/// Output file names (stable contract with the presentation layer)
pub const BEFORE_THUMB: &str = "before_thumb.png";
pub const AFTER_THUMB: &str = "after_thumb.png";
pub const DIFF_THUMB: &str = "diff_thumb.png";
pub const MASK_THUMB: &str = "change_mask_thumb.png";
pub const OVERLAY_THUMB: &str = "change_overlay_thumb.png";
pub const META_FILE: &str = "meta.json";

/// The single write capability handed to the output writer
pub trait OutputSink {
    /// Persist one named output
    fn write(&mut self, name: &str, bytes: &[u8]) -> Result<()>;
}

/// Filesystem sink writing into a directory (created on first use)
#[derive(Debug)]
pub struct DirSink {
    dir: PathBuf,
}

impl DirSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl OutputSink for DirSink {
    fn write(&mut self, name: &str, bytes: &[u8]) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.dir.join(name), bytes)?;
        Ok(())
    }
}

/// In-memory sink capturing outputs, for tests and embedding
#[derive(Debug, Default)]
pub struct MemorySink {
    pub outputs: Vec<(String, Vec<u8>)>,
}

impl MemorySink {
    pub fn get(&self, name: &str) -> Option<&[u8]> {
        self.outputs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, bytes)| bytes.as_slice())
    }
}

impl OutputSink for MemorySink {
    fn write(&mut self, name: &str, bytes: &[u8]) -> Result<()> {
        self.outputs.push((name.to_string(), bytes.to_vec()));
        Ok(())
    }
}

/// Options controlling output rendering
#[derive(Debug, Clone)]
pub struct OutputOptions {
    /// Side length for square thumbnails; `None` keeps native dimensions
    pub thumb_size: Option<u32>,
    /// Additionally write a red-tinted overlay of mask on the after image
    pub overlay: bool,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            thumb_size: Some(512),
            overlay: false,
        }
    }
}

/// Write the four display thumbnails and the metadata record.
///
/// Thumbnails are skipped for empty rasters (there is nothing to render);
/// the metadata record is always written, so an empty run still leaves a
/// complete, machine-readable result.
pub fn write_outputs(
    sink: &mut dyn OutputSink,
    detection: &ChangeDetection,
    options: &OutputOptions,
) -> Result<()> {
    if !detection.before.is_empty() {
        sink.write(
            BEFORE_THUMB,
            &encode_gray_png(&detection.before, options.thumb_size)?,
        )?;
        sink.write(
            AFTER_THUMB,
            &encode_gray_png(&detection.after, options.thumb_size)?,
        )?;
        sink.write(
            DIFF_THUMB,
            &encode_gray_png(&detection.diff, options.thumb_size)?,
        )?;
        sink.write(
            MASK_THUMB,
            &encode_gray_png(&detection.mask, options.thumb_size)?,
        )?;

        if options.overlay {
            sink.write(
                OVERLAY_THUMB,
                &encode_overlay_png(&detection.after, &detection.mask, options.thumb_size)?,
            )?;
        }
    }

    let meta = serde_json::to_vec_pretty(&detection.stats)
        .map_err(|e| Error::Other(format!("metadata encode error: {}", e)))?;
    sink.write(META_FILE, &meta)?;

    Ok(())
}
