//! TerraDiff CLI - detect ground-surface change between two rasters

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use terradiff_algorithms::normalize::normalize;
use terradiff_algorithms::pipeline::{run, PipelineConfig};
use terradiff_core::io::{read_geotiff, read_gray_image};
use terradiff_core::Raster;
use terradiff_render::{write_outputs, DirSink, OutputOptions};

#[derive(Parser)]
#[command(name = "terradiff")]
#[command(author, version, about = "Bi-temporal satellite change detection", long_about = None)]
struct Cli {
    /// Before raster (.tif/.tiff, .png, .jpg)
    before: PathBuf,

    /// After raster, same dimensions as before
    after: PathBuf,

    /// Output directory for thumbnails and meta.json
    out_dir: PathBuf,

    /// Pixel difference threshold on the 0-255 scale (strictly greater than)
    #[arg(short, long, default_value_t = 25)]
    threshold: u16,

    /// Structuring element side length, odd and >= 1
    #[arg(short, long, default_value_t = 3)]
    kernel_size: usize,

    /// Morphological cleanup passes; 0 keeps the raw mask
    #[arg(short, long, default_value_t = 1)]
    iterations: usize,

    /// Square thumbnail side in pixels; 0 keeps native dimensions
    #[arg(long, default_value_t = 512)]
    thumb_size: u32,

    /// Also write a red-tinted change overlay on the after image
    #[arg(long)]
    overlay: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");
}

/// Read an input raster onto the common 8-bit scale.
///
/// Float TIFF bands are min-max normalized; already-8-bit image formats
/// pass through unchanged.
fn read_input(path: &Path) -> Result<Raster<u8>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    let raster = match ext.as_str() {
        "tif" | "tiff" => {
            let raw: Raster<f32> = read_geotiff(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            normalize(&raw).context("failed to normalize input")?
        }
        "png" | "jpg" | "jpeg" => {
            read_gray_image(path).with_context(|| format!("failed to read {}", path.display()))?
        }
        _ => bail!(
            "unsupported input format '{}' for {} (expected tif, tiff, png, jpg, jpeg)",
            ext,
            path.display()
        ),
    };

    info!(
        "Input {}: {} x {}",
        path.display(),
        raster.cols(),
        raster.rows()
    );
    Ok(raster)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let config = PipelineConfig {
        threshold: cli.threshold,
        kernel_size: cli.kernel_size,
        iterations: cli.iterations,
    };
    config
        .validate()
        .context("invalid pipeline configuration")?;

    let before = read_input(&cli.before)?;
    let after = read_input(&cli.after)?;

    let start = Instant::now();
    let detection = run(&before, &after, &config).context("change detection failed")?;
    info!("Pipeline finished in {:.2?}", start.elapsed());

    let options = OutputOptions {
        thumb_size: if cli.thumb_size == 0 {
            None
        } else {
            Some(cli.thumb_size)
        },
        overlay: cli.overlay,
    };
    let mut sink = DirSink::new(&cli.out_dir);
    write_outputs(&mut sink, &detection, &options).context("failed to write outputs")?;

    println!("Change pixels : {}", detection.stats.changed_pixel_count);
    println!("Change area % : {:.2}%", detection.stats.percent_changed);
    println!("Outputs saved : {}", cli.out_dir.display());

    Ok(())
}
