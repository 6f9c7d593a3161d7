//! Demonstration of the change-detection pipeline on synthetic imagery
//!
//! Run with: cargo run --example change_demo

use terradiff_algorithms::prelude::*;

fn main() -> Result<()> {
    // Synthetic "before": gentle gradient standing in for bare terrain
    let size = 64;
    let mut before: Raster<u8> = Raster::new(size, size);
    for r in 0..size {
        for c in 0..size {
            before.set(r, c, ((r + c) * 2 % 120) as u8)?;
        }
    }

    // "After": same terrain, plus a new 10x10 bright structure and a few
    // specks of sensor noise
    let mut after = before.clone();
    for r in 20..30 {
        for c in 35..45 {
            after.set(r, c, 230)?;
        }
    }
    after.set(5, 5, 255)?;
    after.set(50, 12, 255)?;

    let config = PipelineConfig {
        threshold: 40,
        kernel_size: 3,
        iterations: 1,
    };

    let result = run(&before, &after, &config)?;

    println!("Change detection over a {0}x{0} scene", size);
    println!("  threshold        : {}", config.threshold);
    println!("  kernel size      : {}", config.kernel_size);
    println!("  changed pixels   : {}", result.stats.changed_pixel_count);
    println!("  total pixels     : {}", result.stats.total_pixel_count);
    println!("  changed area     : {:.2}%", result.stats.percent_changed);

    // Crude mask printout for eyeballing
    for r in (0..size).step_by(2) {
        let line: String = (0..size)
            .step_by(2)
            .map(|c| if result.mask.get(r, c).unwrap() != 0 { '#' } else { '.' })
            .collect();
        println!("{}", line);
    }

    Ok(())
}
