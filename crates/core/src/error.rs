//! Error types for TerraDiff

use thiserror::Error;

/// Main error type for TerraDiff operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid raster dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("Index out of bounds: ({row}, {col}) in raster of size ({rows}, {cols})")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error(
        "Raster dimensions differ: before is {before_rows}x{before_cols}, after is {after_rows}x{after_cols}"
    )]
    DimensionMismatch {
        before_rows: usize,
        before_cols: usize,
        after_rows: usize,
        after_cols: usize,
    },

    #[error("Cannot decode raster: {0}")]
    Decode(String),

    #[error("Invalid threshold: {value} (valid range is 0..={max})")]
    InvalidThreshold { value: u16, max: u16 },

    #[error("Invalid kernel size: {size} (must be odd and >= 1)")]
    InvalidKernelSize { size: usize },

    #[error("Unsupported data type: {0}")]
    UnsupportedDataType(String),

    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Build a `DimensionMismatch` from two (rows, cols) shapes.
    pub fn dimension_mismatch(before: (usize, usize), after: (usize, usize)) -> Self {
        Error::DimensionMismatch {
            before_rows: before.0,
            before_cols: before.1,
            after_rows: after.0,
            after_cols: after.1,
        }
    }
}

/// Result type alias for TerraDiff operations
pub type Result<T> = std::result::Result<T, Error>;
