//! Error types for sliding-window operations.

use thiserror::Error;

use crate::geoalg::i32_math::dimensions::Dimensions;

/// Errors raised while building grids or sliding windows over them.
#[derive(Error, Debug)]
pub enum Error {
    /// Stride of zero would never advance the window.
    #[error("Stride must be a positive integer")]
    ZeroStride,

    /// Window or kernel with no elements.
    #[error("Window must have at least one row and one column, got {height}x{width}")]
    EmptyWindow { height: usize, width: usize },

    /// Window or kernel larger than the grid it slides over.
    #[error("Window {window_height}x{window_width} does not fit inside {input_height}x{input_width} input")]
    WindowExceedsInput {
        window_height: usize,
        window_width: usize,
        input_height: usize,
        input_width: usize,
    },

    /// Grid built from no rows or empty rows.
    #[error("Matrix must have at least one row and one column")]
    EmptyMatrix,

    /// Grid built from rows of differing lengths.
    #[error("Row {row} has {found} columns, expected {expected}")]
    RaggedRows { row: usize, expected: usize, found: usize },

    /// Failure writing a trace.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check that stride advances the window.
    pub fn check_stride(stride: usize) -> Result<()> {
        if stride == 0 {
            return Err(Error::ZeroStride);
        }
        Ok(())
    }

    /// Check that window has at least one element.
    pub fn check_window(window: &Dimensions) -> Result<()> {
        if window.height == 0 || window.width == 0 {
            return Err(Error::EmptyWindow { height: window.height, width: window.width });
        }
        Ok(())
    }

    /// Check that window fits inside input on both axes.
    pub fn check_fits(window: &Dimensions, input: &Dimensions) -> Result<()> {
        if window.height > input.height || window.width > input.width {
            return Err(Error::WindowExceedsInput {
                window_height: window.height,
                window_width: window.width,
                input_height: input.height,
                input_width: input.width,
            });
        }
        Ok(())
    }
}
