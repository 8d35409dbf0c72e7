use crate::error::{Error, Result};

/// Height and width of a grid or of a window sliding over one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub height: usize,
    pub width: usize
}

impl Dimensions {
    pub fn new(height: usize, width: usize) -> Self {
        Self { height, width }
    }

    /// Square window, as used by pooling.
    pub fn square(size: usize) -> Self {
        Self { height: size, width: size }
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    /// Dimensions of the grid produced by sliding `window` over self with `stride`.
    /// Each axis is (input - window) / stride + 1, with floor division.
    /// Fails instead of producing a degenerate grid when the window does not fit.
    pub fn sliding_output(&self, window: &Dimensions, stride: usize) -> Result<Dimensions> {
        Error::check_stride(stride)?;
        Error::check_window(window)?;
        Error::check_fits(window, self)?;

        Ok(Dimensions {
            height: (self.height - window.height) / stride + 1,
            width: (self.width - window.width) / stride + 1
        })
    }
}
