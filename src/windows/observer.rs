use crate::{error::Result, geoalg::i32_math::matrix::Matrix};

/// What a sliding operation computed at one output position.
#[derive(Debug, Clone, Copy)]
pub enum WindowStep<'a> {
    Convolution {
        /// (row, column) in the output matrix.
        position: (usize, usize),
        window: &'a Matrix,
        /// Window multiplied element-wise by the kernel.
        product: &'a Matrix,
        sum: i32
    },
    MaxPooling {
        position: (usize, usize),
        window: &'a Matrix,
        max: i32
    }
}

impl WindowStep<'_> {
    pub fn position(&self) -> (usize, usize) {
        match self {
            WindowStep::Convolution { position, .. } | WindowStep::MaxPooling { position, .. } => *position
        }
    }

    pub fn window(&self) -> &Matrix {
        match self {
            WindowStep::Convolution { window, .. } | WindowStep::MaxPooling { window, .. } => window
        }
    }

    /// The value written to the output at position.
    pub fn value(&self) -> i32 {
        match self {
            WindowStep::Convolution { sum, .. } => *sum,
            WindowStep::MaxPooling { max, .. } => *max
        }
    }
}

/// Receives every window a sliding operation visits, in row-major output order.
/// An error stops the operation and is returned to its caller.
pub trait WindowObserver {
    fn observe(&mut self, step: &WindowStep<'_>) -> Result<()>;
}

/// Observer that ignores every step.
pub struct NoTrace;

impl WindowObserver for NoTrace {
    fn observe(&mut self, _step: &WindowStep<'_>) -> Result<()> {
        Ok(())
    }
}

impl<F> WindowObserver for F
where
    F: FnMut(&WindowStep<'_>)
{
    fn observe(&mut self, step: &WindowStep<'_>) -> Result<()> {
        self(step);
        Ok(())
    }
}
