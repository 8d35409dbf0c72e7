use std::io::Write;

use crate::{error::Result, prettify::*, windows::observer::{WindowObserver, WindowStep}};

/// Writes each window step as a readable block of text.
pub struct ConsoleTracer<'w, W: Write> {
    out: &'w mut W
}

impl<'w, W: Write> ConsoleTracer<'w, W> {
    pub fn new(out: &'w mut W) -> Self {
        Self { out }
    }
}

impl<W: Write> WindowObserver for ConsoleTracer<'_, W> {
    fn observe(&mut self, step: &WindowStep<'_>) -> Result<()> {
        let (row, column) = step.position();

        writeln!(self.out)?;
        writeln!(self.out, "{BRIGHT_YELLOW}Window (output position [{row}, {column}]):{RESET}")?;

        match step {
            WindowStep::Convolution { window, product, sum, .. } => {
                writeln!(self.out, "Extracted region:")?;
                writeln!(self.out, "{window}")?;
                writeln!(self.out, "Product with the kernel:")?;
                writeln!(self.out, "{product}")?;
                writeln!(self.out, "Sum of values = {sum}")?;
            },
            WindowStep::MaxPooling { window, max, .. } => {
                writeln!(self.out, "Region considered:")?;
                writeln!(self.out, "{window}")?;
                writeln!(self.out, "Maximum value in this window: {max}")?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::geoalg::i32_math::matrix::Matrix;

    use super::*;

    #[test]
    fn test_convolution_step() {
        let window = Matrix::new(2, 2, vec![1, 3, 5, 6]);
        let product = Matrix::new(2, 2, vec![-1, 0, 0, 6]);

        let mut out = Vec::new();
        ConsoleTracer::new(&mut out).observe(&WindowStep::Convolution {
            position: (0, 1),
            window: &window,
            product: &product,
            sum: 5
        }).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Window (output position [0, 1]):"));
        assert!(text.contains("Extracted region:\n[[1 3]\n [5 6]]\n"));
        assert!(text.contains("Product with the kernel:\n[[-1  0]\n [ 0  6]]\n"));
        assert!(text.ends_with("Sum of values = 5\n"));
    }

    #[test]
    fn test_pooling_step() {
        let window = Matrix::new(2, 2, vec![11, 12, 15, 16]);

        let mut out = Vec::new();
        ConsoleTracer::new(&mut out).observe(&WindowStep::MaxPooling {
            position: (1, 1),
            window: &window,
            max: 16
        }).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Window (output position [1, 1]):"));
        assert!(text.contains("Region considered:\n[[11 12]\n [15 16]]\n"));
        assert!(text.ends_with("Maximum value in this window: 16\n"));
    }
}
