use log::{debug, trace};

use crate::{error::Result, geoalg::i32_math::{dimensions::Dimensions, matrix::Matrix}};

use super::{observer::{WindowObserver, WindowStep}, Slides};

/// Valid (unpadded) 2d convolution of a single kernel over a single channel.
/// As is conventional for image filters the kernel is not flipped, so this is a cross correlation.
#[derive(Debug, Clone, PartialEq)]
pub struct Convolution2d {
    pub kernel: Matrix,
    stride: usize
}

impl Convolution2d {
    /// Convolution with a stride of 1.
    pub fn new(kernel: Matrix) -> Self {
        Self { kernel, stride: 1 }
    }

    /// Stride is validated when the convolution is applied.
    pub fn with_stride(self, stride: usize) -> Self {
        Self { stride, ..self }
    }
}

impl Slides for Convolution2d {
    fn window_dimensions(&self) -> Dimensions {
        self.kernel.dimensions()
    }

    fn stride(&self) -> usize {
        self.stride
    }

    fn forward_observed(&self, inputs: &Matrix, observer: &mut dyn WindowObserver) -> Result<Matrix> {
        let k_d = self.window_dimensions();
        let o_d = self.output_dimensions(inputs)?;
        let (rows, columns) = o_d.shape();

        debug!("Convolving {:?} input with {:?} kernel at stride {} into {:?}",
            inputs.shape(), k_d.shape(), self.stride, o_d.shape());

        let mut values = Vec::with_capacity(rows * columns);
        for row in 0..rows {
            let w_row = row * self.stride;
            for column in 0..columns {
                let w_column = column * self.stride;

                let window = inputs.window(w_row, w_column, &k_d);
                let product = window.mul_element_wise(&self.kernel);
                let sum = product.sum();
                trace!("Convolution window [{row}, {column}] sums to {sum}");

                observer.observe(&WindowStep::Convolution {
                    position: (row, column),
                    window: &window,
                    product: &product,
                    sum
                })?;

                values.push(sum);
            }
        }

        Ok(Matrix::new(rows, columns, values))
    }
}

/// Convolves inputs with kernel, without tracing.
pub fn convolve(inputs: &Matrix, kernel: &Matrix, stride: usize) -> Result<Matrix> {
    Convolution2d::new(kernel.clone()).with_stride(stride).forward(inputs)
}
