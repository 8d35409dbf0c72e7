pub mod convolution2d;
pub mod max_pooling;
pub mod observer;

use crate::{error::Result, geoalg::i32_math::{dimensions::Dimensions, matrix::Matrix}};

use self::observer::{NoTrace, WindowObserver};

/// An operation that slides a fixed window over a matrix, producing one value per position.
pub trait Slides {
    fn window_dimensions(&self) -> Dimensions;

    fn stride(&self) -> usize;

    /// Shape of the matrix forward would return for inputs.
    fn output_dimensions(&self, inputs: &Matrix) -> Result<Dimensions> {
        inputs.dimensions().sliding_output(&self.window_dimensions(), self.stride())
    }

    /// Computes every output position, reporting each window to observer as it goes.
    fn forward_observed(&self, inputs: &Matrix, observer: &mut dyn WindowObserver) -> Result<Matrix>;

    fn forward(&self, inputs: &Matrix) -> Result<Matrix> {
        self.forward_observed(inputs, &mut NoTrace)
    }
}
