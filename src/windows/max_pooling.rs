use log::{debug, trace};

use crate::{error::{Error, Result}, geoalg::i32_math::{dimensions::Dimensions, matrix::Matrix}};

use super::{observer::{WindowObserver, WindowStep}, Slides};

/// Currently only supports valid pooling with square windows, with no padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxPooling {
    pooling_size: usize,
    stride: usize
}

impl MaxPooling {
    pub fn new(pooling_size: usize, stride: usize) -> Self {
        MaxPooling { pooling_size, stride }
    }

    pub fn pooling_size(&self) -> usize {
        self.pooling_size
    }
}

/// 2x2 windows with a stride of 2, halving each axis.
impl Default for MaxPooling {
    fn default() -> Self {
        Self::new(2, 2)
    }
}

impl Slides for MaxPooling {
    fn window_dimensions(&self) -> Dimensions {
        Dimensions::square(self.pooling_size)
    }

    fn stride(&self) -> usize {
        self.stride
    }

    fn forward_observed(&self, inputs: &Matrix, observer: &mut dyn WindowObserver) -> Result<Matrix> {
        let p_d = self.window_dimensions();
        let o_d = self.output_dimensions(inputs)?;
        let (rows, columns) = o_d.shape();

        debug!("Max pooling {:?} input with {:?} window at stride {} into {:?}",
            inputs.shape(), p_d.shape(), self.stride, o_d.shape());

        let mut values = Vec::with_capacity(rows * columns);
        for row in 0..rows {
            let w_row = row * self.stride;
            for column in 0..columns {
                let w_column = column * self.stride;

                let window = inputs.window(w_row, w_column, &p_d);
                let max = window.max().ok_or(Error::EmptyWindow { height: p_d.height, width: p_d.width })?;
                trace!("Pooling window [{row}, {column}] max is {max}");

                observer.observe(&WindowStep::MaxPooling {
                    position: (row, column),
                    window: &window,
                    max
                })?;

                values.push(max);
            }
        }

        Ok(Matrix::new(rows, columns, values))
    }
}

/// Max pools inputs with square windows of pooling_size, without tracing.
pub fn max_pool(inputs: &Matrix, pooling_size: usize, stride: usize) -> Result<Matrix> {
    MaxPooling::new(pooling_size, stride).forward(inputs)
}

#[cfg(test)]
mod tests {
    use colored::Colorize;
    use rand_distr::Uniform;

    use super::*;

    fn sample() -> Matrix {
        Matrix::new(4, 4, vec![
            1, 3, 2, 4,
            5, 6, 7, 8,
            9, 10, 11, 12,
            13, 14, 15, 16
        ])
    }

    #[test]
    fn test_forward2x2() {
        let _ = env_logger::builder().is_test(true).try_init();

        let actual = MaxPooling::default().forward(&sample()).unwrap();
        let expected = Matrix::new(2, 2, vec![
            6, 8,
            14, 16
        ]);

        let msg = format!("Forward pooling: {}", actual).bright_magenta();
        println!("{msg}");
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_overlapping_windows() {
        let actual = max_pool(&sample(), 2, 1).unwrap();
        let expected = Matrix::new(3, 3, vec![
            6, 7, 8,
            10, 11, 12,
            14, 15, 16
        ]);

        assert_eq!(actual, expected);
    }

    #[test]
    fn test_negative_values() {
        let tc = Matrix::new(2, 4, vec![
            -9, -3, -7, -8,
            -4, -5, -2, -6
        ]);

        let actual = max_pool(&tc, 2, 2).unwrap();
        assert_eq!(actual, Matrix::new(1, 2, vec![-3, -2]));
    }

    #[test]
    fn test_bounded_by_region() {
        let inputs = Matrix::new_randomized_uniform(7, 6, Uniform::new_inclusive(-100, 100));

        for (size, stride) in [(1, 1), (2, 1), (2, 2), (3, 2), (3, 3)] {
            let actual = max_pool(&inputs, size, stride).unwrap();
            assert_eq!(actual.shape(), ((7 - size) / stride + 1, (6 - size) / stride + 1));

            for i in 0..actual.row_count() {
                for j in 0..actual.column_count() {
                    let region = inputs.window(i * stride, j * stride, &Dimensions::square(size));
                    assert!(region.read_values().iter().all(|&x| x <= actual[(i, j)]));
                    assert!(region.read_values().contains(&actual[(i, j)]));
                }
            }
        }
    }

    #[test]
    fn test_equal_maxima_order() {
        let first = Matrix::new(2, 2, vec![7, 7, 1, 2]);
        let second = Matrix::new(2, 2, vec![2, 7, 7, 1]);

        assert_eq!(max_pool(&first, 2, 2).unwrap(), max_pool(&second, 2, 2).unwrap());
        assert_eq!(max_pool(&first, 2, 2).unwrap()[(0, 0)], 7);
    }

    #[test]
    fn test_observer_sees_every_window() {
        let mut steps = Vec::new();
        MaxPooling::default().forward_observed(&sample(), &mut |step: &WindowStep<'_>| {
            steps.push((step.position(), step.window().clone(), step.value()));
        }).unwrap();

        assert_eq!(steps.len(), 4);
        assert_eq!(steps[1], ((0, 1), Matrix::new(2, 2, vec![2, 4, 7, 8]), 8));
        assert_eq!(steps[3], ((1, 1), Matrix::new(2, 2, vec![11, 12, 15, 16]), 16));
    }

    #[test]
    fn test_invalid_pooling() {
        assert!(matches!(max_pool(&sample(), 0, 2), Err(Error::EmptyWindow { .. })));
        assert!(matches!(max_pool(&sample(), 5, 1), Err(Error::WindowExceedsInput { .. })));
        assert!(matches!(max_pool(&sample(), 2, 0), Err(Error::ZeroStride)));
    }
}
