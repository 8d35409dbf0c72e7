use std::{fmt, ops::Index};
use rand_distr::{Distribution, Uniform};
use crate::error::{Error, Result};

use super::dimensions::Dimensions;

/// Matrix is implemented as a single dimensional vector of i32s.
/// This implementation of Matrix is row-major.
/// Once built, a matrix is never resized or mutated; every operation returns a new one.
#[derive(PartialEq, Eq, Debug, Clone, Default)]
pub struct Matrix {
    rows: usize,
    columns: usize,
    values: Vec<i32>
}

impl Index<(usize, usize)> for Matrix {
    type Output = i32;

    fn index(&self, (row, column): (usize, usize)) -> &Self::Output {
        assert!(row < self.rows && column < self.columns, "Tried to index outside of matrix bounds.");
        &self.values[row * self.columns + column]
    }
}

impl Matrix {
    /// Returns size of underlying vector.
    pub fn len(&self) -> usize { self.values.len() }

    pub fn is_empty(&self) -> bool { self.values.is_empty() }

    /// Returns number of rows this matrix has.
    pub fn row_count(&self) -> usize { self.rows }

    /// Returns number of columns this matrix has.
    pub fn column_count(&self) -> usize { self.columns }

    pub fn shape(&self) -> (usize, usize) { (self.rows, self.columns) }

    pub fn dimensions(&self) -> Dimensions { Dimensions::new(self.rows, self.columns) }

    /// Returns a slice of the values this matrix has.
    pub fn read_values(&self) -> &[i32] { &self.values }

    /// Returns a new Matrix.
    /// Values are read row-major, so there must be exactly rows * columns of them.
    pub fn new(rows: usize, columns: usize, values: Vec<i32>) -> Self {
        assert_eq!(values.len(), rows * columns, "Matrix values do not match its order.");

        Self {
            rows, columns, values
        }
    }

    /// Builds a matrix from nested rows, checking that it is rectangular and non-empty.
    pub fn from_rows(rows: Vec<Vec<i32>>) -> Result<Self> {
        let columns = rows.first().map_or(0, |first| first.len());
        if columns == 0 {
            return Err(Error::EmptyMatrix);
        }

        if let Some((row, found)) = rows.iter()
            .map(|r| r.len())
            .enumerate()
            .find(|&(_, len)| len != columns) {
            return Err(Error::RaggedRows { row, expected: columns, found });
        }

        let row_count = rows.len();
        Ok(Self::new(row_count, columns, rows.into_iter().flatten().collect()))
    }

    /// Returns a contiguous slice of data representing columns in the matrix.
    pub fn row(&self, row_index: usize) -> &[i32] {
        assert!(row_index < self.rows, "Tried to get a row that was out of bounds.");

        let start = row_index * self.columns;
        let end = start + self.columns;
        &self.values[start..end]
    }

    pub fn get(&self, row: usize, column: usize) -> Option<i32> {
        if row < self.rows && column < self.columns {
            Some(self.values[row * self.columns + column])
        } else {
            None
        }
    }

    /// Returns an rows x column matrix filled with random values specified by uniform distribution.
    pub fn new_randomized_uniform(rows: usize, columns: usize, uniform: Uniform<i32>) -> Self {
        assert!(columns > 0);
        assert!(rows > 0);

        let mut rng = rand::thread_rng();
        let element_count = columns * rows;
        let values = uniform.sample_iter(&mut rng).take(element_count).collect();

        Self::new(rows, columns, values)
    }

    /// Copies out the w_d sized sub-matrix whose top left corner is at (row, column).
    pub fn window(&self, row: usize, column: usize, w_d: &Dimensions) -> Self {
        assert!(
            row + w_d.height <= self.rows && column + w_d.width <= self.columns,
            "Window extends past matrix bounds.");

        let mut values = Vec::with_capacity(w_d.height * w_d.width);
        for w_row in row..row + w_d.height {
            values.extend_from_slice(&self.row(w_row)[column..column + w_d.width]);
        }

        Self::new(w_d.height, w_d.width, values)
    }

    /// Hadamard product.
    pub fn mul_element_wise(&self, rhs: &Matrix) -> Self {
        assert!(self.rows == rhs.rows && self.columns == rhs.columns, "When element-wise multiplying two matrices, they must have same order.");

        let values = self.values.iter()
            .zip(&rhs.values)
            .map(|(lhs, rhs)| lhs * rhs)
            .collect();

        Self::new(self.rows, self.columns, values)
    }

    /// Scales matrix by a scalar.
    pub fn scale(&self, scalar: i32) -> Self {
        Self::new(self.rows, self.columns, self.values.iter().map(|x| x * scalar).collect())
    }

    pub fn sum(&self) -> i32 {
        self.values.iter().sum()
    }

    /// Largest value, None when the matrix has no values.
    pub fn max(&self) -> Option<i32> {
        self.values.iter().copied().max()
    }
}

/// Renders as a bracketed block with one row per line and right aligned columns:
/// [[ 1  3]
///  [13 14]]
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.values.iter()
            .map(|x| x.to_string().len())
            .max()
            .unwrap_or(0);

        write!(f, "[")?;
        for row in 0..self.rows {
            if row > 0 {
                write!(f, "\n ")?;
            }

            write!(f, "[")?;
            for (column, value) in self.row(row).iter().enumerate() {
                if column > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{value:>width$}")?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}
