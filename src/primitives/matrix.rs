//! Matrix type for 2D numeric data.

use super::Vector;
use crate::error::{RegressionError, Result};
use serde::{Deserialize, Serialize};

/// A 2D matrix of floating-point values (row-major storage).
///
/// # Examples
///
/// ```
/// use wine_quality::primitives::Matrix;
///
/// let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).expect("data length matches rows * cols");
/// assert_eq!(m.shape(), (2, 3));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Copy> Matrix<T> {
    /// Creates a new matrix from a vector of data.
    ///
    /// # Errors
    ///
    /// Returns an error if data length doesn't match rows * cols.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(RegressionError::dimension_mismatch(
                "rows*cols",
                rows * cols,
                data.len(),
            ));
        }
        Ok(Self { data, rows, cols })
    }

    /// Creates a matrix from a slice of equally sized rows.
    ///
    /// # Errors
    ///
    /// Returns an error if the rows differ in width.
    pub fn from_rows(rows: &[Vec<T>]) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            if row.len() != cols {
                return Err(RegressionError::dimension_mismatch(
                    "row width",
                    cols,
                    row.len(),
                ));
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            data,
            rows: rows.len(),
            cols,
        })
    }

    /// Returns the shape as (rows, cols).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.cols
    }

    /// Gets element at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.data[row * self.cols + col]
    }

    /// Sets element at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self.data[row * self.cols + col] = value;
    }

    /// Returns a row as a Vector.
    #[must_use]
    pub fn row(&self, row_idx: usize) -> Vector<T> {
        let start = row_idx * self.cols;
        let end = start + self.cols;
        Vector::from_slice(&self.data[start..end])
    }

    /// Returns a column as a Vector.
    #[must_use]
    pub fn column(&self, col_idx: usize) -> Vector<T> {
        let data: Vec<T> = (0..self.rows)
            .map(|row| self.data[row * self.cols + col_idx])
            .collect();
        Vector::from_vec(data)
    }

    /// Returns the underlying data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Transposes the matrix: `t[j][i] = m[i][j]`.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for j in 0..self.cols {
            for i in 0..self.rows {
                data.push(self.data[i * self.cols + j]);
            }
        }
        Self {
            data,
            rows: self.cols,
            cols: self.rows,
        }
    }
}

impl Matrix<f64> {
    /// Creates a matrix of zeros.
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![0.0; rows * cols],
            rows,
            cols,
        }
    }

    /// Creates an identity matrix.
    #[must_use]
    pub fn eye(n: usize) -> Self {
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            data[i * n + i] = 1.0;
        }
        Self {
            data,
            rows: n,
            cols: n,
        }
    }

    /// Wraps a vector as an `n x 1` column matrix.
    #[must_use]
    pub fn column_vector(v: &Vector<f64>) -> Self {
        Self {
            data: v.as_slice().to_vec(),
            rows: v.len(),
            cols: 1,
        }
    }

    /// Matrix-matrix multiplication.
    ///
    /// # Errors
    ///
    /// Returns [`RegressionError::DimensionMismatch`] if `self.cols != other.rows`.
    /// No partial result is produced.
    pub fn matmul(&self, other: &Self) -> Result<Self> {
        if self.cols != other.rows {
            return Err(RegressionError::DimensionMismatch {
                expected: format!("{} rows in right operand", self.cols),
                actual: format!("{}x{}", other.rows, other.cols),
            });
        }

        let mut result = vec![0.0; self.rows * other.cols];
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut sum = 0.0;
                for k in 0..self.cols {
                    sum += self.get(i, k) * other.get(k, j);
                }
                result[i * other.cols + j] = sum;
            }
        }

        Ok(Self {
            data: result,
            rows: self.rows,
            cols: other.cols,
        })
    }

    /// Matrix-vector multiplication.
    ///
    /// # Errors
    ///
    /// Returns an error if dimensions don't match.
    pub fn matvec(&self, vec: &Vector<f64>) -> Result<Vector<f64>> {
        if self.cols != vec.len() {
            return Err(RegressionError::dimension_mismatch(
                "vector length",
                self.cols,
                vec.len(),
            ));
        }

        let result: Vec<f64> = (0..self.rows).map(|i| self.row(i).dot(vec)).collect();

        Ok(Vector::from_vec(result))
    }

    /// Inverts a square matrix by Gauss-Jordan elimination.
    ///
    /// Only a pivot that is exactly `0.0` is treated as singular. See
    /// [`Matrix::inverse_with_tolerance`].
    ///
    /// # Errors
    ///
    /// Returns [`RegressionError::SingularMatrix`] on a zero pivot and
    /// [`RegressionError::DimensionMismatch`] if the matrix is not square.
    ///
    /// # Examples
    ///
    /// ```
    /// use wine_quality::primitives::Matrix;
    ///
    /// let m = Matrix::from_vec(2, 2, vec![4.0, 7.0, 2.0, 6.0]).unwrap();
    /// let inv = m.inverse().unwrap();
    /// assert!((inv.get(0, 0) - 0.6).abs() < 1e-12);
    /// ```
    pub fn inverse(&self) -> Result<Self> {
        self.inverse_with_tolerance(0.0)
    }

    /// Gauss-Jordan inversion treating any pivot with `|pivot| <= tolerance`
    /// (or NaN) as singular.
    ///
    /// The augmented matrix `[M | I]` is reduced row by row without row
    /// swaps, so a zero on the diagonal fails even when a permutation of the
    /// rows would be invertible.
    ///
    /// # Errors
    ///
    /// Returns [`RegressionError::SingularMatrix`] naming the pivot row, or
    /// [`RegressionError::DimensionMismatch`] if the matrix is not square.
    pub fn inverse_with_tolerance(&self, tolerance: f64) -> Result<Self> {
        if self.rows != self.cols {
            return Err(RegressionError::shape_mismatch(
                (self.rows, self.rows),
                (self.rows, self.cols),
            ));
        }

        let n = self.rows;
        let width = 2 * n;

        // [M | I]
        let mut aug = vec![0.0; n * width];
        for i in 0..n {
            for j in 0..n {
                aug[i * width + j] = self.get(i, j);
            }
            aug[i * width + n + i] = 1.0;
        }

        for i in 0..n {
            let pivot = aug[i * width + i];
            if pivot.is_nan() || pivot.abs() <= tolerance {
                return Err(RegressionError::SingularMatrix { pivot_row: i });
            }

            for value in &mut aug[i * width..(i + 1) * width] {
                *value /= pivot;
            }

            for k in 0..n {
                if k == i {
                    continue;
                }
                let factor = aug[k * width + i];
                for j in 0..width {
                    let delta = factor * aug[i * width + j];
                    aug[k * width + j] -= delta;
                }
            }
        }

        let mut data = Vec::with_capacity(n * n);
        for i in 0..n {
            data.extend_from_slice(&aug[i * width + n..(i + 1) * width]);
        }

        Ok(Self {
            data,
            rows: n,
            cols: n,
        })
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "tests_matrix_contract.rs"]
mod tests_matrix_contract;
