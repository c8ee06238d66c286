//! Core estimator trait.

use crate::error::Result;
use crate::primitives::{Matrix, Vector};

/// Supervised regression estimator over a design matrix.
///
/// Implementors follow a fit/predict/score shape. `x` always carries the
/// intercept column, so its width equals the coefficient count.
///
/// # Examples
///
/// ```
/// use wine_quality::prelude::*;
///
/// // y = 2 + 3x, intercept column included
/// let x = Matrix::from_vec(3, 2, vec![1.0, 1.0, 1.0, 2.0, 1.0, 3.0]).unwrap();
/// let y = Vector::from_slice(&[5.0, 8.0, 11.0]);
///
/// let mut model = LinearRegression::new();
/// model.fit(&x, &y).unwrap();
/// assert!(model.score(&x, &y).unwrap() > 0.999);
/// ```
pub trait Estimator {
    /// Fits the model to training data.
    ///
    /// # Errors
    ///
    /// Returns an error if fitting fails (dimension mismatch, singular matrix, etc.).
    fn fit(&mut self, x: &Matrix<f64>, y: &Vector<f64>) -> Result<()>;

    /// Predicts target values for input data.
    ///
    /// # Errors
    ///
    /// Returns an error if the model is unfitted or `x` has the wrong width.
    fn predict(&self, x: &Matrix<f64>) -> Result<Vector<f64>>;

    /// Computes the R² score.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Estimator::predict`].
    fn score(&self, x: &Matrix<f64>, y: &Vector<f64>) -> Result<f64>;
}
