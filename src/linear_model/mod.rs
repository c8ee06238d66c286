//! Ordinary least squares regression via the normal equations.

use crate::data::Dataset;
use crate::error::{RegressionError, Result};
use crate::metrics::r_squared;
use crate::primitives::{Matrix, Vector};
use crate::traits::Estimator;
use serde::{Deserialize, Serialize};

/// Fitted regression coefficients `β = [β₀, β₁, …, β_F]`.
///
/// `β₀` is the intercept; `β₁..β_F` are the slopes in feature order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coefficients {
    values: Vec<f64>,
}

impl Coefficients {
    /// Wraps a full coefficient vector (intercept first).
    ///
    /// # Errors
    ///
    /// Returns an error if `values` is empty.
    pub fn from_vec(values: Vec<f64>) -> Result<Self> {
        if values.is_empty() {
            return Err(RegressionError::empty_input("coefficient vector"));
        }
        Ok(Self { values })
    }

    /// Intercept term `β₀`.
    #[must_use]
    pub fn intercept(&self) -> f64 {
        self.values[0]
    }

    /// Slopes `β₁..β_F`.
    #[must_use]
    pub fn slopes(&self) -> &[f64] {
        &self.values[1..]
    }

    /// Number of features F the coefficients were fitted on.
    #[must_use]
    pub fn n_features(&self) -> usize {
        self.values.len() - 1
    }

    /// Full vector including the intercept.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Serializes to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`RegressionError::Serialization`] if encoding fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses coefficients previously written by [`Coefficients::to_json`].
    ///
    /// # Errors
    ///
    /// Returns [`RegressionError::Serialization`] on malformed JSON or an
    /// empty coefficient list.
    pub fn from_json(json: &str) -> Result<Self> {
        let parsed: Self = serde_json::from_str(json)?;
        if parsed.values.is_empty() {
            return Err(RegressionError::Serialization(
                "coefficient list is empty".to_string(),
            ));
        }
        Ok(parsed)
    }
}

/// Solves `β = (XᵗX)⁻¹ · XᵗY`.
///
/// `x` is the `n x (F + 1)` design matrix (intercept column included) and
/// `y` the `n` targets. `pivot_tolerance` is handed to
/// [`Matrix::inverse_with_tolerance`]; `0.0` only rejects exact-zero pivots.
///
/// # Errors
///
/// - [`RegressionError::EmptyInput`] if there are no observations
/// - [`RegressionError::DimensionMismatch`] if `x` and `y` disagree on `n`
/// - [`RegressionError::SingularMatrix`] if `XᵗX` cannot be inverted
///   (collinear features, `n <= F`)
///
/// # Examples
///
/// ```
/// use wine_quality::linear_model::solve_normal_equations;
/// use wine_quality::primitives::{Matrix, Vector};
///
/// let x = Matrix::from_vec(3, 2, vec![1.0, 1.0, 1.0, 2.0, 1.0, 3.0]).unwrap();
/// let y = Vector::from_slice(&[5.0, 8.0, 11.0]);
/// let beta = solve_normal_equations(&x, &y, 0.0).unwrap();
/// assert!((beta.intercept() - 2.0).abs() < 1e-9);
/// assert!((beta.slopes()[0] - 3.0).abs() < 1e-9);
/// ```
pub fn solve_normal_equations(
    x: &Matrix<f64>,
    y: &Vector<f64>,
    pivot_tolerance: f64,
) -> Result<Coefficients> {
    let n_samples = x.n_rows();
    if n_samples == 0 {
        return Err(RegressionError::empty_input("design matrix has no rows"));
    }
    if n_samples != y.len() {
        return Err(RegressionError::dimension_mismatch(
            "target length",
            n_samples,
            y.len(),
        ));
    }

    let xt = x.transpose();
    let xtx = xt.matmul(x)?;
    let xtx_inv = xtx.inverse_with_tolerance(pivot_tolerance)?;
    let xty = xt.matmul(&Matrix::column_vector(y))?;
    let beta = xtx_inv.matmul(&xty)?;

    Coefficients::from_vec(beta.column(0).into_vec())
}

/// Ordinary Least Squares (OLS) linear regression.
///
/// Fits `y = X β + ε` by the normal equations with a Gauss-Jordan inverse.
///
/// # Examples
///
/// ```
/// use wine_quality::prelude::*;
///
/// let x = Matrix::from_vec(4, 2, vec![
///     1.0, 1.0,
///     1.0, 2.0,
///     1.0, 3.0,
///     1.0, 4.0,
/// ]).unwrap();
/// let y = Vector::from_slice(&[3.0, 5.0, 7.0, 9.0]);
///
/// let mut model = LinearRegression::new();
/// model.fit(&x, &y).unwrap();
///
/// let beta = model.coefficients().unwrap();
/// assert!((beta.intercept() - 1.0).abs() < 1e-9);
/// assert!((beta.slopes()[0] - 2.0).abs() < 1e-9);
/// ```
///
/// # Performance
///
/// - Time complexity: O(n·p² + p³) where n = samples, p = F + 1
/// - Space complexity: O(n·p)
#[derive(Debug, Clone, Default)]
pub struct LinearRegression {
    /// Fitted coefficients, `None` until `fit` succeeds.
    coefficients: Option<Coefficients>,
    /// Pivots with magnitude at or below this are singular.
    pivot_tolerance: f64,
}

impl LinearRegression {
    /// Creates an unfitted model that only rejects exact-zero pivots.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Treat pivots with `|pivot| <= tolerance` as singular.
    #[must_use]
    pub fn with_pivot_tolerance(mut self, tolerance: f64) -> Self {
        self.pivot_tolerance = tolerance;
        self
    }

    /// Returns the configured pivot tolerance.
    #[must_use]
    pub fn pivot_tolerance(&self) -> f64 {
        self.pivot_tolerance
    }

    /// Returns the fitted coefficients, if any.
    #[must_use]
    pub fn coefficients(&self) -> Option<&Coefficients> {
        self.coefficients.as_ref()
    }

    /// Consumes the model, yielding its coefficients.
    #[must_use]
    pub fn into_coefficients(self) -> Option<Coefficients> {
        self.coefficients
    }

    /// Returns true if the model has been fitted.
    #[must_use]
    pub fn is_fitted(&self) -> bool {
        self.coefficients.is_some()
    }

    /// Fits on a loaded [`Dataset`].
    ///
    /// # Errors
    ///
    /// See [`solve_normal_equations`].
    pub fn fit_dataset(&mut self, dataset: &Dataset) -> Result<()> {
        self.fit(dataset.x(), dataset.y())
    }

    fn fitted(&self) -> Result<&Coefficients> {
        self.coefficients
            .as_ref()
            .ok_or_else(|| RegressionError::Other("Model not fitted. Call fit() first.".into()))
    }
}

impl Estimator for LinearRegression {
    /// Fits the model; on failure any previous fit is left untouched.
    fn fit(&mut self, x: &Matrix<f64>, y: &Vector<f64>) -> Result<()> {
        let beta = solve_normal_equations(x, y, self.pivot_tolerance)?;
        self.coefficients = Some(beta);
        Ok(())
    }

    fn predict(&self, x: &Matrix<f64>) -> Result<Vector<f64>> {
        let beta = self.fitted()?;
        x.matvec(&Vector::from_slice(beta.as_slice()))
    }

    fn score(&self, x: &Matrix<f64>, y: &Vector<f64>) -> Result<f64> {
        let y_pred = self.predict(x)?;
        if y_pred.len() != y.len() {
            return Err(RegressionError::dimension_mismatch(
                "target length",
                y_pred.len(),
                y.len(),
            ));
        }
        Ok(r_squared(&y_pred, y))
    }
}
