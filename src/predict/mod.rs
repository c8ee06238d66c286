//! Single-sample prediction from fitted coefficients.

use crate::error::{RegressionError, Result};
use crate::linear_model::Coefficients;

/// Owns a coefficient vector and scores raw feature vectors against it.
///
/// # Examples
///
/// ```
/// use wine_quality::linear_model::Coefficients;
/// use wine_quality::predict::Predictor;
///
/// let beta = Coefficients::from_vec(vec![2.0, 3.0]).unwrap();
/// let predictor = Predictor::new(beta);
/// assert!((predictor.predict(&[4.0]).unwrap() - 14.0).abs() < 1e-12);
/// assert!(predictor.predict(&[4.0, 5.0]).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Predictor {
    coefficients: Coefficients,
}

impl Predictor {
    /// Creates a predictor that owns `coefficients`.
    #[must_use]
    pub fn new(coefficients: Coefficients) -> Self {
        Self { coefficients }
    }

    /// Returns the coefficients currently in use.
    #[must_use]
    pub fn coefficients(&self) -> &Coefficients {
        &self.coefficients
    }

    /// Number of raw features a sample must provide.
    #[must_use]
    pub fn n_features(&self) -> usize {
        self.coefficients.n_features()
    }

    /// Swaps in a new fit, returning the old coefficients.
    pub fn replace(&mut self, coefficients: Coefficients) -> Coefficients {
        std::mem::replace(&mut self.coefficients, coefficients)
    }

    /// Computes `ŷ = β₀ + Σ βᵢ · x_{i-1}`.
    ///
    /// `features` holds the F raw feature values (no intercept entry). The
    /// result is neither rounded nor clamped.
    ///
    /// # Errors
    ///
    /// Returns [`RegressionError::DimensionMismatch`] if
    /// `features.len() != F`.
    pub fn predict(&self, features: &[f64]) -> Result<f64> {
        let slopes = self.coefficients.slopes();
        if features.len() != slopes.len() {
            return Err(RegressionError::dimension_mismatch(
                "feature count",
                slopes.len(),
                features.len(),
            ));
        }

        let weighted: f64 = slopes.iter().zip(features).map(|(b, x)| b * x).sum();
        Ok(self.coefficients.intercept() + weighted)
    }
}

impl From<Coefficients> for Predictor {
    fn from(coefficients: Coefficients) -> Self {
        Self::new(coefficients)
    }
}
