//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use wine_quality::prelude::*;
//! ```

pub use crate::data::wine::{WINE_FEATURES, WINE_FEATURE_COUNT};
pub use crate::data::{Dataset, DatasetLoader, ParsePolicy};
pub use crate::error::RegressionError;
pub use crate::linear_model::{solve_normal_equations, Coefficients, LinearRegression};
pub use crate::metrics::{mae, mse, r_squared, rmse};
pub use crate::predict::Predictor;
pub use crate::primitives::{Matrix, Vector};
pub use crate::traits::Estimator;
