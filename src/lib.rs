//! Wine quality regression: ordinary least squares on a small dense
//! linear-algebra kernel.
//!
//! The crate loads a CSV of physicochemical measurements, fits
//! `β = (XᵗX)⁻¹XᵗY` with a Gauss-Jordan inverse, and predicts the quality
//! score of a new sample.
//!
//! # Quick Start
//!
//! ```
//! use wine_quality::prelude::*;
//!
//! // y = 2 + 3x
//! let csv = "x,quality\n1,5\n2,8\n3,11\n";
//! let dataset = Dataset::from_reader(csv.as_bytes(), ParsePolicy::Strict).unwrap();
//!
//! let mut model = LinearRegression::new();
//! model.fit_dataset(&dataset).unwrap();
//!
//! let predictor = Predictor::new(model.into_coefficients().unwrap());
//! let quality = predictor.predict(&[4.0]).unwrap();
//! assert!((quality - 14.0).abs() < 1e-6);
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: `Matrix` and `Vector`, with transpose, multiply and
//!   Gauss-Jordan inverse
//! - [`data`]: CSV loading into a design matrix and target vector
//! - [`linear_model`]: normal-equation solver and `LinearRegression`
//! - [`predict`]: single-sample prediction from fitted coefficients
//! - [`metrics`]: R², MSE, RMSE, MAE

pub mod data;
pub mod error;
pub mod linear_model;
pub mod metrics;
pub mod predict;
pub mod prelude;
pub mod primitives;
pub mod traits;

pub use error::{RegressionError, Result};
pub use primitives::{Matrix, Vector};
pub use traits::Estimator;
