//! Core compute primitives (Vector, Matrix).
//!
//! These types back the dataset, the normal-equation solver and prediction.

mod matrix;
mod vector;

pub use matrix::Matrix;
pub use vector::Vector;
