//! Error types for regression operations.
//!
//! Every component (loader, matrix kernel, solver, predictor) reports
//! failures through [`RegressionError`].

use std::fmt;
use std::path::PathBuf;

/// Main error type for dataset loading, matrix algebra and prediction.
///
/// # Examples
///
/// ```
/// use wine_quality::error::RegressionError;
///
/// let err = RegressionError::DimensionMismatch {
///     expected: "3 columns".to_string(),
///     actual: "2 columns".to_string(),
/// };
/// assert!(err.to_string().contains("dimension mismatch"));
/// ```
#[derive(Debug)]
pub enum RegressionError {
    /// Matrix/vector dimensions don't match for the operation.
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// Gauss-Jordan elimination hit a zero (or within-tolerance) pivot.
    SingularMatrix {
        /// Row whose diagonal entry vanished
        pivot_row: usize,
    },

    /// The input file could not be opened.
    FileOpen {
        /// Path that failed to open
        path: PathBuf,
        /// Underlying I/O failure
        source: std::io::Error,
    },

    /// The input file has no header line.
    MissingHeader {
        /// Path (or source description) being read
        path: PathBuf,
    },

    /// A numeric token could not be parsed under the strict policy.
    Parse {
        /// 1-based line number in the source file
        line: usize,
        /// 0-based field index within the line
        column: usize,
        /// Offending token
        token: String,
    },

    /// The file layout is not a valid dataset (bad header, ragged row).
    InvalidData {
        /// 1-based line number in the source file
        line: usize,
        /// What is wrong with it
        message: String,
    },

    /// Input had no usable observations.
    EmptyInput {
        /// Where the empty input was found
        context: String,
    },

    /// I/O error while reading an already-open source.
    Io(std::io::Error),

    /// Model (de)serialization error.
    Serialization(String),

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for RegressionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegressionError::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "Matrix dimension mismatch: expected {expected}, got {actual}"
                )
            }
            RegressionError::SingularMatrix { pivot_row } => {
                write!(
                    f,
                    "Singular matrix: zero pivot at row {pivot_row}, inverse does not exist"
                )
            }
            RegressionError::FileOpen { path, source } => {
                write!(f, "Error opening file {}: {source}", path.display())
            }
            RegressionError::MissingHeader { path } => {
                write!(f, "Error reading header from {}", path.display())
            }
            RegressionError::Parse {
                line,
                column,
                token,
            } => {
                write!(
                    f,
                    "Parse error at line {line}, column {column}: '{token}' is not a number"
                )
            }
            RegressionError::InvalidData { line, message } => {
                write!(f, "Invalid data at line {line}: {message}")
            }
            RegressionError::EmptyInput { context } => write!(f, "empty input: {context}"),
            RegressionError::Io(e) => write!(f, "I/O error: {e}"),
            RegressionError::Serialization(msg) => write!(f, "Serialization error: {msg}"),
            RegressionError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for RegressionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RegressionError::Io(e) | RegressionError::FileOpen { source: e, .. } => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for RegressionError {
    fn from(err: std::io::Error) -> Self {
        RegressionError::Io(err)
    }
}

impl From<serde_json::Error> for RegressionError {
    fn from(err: serde_json::Error) -> Self {
        RegressionError::Serialization(err.to_string())
    }
}

impl From<&str> for RegressionError {
    fn from(msg: &str) -> Self {
        RegressionError::Other(msg.to_string())
    }
}

impl From<String> for RegressionError {
    fn from(msg: String) -> Self {
        RegressionError::Other(msg)
    }
}

impl RegressionError {
    /// Create a dimension mismatch error with descriptive context
    #[must_use]
    pub fn dimension_mismatch(context: &str, expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            expected: format!("{context}={expected}"),
            actual: format!("{actual}"),
        }
    }

    /// Create a shape mismatch error from two `(rows, cols)` pairs
    #[must_use]
    pub fn shape_mismatch(expected: (usize, usize), actual: (usize, usize)) -> Self {
        Self::DimensionMismatch {
            expected: format!("{}x{}", expected.0, expected.1),
            actual: format!("{}x{}", actual.0, actual.1),
        }
    }

    /// Create an empty input error
    #[must_use]
    pub fn empty_input(context: &str) -> Self {
        Self::EmptyInput {
            context: context.to_string(),
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, RegressionError>;
