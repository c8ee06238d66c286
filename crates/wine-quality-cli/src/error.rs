//! Error types for the wine-quality CLI

use std::process::ExitCode;
use thiserror::Error;
use wine_quality::error::RegressionError;

/// Result type alias for CLI operations
pub(crate) type Result<T> = std::result::Result<T, CliError>;

/// CLI error types
#[derive(Error, Debug)]
pub(crate) enum CliError {
    /// Library failure (loading, fitting, predicting)
    #[error("{0}")]
    Regression(#[from] RegressionError),

    /// IO error on stdin/stdout or output files
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A value typed at a prompt or passed on the command line is unusable
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CliError {
    /// Numeric process status for this error
    pub(crate) fn status(&self) -> u8 {
        match self {
            Self::Regression(e) => match e {
                RegressionError::FileOpen { .. } => 3,
                RegressionError::MissingHeader { .. }
                | RegressionError::InvalidData { .. }
                | RegressionError::EmptyInput { .. }
                | RegressionError::Serialization(_) => 4,
                RegressionError::Parse { .. } => 5,
                RegressionError::SingularMatrix { .. } => 6,
                RegressionError::DimensionMismatch { .. } => 7,
                RegressionError::Io(_) => 8,
                RegressionError::Other(_) => 1,
            },
            Self::Io(_) => 8,
            Self::InvalidInput(_) => 2,
        }
    }

    /// Get exit code for this error
    pub(crate) fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.status())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_exit_codes() {
        let open = CliError::from(RegressionError::FileOpen {
            path: PathBuf::from("x.csv"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        });
        assert_eq!(open.status(), 3);

        let singular = CliError::from(RegressionError::SingularMatrix { pivot_row: 0 });
        assert_eq!(singular.status(), 6);

        let input = CliError::InvalidInput("abc".to_string());
        assert_eq!(input.status(), 2);
    }

    #[test]
    fn test_regression_message_passthrough() {
        let err = CliError::from(RegressionError::MissingHeader {
            path: PathBuf::from("wine.csv"),
        });
        assert_eq!(err.to_string(), "Error reading header from wine.csv");
    }
}
