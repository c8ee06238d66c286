//! Predict command implementation
//!
//! Obtains coefficients (fitted on a dataset or loaded from JSON), reads
//! one sample and prints the predicted quality.

use super::fit_from_csv;
use crate::error::{CliError, Result};
use crate::output::OutputMode;
use crate::prompt;
use std::fs;
use std::io;
use std::path::PathBuf;
use wine_quality::prelude::*;

/// Where the coefficients come from.
#[derive(Debug)]
pub(crate) enum Source {
    /// Fit on a CSV dataset first
    Dataset {
        path: PathBuf,
        lenient: bool,
        pivot_tolerance: f64,
    },
    /// Coefficients saved by `fit --save`
    Model(PathBuf),
}

impl Source {
    /// Build from the mutually exclusive `DATA` / `--model` arguments.
    pub(crate) fn from_args(
        model: Option<PathBuf>,
        data: Option<PathBuf>,
        lenient: bool,
        pivot_tolerance: f64,
    ) -> Result<Self> {
        match (model, data) {
            (Some(model), None) => Ok(Self::Model(model)),
            (None, Some(path)) => Ok(Self::Dataset {
                path,
                lenient,
                pivot_tolerance,
            }),
            (Some(_), Some(_)) => Err(CliError::InvalidInput(
                "give either a dataset or --model, not both".to_string(),
            )),
            (None, None) => Err(CliError::InvalidInput(
                "a dataset or --model is required".to_string(),
            )),
        }
    }
}

/// Run the predict command
pub(crate) fn run(source: &Source, values: Option<Vec<f64>>, mode: OutputMode) -> Result<()> {
    let (predictor, header) = load_predictor(source, mode)?;
    let labels = prompt::labels(predictor.n_features(), header.as_deref());

    let features = match values {
        Some(values) => values,
        None => read_from_stdin(&labels, mode)?,
    };

    let quality = predictor.predict(&features)?;

    if mode.json {
        println!("{}", serde_json::json!({ "quality": quality }));
    } else {
        println!("Quality: {quality:.6}");
    }

    Ok(())
}

fn load_predictor(source: &Source, mode: OutputMode) -> Result<(Predictor, Option<Vec<String>>)> {
    match source {
        Source::Dataset {
            path,
            lenient,
            pivot_tolerance,
        } => {
            let (dataset, model) = fit_from_csv(path, *lenient, *pivot_tolerance, mode)?;
            let beta = model.into_coefficients().ok_or_else(|| {
                RegressionError::Other("model reported success without coefficients".to_string())
            })?;
            Ok((Predictor::new(beta), Some(dataset.feature_names().to_vec())))
        }
        Source::Model(path) => {
            mode.trace(&format!("Reading coefficients from {}", path.display()));
            let json = fs::read_to_string(path).map_err(|source| RegressionError::FileOpen {
                path: path.clone(),
                source,
            })?;
            let beta = Coefficients::from_json(&json)?;
            Ok((Predictor::new(beta), None))
        }
    }
}

/// Prompts go to stderr in JSON mode so stdout carries only the result.
fn read_from_stdin(labels: &[String], mode: OutputMode) -> Result<Vec<f64>> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    if mode.json {
        prompt::read_features(labels, &mut input, &mut io::stderr())
    } else {
        prompt::read_features(labels, &mut input, &mut io::stdout())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_from_args() {
        let model = Source::from_args(Some(PathBuf::from("b.json")), None, false, 0.0)
            .expect("model only");
        assert!(matches!(model, Source::Model(_)));

        let data = Source::from_args(None, Some(PathBuf::from("w.csv")), true, 1e-9)
            .expect("data only");
        assert!(matches!(
            data,
            Source::Dataset { lenient: true, .. }
        ));

        assert!(Source::from_args(None, None, false, 0.0).is_err());
        assert!(Source::from_args(
            Some(PathBuf::from("b.json")),
            Some(PathBuf::from("w.csv")),
            false,
            0.0
        )
        .is_err());
    }

    #[test]
    fn test_missing_model_file_is_file_open() {
        let source = Source::Model(PathBuf::from("/nonexistent/beta.json"));
        let err = run(&source, Some(vec![1.0]), OutputMode::default()).unwrap_err();
        assert_eq!(err.status(), 3);
    }
}
