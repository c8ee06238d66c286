//! Fit command implementation
//!
//! Loads a dataset, solves the normal equations and reports the
//! coefficients with in-sample goodness of fit.

use super::fit_from_csv;
use crate::error::Result;
use crate::output::{self, format_value, OutputMode};
use std::fs;
use std::path::Path;
use wine_quality::prelude::*;

/// Run the fit command
pub(crate) fn run(
    path: &Path,
    lenient: bool,
    pivot_tolerance: f64,
    save: Option<&Path>,
    mode: OutputMode,
) -> Result<()> {
    let (dataset, model) = fit_from_csv(path, lenient, pivot_tolerance, mode)?;

    let y_hat = model.predict(dataset.x())?;
    let r2 = r_squared(&y_hat, dataset.y());
    let error = rmse(&y_hat, dataset.y());

    let beta = model.into_coefficients().ok_or_else(|| {
        RegressionError::Other("model reported success without coefficients".to_string())
    })?;

    if let Some(out) = save {
        fs::write(out, beta.to_json()?)?;
        mode.trace(&format!("Wrote {}", out.display()));
    }

    let names = slope_names(&dataset, &beta);

    if mode.json {
        let slopes: Vec<serde_json::Value> = names
            .iter()
            .zip(beta.slopes())
            .map(|(name, value)| serde_json::json!({ "name": name, "value": value }))
            .collect();
        let report = serde_json::json!({
            "observations": dataset.n_samples(),
            "features": dataset.n_features(),
            "r_squared": r2,
            "rmse": error,
            "intercept": beta.intercept(),
            "slopes": slopes,
            "coefficients": beta.as_slice(),
        });
        let text = serde_json::to_string_pretty(&report).map_err(RegressionError::from)?;
        println!("{text}");
        return Ok(());
    }

    if !mode.human() {
        return Ok(());
    }

    output::section("Dataset");
    output::kv("File", path.display());
    output::kv("Observations", dataset.n_samples());
    output::kv("Features", dataset.n_features());

    output::section("Fit");
    output::kv("R²", format_value(r2));
    output::kv("RMSE", format_value(error));

    output::section("Coefficients");
    output::kv("Intercept", format_value(beta.intercept()));
    for (name, value) in names.iter().zip(beta.slopes()) {
        output::kv(name, format_value(*value));
    }

    if let Some(out) = save {
        println!();
        output::success(&format!("Saved coefficients to {}", out.display()));
    }

    Ok(())
}

/// Wine catalogue names when the model has exactly 11 slopes, else the
/// dataset header.
fn slope_names(dataset: &Dataset, beta: &Coefficients) -> Vec<String> {
    crate::prompt::labels(beta.n_features(), Some(dataset.feature_names()))
}
