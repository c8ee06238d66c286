//! Subcommand implementations

pub(crate) mod fit;
pub(crate) mod predict;

use crate::error::Result;
use crate::output::{self, OutputMode};
use std::path::Path;
use wine_quality::prelude::*;

/// Load `path` and fit coefficients on it.
pub(crate) fn fit_from_csv(
    path: &Path,
    lenient: bool,
    pivot_tolerance: f64,
    mode: OutputMode,
) -> Result<(Dataset, LinearRegression)> {
    let policy = if lenient {
        ParsePolicy::ZeroFill
    } else {
        ParsePolicy::Strict
    };

    let loader = DatasetLoader::new().with_policy(policy);
    mode.trace(&format!(
        "Loading {} ({:?} parsing)",
        path.display(),
        loader.policy()
    ));
    let dataset = loader.load(path)?;
    mode.trace(&dataset.to_string());

    if dataset.n_samples() <= dataset.n_features() && !mode.quiet {
        output::warning(&format!(
            "{} observations for {} coefficients; the system is underdetermined",
            dataset.n_samples(),
            dataset.n_features() + 1
        ));
    }

    let mut model = LinearRegression::new().with_pivot_tolerance(pivot_tolerance);
    model.fit_dataset(&dataset)?;
    mode.trace("Normal equations solved");

    Ok((dataset, model))
}
