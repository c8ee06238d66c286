//! Interactive feature entry.

use crate::error::{CliError, Result};
use std::io::{BufRead, Write};
use wine_quality::data::wine::{WINE_FEATURES, WINE_FEATURE_COUNT};

/// Labels shown when asking for `n_features` values.
///
/// The wine catalogue is used when the model has exactly its width;
/// otherwise dataset header names, falling back to `Feature i`.
pub(crate) fn labels(n_features: usize, header_names: Option<&[String]>) -> Vec<String> {
    if n_features == WINE_FEATURE_COUNT {
        return WINE_FEATURES.iter().map(|s| (*s).to_string()).collect();
    }
    match header_names {
        Some(names) if names.len() == n_features => names.to_vec(),
        _ => (1..=n_features).map(|i| format!("Feature {i}")).collect(),
    }
}

/// Asks for one floating-point value per label, in order.
///
/// Each prompt is written as `"<label>: "` and flushed before reading a
/// line from `input`.
pub(crate) fn read_features<R: BufRead, W: Write>(
    labels: &[String],
    input: &mut R,
    prompt_out: &mut W,
) -> Result<Vec<f64>> {
    let mut values = Vec::with_capacity(labels.len());
    let mut line = String::new();

    for label in labels {
        write!(prompt_out, "{label}: ")?;
        prompt_out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(CliError::InvalidInput(format!(
                "unexpected end of input while reading '{label}'"
            )));
        }

        let token = line.trim();
        let value = token.parse::<f64>().map_err(|_| {
            CliError::InvalidInput(format!("'{token}' is not a number for '{label}'"))
        })?;
        values.push(value);
    }

    Ok(values)
}
