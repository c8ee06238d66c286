//! Dataset loading.
//!
//! Reads a comma-separated file whose first line is a header and whose
//! last column is the regression target, and builds:
//! - a design matrix `X` with a leading intercept column of ones
//! - a target vector `Y`
//!
//! The header line is skipped without being parsed as data; the row width
//! comes from the first data row.

pub mod wine;

use crate::error::{RegressionError, Result};
use crate::primitives::{Matrix, Vector};
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// How malformed numeric tokens are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParsePolicy {
    /// Fail with [`RegressionError::Parse`] on the first malformed or
    /// non-finite (`NaN`, `inf`) token.
    #[default]
    Strict,
    /// Replace malformed and non-finite tokens with `0.0`.
    ZeroFill,
}

impl ParsePolicy {
    fn parse(self, token: &str, line: usize, column: usize) -> Result<f64> {
        match token.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => match self {
                ParsePolicy::Strict => Err(RegressionError::Parse {
                    line,
                    column,
                    token: token.to_string(),
                }),
                ParsePolicy::ZeroFill => Ok(0.0),
            },
        }
    }
}

/// Observations loaded from a CSV file.
///
/// # Examples
///
/// ```
/// use wine_quality::data::{Dataset, ParsePolicy};
///
/// let csv = "x1,x2,y\n1.0,2.0,3.0\n4.0,5.0,6.0\n";
/// let ds = Dataset::from_reader(csv.as_bytes(), ParsePolicy::Strict).unwrap();
/// assert_eq!(ds.x().shape(), (2, 3));
/// assert_eq!(ds.y().as_slice(), &[3.0, 6.0]);
/// ```
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Design matrix, `n x (F + 1)`, column 0 all ones
    x: Matrix<f64>,
    /// Targets, length `n`
    y: Vector<f64>,
    /// Header names of the F feature columns; empty when the header width
    /// differs from the data
    feature_names: Vec<String>,
}

impl Dataset {
    /// Loads a dataset from a file path using `policy` for numeric tokens.
    ///
    /// # Errors
    ///
    /// - [`RegressionError::FileOpen`] if the file cannot be opened
    /// - [`RegressionError::MissingHeader`] if there is no header line
    /// - [`RegressionError::InvalidData`] on a single-column or ragged row
    /// - [`RegressionError::Parse`] on a malformed token (strict policy)
    /// - [`RegressionError::EmptyInput`] if there are no data rows
    pub fn load<P: AsRef<Path>>(path: P, policy: ParsePolicy) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| RegressionError::FileOpen {
            path: path.to_path_buf(),
            source,
        })?;
        parse(file, policy, path)
    }

    /// Parses a dataset from any reader.
    ///
    /// # Errors
    ///
    /// Same as [`Dataset::load`], minus the open failure.
    pub fn from_reader<R: Read>(reader: R, policy: ParsePolicy) -> Result<Self> {
        parse(reader, policy, Path::new("<reader>"))
    }

    /// Number of observations.
    #[must_use]
    pub fn n_samples(&self) -> usize {
        self.x.n_rows()
    }

    /// Number of features, excluding the intercept column.
    #[must_use]
    pub fn n_features(&self) -> usize {
        self.x.n_cols() - 1
    }

    /// Design matrix with intercept column.
    #[must_use]
    pub fn x(&self) -> &Matrix<f64> {
        &self.x
    }

    /// Target vector.
    #[must_use]
    pub fn y(&self) -> &Vector<f64> {
        &self.y
    }

    /// Header names of the feature columns, in file order.
    ///
    /// Empty when the header does not have one field per data column.
    #[must_use]
    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    /// Splits the dataset into `(X, Y)`.
    #[must_use]
    pub fn into_parts(self) -> (Matrix<f64>, Vector<f64>) {
        (self.x, self.y)
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Dataset:")?;
        writeln!(f, "  Observations: {}", self.n_samples())?;
        writeln!(f, "  Features:     {}", self.n_features())?;
        write!(f, "  Target mean:  {:.4}", self.y.mean())
    }
}

/// Builder-style front end for [`Dataset::load`].
#[derive(Debug, Clone, Default)]
pub struct DatasetLoader {
    policy: ParsePolicy,
}

impl DatasetLoader {
    /// Creates a loader with the strict parse policy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the parse policy.
    #[must_use]
    pub fn with_policy(mut self, policy: ParsePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Returns the configured parse policy.
    #[must_use]
    pub fn policy(&self) -> ParsePolicy {
        self.policy
    }

    /// Loads a dataset from `path`.
    ///
    /// # Errors
    ///
    /// See [`Dataset::load`].
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<Dataset> {
        Dataset::load(path, self.policy)
    }
}

fn parse<R: Read>(reader: R, policy: ParsePolicy, origin: &Path) -> Result<Dataset> {
    let mut reader = BufReader::new(reader);

    // The first physical line is the header, whatever it holds.
    let mut header = Vec::new();
    if reader.read_until(b'\n', &mut header)? == 0 {
        return Err(RegressionError::MissingHeader {
            path: origin.to_path_buf(),
        });
    }
    let header_names = header_fields(&header);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut width: Option<usize> = None;
    let mut data = Vec::new();
    let mut targets = Vec::new();

    for result in reader.records() {
        let record = result.map_err(|e| csv_error(e, origin))?;
        let line = record.position().map_or(0, |p| p.line() as usize) + 1;

        let expected = *width.get_or_insert(record.len());
        if expected < 2 {
            return Err(RegressionError::InvalidData {
                line,
                message: format!(
                    "expected at least one feature and a target column, found {expected} column"
                ),
            });
        }
        if record.len() != expected {
            return Err(RegressionError::InvalidData {
                line,
                message: format!("expected {expected} fields, found {}", record.len()),
            });
        }

        let n_features = expected - 1;
        data.push(1.0);
        for (column, token) in record.iter().enumerate() {
            let value = policy.parse(token, line, column)?;
            if column < n_features {
                data.push(value);
            } else {
                targets.push(value);
            }
        }
    }

    let Some(width) = width else {
        return Err(RegressionError::empty_input(&format!(
            "no data rows after header in {}",
            origin.display()
        )));
    };

    let n_features = width - 1;
    let feature_names = match header_names {
        Some(fields) if fields.len() == width => fields.into_iter().take(n_features).collect(),
        _ => Vec::new(),
    };

    let x = Matrix::from_vec(targets.len(), width, data)?;
    Ok(Dataset {
        x,
        y: Vector::from_vec(targets),
        feature_names,
    })
}

/// Splits the raw header line into trimmed field names.
fn header_fields(raw: &[u8]) -> Option<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(raw);
    let record = reader.records().next()?.ok()?;
    Some(record.iter().map(String::from).collect())
}

fn csv_error(err: csv::Error, origin: &Path) -> RegressionError {
    let line = err.position().map_or(0, |p| p.line() as usize + 1);
    match err.into_kind() {
        csv::ErrorKind::Io(e) => RegressionError::Io(e),
        kind => RegressionError::InvalidData {
            line,
            message: format!("{}: {kind:?}", origin.display()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write csv");
        file
    }

    #[test]
    fn test_load_two_rows() {
        let file = write_csv("a,b,target\n1.5,2.5,3.5\n4.0,5.0,6.0\n");
        let ds = Dataset::load(file.path(), ParsePolicy::Strict).expect("load CSV");

        assert_eq!(ds.n_samples(), 2);
        assert_eq!(ds.n_features(), 2);
        assert_eq!(ds.x().shape(), (2, 3));
        assert_eq!(ds.x().column(0).as_slice(), &[1.0, 1.0]);
        assert_eq!(ds.x().row(0).as_slice(), &[1.0, 1.5, 2.5]);
        assert_eq!(ds.y().as_slice(), &[3.5, 6.0]);
        assert_eq!(ds.feature_names(), &["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_header_is_not_data() {
        // A numeric header is still dropped.
        let file = write_csv("1,2\n3,4\n");
        let ds = Dataset::load(file.path(), ParsePolicy::Strict).expect("load CSV");
        assert_eq!(ds.n_samples(), 1);
        assert_eq!(ds.y().as_slice(), &[4.0]);
    }

    #[test]
    fn test_blank_lines_skipped() {
        let file = write_csv("x,y\n1,2\n\n3,4\n\n");
        let ds = Dataset::load(file.path(), ParsePolicy::Strict).expect("load CSV");
        assert_eq!(ds.n_samples(), 2);
    }

    #[test]
    fn test_whitespace_trimmed() {
        let ds = Dataset::from_reader("x, y\n 1.0 , 2.0 \n".as_bytes(), ParsePolicy::Strict)
            .expect("parse");
        assert_eq!(ds.x().get(0, 1), 1.0);
        assert_eq!(ds.y()[0], 2.0);
    }

    #[test]
    fn test_missing_file() {
        let result = Dataset::load("/nonexistent/wine_quality_ds.csv", ParsePolicy::Strict);
        assert!(matches!(result, Err(RegressionError::FileOpen { .. })));
    }

    #[test]
    fn test_empty_file_missing_header() {
        let file = write_csv("");
        let result = Dataset::load(file.path(), ParsePolicy::Strict);
        assert!(matches!(result, Err(RegressionError::MissingHeader { .. })));
    }

    #[test]
    fn test_header_only_is_empty_input() {
        let file = write_csv("x,y\n");
        let result = Dataset::load(file.path(), ParsePolicy::Strict);
        assert!(matches!(result, Err(RegressionError::EmptyInput { .. })));
    }

    #[test]
    fn test_single_column_rows_rejected() {
        let result = Dataset::from_reader("y\n1\n".as_bytes(), ParsePolicy::Strict);
        assert!(matches!(
            result,
            Err(RegressionError::InvalidData { line: 2, .. })
        ));
    }

    #[test]
    fn test_header_width_does_not_matter() {
        // Trailing comma in the header; rows are two wide.
        let ds = Dataset::from_reader("x,y,\n1,5\n2,8\n".as_bytes(), ParsePolicy::Strict)
            .expect("header is not parsed as data");
        assert_eq!(ds.n_samples(), 2);
        assert_eq!(ds.n_features(), 1);
        assert_eq!(ds.y().as_slice(), &[5.0, 8.0]);
        assert!(ds.feature_names().is_empty());
    }

    #[test]
    fn test_blank_first_line_is_the_header() {
        // The blank line is dropped as the header, so "x,y" is a data row.
        let strict = Dataset::from_reader("\nx,y\n1,5\n2,8\n".as_bytes(), ParsePolicy::Strict);
        match strict {
            Err(RegressionError::Parse { line, column, token }) => {
                assert_eq!((line, column), (2, 0));
                assert_eq!(token, "x");
            }
            other => panic!("expected parse error, got {other:?}"),
        }

        let lenient = Dataset::from_reader("\nx,y\n1,5\n2,8\n".as_bytes(), ParsePolicy::ZeroFill)
            .expect("zero fill");
        assert_eq!(lenient.n_samples(), 3);
        assert_eq!(lenient.y().as_slice(), &[0.0, 5.0, 8.0]);
    }

    #[test]
    fn test_width_taken_from_first_data_row() {
        let result = Dataset::from_reader("a,b,y\n1,2\n3,4,5\n".as_bytes(), ParsePolicy::Strict);
        match result {
            Err(RegressionError::InvalidData { line, message }) => {
                assert_eq!(line, 3);
                assert!(message.contains("expected 2 fields"), "{message}");
            }
            other => panic!("expected ragged-row error, got {other:?}"),
        }
    }

    #[test]
    fn test_strict_rejects_non_finite_tokens() {
        for token in ["NaN", "inf", "-infinity"] {
            let csv = format!("x,y\n1,5\n{token},8\n");
            match Dataset::from_reader(csv.as_bytes(), ParsePolicy::Strict) {
                Err(RegressionError::Parse { line, column, .. }) => {
                    assert_eq!((line, column), (3, 0), "token {token}");
                }
                other => panic!("expected parse error for {token}, got {other:?}"),
            }
        }

        let ds = Dataset::from_reader("x,y\n1,NaN\n".as_bytes(), ParsePolicy::ZeroFill)
            .expect("zero fill");
        assert_eq!(ds.y()[0], 0.0);
    }

    #[test]
    fn test_ragged_row_rejected() {
        let result = Dataset::from_reader("a,b,y\n1,2,3\n4,5\n".as_bytes(), ParsePolicy::Strict);
        assert!(matches!(
            result,
            Err(RegressionError::InvalidData { line: 3, .. })
        ));
    }

    #[test]
    fn test_strict_rejects_malformed_token() {
        let result = Dataset::from_reader("a,b,y\n1,2,3\n4,oops,6\n".as_bytes(), ParsePolicy::Strict);
        match result {
            Err(RegressionError::Parse {
                line,
                column,
                token,
            }) => {
                assert_eq!(line, 3);
                assert_eq!(column, 1);
                assert_eq!(token, "oops");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_fill_coerces_malformed_token() {
        let ds = Dataset::from_reader(
            "a,b,y\n1,2,3\n4,oops,\n".as_bytes(),
            ParsePolicy::ZeroFill,
        )
        .expect("zero fill never fails on tokens");
        assert_eq!(ds.x().row(1).as_slice(), &[1.0, 4.0, 0.0]);
        assert_eq!(ds.y()[1], 0.0);
    }

    #[test]
    fn test_loader_builder() {
        let file = write_csv("a,y\n1,x\n");
        let strict = DatasetLoader::new();
        assert_eq!(strict.policy(), ParsePolicy::Strict);
        assert!(strict.load(file.path()).is_err());

        let lenient = DatasetLoader::new().with_policy(ParsePolicy::ZeroFill);
        let ds = lenient.load(file.path()).expect("lenient load");
        assert_eq!(ds.y()[0], 0.0);
    }

    #[test]
    fn test_display_summary() {
        let ds = Dataset::from_reader("x,y\n1,2\n3,4\n".as_bytes(), ParsePolicy::Strict)
            .expect("parse");
        let text = ds.to_string();
        assert!(text.contains("Observations: 2"));
        assert!(text.contains("Features:     1"));
    }
}
