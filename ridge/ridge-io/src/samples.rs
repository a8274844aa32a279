//! Headerless CSV sample loading.

use std::path::Path;

use ridge_types::{SampleMatrix, round_to};
use tracing::info;

use crate::{IoError, IoResult};

/// Load a sample matrix from a headerless CSV file.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] for a missing file, and any error from
/// [`parse_samples`].
pub fn load_samples<P: AsRef<Path>>(path: P, precision: u32) -> IoResult<SampleMatrix> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let text = std::fs::read_to_string(path)?;
    let matrix = parse_samples(&text, precision)?;

    info!(
        path = %path.display(),
        rows = matrix.row_count(),
        columns = matrix.column_count(),
        "Samples loaded"
    );

    Ok(matrix)
}

/// Parse headerless CSV text into a sample matrix.
///
/// Blank lines are skipped. Cells are trimmed, may be wrapped in double
/// quotes, and are rounded to `precision` decimals.
///
/// # Errors
///
/// Returns [`IoError::InvalidNumber`] for a cell that is not a finite
/// number, and [`IoError::Matrix`] for empty or ragged input.
pub fn parse_samples(text: &str, precision: u32) -> IoResult<SampleMatrix> {
    let rows = text
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(line_index, line)| parse_row(line_index + 1, line, precision))
        .collect::<IoResult<Vec<_>>>()?;

    Ok(SampleMatrix::from_rows(rows)?)
}

fn parse_row(line: usize, text: &str, precision: u32) -> IoResult<Vec<f64>> {
    text.split(',')
        .enumerate()
        .map(|(column_index, cell)| {
            let cell = cell.trim().trim_matches('"').trim();
            cell.parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .map(|v| round_to(v, precision))
                .ok_or_else(|| IoError::InvalidNumber {
                    line,
                    column: column_index + 1,
                    value: cell.to_string(),
                })
        })
        .collect()
}
