//! Loading numeric matrices from whitespace-delimited text.
//!
//! One row per line, columns separated by any whitespace. Blank lines are
//! skipped and `#` starts a comment that runs to the end of the line.

use anyhow::Context;
use log::debug;
use ndarray::Array2;
use std::fs;
use std::path::Path;

/// Read and parse a matrix file.
pub fn load_matrix<P: AsRef<Path>>(path: P) -> anyhow::Result<Array2<f64>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read matrix file {}", path.display()))?;

    let matrix = parse_matrix(&content)
        .with_context(|| format!("Failed to parse matrix file {}", path.display()))?;

    debug!(
        "Loaded {}x{} matrix from {}",
        matrix.nrows(),
        matrix.ncols(),
        path.display()
    );
    Ok(matrix)
}

/// Parse matrix text into a dense `f64` array.
pub fn parse_matrix(content: &str) -> anyhow::Result<Array2<f64>> {
    let mut values: Vec<f64> = Vec::new();
    let mut ncols: Option<usize> = None;
    let mut nrows = 0;

    for (line_idx, line) in content.lines().enumerate() {
        let line_no = line_idx + 1;
        let data = match line.find('#') {
            Some(pos) => &line[..pos],
            None => line,
        };

        let row_start = values.len();
        for token in data.split_whitespace() {
            let value: f64 = token
                .parse()
                .map_err(|_| anyhow::anyhow!("Line {}: could not convert {:?} to float", line_no, token))?;
            values.push(value);
        }

        let width = values.len() - row_start;
        if width == 0 {
            continue;
        }

        match ncols {
            None => ncols = Some(width),
            Some(expected) if expected != width => {
                return Err(anyhow::anyhow!(
                    "Line {}: expected {} columns, found {}",
                    line_no,
                    expected,
                    width
                ));
            }
            Some(_) => {}
        }
        nrows += 1;
    }

    let ncols = ncols.ok_or_else(|| anyhow::anyhow!("Matrix contains no data"))?;
    Ok(Array2::from_shape_vec((nrows, ncols), values)?)
}
