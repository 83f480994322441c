//! Correlation and distance measures over paired samples.
//!
//! These are the kernels the Mantel test runs on the vectorized matrices, but
//! they work on any pair of equally long slices.

use crate::testing::CorrelationMethod;
use statrs::statistics::Statistics;
use std::cmp::Ordering;

/// Sample Pearson correlation coefficient.
///
/// Returns `NaN` when either sample is constant. The result is clamped to
/// `[-1, 1]` to absorb rounding at the boundary.
pub fn pearson(x: &[f64], y: &[f64]) -> anyhow::Result<f64> {
    check_paired(x, y)?;

    let mean_x = x.iter().mean();
    let mean_y = y.iter().mean();

    // Centered cross-products; identical inputs give sxy == sxx == syy exactly
    let mut sxy = 0.0;
    let mut sxx = 0.0;
    let mut syy = 0.0;
    for (&a, &b) in x.iter().zip(y) {
        let dx = a - mean_x;
        let dy = b - mean_y;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }

    let denominator = (sxx * syy).sqrt();
    if denominator == 0.0 || !denominator.is_finite() {
        return Ok(f64::NAN);
    }

    Ok((sxy / denominator).clamp(-1.0, 1.0))
}

/// Spearman rank correlation: Pearson on average-tie ranks.
///
/// NaN values cannot be ranked, so any NaN in either sample gives `NaN`.
pub fn spearman(x: &[f64], y: &[f64]) -> anyhow::Result<f64> {
    check_paired(x, y)?;
    if x.iter().chain(y).any(|v| v.is_nan()) {
        return Ok(f64::NAN);
    }
    pearson(&rank_average_ties(x), &rank_average_ties(y))
}

pub fn correlate(x: &[f64], y: &[f64], method: CorrelationMethod) -> anyhow::Result<f64> {
    match method {
        CorrelationMethod::Spearman => spearman(x, y),
        CorrelationMethod::Pearson => pearson(x, y),
    }
}

/// Assign 1-based ranks, giving tied values the mean of the ranks they span.
pub fn rank_average_ties(values: &[f64]) -> Vec<f64> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| values[a].partial_cmp(&values[b]).unwrap_or(Ordering::Equal));

    let mut ranks = vec![0.0; values.len()];
    let mut i = 0;
    while i < order.len() {
        let val = values[order[i]];
        let mut j = i + 1;

        // Find tied values
        while j < order.len() && values[order[j]] == val {
            j += 1;
        }

        let rank = (i + j - 1) as f64 / 2.0 + 1.0;
        for &idx in &order[i..j] {
            ranks[idx] = rank;
        }

        i = j;
    }

    ranks
}

/// Bray-Curtis dissimilarity between two equally long samples:
/// `sum|x - y| / sum(|x| + |y|)`.
pub fn bray_curtis_distance(x: &[f64], y: &[f64]) -> anyhow::Result<f64> {
    if x.len() != y.len() {
        return Err(anyhow::anyhow!(
            "Samples must be the same size, got {} and {}",
            x.len(),
            y.len()
        ));
    }

    let mut sum_diff = 0.0;
    let mut sum = 0.0;
    for (&a, &b) in x.iter().zip(y) {
        sum_diff += (a - b).abs();
        sum += a.abs() + b.abs();
    }

    if sum <= 0.0 {
        return Err(anyhow::anyhow!(
            "Bray-Curtis distance is undefined when both samples are all zeros"
        ));
    }

    Ok(sum_diff / sum)
}

fn check_paired(x: &[f64], y: &[f64]) -> anyhow::Result<()> {
    if x.len() != y.len() {
        return Err(anyhow::anyhow!(
            "Samples must be the same length, got {} and {}",
            x.len(),
            y.len()
        ));
    }
    if x.len() < 2 {
        return Err(anyhow::anyhow!(
            "At least 2 paired observations are required, got {}",
            x.len()
        ));
    }
    Ok(())
}
