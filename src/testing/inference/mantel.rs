//! Permutation-based Mantel test between two square matrices.
//!
//! The matrices are vectorized over their off-diagonal cells and correlated.
//! Significance comes from relabelling the objects of the first matrix: one
//! permutation is applied to its rows and columns together, the correlation is
//! recomputed, and the observed statistic is ranked against those values.
//!
//! For symmetric matrices the off-diagonal vectorization gives the same
//! coefficient as the condensed upper triangle, since every pair appears twice.
//! It also makes the test usable on asymmetric dissimilarities.

use crate::testing::correlation::{pearson, rank_average_ties};
use crate::testing::utils::{check_mantel_shapes, off_diagonal, permute_off_diagonal, to_f64_matrix};
use crate::testing::{Alternative, CorrelationMethod, MantelConfig, MantelResult};
use log::{debug, info, warn};
use ndarray::ArrayView2;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use single_utilities::traits::FloatOpsTS;

/// Run the Mantel test on two square matrices of equal shape.
///
/// # Arguments
///
/// * `x` - First matrix; its rows and columns are permuted
/// * `y` - Second matrix, held fixed
/// * `method` - Correlation used for the statistic
/// * `config` - Permutation count, alternative hypothesis and seed
///
/// # Returns
///
/// `MantelResult` with the correlation coefficient, the permutation p-value and
/// the matrix dimension. Constant matrices, and NaN cells, give a `NaN`
/// statistic and p-value.
pub fn mantel<T>(
    x: ArrayView2<T>,
    y: ArrayView2<T>,
    method: CorrelationMethod,
    config: &MantelConfig,
) -> anyhow::Result<MantelResult>
where
    T: FloatOpsTS,
{
    let n = check_mantel_shapes(x, y)?;

    let x_values = off_diagonal(to_f64_matrix(x)?.view());
    let y_values = off_diagonal(to_f64_matrix(y)?.view());
    let has_nan = x_values.iter().chain(&y_values).any(|v| v.is_nan());

    // Spearman is Pearson on ranks, and a relabelling only moves off-diagonal
    // cells around, so the ranks can be computed once up front.
    let (x_values, y_values) = match method {
        CorrelationMethod::Spearman => (rank_average_ties(&x_values), rank_average_ties(&y_values)),
        CorrelationMethod::Pearson => (x_values, y_values),
    };

    // NaN cells have no rank; Pearson already yields NaN on its own
    let statistic = if method == CorrelationMethod::Spearman && has_nan {
        f64::NAN
    } else {
        pearson(&x_values, &y_values)?
    };

    let p_value = if config.permutations == 0 || statistic.is_nan() {
        f64::NAN
    } else {
        let base_seed = config.seed.unwrap_or_else(rand::random);
        debug!(
            "Running {} permutations for {} Mantel test (n = {}, seed = {})",
            config.permutations,
            method.label(),
            n,
            base_seed
        );

        let permuted = permuted_statistics(&x_values, &y_values, n, config.permutations, base_seed)?;
        permutation_p_value(statistic, &permuted, config.alternative)
    };

    if statistic.is_nan() {
        warn!(
            "{} correlation is undefined; off-diagonal values are constant or contain NaN",
            method.label()
        );
    }

    info!(
        "{} Mantel test: statistic = {}, p-value = {}, n = {}",
        method.label(),
        statistic,
        p_value,
        n
    );

    Ok(MantelResult {
        statistic,
        p_value,
        n,
        method,
        alternative: config.alternative,
        permutations: config.permutations,
    })
}

/// Correlations of `y_values` against `permutations` random relabellings of
/// the `n x n` matrix whose off-diagonal cells are `x_values`. Round `i` is
/// seeded with `base_seed + i`, so results do not depend on how rayon
/// schedules the rounds.
fn permuted_statistics(
    x_values: &[f64],
    y_values: &[f64],
    n: usize,
    permutations: usize,
    base_seed: u64,
) -> anyhow::Result<Vec<f64>> {
    (0..permutations)
        .into_par_iter()
        .map(|round| {
            let mut rng = SmallRng::seed_from_u64(base_seed.wrapping_add(round as u64));
            let mut order: Vec<usize> = (0..n).collect();
            order.shuffle(&mut rng);
            pearson(&permute_off_diagonal(x_values, n, &order), y_values)
        })
        .collect()
}

/// `(count + 1) / (permutations + 1)`, where `count` is the number of
/// permuted statistics at least as extreme as the observed one.
pub fn permutation_p_value(statistic: f64, permuted: &[f64], alternative: Alternative) -> f64 {
    if permuted.is_empty() || statistic.is_nan() {
        return f64::NAN;
    }

    let count = permuted
        .iter()
        .filter(|&&r| match alternative {
            Alternative::TwoSided => r.abs() >= statistic.abs(),
            Alternative::Greater => r >= statistic,
            Alternative::Less => r <= statistic,
        })
        .count();

    (count + 1) as f64 / (permuted.len() + 1) as f64
}
