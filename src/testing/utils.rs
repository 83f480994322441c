use ndarray::{Array2, ArrayView2};
use single_utilities::traits::FloatOps;

/// Validate that both matrices are square, of equal shape and at least 2x2.
///
/// Returns the shared dimension.
pub fn check_mantel_shapes<T>(x: ArrayView2<T>, y: ArrayView2<T>) -> anyhow::Result<usize> {
    let (xr, xc) = x.dim();
    let (yr, yc) = y.dim();

    if xr != xc {
        return Err(anyhow::anyhow!(
            "First matrix must be square, got {}x{}",
            xr,
            xc
        ));
    }
    if yr != yc {
        return Err(anyhow::anyhow!(
            "Second matrix must be square, got {}x{}",
            yr,
            yc
        ));
    }
    if xr != yr {
        return Err(anyhow::anyhow!(
            "Matrices must be the same shape, got {}x{} and {}x{}",
            xr,
            xc,
            yr,
            yc
        ));
    }
    if xr < 2 {
        return Err(anyhow::anyhow!(
            "Matrices must be at least 2x2, got {}x{}",
            xr,
            xc
        ));
    }

    Ok(xr)
}

/// Convert a matrix to `f64`, failing on values that cannot be represented.
pub fn to_f64_matrix<T>(matrix: ArrayView2<T>) -> anyhow::Result<Array2<f64>>
where
    T: FloatOps,
{
    let mut converted = Array2::zeros(matrix.dim());
    for ((idx, &value), slot) in matrix.indexed_iter().zip(converted.iter_mut()) {
        *slot = value
            .to_f64()
            .ok_or_else(|| anyhow::anyhow!("Value at {:?} is not representable as f64", idx))?;
    }
    Ok(converted)
}

/// Off-diagonal entries in row-major order.
pub fn off_diagonal(matrix: ArrayView2<f64>) -> Vec<f64> {
    let n = matrix.nrows();
    let mut values = Vec::with_capacity(n * n.saturating_sub(1));

    for ((i, j), &value) in matrix.indexed_iter() {
        if i != j {
            values.push(value);
        }
    }

    values
}

/// Position of cell `(i, j)`, `i != j`, in the vector built by [`off_diagonal`].
#[inline]
pub fn off_diagonal_index(n: usize, i: usize, j: usize) -> usize {
    i * (n - 1) + if j < i { j } else { j - 1 }
}

/// Re-read an off-diagonal vector of an `n x n` matrix as if its rows and
/// columns had been relabelled by `order`.
pub fn permute_off_diagonal(values: &[f64], n: usize, order: &[usize]) -> Vec<f64> {
    let mut permuted = Vec::with_capacity(values.len());

    for i in 0..n {
        for j in 0..n {
            if i != j {
                permuted.push(values[off_diagonal_index(n, order[i], order[j])]);
            }
        }
    }

    permuted
}
