use crate::error::{check_len, NnError, Result};

/// Σ aᵢ·bᵢ over two equal-length buffers.
pub fn dot(a: &[f64], b: &[f64]) -> Result<f64> {
    check_len("dot", a.len(), b.len())?;
    Ok(a.iter().zip(b.iter()).map(|(x, y)| x * y).sum())
}

/// Elementwise `a - b`.
pub fn subtract(a: &[f64], b: &[f64]) -> Result<Vec<f64>> {
    check_len("subtract", a.len(), b.len())?;
    Ok(a.iter().zip(b.iter()).map(|(x, y)| x - y).collect())
}

/// Multiplies every element of `a` by `k`.
pub fn scale(a: &[f64], k: f64) -> Vec<f64> {
    a.iter().map(|x| x * k).collect()
}

/// Outer product: `result[i][j] = a[i] * b[j]`.
pub fn outer(a: &[f64], b: &[f64]) -> Vec<Vec<f64>> {
    a.iter()
        .map(|x| b.iter().map(|y| x * y).collect())
        .collect()
}

/// Returns `result[j][i] = m[i][j]`.
///
/// An empty matrix transposes to an empty matrix. Ragged rows are rejected.
pub fn transpose(m: &[Vec<f64>]) -> Result<Vec<Vec<f64>>> {
    let cols = match m.first() {
        Some(row) => row.len(),
        None => return Ok(Vec::new()),
    };
    if let Some(bad) = m.iter().find(|row| row.len() != cols) {
        return Err(NnError::ShapeMismatch {
            context: "transpose",
            expected: cols,
            actual: bad.len(),
        });
    }

    let mut res = vec![vec![0.0; m.len()]; cols];
    for (i, row) in m.iter().enumerate() {
        for (j, &x) in row.iter().enumerate() {
            res[j][i] = x;
        }
    }
    Ok(res)
}
