use serde::{Serialize, Deserialize};

use crate::error::{check_len, Result};
use crate::math::vector;

/// Row-major matrix of `rows` equal-length rows.
///
/// Dense weights are stored as (output_size × input_size), so row `i` holds
/// every weight feeding output `i`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix {
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows],
        }
    }

    /// Builds a matrix from rows, rejecting ragged input.
    pub fn from_rows(data: Vec<Vec<f64>>) -> Result<Matrix> {
        let cols = data.first().map_or(0, Vec::len);
        for row in &data {
            check_len("Matrix::from_rows", cols, row.len())?;
        }
        Ok(Matrix {
            rows: data.len(),
            cols,
            data,
        })
    }

    pub fn transpose(&self) -> Result<Matrix> {
        if self.data.is_empty() {
            return Ok(Matrix::zeros(self.cols, 0));
        }
        Ok(Matrix {
            rows: self.cols,
            cols: self.rows,
            data: vector::transpose(&self.data)?,
        })
    }

    /// `result[i] = dot(row_i, v)`; `v` must have `cols` elements.
    pub fn mat_vec(&self, v: &[f64]) -> Result<Vec<f64>> {
        check_len("Matrix::mat_vec", self.cols, v.len())?;
        self.data.iter().map(|row| vector::dot(row, v)).collect()
    }

    /// In-place `self -= k * other`.
    ///
    /// Every row is computed before any is written, so on error `self` is
    /// left untouched.
    pub fn sub_scaled(&mut self, other: &Matrix, k: f64) -> Result<()> {
        check_len("Matrix::sub_scaled rows", self.data.len(), other.data.len())?;
        check_len("Matrix::sub_scaled cols", self.cols, other.cols)?;
        let updated = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(row, delta)| vector::subtract(row, &vector::scale(delta, k)))
            .collect::<Result<Vec<_>>>()?;
        self.data = updated;
        Ok(())
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Matrix { rows: 0, cols: 0, data: vec![] }
    }
}
