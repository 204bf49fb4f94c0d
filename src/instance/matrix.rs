//! Dense pairwise distance storage.

use crate::error::Error;

/// Symmetry and diagonal checks tolerate this much floating-point noise.
const VALIDATION_EPS: f64 = 1e-9;

/// A symmetric n×n matrix of pairwise city distances.
///
/// Stored row-major in a flat buffer and indexed by `(i, j)`. Construction
/// from raw rows validates shape and contents; after that the matrix is
/// read-only, and the annealer borrows it for the duration of a run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistanceMatrix {
    n: usize,
    values: Vec<f64>,
}

impl DistanceMatrix {
    /// Builds a matrix from nested rows.
    ///
    /// Rejects input that is not square, has a nonzero diagonal, is
    /// asymmetric beyond `1e-9`, or contains negative or non-finite
    /// entries.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, Error> {
        let n = rows.len();
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(Error::NotSquare {
                    rows: n,
                    row: i,
                    cols: row.len(),
                });
            }
        }

        let mut values = Vec::with_capacity(n * n);
        for row in &rows {
            values.extend_from_slice(row);
        }

        let matrix = Self { n, values };
        matrix.validate()?;
        Ok(matrix)
    }

    /// Euclidean distances between every pair of coordinates.
    pub fn from_coordinates(coordinates: &[(f64, f64)]) -> Self {
        let n = coordinates.len();
        let mut values = vec![0.0; n * n];
        for i in 0..n {
            let (xi, yi) = coordinates[i];
            for j in (i + 1)..n {
                let (xj, yj) = coordinates[j];
                let d = ((xi - xj).powi(2) + (yi - yj).powi(2)).sqrt();
                values[i * n + j] = d;
                values[j * n + i] = d;
            }
        }
        Self { n, values }
    }

    fn validate(&self) -> Result<(), Error> {
        for i in 0..self.n {
            if self.get(i, i).abs() > VALIDATION_EPS {
                return Err(Error::NonzeroDiagonal { i });
            }
            for j in 0..self.n {
                let d = self.get(i, j);
                if !d.is_finite() || d < 0.0 {
                    return Err(Error::BadDistance { i, j });
                }
                if (d - self.get(j, i)).abs() > VALIDATION_EPS {
                    return Err(Error::Asymmetric { i, j });
                }
            }
        }
        Ok(())
    }

    /// Number of cities.
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Distance between cities `i` and `j`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.n + j]
    }
}
