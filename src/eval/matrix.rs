//! Dense square matrices and the pairwise distance-matrix builder.

use crate::error::{Error, Result};

/// A dense square matrix in row-major order.
///
/// Used for both the pairwise distance matrix (`SquareMatrix<f32>`) and the
/// per-class-pair score matrix (`SquareMatrix<f64>`).
#[derive(Debug, Clone, PartialEq)]
pub struct SquareMatrix<T> {
    side: usize,
    data: Vec<T>,
}

impl<T: Copy> SquareMatrix<T> {
    /// Create a matrix with every entry set to `fill`.
    pub fn filled(side: usize, fill: T) -> Self {
        Self {
            side,
            data: vec![fill; side * side],
        }
    }

    /// Create a matrix by evaluating `f(row, col)` for every entry.
    pub fn from_fn(side: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(side * side);
        for i in 0..side {
            for j in 0..side {
                data.push(f(i, j));
            }
        }
        Self { side, data }
    }

    /// Side length of the matrix.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Entry at `(row, col)`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> T {
        debug_assert!(row < self.side && col < self.side);
        self.data[row * self.side + col]
    }

    /// Set the entry at `(row, col)`.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        debug_assert!(row < self.side && col < self.side);
        self.data[row * self.side + col] = value;
    }

    /// Row-major view of the entries.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// The `row`-th row as a slice.
    pub fn row(&self, row: usize) -> &[T] {
        &self.data[row * self.side..(row + 1) * self.side]
    }
}

/// Compute the full pairwise distance matrix for a set of feature vectors.
///
/// `D[i][j] = distance_fn(&features[i], &features[j])` for every ordered
/// pair, including `i == j` (the function decides what the self-distance
/// is; it is not assumed to be zero). No symmetry is assumed either, so
/// every entry is evaluated fresh: `n²` calls to `distance_fn`.
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] for an empty feature set and
/// [`Error::DimensionMismatch`] if the vectors do not all share one
/// dimension. Panics from `distance_fn` propagate to the caller.
pub fn compute_distances<D>(features: &[Vec<f32>], distance_fn: D) -> Result<SquareMatrix<f32>>
where
    D: Fn(&[f32], &[f32]) -> f32,
{
    if features.is_empty() {
        return Err(Error::EmptyInput);
    }

    let dim = features[0].len();
    for row in features {
        if row.len() != dim {
            return Err(Error::DimensionMismatch {
                expected: dim,
                found: row.len(),
            });
        }
    }

    Ok(SquareMatrix::from_fn(features.len(), |i, j| {
        distance_fn(&features[i], &features[j])
    }))
}
