//! The ABX scorer: per-class-pair discrimination scores from a distance matrix.
//!
//! For an ordered pair of distinct classes (p, q), class p supplies both the
//! exemplar "A" and the probe "X" (every same-class pairing with A ≠ X), and
//! class q supplies the contrast "B". Each triple votes on whether X is
//! strictly closer to A than to B:
//!
//! ```text
//! d(a, x) < d(b, x)  →  +1   (correct discrimination)
//! d(a, x) > d(b, x)  →  −1   (incorrect)
//! d(a, x) = d(b, x)  →   0   (tie)
//! ```
//!
//! The net tally over all |A|·(|A|−1)·|B| triples, normalized to [−1, 1] and
//! then shifted to [0, 1], is the score S[p][q]. Only orderings of distance
//! values matter; magnitudes, symmetry, and the triangle inequality are
//! never used.

use super::group::group_sorted;
use super::matrix::SquareMatrix;
use crate::error::{Error, Result};

/// The result of an ABX evaluation.
#[derive(Debug, Clone)]
pub struct Evaluation<L> {
    /// Mean of the off-diagonal score-matrix entries.
    pub average: f64,
    /// Distinct class labels in ascending order; indexes the score matrix.
    pub labels: Vec<L>,
    /// Score per ordered pair of distinct classes, in `[0, 1]`.
    ///
    /// `scores.get(p, q)` treats class `p` as the A/X class and class `q`
    /// as the B class. The diagonal is `f64::NAN` (a class is never scored
    /// against itself).
    pub scores: SquareMatrix<f64>,
}

/// Compute the ABX score matrix for a sorted class sequence and its
/// matching distance matrix.
///
/// # Preconditions
///
/// `sorted_classes` must be sorted ascending, and row/column `i` of
/// `distances` must refer to the same item as `sorted_classes[i]`. The
/// sorting is the caller's responsibility (the [`Abx`](super::Abx)
/// pipeline establishes it); this function only checks that the matrix
/// side matches the item count.
///
/// # Errors
///
/// - [`Error::EmptyInput`] for an empty class sequence.
/// - [`Error::DimensionMismatch`] if the matrix side differs from the
///   number of items.
/// - [`Error::InvalidParameter`] if there are fewer than two distinct
///   labels (no class pair to score).
/// - [`Error::SingletonClass`] if any class has a single member: that
///   class leaves no candidate for the "X" role when it takes the "A"
///   role, so its per-pair average is undefined.
pub fn score<L>(sorted_classes: &[L], distances: &SquareMatrix<f32>) -> Result<Evaluation<L>>
where
    L: Ord + Clone,
{
    if sorted_classes.is_empty() {
        return Err(Error::EmptyInput);
    }
    if distances.side() != sorted_classes.len() {
        return Err(Error::DimensionMismatch {
            expected: sorted_classes.len(),
            found: distances.side(),
        });
    }
    debug_assert!(sorted_classes.windows(2).all(|w| w[0] <= w[1]));

    let (labels, ranges) = group_sorted(sorted_classes)?;
    let n_labels = labels.len();

    if n_labels < 2 {
        return Err(Error::InvalidParameter {
            name: "classes",
            message: "need at least two distinct labels",
        });
    }
    for (index, &(start, end)) in ranges.iter().enumerate() {
        if end - start < 2 {
            return Err(Error::SingletonClass { index });
        }
    }

    let mut scores = SquareMatrix::filled(n_labels, f64::NAN);

    for p in 0..n_labels {
        for q in 0..n_labels {
            if p == q {
                continue;
            }
            let (a_start, a_end) = ranges[p];
            let (b_start, b_end) = ranges[q];

            // Net vote over all (a, x, b) triples. The per-triple
            // denominator |B|·|X| is the same for every choice of a, so
            // the sum of per-a means collapses to one integer tally over
            // a single shared denominator. Integer accumulation keeps the
            // result exact and independent of iteration order.
            let mut net: i64 = 0;
            for a in a_start..a_end {
                for x in a_start..a_end {
                    if x == a {
                        continue;
                    }
                    let d_ax = distances.get(a, x);
                    for b in b_start..b_end {
                        let d_bx = distances.get(b, x);
                        if d_ax < d_bx {
                            net += 1;
                        } else if d_ax > d_bx {
                            net -= 1;
                        }
                    }
                }
            }

            let n_a = (a_end - a_start) as f64;
            let n_b = (b_end - b_start) as f64;
            let n_x = n_a - 1.0;
            let raw = net as f64 / (n_a * n_x * n_b);
            scores.set(p, q, (raw + 1.0) / 2.0);
        }
    }

    // Off-diagonal mean; the NaN diagonal is excluded, not zeroed.
    let mut sum = 0.0;
    for p in 0..n_labels {
        for q in 0..n_labels {
            if p != q {
                sum += scores.get(p, q);
            }
        }
    }
    let average = sum / (n_labels * (n_labels - 1)) as f64;

    Ok(Evaluation {
        average,
        labels,
        scores,
    })
}
