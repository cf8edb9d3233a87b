//! Fairness-weighted subsampling for large datasets.
//!
//! The full evaluation is O(n²) distance calls plus an O(n³/L²) scoring
//! loop, so the pipeline caps the item count. A uniform subsample would let
//! large classes crowd out small ones; instead each item is drawn with
//! weight inversely proportional to its class size, so every class
//! contributes comparable expected mass to the sample.

use rand::prelude::*;

use super::group::group_sorted;
use crate::error::{Error, Result};

/// Draw `amount` item indices out of a class-sorted label sequence, without
/// replacement, weighted by `1 / (class_size × n_classes)`.
///
/// The returned indices are sorted ascending. Because the input is already
/// sorted by class, an ascending index subset stays sorted by class, so the
/// scorer's precondition survives subsampling.
pub(crate) fn fair_sample<L>(
    sorted_classes: &[L],
    amount: usize,
    rng: &mut dyn RngCore,
) -> Result<Vec<usize>>
where
    L: PartialEq + Clone,
{
    let n = sorted_classes.len();
    debug_assert!(amount < n);

    let (labels, ranges) = group_sorted(sorted_classes)?;
    let n_classes = labels.len();

    // weight(item) = 1 / (size_of_its_class × number_of_classes); the
    // weights of one class sum to 1/n_classes, so classes are equalized.
    let mut weights = vec![0.0_f64; n];
    for &(start, end) in &ranges {
        let w = 1.0 / ((end - start) as f64 * n_classes as f64);
        for weight in &mut weights[start..end] {
            *weight = w;
        }
    }

    let picked = rand::seq::index::sample_weighted(rng, n, |i| weights[i], amount)
        .map_err(|e| Error::Other(format!("weighted sampling failed: {e}")))?;

    let mut indices = picked.into_vec();
    indices.sort_unstable();
    Ok(indices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_size_and_order() {
        let classes: Vec<i32> = [vec![0; 50], vec![1; 30], vec![2; 20]].concat();
        let mut rng = StdRng::seed_from_u64(42);
        let indices = fair_sample(&classes, 40, &mut rng).unwrap();

        assert_eq!(indices.len(), 40);
        assert!(indices.windows(2).all(|w| w[0] < w[1]));
        assert!(*indices.last().unwrap() < classes.len());
    }

    #[test]
    fn test_sample_deterministic_with_seed() {
        let classes: Vec<i32> = [vec![0; 60], vec![1; 40]].concat();

        let mut rng_a = StdRng::seed_from_u64(7);
        let mut rng_b = StdRng::seed_from_u64(7);
        let a = fair_sample(&classes, 25, &mut rng_a).unwrap();
        let b = fair_sample(&classes, 25, &mut rng_b).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_sample_equalizes_classes() {
        // 900 items in class 0 vs 100 in class 1. A uniform draw of 200
        // would pick ~20 from class 1; fair weighting targets ~100 each.
        let classes: Vec<i32> = [vec![0; 900], vec![1; 100]].concat();
        let mut rng = StdRng::seed_from_u64(123);
        let indices = fair_sample(&classes, 200, &mut rng).unwrap();

        let minority = indices.iter().filter(|&&i| i >= 900).count();
        assert!(
            minority > 60,
            "minority class underrepresented: {minority} of 200"
        );
    }
}
