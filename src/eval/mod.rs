//! ABX discriminability evaluation.
//!
//! ## The ABX task
//!
//! Given items partitioned into labeled classes and a pairwise distance,
//! the ABX task asks: for a reference item A, a same-class probe X, and a
//! different-class contrast B, is X closer to A than to B? Averaging the
//! outcome over every such triple, for every ordered pair of classes,
//! measures how well the feature space discriminates the classes under
//! that distance. A score of 1.0 means same-class items are always
//! strictly closer; 0.5 is chance; 0.0 is perfect anti-discrimination.
//!
//! This is a standard protocol for evaluating learned representations
//! (e.g. speech features, embeddings) without training a classifier: only
//! the *ordering* of distances matters, so any dissimilarity function can
//! be plugged in.
//!
//! ## Pipeline
//!
//! [`Abx::evaluate`] wires the stages together:
//!
//! 1. sort items by class label (features carried in lock-step),
//! 2. if the item count exceeds the cutoff, subsample fairly
//!    (weighted inversely to class size, so small classes survive),
//! 3. build the dense pairwise distance matrix,
//! 4. score every ordered pair of distinct classes.
//!
//! The distance matrix costs n² distance calls and scoring is roughly
//! O(n³/L²) for L balanced classes, hence the default cutoff of 1000
//! items.
//!
//! ## Usage
//!
//! ```rust
//! use abx::{distance, Abx};
//!
//! let classes = vec![0, 0, 0, 1, 1, 1];
//! let features = vec![
//!     vec![0.0, 0.0],
//!     vec![0.1, 0.1],
//!     vec![0.2, 0.0],
//!     vec![5.0, 5.0],
//!     vec![5.1, 5.1],
//!     vec![5.2, 5.0],
//! ];
//!
//! let result = Abx::new()
//!     .with_seed(42)
//!     .evaluate(&classes, &features, distance::euclidean)
//!     .unwrap();
//!
//! assert_eq!(result.average, 1.0);
//! assert_eq!(result.labels, vec![0, 1]);
//! ```

mod group;
mod matrix;
mod sample;
mod score;

pub use group::group_sorted;
pub use matrix::{compute_distances, SquareMatrix};
pub use score::{score, Evaluation};

use rand::prelude::*;

use crate::error::{Error, Result};
use sample::fair_sample;

/// Default item-count cutoff above which the pipeline subsamples.
pub const DEFAULT_CUTOFF: usize = 1000;

/// ABX evaluation pipeline.
///
/// Configured with the builder pattern; [`Abx::evaluate`] runs the
/// sort → sample → distance-matrix → score pipeline.
#[derive(Debug, Clone)]
pub struct Abx {
    /// Subsample down to this many items when the input is larger.
    /// `None` disables subsampling.
    cutoff: Option<usize>,
    /// Optional RNG seed for reproducible subsampling.
    seed: Option<u64>,
}

impl Abx {
    /// Create a pipeline with the default cutoff of [`DEFAULT_CUTOFF`]
    /// items and an unseeded RNG.
    pub fn new() -> Self {
        Self {
            cutoff: Some(DEFAULT_CUTOFF),
            seed: None,
        }
    }

    /// Set the subsampling cutoff (must be positive).
    pub fn with_cutoff(mut self, cutoff: usize) -> Self {
        self.cutoff = Some(cutoff);
        self
    }

    /// Disable subsampling entirely, regardless of input size.
    pub fn without_cutoff(mut self) -> Self {
        self.cutoff = None;
        self
    }

    /// Seed the RNG used for subsampling, for reproducible results.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Run the full ABX evaluation.
    ///
    /// `classes[i]` is the class label of item `i` and `features[i]` its
    /// feature vector; the two slices pair up by position and may be in
    /// any order. `distance_fn` is any dissimilarity function over two
    /// feature vectors of equal dimension; it need not be symmetric and
    /// only the ordering of its values is used.
    ///
    /// # Errors
    ///
    /// - [`Error::LengthMismatch`] if `classes` and `features` differ in
    ///   length, [`Error::EmptyInput`] if they are empty.
    /// - [`Error::InvalidParameter`] for a zero cutoff or fewer than two
    ///   distinct classes.
    /// - [`Error::DimensionMismatch`] if the feature vectors do not share
    ///   one dimension.
    /// - [`Error::SingletonClass`] if a class (after subsampling, if any)
    ///   has fewer than two members.
    pub fn evaluate<L, D>(
        &self,
        classes: &[L],
        features: &[Vec<f32>],
        distance_fn: D,
    ) -> Result<Evaluation<L>>
    where
        L: Ord + Clone,
        D: Fn(&[f32], &[f32]) -> f32,
    {
        if classes.len() != features.len() {
            return Err(Error::LengthMismatch {
                classes: classes.len(),
                features: features.len(),
            });
        }
        if classes.is_empty() {
            return Err(Error::EmptyInput);
        }
        if self.cutoff == Some(0) {
            return Err(Error::InvalidParameter {
                name: "cutoff",
                message: "must be positive (use without_cutoff to disable)",
            });
        }

        // Stable sort by class label; ties keep input order, so the
        // label-to-feature pairing is preserved exactly.
        let mut order: Vec<usize> = (0..classes.len()).collect();
        order.sort_by(|&i, &j| classes[i].cmp(&classes[j]));

        let mut sorted_classes: Vec<L> = order.iter().map(|&i| classes[i].clone()).collect();

        if let Some(cutoff) = self.cutoff {
            if sorted_classes.len() > cutoff {
                let mut rng: Box<dyn RngCore> = match self.seed {
                    Some(s) => Box::new(StdRng::seed_from_u64(s)),
                    None => Box::new(rand::rng()),
                };
                let keep = fair_sample(&sorted_classes, cutoff, &mut rng)?;

                // `keep` is ascending, so the class-sorted order survives.
                sorted_classes = keep.iter().map(|&i| sorted_classes[i].clone()).collect();
                order = keep.iter().map(|&i| order[i]).collect();
            }
        }

        let selected: Vec<Vec<f32>> = order.iter().map(|&i| features[i].clone()).collect();
        let distances = compute_distances(&selected, distance_fn)?;
        score(&sorted_classes, &distances)
    }
}

impl Default for Abx {
    fn default() -> Self {
        Self::new()
    }
}

/// Evaluate with the default pipeline settings (cutoff of
/// [`DEFAULT_CUTOFF`], unseeded RNG).
///
/// Shorthand for `Abx::new().evaluate(classes, features, distance_fn)`.
pub fn abx<L, D>(classes: &[L], features: &[Vec<f32>], distance_fn: D) -> Result<Evaluation<L>>
where
    L: Ord + Clone,
    D: Fn(&[f32], &[f32]) -> f32,
{
    Abx::new().evaluate(classes, features, distance_fn)
}
