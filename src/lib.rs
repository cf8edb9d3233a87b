//! ABX discriminability scoring.
//!
//! `abx` evaluates how well a feature space separates labeled classes
//! under a caller-supplied distance, using the ABX discrimination task:
//! for a reference item A, a same-class probe X, and a different-class
//! contrast B, count how often X is strictly closer to A than to B. The
//! result is a per-class-pair score matrix in `[0, 1]` plus its overall
//! average, where 1.0 is perfect discrimination and 0.5 is chance.
//!
//! The primary public API is under [`eval`], which provides:
//! - the [`Abx`] pipeline (sort by class, optional fair subsampling,
//!   distance matrix, scoring) and the [`abx`] shorthand
//! - the building blocks [`group_sorted`], [`compute_distances`], and
//!   [`score`] for callers that already hold a distance matrix
//!
//! [`distance`] supplies ready-made distance functions (Euclidean,
//! cosine, KL/JS divergence, discrete, Hamming); any
//! `Fn(&[f32], &[f32]) -> f32` works.

#![forbid(unsafe_code)]

pub mod distance;
pub mod error;
pub mod eval;

pub use error::{Error, Result};
pub use eval::{
    abx, compute_distances, group_sorted, score, Abx, Evaluation, SquareMatrix, DEFAULT_CUTOFF,
};
