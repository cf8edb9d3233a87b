//! Common distance functions to plug into the evaluation.
//!
//! These are conveniences only: the pipeline accepts any
//! `Fn(&[f32], &[f32]) -> f32`, and only the *ordering* of the returned
//! values matters to the score. All functions expect slices of equal
//! length.

/// Euclidean (L2) distance.
#[inline]
pub fn euclidean(a: &[f32], b: &[f32]) -> f32 {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum::<f32>()
        .sqrt()
}

/// Cosine distance: `1 - cos(a, b)`.
///
/// Undefined (NaN) if either vector has zero norm.
pub fn cosine(a: &[f32], b: &[f32]) -> f32 {
    debug_assert_eq!(a.len(), b.len());
    let mut dot = 0.0_f32;
    let mut na = 0.0_f32;
    let mut nb = 0.0_f32;
    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        na += x * x;
        nb += y * y;
    }
    1.0 - dot / (na.sqrt() * nb.sqrt())
}

/// Kullback-Leibler divergence `KL(a ‖ b)`.
///
/// Both inputs are normalized to sum to 1 first, so they may be given as
/// unnormalized non-negative weights. Returns `+∞` when `b` has a zero
/// where `a` does not. Asymmetric: `kl_divergence(a, b)` generally
/// differs from `kl_divergence(b, a)`.
pub fn kl_divergence(a: &[f32], b: &[f32]) -> f32 {
    debug_assert_eq!(a.len(), b.len());
    let sum_a: f32 = a.iter().sum();
    let sum_b: f32 = b.iter().sum();
    let mut div = 0.0_f32;
    for (&x, &y) in a.iter().zip(b.iter()) {
        let p = x / sum_a;
        let q = y / sum_b;
        if p > 0.0 {
            if q > 0.0 {
                div += p * (p / q).ln();
            } else {
                return f32::INFINITY;
            }
        }
    }
    div
}

/// Symmetric Kullback-Leibler divergence: `(KL(a ‖ b) + KL(b ‖ a)) / 2`.
pub fn symmetric_kl_divergence(a: &[f32], b: &[f32]) -> f32 {
    (kl_divergence(a, b) + kl_divergence(b, a)) * 0.5
}

/// Jensen-Shannon divergence: `(KL(a ‖ m) + KL(b ‖ m)) / 2` with `m` the
/// average distribution. Symmetric and always finite.
pub fn js_divergence(a: &[f32], b: &[f32]) -> f32 {
    debug_assert_eq!(a.len(), b.len());
    let m: Vec<f32> = a.iter().zip(b.iter()).map(|(x, y)| x + y).collect();
    (kl_divergence(a, &m) + kl_divergence(b, &m)) * 0.5
}

/// Discrete metric: 0 if the vectors are equal, 1 otherwise.
pub fn discrete(a: &[f32], b: &[f32]) -> f32 {
    debug_assert_eq!(a.len(), b.len());
    if a == b {
        0.0
    } else {
        1.0
    }
}

/// Hamming distance: the number of positions where the components differ.
pub fn hamming(a: &[f32], b: &[f32]) -> f32 {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b.iter()).filter(|(x, y)| x != y).count() as f32
}
