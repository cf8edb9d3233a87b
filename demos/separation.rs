//! ABX evaluation on three noisy 2D clusters with varying spread.

use abx::{distance, Abx};
use rand::prelude::*;

/// Sample `n` points scattered around `mean` within `spread`.
fn sample_class(rng: &mut StdRng, mean: [f32; 2], spread: f32, n: usize) -> Vec<Vec<f32>> {
    (0..n)
        .map(|_| {
            mean.iter()
                .map(|m| m + (rng.random::<f32>() - 0.5) * 2.0 * spread)
                .collect()
        })
        .collect()
}

fn main() {
    let mut rng = StdRng::seed_from_u64(42);

    // Three classes with different means, sizes, and spreads; the first
    // two overlap, the third is well separated.
    let specs = [
        ([1.0, 1.0], 1.0, 100),
        ([1.0, 3.0], 1.5, 150),
        ([8.0, 2.0], 0.5, 200),
    ];

    let mut classes: Vec<usize> = Vec::new();
    let mut features: Vec<Vec<f32>> = Vec::new();
    for (label, &(mean, spread, n)) in specs.iter().enumerate() {
        classes.extend(std::iter::repeat(label).take(n));
        features.extend(sample_class(&mut rng, mean, spread, n));
    }

    let result = Abx::new()
        .with_seed(42)
        .evaluate(&classes, &features, distance::euclidean)
        .unwrap();

    println!("overall ABX score: {:.4}", result.average);
    println!("\nper-class-pair scores (row = A/X class, col = B class):");
    print!("      ");
    for label in &result.labels {
        print!("{label:>8}");
    }
    println!();
    for (p, label) in result.labels.iter().enumerate() {
        print!("{label:>6}");
        for q in 0..result.labels.len() {
            let s = result.scores.get(p, q);
            if s.is_nan() {
                print!("{:>8}", "-");
            } else {
                print!("{s:>8.4}");
            }
        }
        println!();
    }
}
