use abx::{abx, distance, group_sorted, Abx};
use proptest::prelude::*;
use rand::prelude::*;

/// Build a dataset from per-class sizes (each >= 2) and a feature seed.
fn make_dataset(sizes: &[usize], dim: usize, seed: u64) -> (Vec<usize>, Vec<Vec<f32>>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut classes = Vec::new();
    let mut features = Vec::new();
    for (label, &size) in sizes.iter().enumerate() {
        for _ in 0..size {
            classes.push(label);
            features.push((0..dim).map(|_| rng.random::<f32>() * 10.0).collect());
        }
    }
    (classes, features)
}

proptest! {
    #[test]
    fn prop_scores_bounded(
        sizes in prop::collection::vec(2usize..6, 2..5),
        seed in any::<u64>()
    ) {
        let (classes, features) = make_dataset(&sizes, 3, seed);
        let result = abx(&classes, &features, distance::euclidean).unwrap();

        prop_assert_eq!(result.labels.len(), sizes.len());
        for p in 0..sizes.len() {
            for q in 0..sizes.len() {
                let s = result.scores.get(p, q);
                if p == q {
                    prop_assert!(s.is_nan());
                } else {
                    prop_assert!((0.0..=1.0).contains(&s), "score {} out of range", s);
                }
            }
        }
        prop_assert!((0.0..=1.0).contains(&result.average));
    }

    #[test]
    fn prop_sort_invariant(
        sizes in prop::collection::vec(2usize..5, 2..4),
        seed in any::<u64>(),
        shuffle_seed in any::<u64>()
    ) {
        let (classes, features) = make_dataset(&sizes, 3, seed);
        let baseline = abx(&classes, &features, distance::euclidean).unwrap();

        let mut perm: Vec<usize> = (0..classes.len()).collect();
        perm.shuffle(&mut StdRng::seed_from_u64(shuffle_seed));
        let classes2: Vec<usize> = perm.iter().map(|&i| classes[i]).collect();
        let features2: Vec<Vec<f32>> = perm.iter().map(|&i| features[i].clone()).collect();

        let shuffled = abx(&classes2, &features2, distance::euclidean).unwrap();

        prop_assert_eq!(baseline.average, shuffled.average);
        prop_assert_eq!(baseline.labels, shuffled.labels);
    }

    #[test]
    fn prop_cutoff_at_or_above_n_is_noop(
        sizes in prop::collection::vec(2usize..5, 2..4),
        seed in any::<u64>(),
        slack in 0usize..10
    ) {
        let (classes, features) = make_dataset(&sizes, 3, seed);
        let n = classes.len();

        let capped = Abx::new()
            .with_cutoff(n + slack)
            .evaluate(&classes, &features, distance::euclidean)
            .unwrap();
        let uncapped = Abx::new()
            .without_cutoff()
            .evaluate(&classes, &features, distance::euclidean)
            .unwrap();

        prop_assert_eq!(capped.average, uncapped.average);
    }

    #[test]
    fn prop_grouping_partitions_input(
        labels in prop::collection::vec(0u8..6, 1..40)
    ) {
        let mut sorted = labels;
        sorted.sort_unstable();

        let (distinct, ranges) = group_sorted(&sorted).unwrap();

        // Distinct labels are strictly increasing.
        prop_assert!(distinct.windows(2).all(|w| w[0] < w[1]));

        // Ranges tile the input and agree with the labels.
        prop_assert_eq!(distinct.len(), ranges.len());
        let mut cursor = 0;
        for (label, &(start, end)) in distinct.iter().zip(&ranges) {
            prop_assert_eq!(start, cursor);
            prop_assert!(end > start);
            for i in start..end {
                prop_assert_eq!(sorted[i], *label);
            }
            cursor = end;
        }
        prop_assert_eq!(cursor, sorted.len());
    }
}
