//! Grouping of a sorted label sequence into contiguous index ranges.

use crate::error::{Error, Result};

/// Group a **sorted** label sequence into its distinct labels and the
/// contiguous index range each label occupies.
///
/// Returns the distinct labels in ascending order and, for each label, a
/// half-open `(start, end)` range into the input slice. The ranges are
/// non-overlapping and cover the whole slice.
///
/// # Precondition
///
/// The input must already be sorted ascending. This function performs a
/// single linear scan and does not sort; unsorted input produces incorrect
/// grouping (the same label would be reported once per contiguous run).
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] for an empty slice.
///
/// # Example
///
/// ```rust
/// use abx::group_sorted;
///
/// let (labels, ranges) = group_sorted(&[0, 0, 1, 1, 1, 2]).unwrap();
/// assert_eq!(labels, vec![0, 1, 2]);
/// assert_eq!(ranges, vec![(0, 2), (2, 5), (5, 6)]);
/// ```
pub fn group_sorted<L>(sorted: &[L]) -> Result<(Vec<L>, Vec<(usize, usize)>)>
where
    L: PartialEq + Clone,
{
    if sorted.is_empty() {
        return Err(Error::EmptyInput);
    }

    let mut labels: Vec<L> = vec![sorted[0].clone()];
    let mut starts: Vec<usize> = vec![0];

    for (i, label) in sorted.iter().enumerate().skip(1) {
        if *label != sorted[i - 1] {
            labels.push(label.clone());
            starts.push(i);
        }
    }
    starts.push(sorted.len());

    let ranges = starts.windows(2).map(|w| (w[0], w[1])).collect();
    Ok((labels, ranges))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_basic() {
        let (labels, ranges) = group_sorted(&[0, 0, 1, 1, 1, 2]).unwrap();
        assert_eq!(labels, vec![0, 1, 2]);
        assert_eq!(ranges, vec![(0, 2), (2, 5), (5, 6)]);
    }

    #[test]
    fn test_group_single_label() {
        let (labels, ranges) = group_sorted(&[7, 7, 7]).unwrap();
        assert_eq!(labels, vec![7]);
        assert_eq!(ranges, vec![(0, 3)]);
    }

    #[test]
    fn test_group_all_distinct() {
        let (labels, ranges) = group_sorted(&["a", "b", "c"]).unwrap();
        assert_eq!(labels, vec!["a", "b", "c"]);
        assert_eq!(ranges, vec![(0, 1), (1, 2), (2, 3)]);
    }

    #[test]
    fn test_group_empty() {
        let result = group_sorted::<i32>(&[]);
        assert!(matches!(result, Err(Error::EmptyInput)));
    }

    #[test]
    fn test_group_ranges_are_exhaustive() {
        let input = [1, 1, 2, 2, 2, 2, 5, 9, 9];
        let (_, ranges) = group_sorted(&input).unwrap();

        // Ranges chain: each starts where the previous ended.
        assert_eq!(ranges[0].0, 0);
        for w in ranges.windows(2) {
            assert_eq!(w[0].1, w[1].0);
        }
        assert_eq!(ranges.last().unwrap().1, input.len());
    }
}
