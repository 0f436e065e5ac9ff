use rand::Rng;

use crate::sequence::{Measurement, Sequence};

/// Quicksort with the last element of each range as pivot.
pub fn quick_sort(arr: &mut [i32]) -> u64 {
    quick_sort_by_pivot(arr, |_, last| last)
}

/// Quicksort with a pivot index drawn uniformly from each range.
pub fn randomized_quick_sort<R: Rng + ?Sized>(arr: &mut [i32], rng: &mut R) -> u64 {
    quick_sort_by_pivot(arr, |first, last| rng.gen_range(first..=last))
}

/// Sorts with an explicit stack of inclusive `(first, last)` ranges instead of recursion.
/// Left ranges are processed before right ones, in the order recursion would visit them.
fn quick_sort_by_pivot<F>(arr: &mut [i32], mut choose_pivot: F) -> u64
where
    F: FnMut(usize, usize) -> usize,
{
    if arr.len() < 2 {
        return 0;
    }
    let mut comparisons = 0;
    let mut ranges = vec![(0, arr.len() - 1)];
    while let Some((first, last)) = ranges.pop() {
        if first >= last {
            continue;
        }
        let pivot = choose_pivot(first, last);
        arr.swap(pivot, last);
        let (mid, scanned) = partition(arr, first, last);
        comparisons += scanned;

        ranges.push((mid + 1, last));
        if mid > first {
            ranges.push((first, mid - 1));
        }
    }
    comparisons
}

/// Lomuto partition of `arr[first..=last]` around `arr[last]`.
///
/// Returns the final pivot position and the `last - first` comparisons made.
fn partition(arr: &mut [i32], first: usize, last: usize) -> (usize, u64) {
    let pivot = arr[last];
    let mut boundary = first;
    let mut comparisons = 0;
    for i in first..last {
        comparisons += 1;
        if arr[i] < pivot {
            arr.swap(i, boundary);
            boundary += 1;
        }
    }
    arr.swap(boundary, last);
    (boundary, comparisons)
}

impl Sequence {
    pub fn quick_sort(&mut self) -> Measurement {
        self.measure("Quick", quick_sort)
    }

    /// Randomized quicksort drawing pivots from the thread-local generator.
    pub fn randomized_quick_sort(&mut self) -> Measurement {
        self.randomized_quick_sort_with(&mut rand::thread_rng())
    }

    pub fn randomized_quick_sort_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Measurement {
        self.measure("Ran Quick", |arr| randomized_quick_sort(arr, rng))
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use super::*;

    #[test]
    fn partition_places_pivot() {
        let mut arr = vec![7, 2, 9, 4, 5];
        let (mid, comparisons) = partition(&mut arr, 0, 4);
        assert_eq!(mid, 2);
        assert_eq!(comparisons, 4);
        assert_eq!(arr[mid], 5);
        assert!(arr[..mid].iter().all(|&v| v < 5));
        assert!(arr[mid + 1..].iter().all(|&v| v >= 5));
    }

    #[test]
    fn sorted_input_is_worst_case() {
        let n = 200u64;
        let mut arr: Vec<i32> = (0..n as i32).collect();
        assert_eq!(quick_sort(&mut arr), n * (n - 1) / 2);
    }

    #[test]
    fn descending_input_degrades() {
        let n = 200u64;
        let mut arr: Vec<i32> = (0..n as i32).rev().collect();
        let comparisons = quick_sort(&mut arr);
        assert!(comparisons > n * n / 4, "{comparisons}");
        assert_eq!(arr, (0..n as i32).collect::<Vec<_>>());
    }

    #[test]
    fn random_pivots_avoid_worst_case() {
        let n = 200u64;
        let worst = n * (n - 1) / 2;
        let mut total = 0;
        for seed in 0..32 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut arr: Vec<i32> = (0..n as i32).rev().collect();
            let comparisons = randomized_quick_sort(&mut arr, &mut rng);
            assert!(comparisons < worst, "seed {seed}: {comparisons}");
            assert_eq!(arr, (0..n as i32).collect::<Vec<_>>());
            total += comparisons;
        }
        assert!(total / 32 < worst / 4);
    }

    #[test]
    fn long_runs_do_not_recurse() {
        let mut seq = Sequence::new(5000, crate::sequence::Order::Descending);
        let m = seq.quick_sort();
        assert!(m.comparisons > 5000 * 5000 / 4);
        assert!(seq.values().windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn tiny_inputs() {
        let mut rng = StdRng::seed_from_u64(12345);
        let mut single = vec![3];
        assert_eq!(quick_sort(&mut single), 0);
        assert_eq!(randomized_quick_sort(&mut single, &mut rng), 0);
        let mut pair = vec![2, 1];
        assert_eq!(quick_sort(&mut pair), 1);
        assert_eq!(pair, vec![1, 2]);
    }
}
