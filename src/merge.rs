//! Top-down merge sort.
//!
//! Only head-to-head element comparisons inside [`merge`] are counted. Loop guards and the
//! copying of a leftover run are free.

use crate::sequence::{Measurement, Sequence};

pub fn merge_sort<T: Ord + Clone>(arr: &mut [T]) -> u64 {
    let mut scratch = Vec::with_capacity(arr.len());
    merge_sort_rec(arr, &mut scratch)
}

fn merge_sort_rec<T: Ord + Clone>(arr: &mut [T], scratch: &mut Vec<T>) -> u64 {
    if arr.len() <= 1 {
        return 0;
    }
    // left run gets the extra element on odd lengths
    let mid = (arr.len() + 1) / 2;
    let mut comparisons = merge_sort_rec(&mut arr[..mid], scratch);
    comparisons += merge_sort_rec(&mut arr[mid..], scratch);
    comparisons += merge(arr, mid, scratch);
    comparisons
}

/// Merges the sorted runs `arr[..mid]` and `arr[mid..]`. Ties go to the left run.
fn merge<T: Ord + Clone>(arr: &mut [T], mid: usize, scratch: &mut Vec<T>) -> u64 {
    let mut comparisons = 0;
    scratch.clear();

    let (mut left, mut right) = (0, mid);
    while left < mid && right < arr.len() {
        comparisons += 1;
        if arr[right] < arr[left] {
            scratch.push(arr[right].clone());
            right += 1;
        } else {
            scratch.push(arr[left].clone());
            left += 1;
        }
    }
    scratch.extend_from_slice(&arr[left..mid]);
    scratch.extend_from_slice(&arr[right..]);

    arr.clone_from_slice(&scratch[..]);
    comparisons
}

impl Sequence {
    pub fn merge_sort(&mut self) -> Measurement {
        self.measure("Merge", merge_sort::<i32>)
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use super::*;

    #[derive(Debug, Clone)]
    struct Tagged {
        key: i32,
        tag: usize,
    }

    impl Eq for Tagged {}

    impl PartialEq for Tagged {
        fn eq(&self, other: &Self) -> bool {
            self.key == other.key
        }
    }

    impl Ord for Tagged {
        fn cmp(&self, other: &Self) -> Ordering {
            self.key.cmp(&other.key)
        }
    }

    impl PartialOrd for Tagged {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            Some(self.cmp(other))
        }
    }

    #[test]
    fn equal_keys_keep_their_order() {
        let mut rng = StdRng::seed_from_u64(12345);
        let mut arr: Vec<Tagged> = (0..1000)
            .map(|tag| Tagged { key: rng.gen_range(0..10), tag })
            .collect();
        merge_sort(&mut arr);
        for w in arr.windows(2) {
            assert!(w[0].key <= w[1].key);
            if w[0].key == w[1].key {
                assert!(w[0].tag < w[1].tag, "{:?} before {:?}", w[0], w[1]);
            }
        }
    }

    #[test]
    fn counts_only_element_comparisons() {
        // runs of 1+1, 2+2 and 4+4: the left run always drains first
        let mut sorted: Vec<i32> = (0..8).collect();
        assert_eq!(merge_sort(&mut sorted), 4 + 4 + 4);

        let mut reversed: Vec<i32> = (0..8).rev().collect();
        assert_eq!(merge_sort(&mut reversed), 12);
        assert_eq!(reversed, (0..8).collect::<Vec<_>>());
    }

    #[test]
    fn odd_lengths() {
        let mut arr = vec![5, 3, 8, 1, 9, 2, 7];
        merge_sort(&mut arr);
        assert_eq!(arr, vec![1, 2, 3, 5, 7, 8, 9]);
    }

    #[test]
    fn tiny_inputs() {
        let mut empty: Vec<i32> = vec![];
        assert_eq!(merge_sort(&mut empty), 0);
        let mut single = vec![1];
        assert_eq!(merge_sort(&mut single), 0);
    }
}
