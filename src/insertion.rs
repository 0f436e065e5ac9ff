use crate::sequence::{Measurement, Sequence};

/// Linear insertion sort.
///
/// Every predecessor tested against the key counts, including the one that stops the shift.
/// Running off the front of the slice is not a comparison.
pub fn insertion_sort(arr: &mut [i32]) -> u64 {
    let mut comparisons = 0;
    for i in 1..arr.len() {
        let key = arr[i];
        let mut j = i;
        while j > 0 {
            comparisons += 1;
            if arr[j - 1] > key {
                arr[j] = arr[j - 1];
                j -= 1;
            } else {
                break;
            }
        }
        arr[j] = key;
    }
    comparisons
}

/// Insertion sort that finds the insertion point with [`binary_search`].
///
/// Moves the same elements as [`insertion_sort`]; only the search is cheaper.
pub fn binary_insertion_sort(arr: &mut [i32]) -> u64 {
    let mut comparisons = 0;
    for i in 1..arr.len() {
        let (loc, searched) = binary_search(&arr[..i], arr[i], 0, i);
        comparisons += searched;
        arr[loc..=i].rotate_right(1);
    }
    comparisons
}

/// Searches `sorted[first..last]` for the slot where `value` belongs.
///
/// Returns the slot and the number of comparisons, one per inspected midpoint.
/// An exact match returns the index of the match.
pub(crate) fn binary_search(sorted: &[i32], value: i32, first: usize, last: usize) -> (usize, u64) {
    if first >= last {
        return (first, 0);
    }
    let mid = first + (last - 1 - first) / 2;
    let (slot, comparisons) = match value.cmp(&sorted[mid]) {
        std::cmp::Ordering::Less => binary_search(sorted, value, first, mid),
        std::cmp::Ordering::Greater => binary_search(sorted, value, mid + 1, last),
        std::cmp::Ordering::Equal => (mid, 0),
    };
    (slot, comparisons + 1)
}

impl Sequence {
    pub fn insertion_sort(&mut self) -> Measurement {
        self.measure("Insertion", insertion_sort)
    }

    pub fn modified_insertion_sort(&mut self) -> Measurement {
        self.measure("Mod.Insertion", binary_insertion_sort)
    }
}
