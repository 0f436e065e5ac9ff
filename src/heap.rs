use crate::sequence::{Measurement, Sequence};

/// In-place heap sort over the implicit tree rooted at index 0.
///
/// Counts both the child-vs-child and the node-vs-child comparison of every sift-down,
/// over heap construction and extraction alike.
pub fn heap_sort(arr: &mut [i32]) -> u64 {
    let n = arr.len();
    let mut comparisons = 0;
    for i in (0..n / 2).rev() {
        comparisons += sift_down(arr, i, n);
    }
    for end in (1..n).rev() {
        arr.swap(0, end);
        comparisons += sift_down(arr, 0, end);
    }
    comparisons
}

/// Moves `arr[node]` down the max-heap `arr[..end]` until both children are no larger.
fn sift_down(arr: &mut [i32], mut node: usize, end: usize) -> u64 {
    let mut comparisons = 0;
    loop {
        let left = 2 * node + 1;
        if left >= end {
            break;
        }
        let mut largest = left;
        let right = left + 1;
        if right < end {
            comparisons += 1;
            if arr[right] > arr[left] {
                largest = right;
            }
        }
        comparisons += 1;
        if arr[node] < arr[largest] {
            arr.swap(node, largest);
            node = largest;
        } else {
            break;
        }
    }
    comparisons
}

impl Sequence {
    pub fn heap_sort(&mut self) -> Measurement {
        self.measure("Heap", heap_sort)
    }
}
