//! Selection and bubble sort.
//!
//! Both count one comparison per pair of elements they test against each other.

use crate::sequence::{Measurement, Sequence};

/// Returns the number of comparisons, always `n(n-1)/2`.
pub fn selection_sort(arr: &mut [i32]) -> u64 {
    let mut comparisons = 0;
    for i in 0..arr.len() {
        let mut smallest = i;
        for j in i + 1..arr.len() {
            comparisons += 1;
            if arr[smallest] > arr[j] {
                smallest = j;
            }
        }
        if smallest != i {
            arr.swap(smallest, i);
        }
    }
    comparisons
}

/// Stops after the first pass without a swap, so sorted input costs `n-1` comparisons.
pub fn bubble_sort(arr: &mut [i32]) -> u64 {
    let mut comparisons = 0;
    let mut unsorted = arr.len();
    loop {
        let mut swapped = false;
        for j in 1..unsorted {
            comparisons += 1;
            if arr[j - 1] > arr[j] {
                arr.swap(j - 1, j);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
        unsorted -= 1;
    }
    comparisons
}

impl Sequence {
    pub fn selection_sort(&mut self) -> Measurement {
        self.measure("Selection", selection_sort)
    }

    pub fn bubble_sort(&mut self) -> Measurement {
        self.measure("Bubble", bubble_sort)
    }
}
