pub mod config;
pub mod error;
pub mod report;
pub mod sequence;
pub mod sort;
pub mod sweep;
mod exchange;
mod heap;
mod insertion;
mod merge;
mod quick;

pub use config::SweepConfig;
pub use error::Error;
pub use exchange::{bubble_sort, selection_sort};
pub use heap::heap_sort;
pub use insertion::{binary_insertion_sort, insertion_sort};
pub use merge::merge_sort;
pub use quick::{quick_sort, randomized_quick_sort};
pub use sequence::{Measurement, Order, Sequence};
pub use sort::SortKind;
pub use sweep::SweepRow;
