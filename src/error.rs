use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("unknown sort algorithm: {0}")]
    UnknownSort(String),

    #[error("sort index {0} out of range (expected 1..={max})", max = crate::sort::SortKind::ALL.len())]
    SortIndexOutOfRange(usize),

    #[error("unknown order: {0}")]
    UnknownOrder(String),

    #[error("order index {0} out of range (expected 1..=3)")]
    OrderIndexOutOfRange(usize),

    #[error("invalid sweep configuration: {0}")]
    InvalidConfig(String),
}
