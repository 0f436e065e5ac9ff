use std::fmt;
use std::fmt::Display;
use std::str::FromStr;

use log::debug;
use rand::Rng;

use crate::error::Error;
use crate::sequence::{Measurement, Sequence};

/// The eight algorithms a [`Sequence`] can be sorted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKind {
    Selection,
    Bubble,
    Insertion,
    ModifiedInsertion,
    Merge,
    Quick,
    RandomizedQuick,
    Heap,
}

impl SortKind {
    pub const ALL: [SortKind; 8] = [
        SortKind::Selection,
        SortKind::Bubble,
        SortKind::Insertion,
        SortKind::ModifiedInsertion,
        SortKind::Merge,
        SortKind::Quick,
        SortKind::RandomizedQuick,
        SortKind::Heap,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SortKind::Selection => "Selection",
            SortKind::Bubble => "Bubble",
            SortKind::Insertion => "Insertion",
            SortKind::ModifiedInsertion => "Mod.Insertion",
            SortKind::Merge => "Merge",
            SortKind::Quick => "Quick",
            SortKind::RandomizedQuick => "Ran Quick",
            SortKind::Heap => "Heap",
        }
    }

    /// 1-based position in the sort menu.
    pub fn from_menu_index(index: usize) -> Result<SortKind, Error> {
        index
            .checked_sub(1)
            .and_then(|i| SortKind::ALL.get(i).copied())
            .ok_or(Error::SortIndexOutOfRange(index))
    }
}

impl Display for SortKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for SortKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match normalized.as_str() {
            "selection" => Ok(SortKind::Selection),
            "bubble" => Ok(SortKind::Bubble),
            "insertion" => Ok(SortKind::Insertion),
            "modinsertion" | "modifiedinsertion" | "binaryinsertion" => Ok(SortKind::ModifiedInsertion),
            "merge" => Ok(SortKind::Merge),
            "quick" => Ok(SortKind::Quick),
            "ranquick" | "randomizedquick" | "randomquick" => Ok(SortKind::RandomizedQuick),
            "heap" => Ok(SortKind::Heap),
            _ => Err(Error::UnknownSort(s.to_string())),
        }
    }
}

impl Sequence {
    /// Sorts with `kind`. Randomized quicksort draws from the thread-local generator.
    pub fn sort(&mut self, kind: SortKind) -> Measurement {
        self.sort_with(kind, &mut rand::thread_rng())
    }

    /// Sorts with `kind`, taking randomized pivots from `rng`.
    pub fn sort_with<R: Rng + ?Sized>(&mut self, kind: SortKind, rng: &mut R) -> Measurement {
        debug!("Dispatching {:?} on {} values", kind, self.size());
        match kind {
            SortKind::Selection => self.selection_sort(),
            SortKind::Bubble => self.bubble_sort(),
            SortKind::Insertion => self.insertion_sort(),
            SortKind::ModifiedInsertion => self.modified_insertion_sort(),
            SortKind::Merge => self.merge_sort(),
            SortKind::Quick => self.quick_sort(),
            SortKind::RandomizedQuick => self.randomized_quick_sort_with(rng),
            SortKind::Heap => self.heap_sort(),
        }
    }
}
