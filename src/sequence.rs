use std::fmt;
use std::fmt::Display;
use std::str::FromStr;
use std::time::{Duration, Instant};

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{DEFAULT_SEED, RANDOM_UPPER_BOUND, VALUES_PER_LINE};
use crate::error::Error;

/// Initial arrangement of a freshly built [`Sequence`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Order {
    Random,
    Ascending,
    Descending,
}

impl Order {
    pub const ALL: [Order; 3] = [Order::Random, Order::Ascending, Order::Descending];

    pub fn name(&self) -> &'static str {
        match self {
            Order::Random => "Random",
            Order::Ascending => "InOrder",
            Order::Descending => "Reverse",
        }
    }

    /// 1-based index as used by the interactive menus.
    pub fn from_menu_index(index: usize) -> Result<Order, Error> {
        index
            .checked_sub(1)
            .and_then(|i| Order::ALL.get(i).copied())
            .ok_or(Error::OrderIndexOutOfRange(index))
    }
}

impl Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Order {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(Order::Random),
            "ascending" | "inorder" | "in-order" | "sorted" => Ok(Order::Ascending),
            "descending" | "reverse" | "reversed" => Ok(Order::Descending),
            _ => Err(Error::UnknownOrder(s.to_string())),
        }
    }
}

/// Cost of one sort invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Measurement {
    pub elapsed: Duration,
    pub comparisons: u64,
}

impl Measurement {
    pub fn seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// Fixed-size buffer of integers that the sorting algorithms work on in place.
///
/// The length is fixed at construction. Cloning copies the buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    data: Box<[i32]>,
}

impl Sequence {
    /// Builds a sequence whose random content comes from a source seeded with
    /// [`DEFAULT_SEED`], so two calls with the same arguments agree.
    pub fn new(size: usize, order: Order) -> Sequence {
        let mut rng = StdRng::seed_from_u64(DEFAULT_SEED);
        Self::with_rng(size, order, &mut rng)
    }

    pub fn with_rng<R: Rng + ?Sized>(size: usize, order: Order, rng: &mut R) -> Sequence {
        let data: Box<[i32]> = match order {
            Order::Random => (0..size).map(|_| rng.gen_range(0..RANDOM_UPPER_BOUND)).collect(),
            Order::Ascending => (0..size).map(|i| i as i32).collect(),
            Order::Descending => (0..size).map(|i| (size - 1 - i) as i32).collect(),
        };
        debug!("New {} sequence of size {}", order, size);
        Sequence { data }
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn values(&self) -> &[i32] {
        &self.data
    }

    /// Listing of all values, ten per line, preceded by the two labels.
    pub fn dump(&self, sort_name: &str, order_name: &str) -> String {
        format!(
            "\nThe sort name: {}\nThe order name: {}\nThe array info:\n{}\n",
            sort_name, order_name, self
        )
    }

    /// Runs `algorithm` over the buffer and times it. `algorithm` returns its comparison count.
    pub(crate) fn measure<F>(&mut self, name: &str, algorithm: F) -> Measurement
    where
        F: FnOnce(&mut [i32]) -> u64,
    {
        debug!("{name} input: {:?}", self.data);
        let start = Instant::now();
        let comparisons = algorithm(&mut self.data);
        let elapsed = start.elapsed();
        debug!("{name} output: {:?}", self.data);
        info!("{name}: n = {}, comparisons = {comparisons}, elapsed = {elapsed:?}", self.size());
        Measurement { elapsed, comparisons }
    }
}

impl From<Vec<i32>> for Sequence {
    fn from(values: Vec<i32>) -> Self {
        Sequence { data: values.into_boxed_slice() }
    }
}

impl Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.data.iter().enumerate() {
            write!(f, "\t{}", value)?;
            if i % VALUES_PER_LINE == VALUES_PER_LINE - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
