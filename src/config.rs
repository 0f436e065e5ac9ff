use std::time::Duration;

use crate::error::Error;

// generation of fresh sequences
pub const RANDOM_UPPER_BOUND: i32 = 1000;
pub const DEFAULT_SEED: u64 = 17;

// dump layout
pub const VALUES_PER_LINE: usize = 10;

// experiment sweep
pub const START_SIZE: usize = 100;
pub const SIZE_LIMIT: usize = 30_000;
pub const MULTIPLIER: usize = 10;
pub const ALTERNATE_AT: usize = 10_000;
pub const ALTERNATE_MULTIPLIER: usize = 3;
pub const TIME_LIMIT_SECS: f64 = 60.0;
pub const EPSILON_SECS: f64 = 0.0005;

const _: () = {
    assert!(RANDOM_UPPER_BOUND > 0, "RANDOM_UPPER_BOUND must be positive");
    assert!(VALUES_PER_LINE > 0, "VALUES_PER_LINE must be positive");
    assert!(MULTIPLIER >= 2 && ALTERNATE_MULTIPLIER >= 2, "multipliers must grow the size");
};

/// Parameters of a size-escalating sweep over all algorithms and orders.
#[derive(Debug, Clone)]
pub struct SweepConfig {
    pub start_size: usize,
    pub size_limit: usize,
    pub multiplier: usize,
    pub alternate_at: usize,
    pub alternate_multiplier: usize,
    pub time_limit: Duration,
    pub epsilon: Duration,
}

impl Default for SweepConfig {
    fn default() -> Self {
        SweepConfig {
            start_size: START_SIZE,
            size_limit: SIZE_LIMIT,
            multiplier: MULTIPLIER,
            alternate_at: ALTERNATE_AT,
            alternate_multiplier: ALTERNATE_MULTIPLIER,
            time_limit: Duration::from_secs_f64(TIME_LIMIT_SECS),
            epsilon: Duration::from_secs_f64(EPSILON_SECS),
        }
    }
}

impl SweepConfig {
    pub fn validate(&self) -> Result<(), Error> {
        if self.start_size == 0 {
            return Err(Error::InvalidConfig("start size must be positive".into()));
        }
        if self.multiplier < 2 || self.alternate_multiplier < 2 {
            return Err(Error::InvalidConfig(format!(
                "multipliers must be at least 2 (got {} and {})",
                self.multiplier, self.alternate_multiplier
            )));
        }
        if self.time_limit.is_zero() {
            return Err(Error::InvalidConfig("time limit must be positive".into()));
        }
        Ok(())
    }

    /// Size following `size`, together with the multiplier to use after that.
    pub fn step(&self, size: usize, multiplier: usize) -> (usize, usize) {
        let next = size.saturating_mul(multiplier);
        let next_multiplier = if next == self.alternate_at {
            self.alternate_multiplier
        } else {
            self.multiplier
        };
        (next, next_multiplier)
    }
}
