use std::time::Duration;

use log::{info, warn};
use rand::Rng;

use crate::config::SweepConfig;
use crate::error::Error;
use crate::sequence::{Measurement, Order, Sequence};
use crate::sort::SortKind;

/// One algorithm measured on all three orders at one size.
#[derive(Debug, Clone)]
pub struct SweepRow {
    pub size: usize,
    pub kind: SortKind,
    /// Indexed like [`Order::ALL`].
    pub results: [Measurement; 3],
}

impl SweepRow {
    pub fn slowest(&self) -> Duration {
        self.results.iter().map(|m| m.elapsed).max().unwrap_or_default()
    }
}

/// Runs every algorithm on every order at escalating sizes.
///
/// Each algorithm sorts its own copy of the three sequences built for a size. The sweep ends
/// once a single measurement reaches the time limit or the next size is past the size limit.
/// `on_row` sees each row as soon as it is measured.
pub fn run<R, F>(config: &SweepConfig, rng: &mut R, mut on_row: F) -> Result<Vec<SweepRow>, Error>
where
    R: Rng + ?Sized,
    F: FnMut(&SweepRow),
{
    config.validate()?;

    let mut rows = Vec::new();
    let mut size = config.start_size;
    let mut multiplier = config.multiplier;
    let mut max_time = Duration::ZERO;
    loop {
        info!("Sweeping size {size}");
        let originals = Order::ALL.map(|order| Sequence::with_rng(size, order, &mut *rng));

        for kind in SortKind::ALL {
            let mut results = [Measurement::default(); 3];
            for (result, original) in results.iter_mut().zip(originals.iter()) {
                let mut copy = original.clone();
                *result = copy.sort_with(kind, &mut *rng);
            }
            let row = SweepRow { size, kind, results };
            max_time = max_time.max(row.slowest());
            on_row(&row);
            rows.push(row);
        }

        (size, multiplier) = config.step(size, multiplier);
        if max_time >= config.time_limit {
            warn!("Stopping sweep: {max_time:?} reached the limit of {:?}", config.time_limit);
            break;
        }
        if size > config.size_limit {
            break;
        }
    }
    Ok(rows)
}
