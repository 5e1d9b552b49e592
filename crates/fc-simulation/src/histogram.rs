use serde::Serialize;

use crate::error::SimResult;
use crate::stats::percentile;

/// Target number of bins across the plotted range.
const TARGET_BINS: f64 = 150.0;

/// Equal-width bins over the bulk of a cost distribution.
///
/// The range starts at the cheapest trial (rounded down) and stops at a high
/// percentile so a handful of extreme trials do not flatten the plot. Bin
/// widths are whole reporting units.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    /// Lower edge of the first bin.
    pub start: f64,
    /// Width of every bin.
    pub width: f64,
    /// Trials per bin.
    pub counts: Vec<u64>,
    /// Trials above the last bin.
    pub overflow: u64,
}

impl Histogram {
    /// Bin a cost sequence. Needs at least two costs.
    pub fn from_costs(costs: &[f64]) -> SimResult<Self> {
        let mut sorted = costs.to_vec();
        sorted.sort_by(f64::total_cmp);

        // cut off roughly the most expensive thousand trials
        let cutoff = (100.0 - 1000.0 / sorted.len() as f64).clamp(0.0, 100.0);
        let end = percentile(&sorted, cutoff)?.trunc();
        let start = sorted[0].floor();
        let width = ((end - start) / TARGET_BINS).floor().max(1.0);
        let bins = (((end - start) / width).ceil() as usize).max(1);

        let mut counts = vec![0; bins];
        let mut overflow = 0;
        for cost in &sorted {
            let index = ((cost - start) / width) as usize;
            match counts.get_mut(index) {
                Some(count) => *count += 1,
                None => overflow += 1,
            }
        }
        Ok(Self {
            start,
            width,
            counts,
            overflow,
        })
    }

    /// Lower and upper edge of bin `index`.
    pub fn bin_range(&self, index: usize) -> (f64, f64) {
        let lo = self.start + self.width * index as f64;
        (lo, lo + self.width)
    }

    /// Largest bin count.
    pub fn peak(&self) -> u64 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Trials counted, including overflow.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum::<u64>() + self.overflow
    }
}
