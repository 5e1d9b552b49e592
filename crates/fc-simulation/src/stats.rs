//! Summary statistics over per-trial costs.

use fc_core::{CostModel, TransferMode, TrialResult};
use serde::Serialize;

use crate::error::{SimError, SimResult};

/// Percentiles reported for every run.
pub const REPORTED_PERCENTILES: [f64; 7] = [1.0, 10.0, 25.0, 50.0, 75.0, 90.0, 99.0];

/// One percentile of the cost distribution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PercentilePoint {
    /// The percentile, 0..=100.
    pub percentile: f64,
    /// The cost at that percentile, in reporting units.
    pub value: f64,
}

/// Scalar summary of a Monte Carlo run. Costs and gold are in reporting units.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Number of trials summarized.
    pub trials: usize,
    /// Mean total cost.
    pub mean_cost: f64,
    /// Sample standard deviation of total cost.
    pub std_dev: f64,
    /// Cheapest trial.
    pub min_cost: f64,
    /// Most expensive trial.
    pub max_cost: f64,
    /// Mean base items bought.
    pub mean_items: f64,
    /// Mean dust spent.
    pub mean_dust: f64,
    /// Mean cores spent.
    pub mean_cores: f64,
    /// Mean gold fees.
    pub mean_gold: f64,
    /// Cost at each of [`REPORTED_PERCENTILES`].
    pub percentiles: Vec<PercentilePoint>,
}

impl Summary {
    /// Summarize trials whose total costs have already been computed.
    ///
    /// `costs[i]` must be the total cost of `trials[i]`. Needs at least two
    /// trials, since a spread over one sample is undefined.
    pub fn from_costs(costs: &[f64], trials: &[TrialResult], model: &CostModel) -> SimResult<Self> {
        debug_assert_eq!(costs.len(), trials.len());
        require_samples("summary", costs.len(), 2)?;

        let mut sorted = costs.to_vec();
        sorted.sort_by(f64::total_cmp);

        let percentiles = REPORTED_PERCENTILES
            .iter()
            .map(|&p| {
                Ok(PercentilePoint {
                    percentile: p,
                    value: percentile(&sorted, p)?,
                })
            })
            .collect::<SimResult<Vec<_>>>()?;

        let field_mean = |f: fn(&TrialResult) -> f64| {
            trials.iter().map(f).sum::<f64>() / trials.len() as f64
        };

        Ok(Self {
            trials: costs.len(),
            mean_cost: mean(costs)?,
            std_dev: sample_std_dev(costs)?,
            min_cost: sorted[0],
            max_cost: sorted[sorted.len() - 1],
            mean_items: field_mean(|t| t.items_purchased as f64),
            mean_dust: field_mean(|t| t.dust as f64),
            mean_cores: field_mean(|t| t.cores as f64),
            mean_gold: field_mean(|t| t.gold as f64) / model.reporting_unit,
            percentiles,
        })
    }

    /// The cost at a reported percentile, if it was computed.
    pub fn percentile(&self, p: f64) -> Option<f64> {
        self.percentiles
            .iter()
            .find(|pt| pt.percentile == p)
            .map(|pt| pt.value)
    }
}

/// Total cost of every trial, in reporting units.
pub fn total_costs(trials: &[TrialResult], model: &CostModel, transfer: TransferMode) -> Vec<f64> {
    trials
        .iter()
        .map(|t| t.total_cost(model, transfer))
        .collect()
}

/// Arithmetic mean.
pub fn mean(values: &[f64]) -> SimResult<f64> {
    require_samples("mean", values.len(), 1)?;
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample standard deviation (n - 1 denominator).
pub fn sample_std_dev(values: &[f64]) -> SimResult<f64> {
    require_samples("standard deviation", values.len(), 2)?;
    let m = mean(values)?;
    let sum_sq: f64 = values.iter().map(|v| (v - m).powi(2)).sum();
    Ok((sum_sq / (values.len() - 1) as f64).sqrt())
}

/// The `p`th percentile of ascending `sorted` values.
///
/// Interpolates linearly between the two closest ranks, with rank
/// `p / 100 * (n - 1)`, so the median of an even-length sequence is the
/// midpoint of its two middle values.
pub fn percentile(sorted: &[f64], p: f64) -> SimResult<f64> {
    require_samples("percentile", sorted.len(), 2)?;
    if !(0.0..=100.0).contains(&p) {
        return Err(SimError::InvalidPercentile(p));
    }
    let rank = p / 100.0 * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        return Ok(sorted[lo]);
    }
    let w = rank - lo as f64;
    Ok(sorted[lo] * (1.0 - w) + sorted[hi] * w)
}

fn require_samples(statistic: &'static str, got: usize, needed: usize) -> SimResult<()> {
    if got < needed {
        return Err(SimError::NotEnoughSamples {
            statistic,
            needed,
            got,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn percentiles_of_one_to_hundred() {
        let values: Vec<f64> = (1..=100).map(f64::from).collect();
        assert!(close(percentile(&values, 50.0).unwrap(), 50.5));
        assert!(close(percentile(&values, 0.0).unwrap(), 1.0));
        assert!(close(percentile(&values, 100.0).unwrap(), 100.0));
        assert!(close(percentile(&values, 25.0).unwrap(), 25.75));
        assert!(close(percentile(&values, 99.0).unwrap(), 99.01));
    }

    #[test]
    fn percentile_rejects_bad_input() {
        assert!(matches!(
            percentile(&[1.0], 50.0),
            Err(SimError::NotEnoughSamples { got: 1, .. })
        ));
        assert!(matches!(
            percentile(&[1.0, 2.0], 101.0),
            Err(SimError::InvalidPercentile(_))
        ));
    }

    #[test]
    fn std_dev_needs_two_samples() {
        assert!(sample_std_dev(&[5.0]).is_err());
        assert!(mean(&[]).is_err());
        assert!(close(sample_std_dev(&[10.0, 20.0, 30.0]).unwrap(), 10.0));
    }

    #[test]
    fn summary_of_known_costs() {
        let model = CostModel {
            reporting_unit: 1.0,
            ..CostModel::default()
        };
        let trials: Vec<TrialResult> = [10, 20, 30]
            .into_iter()
            .map(|gold| TrialResult {
                gold,
                dust: 100,
                ..TrialResult::default()
            })
            .collect();
        let costs = total_costs(&trials, &model, TransferMode::None);
        assert_eq!(costs, vec![10.0, 20.0, 30.0]);

        let summary = Summary::from_costs(&costs, &trials, &model).unwrap();
        assert_eq!(summary.trials, 3);
        assert!(close(summary.mean_cost, 20.0));
        assert!(close(summary.std_dev, 10.0));
        assert!(close(summary.min_cost, 10.0));
        assert!(close(summary.max_cost, 30.0));
        assert!(close(summary.mean_gold, 20.0));
        assert!(close(summary.mean_dust, 100.0));
        assert!(close(summary.percentile(50.0).unwrap(), 20.0));
        assert_eq!(summary.percentiles.len(), REPORTED_PERCENTILES.len());
    }

    #[test]
    fn summary_extremes_match_input() {
        let model = CostModel {
            reporting_unit: 1.0,
            ..CostModel::default()
        };
        let trials: Vec<TrialResult> = (1..=100)
            .rev()
            .map(|gold| TrialResult {
                gold,
                ..TrialResult::default()
            })
            .collect();
        let costs = total_costs(&trials, &model, TransferMode::None);
        let summary = Summary::from_costs(&costs, &trials, &model).unwrap();
        assert_eq!(summary.min_cost, 1.0);
        assert_eq!(summary.max_cost, 100.0);
        assert!(close(summary.percentile(50.0).unwrap(), 50.5));
        assert!(summary.percentile(42.0).is_none());
    }

    #[test]
    fn summary_of_one_trial_is_an_error() {
        let model = CostModel::default();
        let trials = [TrialResult::default()];
        assert!(Summary::from_costs(&[0.0], &trials, &model).is_err());
    }
}
