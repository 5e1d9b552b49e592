use std::sync::atomic::{AtomicBool, Ordering};

use fc_core::{CostModel, Scenario, TrialResult};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::config::SimConfig;
use crate::error::{SimError, SimResult};
use crate::histogram::Histogram;
use crate::stats::{Summary, total_costs};
use crate::trial::FusionSimulator;

/// Everything a run produced: raw trials, their costs, and the summary.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// The scenario that was simulated.
    pub scenario: Scenario,
    /// Every trial's ledger, in worker order.
    pub trials: Vec<TrialResult>,
    /// Total cost of each trial in reporting units, parallel to `trials`.
    pub costs: Vec<f64>,
    /// Summary statistics over `costs`.
    pub summary: Summary,
}

impl RunReport {
    /// Bin the cost distribution for plotting.
    pub fn histogram(&self) -> SimResult<Histogram> {
        Histogram::from_costs(&self.costs)
    }
}

/// Runs many independent trials of one scenario and summarizes them.
///
/// Trials are split across worker threads. Each worker owns a private
/// `StdRng` seeded from a master stream, so a fixed seed and worker count
/// always reproduce the same report.
#[derive(Debug)]
pub struct MonteCarlo<'a> {
    simulator: FusionSimulator<'a>,
    config: SimConfig,
}

impl<'a> MonteCarlo<'a> {
    /// Validate everything up front; no trial runs on a bad configuration.
    pub fn new(model: &'a CostModel, scenario: Scenario, config: SimConfig) -> SimResult<Self> {
        if config.trials == 0 {
            return Err(SimError::NoTrials);
        }
        let simulator = FusionSimulator::new(model, scenario)?.with_max_attempts(config.max_attempts);
        Ok(Self { simulator, config })
    }

    /// The run configuration.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Run every trial and summarize.
    pub fn run(&self) -> SimResult<RunReport> {
        self.run_with_stop(&AtomicBool::new(false))
    }

    /// Run every trial, checking `stop` between trials.
    pub fn run_with_stop(&self, stop: &AtomicBool) -> SimResult<RunReport> {
        let scenario = *self.simulator.scenario();
        let workers = self.config.effective_workers();
        tracing::info!(
            %scenario,
            trials = self.config.trials,
            workers,
            seed = self.config.seed,
            "starting run"
        );

        let trials = self.collect_trials(workers, stop)?;

        let model = self.simulator.model();
        let costs = total_costs(&trials, model, scenario.transfer);
        let summary = Summary::from_costs(&costs, &trials, model)?;
        tracing::info!(
            mean = summary.mean_cost,
            std_dev = summary.std_dev,
            "run finished"
        );
        Ok(RunReport {
            scenario,
            trials,
            costs,
            summary,
        })
    }

    fn collect_trials(&self, workers: usize, stop: &AtomicBool) -> SimResult<Vec<TrialResult>> {
        let mut master = StdRng::seed_from_u64(self.config.seed);
        let shares = split_trials(self.config.trials, workers);
        let seeds: Vec<u64> = shares.iter().map(|_| master.random()).collect();
        let halt = AtomicBool::new(false);
        let signals = Signals { stop, halt: &halt };

        let batches = if workers == 1 {
            vec![self.run_worker(0, seeds[0], shares[0], signals)]
        } else {
            std::thread::scope(|scope| {
                let handles: Vec<_> = shares
                    .iter()
                    .zip(&seeds)
                    .enumerate()
                    .map(|(index, (&count, &seed))| {
                        scope.spawn(move || self.run_worker(index, seed, count, signals))
                    })
                    .collect();
                handles
                    .into_iter()
                    .enumerate()
                    .map(|(index, handle)| {
                        handle
                            .join()
                            .unwrap_or(Err(SimError::WorkerPanicked(index)))
                    })
                    .collect::<Vec<_>>()
            })
        };

        let mut trials = Vec::with_capacity(self.config.trials);
        let mut completed = 0;
        let mut cancelled = false;
        for batch in batches {
            match batch {
                Ok(batch) => {
                    completed += batch.len();
                    trials.extend(batch);
                }
                Err(SimError::Cancelled { completed: partial }) => {
                    completed += partial;
                    cancelled = true;
                }
                Err(e) => return Err(e),
            }
        }
        if cancelled {
            tracing::warn!(completed, "run cancelled");
            return Err(SimError::Cancelled { completed });
        }
        Ok(trials)
    }

    fn run_worker(
        &self,
        index: usize,
        seed: u64,
        count: usize,
        signals: Signals<'_>,
    ) -> SimResult<Vec<TrialResult>> {
        tracing::debug!(worker = index, seed, trials = count, "worker started");
        let mut rng = StdRng::seed_from_u64(seed);
        let mut results = Vec::with_capacity(count);
        for _ in 0..count {
            if signals.raised() {
                return Err(SimError::Cancelled {
                    completed: results.len(),
                });
            }
            match self.simulator.run_trial(&mut rng) {
                Ok(result) => results.push(result),
                Err(e) => {
                    tracing::debug!(worker = index, error = %e, "worker failed, halting siblings");
                    signals.halt.store(true, Ordering::Relaxed);
                    return Err(e);
                }
            }
        }
        Ok(results)
    }
}

/// Flags a worker checks between trials: the caller's stop request and the
/// halt raised by a failing sibling.
#[derive(Debug, Clone, Copy)]
struct Signals<'s> {
    stop: &'s AtomicBool,
    halt: &'s AtomicBool,
}

impl Signals<'_> {
    fn raised(&self) -> bool {
        self.stop.load(Ordering::Relaxed) || self.halt.load(Ordering::Relaxed)
    }
}

/// Split `trials` into `workers` near-equal shares, larger shares first.
fn split_trials(trials: usize, workers: usize) -> Vec<usize> {
    let base = trials / workers;
    let extra = trials % workers;
    (0..workers)
        .map(|i| base + usize::from(i < extra))
        .collect()
}
