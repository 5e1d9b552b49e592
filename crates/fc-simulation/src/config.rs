/// Configuration for a Monte Carlo run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Master RNG seed; each worker's stream is derived from it.
    pub seed: u64,
    /// Number of independent trials.
    pub trials: usize,
    /// Worker threads to spread trials across (at least 1).
    pub workers: usize,
    /// Abort a trial after this many fusion attempts. `None` = unbounded.
    pub max_attempts: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            trials: 100_000,
            workers: 1,
            max_attempts: None,
        }
    }
}

impl SimConfig {
    /// Set the master RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the number of trials.
    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    /// Set the number of worker threads (0 is treated as 1).
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    /// Use one worker per available CPU.
    pub fn with_available_parallelism(self) -> Self {
        let cpus = std::thread::available_parallelism().map_or(1, usize::from);
        self.with_workers(cpus)
    }

    /// Guard every trial with a fusion attempt limit.
    pub fn with_max_attempts(mut self, limit: u64) -> Self {
        self.max_attempts = Some(limit);
        self
    }

    /// Workers actually used: never more than there are trials.
    pub fn effective_workers(&self) -> usize {
        self.workers.clamp(1, self.trials.max(1))
    }
}
