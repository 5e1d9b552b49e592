use fc_core::ModelError;

/// Alias for `Result<T, SimError>`.
pub type SimResult<T> = Result<T, SimError>;

/// Errors that can occur while simulating or summarizing trials.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    /// The cost model or scenario failed validation.
    #[error(transparent)]
    Model(#[from] ModelError),

    /// A run was requested with zero trials.
    #[error("trial count must be at least 1")]
    NoTrials,

    /// A statistic needs more samples than were supplied.
    #[error("{statistic} needs at least {needed} samples, got {got}")]
    NotEnoughSamples {
        /// Name of the statistic.
        statistic: &'static str,
        /// Minimum sample count.
        needed: usize,
        /// Samples supplied.
        got: usize,
    },

    /// A percentile outside `0..=100` was requested.
    #[error("percentile must be within 0..=100, got {0}")]
    InvalidPercentile(f64),

    /// A trial made more fusion attempts than the configured guard allows.
    #[error("trial exceeded {limit} fusion attempts")]
    AttemptLimitExceeded {
        /// The configured limit.
        limit: u64,
    },

    /// The run was stopped between trials.
    #[error("run cancelled after {completed} trials")]
    Cancelled {
        /// Trials finished before the stop was observed.
        completed: usize,
    },

    /// A worker thread panicked.
    #[error("worker {0} panicked")]
    WorkerPanicked(usize),
}
