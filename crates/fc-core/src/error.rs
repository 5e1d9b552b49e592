/// Alias for `Result<T, ModelError>`.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors raised while loading or validating a cost model or scenario.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// The item class has no row in the gold fee table.
    #[error("unknown item class {class} (fee table has {known} classes)")]
    UnknownClass {
        /// The requested class number.
        class: u8,
        /// Number of classes the fee table defines.
        known: usize,
    },

    /// The requested tier cannot be reached with the fee table for this class.
    #[error("tier {tier} is out of range for class {class} (fees defined for {levels} levels)")]
    TierOutOfRange {
        /// The requested class number.
        class: u8,
        /// The requested tier.
        tier: usize,
        /// Number of fusion levels the class row defines.
        levels: usize,
    },

    /// A lookup table is missing the entry a transfer needs.
    #[error("{table} has no entry for tier {tier}")]
    MissingTableEntry {
        /// Name of the table.
        table: &'static str,
        /// The tier that was looked up.
        tier: usize,
    },

    /// A probability lies outside `0.0..=1.0`.
    #[error("probability '{name}' must be within 0..=1, got {value}")]
    InvalidProbability {
        /// Name of the probability.
        name: &'static str,
        /// The offending value.
        value: f64,
    },

    /// A running resource total no longer fits the trial ledger.
    #[error("{resource} total overflowed the trial ledger")]
    LedgerOverflow {
        /// The resource being charged.
        resource: &'static str,
    },

    /// A generic configuration error with a descriptive message.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// The configuration document could not be parsed.
    #[error("config parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The configuration file could not be read.
    #[error("config read error: {0}")]
    Io(#[from] std::io::Error),
}
