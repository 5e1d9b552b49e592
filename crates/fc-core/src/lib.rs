//! Core types for the fusion cost estimator.
//!
//! This crate holds the static economy a simulation runs against: unit
//! prices, gold fee tables, transfer tables and refund odds ([`CostModel`]),
//! the [`Scenario`] being estimated, and the per-trial resource ledger
//! ([`TrialResult`]). It contains no randomness; the simulator lives in
//! `fc-simulation`.

/// Item classes and transfer modes.
pub mod class;
/// Error types used throughout the crate.
pub mod error;
/// Per-trial resource ledger and total cost conversion.
pub mod ledger;
/// The cost model: prices, fee tables, and refund odds.
pub mod model;
/// Success-only refund bonus probabilities.
pub mod refund;
/// The (class, tier, transfer) combination being estimated.
pub mod scenario;

/// Re-export class and transfer types.
pub use class::{ItemClass, TransferMode};
/// Re-export error types.
pub use error::{ModelError, ModelResult};
/// Re-export the trial ledger.
pub use ledger::TrialResult;
/// Re-export the cost model.
pub use model::{CostModel, UnitPrices};
/// Re-export refund odds.
pub use refund::RefundOdds;
/// Re-export the scenario.
pub use scenario::Scenario;
